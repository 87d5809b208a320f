//! Output writing for the generated source document.
//!
//! The writer creates (or truncates) the destination file and writes the
//! full rendered document in one pass. There is no partial-write recovery:
//! on failure the run aborts and the destination may be left empty or
//! partially written. Concurrent writers targeting the same path are not
//! coordinated; the last writer wins.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while writing the generated file.
///
/// Creation failures (missing directory, permission denied) are kept
/// distinct from mid-write I/O failures so a failed run reports whether
/// decode and render had already succeeded.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Cannot create output file {path}: {source}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write output file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Creates (or truncates) `path` and writes the full document.
///
/// Parent directories are not created; pointing the output at a missing
/// directory is an error.
pub fn write_source(path: &Path, contents: &str) -> Result<(), OutputError> {
    let mut file = File::create(path).map_err(|e| OutputError::Create {
        path: path.display().to_string(),
        source: e,
    })?;

    file.write_all(contents.as_bytes())
        .map_err(|e| OutputError::Write {
            path: path.display().to_string(),
            source: e,
        })?;

    log::info!("Written: {}", path.display());

    Ok(())
}
