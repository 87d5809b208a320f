//! Flag descriptor loading and validation.
//!
//! This module decodes the JSON input document into an ordered list of
//! [`FlagDescriptor`]s. Decoding is all-or-nothing: a malformed document,
//! a truncated stream, or an unreadable input path fails the whole run
//! before any output is produced.
//!
//! Names are validated at load time: each must be a non-empty ASCII
//! identifier starting with a letter, and names must be unique across the
//! document. The literal code fragments (`context_default`, `parser`,
//! `parser_cast`) are the caller's responsibility and pass through
//! verbatim.

pub mod schema;

pub use schema::FlagDescriptor;

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

/// Error types for descriptor loading.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("Cannot open input file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot decode flag descriptors: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(
        "Invalid flag name '{0}': names must start with a letter and contain only ASCII letters and digits"
    )]
    InvalidName(String),

    #[error("Duplicate flag name '{0}'")]
    DuplicateName(String),
}

/// Loads and validates the descriptor list from a file path.
pub fn load_path(path: &Path) -> Result<Vec<FlagDescriptor>, DescriptorError> {
    let file = File::open(path).map_err(|e| DescriptorError::Open {
        path: path.display().to_string(),
        source: e,
    })?;
    load_reader(file)
}

/// Loads and validates the descriptor list from any readable byte stream.
///
/// The stream must yield a JSON array of descriptor objects. The input
/// order is preserved; it determines the emission order of the generated
/// blocks.
pub fn load_reader(reader: impl Read) -> Result<Vec<FlagDescriptor>, DescriptorError> {
    let flags: Vec<FlagDescriptor> = serde_json::from_reader(reader)?;
    validate(&flags)?;
    Ok(flags)
}

fn validate(flags: &[FlagDescriptor]) -> Result<(), DescriptorError> {
    let mut seen = HashSet::new();
    for flag in flags {
        if !is_valid_name(&flag.name) {
            return Err(DescriptorError::InvalidName(flag.name.clone()));
        }
        if !seen.insert(flag.name.as_str()) {
            return Err(DescriptorError::DuplicateName(flag.name.clone()));
        }
    }
    Ok(())
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric())
}
