use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::FlaggenError;

#[derive(Debug)]
pub struct Config {
    pub no_color: bool,
    pub verbose: bool,
    pub package: String,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, FlaggenError> {
        if cli.package.trim().is_empty() {
            return Err(FlaggenError::Config(
                "Package name must not be empty".to_string(),
            ));
        }

        let input = Self::resolve_path(&cli.input)?;
        let output = Self::resolve_path(&cli.output)?;

        Ok(Self {
            no_color: cli.no_color,
            verbose: cli.verbose,
            package: cli.package,
            input,
            output,
        })
    }

    /// Resolves a path to an absolute path.
    /// - Absolute paths are returned as-is
    /// - Relative paths are resolved relative to current directory
    pub fn resolve_path(path: &Path) -> Result<PathBuf, FlaggenError> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            let current_dir = std::env::current_dir().map_err(|e| {
                FlaggenError::Config(format!("Cannot determine current directory: {}", e))
            })?;
            Ok(current_dir.join(path))
        }
    }
}
