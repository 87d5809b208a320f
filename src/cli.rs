use std::path::PathBuf;

use clap::Parser;

/// Typed flag code generator
///
/// Generates the source code for typed command-line flag wrappers and their
/// lookup accessors from a JSON list of flag type descriptions.
///
/// The generated file is marked as machine-generated and must not be edited
/// by hand; change the input description and rerun the generator instead.
#[derive(Parser, Debug)]
#[command(name = "flaggen")]
#[command(version)]
#[command(about, long_about)]
pub struct Cli {
    /// Suppress colored output (useful for CI/CD pipelines)
    #[arg(short = 'n', long = "no-color")]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long = "verbose")]
    pub verbose: bool,

    /// Package for which the flag types will be generated
    #[arg(short = 'p', long = "package", default_value = "cli")]
    pub package: String,

    /// Path to the input JSON file which defines each type to be generated
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Path to the output file which will contain the flag types
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,
}
