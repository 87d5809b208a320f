//! flaggen generates the source code for typed command-line flag wrappers
//! from a declarative JSON description.
//!
//! The pipeline is a single pass: the descriptor loader decodes the input
//! document into a list of [`descriptor::FlagDescriptor`]s, the code
//! generator renders one accessor block per descriptor from its embedded
//! template text, and the output writer puts the finished document on disk.

pub mod cli;
pub mod codegen;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod logging;
pub mod output;
