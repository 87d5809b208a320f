use thiserror::Error;

use crate::descriptor::DescriptorError;
use crate::output::OutputError;

#[derive(Error, Debug)]
pub enum FlaggenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Descriptor(#[from] DescriptorError),

    #[error("{0}")]
    Output(#[from] OutputError),
}

pub type Result<T> = std::result::Result<T, FlaggenError>;
