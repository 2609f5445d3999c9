//! Error types for the ptraccel CLI

use ptraccel_filters::AccelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid trace: {0}")]
    InvalidTrace(String),

    #[error("Accelerator error: {0}")]
    Accel(#[from] AccelError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::IoError(_) => 2,
            CliError::InvalidArgument(_)
            | CliError::InvalidTrace(_)
            | CliError::Accel(_)
            | CliError::JsonError(_) => 4,
        }
    }
}
