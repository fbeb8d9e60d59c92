use thiserror::Error;

use crate::emit::UnknownMode;

pub const USAGE: &str = "Usage: cfggen <hw-cpp|cpp>";

#[derive(Debug, Error)]
pub enum UsageError {
    #[error("missing mode argument")]
    MissingMode,
    #[error(transparent)]
    UnknownMode(#[from] UnknownMode),
    #[error("invalid arguments: {0}")]
    Arguments(String),
}

impl From<clap::Error> for UsageError {
    fn from(err: clap::Error) -> Self {
        // clap's rendering ends in a usage block of its own, keep the first line
        let rendered = err.to_string();
        let first = rendered.lines().next().unwrap_or_default();

        UsageError::Arguments(first.trim_start_matches("error: ").to_string())
    }
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Usage(#[from] UsageError),
    #[error("failed writing declarations: {0}")]
    Io(#[from] std::io::Error),
}

impl DriverError {
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::Usage(_) => -1,
            DriverError::Io(_) => 1,
        }
    }
}
