use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("No series (.json) or event (.jsonl) files found in {0}")]
    NoDataFiles(String),
}
