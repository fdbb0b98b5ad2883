//! Error types for logex

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogExError {
    /// The calling frame could not be identified.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    /// log4rs rejected the appender setup (bad file path, config errors).
    #[error("Logger setup failed: {0}")]
    Setup(String),

    /// A global logger was already installed.
    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LogExError>;
