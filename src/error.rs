use thiserror::Error;

/// Errors that can stop the scoring service from starting or running
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}
