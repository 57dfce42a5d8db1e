//! Error types for the terminal host.

use thiserror::Error;

/// Startup and runtime errors for the terminal host.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable holds an invalid value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading input or writing output failed.
    #[error("terminal i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The presenter task panicked or was cancelled.
    #[error("presenter task failed: {0}")]
    Presenter(#[from] tokio::task::JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = AppError::Config("ROSTER_STEP_MS must be a whole number of milliseconds".into());
        assert_eq!(
            err.to_string(),
            "configuration error: ROSTER_STEP_MS must be a whole number of milliseconds"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.to_string(), "terminal i/o error: closed");
    }
}
