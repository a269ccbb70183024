//! Error taxonomy for scaffold generation.
//!
//! Only filesystem failures are fatal: a failed assist call degrades to the
//! local template at the call site, and malformed request text degrades to
//! field defaults in the parser.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Filesystem failure while assembling the project tree. Propagated to
    /// the caller as a generation failure; no partial-result salvage.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generative assist call failed (connect, auth, timeout, or malformed
    /// response). Always caught at the call site and answered with the
    /// local template.
    #[error("assist request failed: {0}")]
    Assist(String),
}

impl ScaffoldError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error aborts the generation run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ScaffoldError::Io { .. })
    }

    /// Error category for log fields.
    pub fn category(&self) -> &'static str {
        match self {
            ScaffoldError::Io { .. } => "io_error",
            ScaffoldError::Assist(_) => "assist_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_are_fatal() {
        let error = ScaffoldError::io(
            "app/main.py",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(error.is_fatal());
        assert_eq!(error.category(), "io_error");
        assert!(error.to_string().contains("app/main.py"));
    }

    #[test]
    fn assist_errors_are_recoverable() {
        let error = ScaffoldError::Assist("connection refused".into());
        assert!(!error.is_fatal());
        assert_eq!(error.category(), "assist_error");
    }
}
