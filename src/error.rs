//! Application error types.
//!
//! Line processing never fails; everything here is raised while setting up a
//! run (arguments, configuration, reading input).

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Command-line misuse; the binary follows this with the usage text
    #[error("{0}")]
    Usage(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Whether the caller should print the usage text after this error.
    pub const fn wants_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn config_error_includes_hint() {
        let err = Error::config("Unrecognised FROM chord 'H'", "A root chord is A-G with up to two sharps or flats");
        let text = err.to_string();
        assert!(text.contains("'H'"));
        assert!(text.contains("A-G"));
        assert!(!err.wants_usage());
    }

    #[test]
    fn usage_error_asks_for_usage_text() {
        let err = Error::usage("No text file specified.");
        assert_eq!(err.to_string(), "No text file specified.");
        assert!(err.wants_usage());
    }

    #[test]
    fn io_error_keeps_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        match Error::io(source, Some(std::path::PathBuf::from("song.txt"))) {
            Error::Io { path: Some(p), .. } => assert_eq!(p, std::path::PathBuf::from("song.txt")),
            _ => panic!("Expected Io error with path"),
        }
    }

    #[test]
    fn io_error_from_stream_has_no_path() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, Error::Io { path: None, .. }));
        assert!(!err.wants_usage());
    }
}
