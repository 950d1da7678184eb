use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StubError {
    /// Fatal: there is nowhere to insert stubs.
    #[error("Missing marker definition")]
    MissingMarker,

    #[error("Provided template is empty: {}", path.display())]
    EmptyTemplate { path: PathBuf },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Per-file failure; the run continues with the next file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StubError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StubError::Io {
            path: path.into(),
            source,
        }
    }

    /// Configuration errors stop the whole run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, StubError::Io { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_not_fatal() {
        let err = StubError::io(
            "src/calculator.js",
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        );
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("src/calculator.js"));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_config_errors_are_fatal() {
        assert!(StubError::MissingMarker.is_fatal());
        assert!(
            StubError::EmptyTemplate {
                path: PathBuf::from("stub.tpl")
            }
            .is_fatal()
        );
        assert!(StubError::InvalidConfig("x".to_string()).is_fatal());
    }

    #[test]
    fn test_empty_template_display() {
        let err = StubError::EmptyTemplate {
            path: PathBuf::from("templates/stub.tpl"),
        };
        assert!(err.to_string().contains("templates/stub.tpl"));
        assert!(err.to_string().contains("empty"));
    }
}
