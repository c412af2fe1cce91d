//! Error type shared by deck building, rendering and verification.
use thiserror::Error;

/// Main error type for deck operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid file format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Package part not found
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// XML error
    #[error("XML error: {0}")]
    XmlError(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Feature disabled at compile time
    #[error("Feature '{0}' is disabled. Enable it with --features {0}")]
    FeatureDisabled(String),
}

impl Error {
    /// Whether the error means the presentation writer is not compiled in.
    ///
    /// This is the only failure the binary reports differently from a
    /// generic build error.
    pub fn is_dependency_missing(&self) -> bool {
        matches!(self, Error::FeatureDisabled(_))
    }
}

/// Result type for deck operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_disabled_is_dependency_missing() {
        let err = Error::FeatureDisabled("pptx".to_string());
        assert!(err.is_dependency_missing());
        assert_eq!(
            err.to_string(),
            "Feature 'pptx' is disabled. Enable it with --features pptx"
        );
    }

    #[test]
    fn test_io_error_is_generic() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(!err.is_dependency_missing());
        assert!(err.to_string().starts_with("IO error"));
    }
}
