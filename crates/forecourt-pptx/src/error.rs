//! Error types for PPTX generation.

use thiserror::Error;

/// Result type for PPTX operations
pub type Result<T> = std::result::Result<T, PptxError>;

/// Errors that can occur during PPTX generation
#[derive(Error, Debug)]
pub enum PptxError {
    /// ZIP archive error
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PptxError {
    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::Zip(_) => "PPTX001",
            Self::Io(_) => "PPTX002",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_code_and_display() {
        let err = PptxError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.code(), "PPTX002");
        assert!(err.to_string().contains("denied"));
    }
}
