//! Error types for listing construction and validation.

use thiserror::Error;

/// Result type for listing operations
pub type Result<T> = std::result::Result<T, ListingError>;

/// Errors that can occur while building a vehicle listing
#[derive(Debug, Error)]
pub enum ListingError {
    /// Input text is not parseable JSON
    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// Top level of the input is not a single object
    #[error("Input JSON must describe a single vehicle object")]
    TopLevelNotObject,

    /// A field holds a JSON shape that cannot be coerced to its type
    #[error("'{field}' must be {expected}")]
    UnexpectedShape {
        field: &'static str,
        expected: &'static str,
    },

    /// A categorical field is outside its allowed set
    #[error("{field} must be one of: {allowed} (got '{value}')")]
    InvalidChoice {
        field: &'static str,
        value: String,
        allowed: String,
    },
}

impl ListingError {
    /// Create an unexpected shape error
    pub fn unexpected_shape(field: &'static str, expected: &'static str) -> Self {
        Self::UnexpectedShape { field, expected }
    }

    /// Create an invalid choice error listing the allowed values
    pub fn invalid_choice(field: &'static str, value: impl Into<String>, allowed: &[&str]) -> Self {
        Self::InvalidChoice {
            field,
            value: value.into(),
            allowed: allowed.join(", "),
        }
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::Json(_) => "LIST001",
            Self::TopLevelNotObject => "LIST002",
            Self::UnexpectedShape { .. } => "LIST003",
            Self::InvalidChoice { .. } => "LIST004",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_choice_display() {
        let err = ListingError::invalid_choice("Gearbox", "Invalid", &["Automatic", "Manual"]);
        let msg = err.to_string();
        assert!(msg.contains("Gearbox"));
        assert!(msg.contains("Automatic, Manual"));
        assert!(msg.contains("Invalid"));
    }

    #[test]
    fn test_unexpected_shape_display() {
        let err = ListingError::unexpected_shape("specs", "an array of strings");
        assert_eq!(err.to_string(), "'specs' must be an array of strings");
    }

    #[test]
    fn test_every_variant_has_a_code() {
        let json = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert_eq!(ListingError::from(json).code(), "LIST001");
        assert_eq!(ListingError::TopLevelNotObject.code(), "LIST002");
        assert_eq!(
            ListingError::unexpected_shape("specs", "an array of strings").code(),
            "LIST003"
        );
        assert_eq!(
            ListingError::invalid_choice("ULEZ", "maybe", &["Yes", "No", "Unknown"]).code(),
            "LIST004"
        );
    }
}
