//! Error types for Vibe Coding Studio

use thiserror::Error;

/// Errors raised at runtime input boundaries.
///
/// Catalog operations are total; these only surface when a host turns
/// user-supplied text (CLI args, window config) into catalog references.
#[derive(Error, Debug)]
pub enum StudioError {
    /// No palette in the catalog carries this id
    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    /// Color text is not a `#rrggbb` value
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Error during JSON rendering
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using StudioError
pub type StudioResult<T> = Result<T, StudioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StudioError::UnknownPalette("vaporwave".to_string());
        assert_eq!(format!("{}", err), "Unknown palette: vaporwave");

        let err = StudioError::InvalidColor("#12".to_string());
        assert_eq!(err.to_string(), "Invalid color: #12");
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<u8>("not json").unwrap_err();
        let err: StudioError = json_err.into();
        assert!(matches!(err, StudioError::Serialization(_)));
    }
}
