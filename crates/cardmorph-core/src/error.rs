//! Error types for Card Morph

use thiserror::Error;

use crate::types::CorrelationId;

/// Main error type for Card Morph operations
#[derive(Error, Debug)]
pub enum CardError {
    /// No mounted instance carries this correlation id
    #[error("Card instance not mounted: {0}")]
    UnknownInstance(CorrelationId),

    /// An instance with this correlation id is already mounted
    #[error("Card instance already mounted: {0}")]
    DuplicateInstance(CorrelationId),

    /// Card records must carry a non-blank title
    #[error("Card title must not be empty")]
    EmptyTitle,

    /// Deck file could not be parsed
    #[error("Deck error: {0}")]
    Deck(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CardError {
    fn from(err: serde_json::Error) -> Self {
        CardError::Deck(err.to_string())
    }
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(format!("{}", CardError::EmptyTitle), "Card title must not be empty");
        let err = CardError::Deck("expected value".to_string());
        assert_eq!(format!("{}", err), "Deck error: expected value");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let card_err: CardError = io_err.into();
        assert!(matches!(card_err, CardError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let card_err: CardError = json_err.into();
        assert!(matches!(card_err, CardError::Deck(_)));
    }
}
