//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown APA class: {0}")]
    UnknownApaClass(String),

    #[error("Unknown breed purpose: {0}")]
    UnknownPurpose(String),

    #[error("Breed purpose is empty")]
    EmptyPurpose,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_display_unknown_class() {
        let error = Error::UnknownApaClass("Bantam".to_string());
        assert_eq!(format!("{}", error), "Unknown APA class: Bantam");
    }

    #[test]
    fn test_error_display_empty_purpose() {
        assert_eq!(format!("{}", Error::EmptyPurpose), "Breed purpose is empty");
    }
}
