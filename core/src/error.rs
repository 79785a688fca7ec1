//! エラー型定義

use crate::types::ItemId;
use thiserror::Error;

/// 入力検証エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    EmptyName,

    #[error("store is required")]
    EmptyStore,

    #[error("price is required")]
    EmptyPrice,

    #[error("price is not a number: {0}")]
    InvalidPrice(String),

    #[error("price must not be negative: {0}")]
    NegativePrice(String),

    #[error("duplicate item id: {0}")]
    DuplicateId(ItemId),
}

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Item not found: {0}")]
    NotFound(ItemId),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_validation() {
        let error = Error::Validation(ValidationError::InvalidPrice("abc".to_string()));
        assert_eq!(format!("{}", error), "Validation error: price is not a number: abc");
    }

    #[test]
    fn test_error_display_not_found() {
        let error = Error::NotFound(ItemId::from("42"));
        assert_eq!(format!("{}", error), "Item not found: 42");
    }

    #[test]
    fn test_error_from_validation() {
        let error: Error = ValidationError::EmptyName.into();
        assert!(matches!(error, Error::Validation(ValidationError::EmptyName)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::NotFound(ItemId::from("x"));
        let debug = format!("{:?}", error);
        assert!(debug.contains("NotFound"));
    }
}
