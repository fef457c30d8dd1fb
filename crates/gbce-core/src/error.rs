use std::path::PathBuf;

use thiserror::Error;

/// Invalid-parameter errors exposed by `gbce-core`.
///
/// Every variant describes why a caller-supplied parameter was rejected.
/// Market operations report failures exclusively through this type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("unknown stock '{symbol}'")]
    UnknownStock { symbol: String },
    #[error("duplicate stock '{symbol}' in catalog")]
    DuplicateStock { symbol: String },

    #[error("invalid price {value}, must be greater than zero")]
    InvalidPrice { value: f64 },
    #[error("invalid quantity {value}, must be greater than zero")]
    InvalidQuantity { value: i64 },
    #[error("invalid side '{value}', expected buy or sell")]
    InvalidSide { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("aggregation window must be at least one second")]
    InvalidWindow,
}

impl ValidationError {
    /// Human-readable reason the parameter was rejected.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// Top-level error type for configuration and other non-market operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_matches_display() {
        let err = ValidationError::InvalidPrice { value: -1.0 };
        assert_eq!(err.reason(), "invalid price -1, must be greater than zero");
    }

    #[test]
    fn validation_converts_into_core_error() {
        let err: CoreError = ValidationError::InvalidWindow.into();
        assert!(matches!(err, CoreError::Validation(ValidationError::InvalidWindow)));
        assert_eq!(err.to_string(), "aggregation window must be at least one second");
    }
}
