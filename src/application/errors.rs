//! Error types for the query generation use cases

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A form field that must be filled before generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    Brand,
    StoreCode,
    Date,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Brand => write!(f, "brand"),
            InputField::StoreCode => write!(f, "store code"),
            InputField::Date => write!(f, "date"),
        }
    }
}

fn join_fields(fields: &[InputField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error returned by query generation; nothing is produced alongside it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Reported once for any combination of unset fields
    #[error("Please fill in all fields (missing: {})", join_fields(.missing))]
    IncompleteInput { missing: Vec<InputField> },

    #[error("Unknown brand: {0}")]
    MissingBrand(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_input_lists_fields() {
        let err = QueryError::IncompleteInput {
            missing: vec![InputField::StoreCode, InputField::Date],
        };
        assert_eq!(
            err.to_string(),
            "Please fill in all fields (missing: store code, date)"
        );
    }

    #[test]
    fn test_missing_brand_display() {
        let err = QueryError::MissingBrand("Rangja".to_string());
        assert!(err.to_string().contains("Unknown brand"));
        assert!(err.to_string().contains("Rangja"));
    }

    #[test]
    fn test_input_field_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&InputField::StoreCode).unwrap(),
            "\"store_code\""
        );
    }
}
