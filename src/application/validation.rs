//! Input validation for query generation
//!
//! Collapses the optional form state into one precondition check before
//! any catalog lookup happens.

use crate::application::dto::QueryInput;
use crate::application::errors::{InputField, QueryError};
use crate::domain::value_objects::{ReportDate, StoreCode, StoreCodePolicy};

/// Input that passed the presence check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput<'a> {
    pub brand_name: &'a str,
    pub store_code: StoreCode,
    pub date: ReportDate,
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// Validate that brand, store code and date are all set.
///
/// Every unset field is reported in a single `IncompleteInput`. Store codes
/// are then checked against `policy`.
pub fn validate_query_input(
    input: &QueryInput,
    policy: StoreCodePolicy,
) -> Result<ValidatedInput<'_>, QueryError> {
    let brand_name = present(input.brand_name.as_ref());
    let store_code = present(input.store_code.as_ref());

    let (brand_name, store_code, date) = match (brand_name, store_code, input.date) {
        (Some(brand_name), Some(store_code), Some(date)) => (brand_name, store_code, date),
        (brand_name, store_code, date) => {
            let mut missing = Vec::with_capacity(3);
            if brand_name.is_none() {
                missing.push(InputField::Brand);
            }
            if store_code.is_none() {
                missing.push(InputField::StoreCode);
            }
            if date.is_none() {
                missing.push(InputField::Date);
            }
            return Err(QueryError::IncompleteInput { missing });
        }
    };

    let store_code = StoreCode::new(store_code.to_string(), policy)
        .map_err(|e| QueryError::InvalidInput(e.to_string()))?;

    Ok(ValidatedInput {
        brand_name,
        store_code,
        date: ReportDate::new(date),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
    }

    #[test]
    fn test_complete_input_passes() {
        let input = QueryInput::new("Rang Ja", "126", date());
        let validated = validate_query_input(&input, StoreCodePolicy::Permissive).unwrap();
        assert_eq!(validated.brand_name, "Rang Ja");
        assert_eq!(validated.store_code.as_str(), "126");
        assert_eq!(validated.date.to_sql_literal(), "05-01-2025");
    }

    #[test]
    fn test_each_missing_field_reported() {
        let mut input = QueryInput::new("Rang Ja", "126", date());
        input.store_code = None;
        assert_eq!(
            validate_query_input(&input, StoreCodePolicy::Permissive),
            Err(QueryError::IncompleteInput {
                missing: vec![InputField::StoreCode]
            })
        );

        let mut input = QueryInput::new("Rang Ja", "126", date());
        input.date = None;
        assert_eq!(
            validate_query_input(&input, StoreCodePolicy::Permissive),
            Err(QueryError::IncompleteInput {
                missing: vec![InputField::Date]
            })
        );

        let input = QueryInput::new("", "126", date());
        assert_eq!(
            validate_query_input(&input, StoreCodePolicy::Permissive),
            Err(QueryError::IncompleteInput {
                missing: vec![InputField::Brand]
            })
        );
    }

    #[test]
    fn test_all_missing_is_one_error() {
        let input = QueryInput::default();
        assert_eq!(
            validate_query_input(&input, StoreCodePolicy::Permissive),
            Err(QueryError::IncompleteInput {
                missing: vec![InputField::Brand, InputField::StoreCode, InputField::Date]
            })
        );
    }

    #[test]
    fn test_empty_store_code_counts_as_missing() {
        let input = QueryInput::new("Rang Ja", "", date());
        assert!(matches!(
            validate_query_input(&input, StoreCodePolicy::Permissive),
            Err(QueryError::IncompleteInput { .. })
        ));
    }

    #[test]
    fn test_numeric_policy_rejects_non_digits() {
        let input = QueryInput::new("Rang Ja", "126 or 1=1", date());
        assert!(validate_query_input(&input, StoreCodePolicy::Permissive).is_ok());
        assert!(matches!(
            validate_query_input(&input, StoreCodePolicy::Numeric),
            Err(QueryError::InvalidInput(_))
        ));
    }
}
