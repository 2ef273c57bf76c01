//! Catalog-level checks on a list of brands
//!
//! Blank names are already refused by `Brand::new`; these rules cover what a
//! single brand cannot see on its own. Built-in and file-loaded catalogs both
//! pass through here.

use std::collections::HashSet;

use crate::domain::entities::Brand;
use crate::domain::errors::DomainError;

pub type ValidationResult<T> = Result<T, DomainError>;

pub struct Validation;

impl Validation {
    /// Longest brand name accepted into a catalog
    pub const MAX_BRAND_NAME_LENGTH: usize = 128;

    /// Bounds on a field's length, counted in chars
    pub fn validate_length(
        value: &str,
        field_name: &str,
        min_length: Option<usize>,
        max_length: Option<usize>,
    ) -> ValidationResult<()> {
        let length = value.chars().count();

        if let Some(min) = min_length {
            if length < min {
                return Err(DomainError::ValidationError {
                    field: field_name.to_string(),
                    message: format!("must have at least {} characters", min),
                });
            }
        }

        if let Some(max) = max_length {
            if length > max {
                return Err(DomainError::ValidationError {
                    field: field_name.to_string(),
                    message: format!("must have at most {} characters", max),
                });
            }
        }

        Ok(())
    }

    /// A catalog needs at least one brand, names within
    /// `MAX_BRAND_NAME_LENGTH`, and no name or SBS number used twice
    pub fn validate_brand_list(brands: &[Brand]) -> ValidationResult<()> {
        if brands.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }

        let mut names = HashSet::with_capacity(brands.len());
        let mut sbs_numbers = HashSet::with_capacity(brands.len());

        for (index, brand) in brands.iter().enumerate() {
            let field = format!("brands[{}].name", index);
            Self::validate_length(
                brand.name(),
                &field,
                None,
                Some(Self::MAX_BRAND_NAME_LENGTH),
            )?;

            if !names.insert(brand.name()) {
                return Err(DomainError::DuplicateBrandName(brand.name().to_string()));
            }
            if !sbs_numbers.insert(brand.sbs_no()) {
                return Err(DomainError::DuplicateSbsNo(brand.sbs_no().value()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::SbsNo;

    fn brand(name: &str, sbs_no: i64) -> Brand {
        Brand::new(name, SbsNo::new(sbs_no).unwrap()).unwrap()
    }

    #[test]
    fn test_validate_length_edge_cases() {
        assert!(Validation::validate_length("ab", "field", Some(2), Some(10)).is_ok());
        assert!(Validation::validate_length("abcdefghij", "field", Some(2), Some(10)).is_ok());
        assert!(Validation::validate_length("a", "field", Some(2), Some(10)).is_err());
        assert!(Validation::validate_length("abcdefghijk", "field", Some(2), Some(10)).is_err());
        assert!(Validation::validate_length("any length", "field", None, None).is_ok());
    }

    #[test]
    fn test_validate_length_counts_chars() {
        // four chars, eight bytes
        assert!(Validation::validate_length("éééé", "field", None, Some(4)).is_ok());
    }

    #[test]
    fn test_brand_list_ok() {
        let brands = vec![brand("Chinyere", 5), brand("Rang Ja", 8)];
        assert!(Validation::validate_brand_list(&brands).is_ok());
    }

    #[test]
    fn test_brand_list_empty() {
        assert_eq!(
            Validation::validate_brand_list(&[]),
            Err(DomainError::EmptyCatalog)
        );
    }

    #[test]
    fn test_brand_list_duplicates() {
        let dup_name = vec![brand("Chinyere", 5), brand("Chinyere", 6)];
        assert_eq!(
            Validation::validate_brand_list(&dup_name),
            Err(DomainError::DuplicateBrandName("Chinyere".to_string()))
        );

        let dup_id = vec![brand("Chinyere", 5), brand("Rang Ja", 5)];
        assert_eq!(
            Validation::validate_brand_list(&dup_id),
            Err(DomainError::DuplicateSbsNo(5))
        );
    }

    #[test]
    fn test_brand_list_case_variants_are_distinct() {
        let brands = vec![brand("Rang Ja", 8), brand("rang ja", 9)];
        assert!(Validation::validate_brand_list(&brands).is_ok());
    }

    #[test]
    fn test_brand_list_name_too_long() {
        let long = "x".repeat(Validation::MAX_BRAND_NAME_LENGTH + 1);
        let brands = vec![brand(&long, 1)];
        let err = Validation::validate_brand_list(&brands).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error in field 'brands[0].name': must have at most 128 characters"
        );
    }
}
