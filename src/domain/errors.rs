use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Validation error in field '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Invalid brand name: {0}")]
    InvalidBrandName(String),

    #[error("Invalid SBS number: {0}")]
    InvalidSbsNo(i64),

    #[error("Invalid store code: {0}")]
    InvalidStoreCode(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Duplicate brand name in catalog: {0}")]
    DuplicateBrandName(String),

    #[error("Duplicate SBS number in catalog: {0}")]
    DuplicateSbsNo(u32),

    #[error("Brand catalog is empty")]
    EmptyCatalog,
}
