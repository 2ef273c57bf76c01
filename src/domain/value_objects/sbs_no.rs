use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Numeric brand/business-segment identifier used in `sbs_no=` predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct SbsNo(u32);

impl SbsNo {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value <= 0 || value > i64::from(u32::MAX) {
            return Err(DomainError::InvalidSbsNo(value));
        }
        Ok(Self(value as u32))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for SbsNo {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SbsNo> for u32 {
    fn from(sbs_no: SbsNo) -> Self {
        sbs_no.0
    }
}

impl std::fmt::Display for SbsNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
