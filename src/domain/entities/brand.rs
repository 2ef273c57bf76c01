use serde::Serialize;

use crate::domain::errors::DomainError;
use crate::domain::value_objects::SbsNo;

/// A brand as offered to the user, paired with its SBS number.
///
/// Only built through `Brand::new`; catalog files deserialize into plain
/// entries first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Brand {
    name: String,
    sbs_no: SbsNo,
}

impl Brand {
    pub fn new(name: impl Into<String>, sbs_no: SbsNo) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidBrandName(
                "Brand name cannot be empty".to_string(),
            ));
        }
        Ok(Self { name, sbs_no })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sbs_no(&self) -> SbsNo {
        self.sbs_no
    }
}

/// Selector label, e.g. `Rang Ja (SBS: 8)`
impl std::fmt::Display for Brand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (SBS: {})", self.name, self.sbs_no)
    }
}
