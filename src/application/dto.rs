use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Brand;
use crate::domain::query::GeneratedQuery;
use crate::domain::value_objects::{ReportDate, StoreCode};

/// Raw form state; any field may still be unset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryInput {
    pub brand_name: Option<String>,
    pub store_code: Option<String>,
    pub date: Option<NaiveDate>,
}

impl QueryInput {
    pub fn new(
        brand_name: impl Into<String>,
        store_code: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            brand_name: Some(brand_name.into()),
            store_code: Some(store_code.into()),
            date: Some(date),
        }
    }
}

/// DTO for a generated query and the inputs it was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQueryDto {
    pub brand: String,
    pub sbs_no: u32,
    pub store_code: String,
    /// `dd-MM-yyyy`
    pub date: String,
    pub query: String,
}

impl GeneratedQueryDto {
    pub fn new(
        brand: &Brand,
        store_code: &StoreCode,
        date: ReportDate,
        query: GeneratedQuery,
    ) -> Self {
        Self {
            brand: brand.name().to_string(),
            sbs_no: brand.sbs_no().value(),
            store_code: store_code.as_str().to_string(),
            date: date.to_string(),
            query: query.into_text(),
        }
    }
}

/// DTO for brand listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandDto {
    pub name: String,
    pub sbs_no: u32,
    /// Selector label, e.g. `Rang Ja (SBS: 8)`
    pub label: String,
}

impl From<Brand> for BrandDto {
    fn from(brand: Brand) -> Self {
        Self {
            label: brand.to_string(),
            name: brand.name().to_string(),
            sbs_no: brand.sbs_no().value(),
        }
    }
}
