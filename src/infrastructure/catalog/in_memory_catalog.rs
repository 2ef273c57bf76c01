use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::application::ports::BrandCatalog;
use crate::domain::entities::Brand;
use crate::domain::errors::DomainError;
use crate::domain::validation::Validation;
use crate::domain::value_objects::SbsNo;

/// Built-in brand table: display name and SBS number
pub const BUILTIN_BRANDS: [(&str, i64); 6] = [
    ("Bareeze/Home Expression", 2),
    ("Bareeze Men", 3),
    ("Chinyere", 5),
    ("Minnie Minor", 7),
    ("Rang Ja", 8),
    ("The Entertainer", 12),
];

static BUILTIN_CATALOG: Lazy<Arc<InMemoryBrandCatalog>> = Lazy::new(|| {
    Arc::new(
        InMemoryBrandCatalog::from_pairs(BUILTIN_BRANDS.iter().copied())
            .expect("Invalid built-in brand table"),
    )
});

/// Immutable brand catalog backed by a vector and a name index
#[derive(Debug, Clone)]
pub struct InMemoryBrandCatalog {
    brands: Vec<Brand>,
    by_name: HashMap<String, usize>,
}

impl InMemoryBrandCatalog {
    pub fn new(brands: Vec<Brand>) -> Result<Self, DomainError> {
        Validation::validate_brand_list(&brands)?;

        let by_name = brands
            .iter()
            .enumerate()
            .map(|(index, brand)| (brand.name().to_string(), index))
            .collect();

        Ok(Self { brands, by_name })
    }

    pub fn from_pairs<S: Into<String>>(
        pairs: impl IntoIterator<Item = (S, i64)>,
    ) -> Result<Self, DomainError> {
        let brands = pairs
            .into_iter()
            .map(|(name, sbs_no)| Brand::new(name, SbsNo::new(sbs_no)?))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(brands)
    }

    /// Shared instance of the built-in six-brand table
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN_CATALOG)
    }

    pub fn len(&self) -> usize {
        self.brands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }
}

impl BrandCatalog for InMemoryBrandCatalog {
    fn lookup(&self, name: &str) -> Option<Brand> {
        self.by_name
            .get(name)
            .and_then(|&index| self.brands.get(index))
            .cloned()
    }

    fn brands(&self) -> Vec<Brand> {
        self.brands.clone()
    }
}
