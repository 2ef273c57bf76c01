use std::sync::Arc;

use crate::application::dto::BrandDto;
use crate::application::ports::BrandCatalog;

/// Use case: List selectable brands
pub struct ListBrandsUseCase {
    catalog: Arc<dyn BrandCatalog>,
}

impl ListBrandsUseCase {
    pub fn new(catalog: Arc<dyn BrandCatalog>) -> Self {
        Self { catalog }
    }

    pub fn execute(&self) -> Vec<BrandDto> {
        self.catalog
            .brands()
            .into_iter()
            .map(BrandDto::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockBrandCatalog;
    use crate::domain::entities::Brand;
    use crate::domain::value_objects::SbsNo;

    #[test]
    fn test_list_preserves_catalog_order() {
        let mut catalog = MockBrandCatalog::new();
        catalog.expect_brands().times(1).returning(|| {
            vec![
                Brand::new("Minnie Minor", SbsNo::new(7).unwrap()).unwrap(),
                Brand::new("Bareeze Men", SbsNo::new(3).unwrap()).unwrap(),
            ]
        });

        let brands = ListBrandsUseCase::new(Arc::new(catalog)).execute();

        assert_eq!(
            brands,
            vec![
                BrandDto {
                    name: "Minnie Minor".to_string(),
                    sbs_no: 7,
                    label: "Minnie Minor (SBS: 7)".to_string(),
                },
                BrandDto {
                    name: "Bareeze Men".to_string(),
                    sbs_no: 3,
                    label: "Bareeze Men (SBS: 3)".to_string(),
                },
            ]
        );
    }
}
