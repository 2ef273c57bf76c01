use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::application::dto::{GeneratedQueryDto, QueryInput};
use crate::application::errors::QueryError;
use crate::application::ports::BrandCatalog;
use crate::application::validation::validate_query_input;
use crate::domain::query::{CountQueryBuilder, GeneratedQuery};
use crate::domain::value_objects::StoreCodePolicy;

/// Use case: Generate the store activity count query
pub struct GenerateQueryUseCase {
    catalog: Arc<dyn BrandCatalog>,
    store_code_policy: StoreCodePolicy,
}

impl GenerateQueryUseCase {
    pub fn new(catalog: Arc<dyn BrandCatalog>, store_code_policy: StoreCodePolicy) -> Self {
        Self {
            catalog,
            store_code_policy,
        }
    }

    /// Generate the query text for a brand, store and start date
    pub fn generate(
        &self,
        brand_name: Option<&str>,
        store_code: Option<&str>,
        date: Option<NaiveDate>,
    ) -> Result<GeneratedQuery, QueryError> {
        let input = QueryInput {
            brand_name: brand_name.map(str::to_string),
            store_code: store_code.map(str::to_string),
            date,
        };
        self.execute(&input)
            .map(|dto| GeneratedQuery::new(dto.query))
    }

    /// Execute generation, returning the query with the resolved inputs
    pub fn execute(&self, input: &QueryInput) -> Result<GeneratedQueryDto, QueryError> {
        // 1. Presence and store code checks
        let validated = validate_query_input(input, self.store_code_policy).map_err(|e| {
            warn!(error = %e, "Query input rejected");
            e
        })?;

        // 2. Resolve brand
        let brand = self.catalog.lookup(validated.brand_name).ok_or_else(|| {
            warn!(brand = validated.brand_name, "Brand not found in catalog");
            QueryError::MissingBrand(validated.brand_name.to_string())
        })?;
        debug!(brand = brand.name(), sbs_no = %brand.sbs_no(), "Resolved brand");

        // 3. Render
        let query =
            CountQueryBuilder::standard(&validated.store_code, brand.sbs_no(), validated.date)
                .build();

        info!(
            brand = brand.name(),
            sbs_no = %brand.sbs_no(),
            store_code = validated.store_code.as_str(),
            date = %validated.date,
            "Query generated successfully"
        );

        Ok(GeneratedQueryDto::new(
            &brand,
            &validated.store_code,
            validated.date,
            query,
        ))
    }
}
