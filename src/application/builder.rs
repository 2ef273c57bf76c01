use std::sync::Arc;

use tracing::info;

use crate::application::ports::{BrandCatalog, CatalogError};
use crate::application::use_cases::{GenerateQueryUseCase, ListBrandsUseCase};
use crate::config::Config;
use crate::infrastructure::catalog::{FileCatalogLoader, InMemoryBrandCatalog};

/// Wired use cases, sharing one catalog
pub struct Application {
    pub generate_query: GenerateQueryUseCase,
    pub list_brands: ListBrandsUseCase,
}

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    catalog: Option<Arc<dyn BrandCatalog>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            catalog: None,
        }
    }

    /// Use the given catalog instead of the configured one
    pub fn with_catalog(mut self, catalog: Arc<dyn BrandCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Load the catalog named by the configuration, or the built-in table
    pub fn with_configured_catalog(mut self) -> Result<Self, CatalogError> {
        let catalog: Arc<dyn BrandCatalog> = match &self.config.catalog_path {
            Some(path) => {
                info!("Loading brand catalog from {}", path.display());
                Arc::new(FileCatalogLoader::load(path)?)
            }
            None => {
                info!("Using built-in brand catalog");
                InMemoryBrandCatalog::builtin()
            }
        };
        self.catalog = Some(catalog);
        Ok(self)
    }

    /// Build the application; falls back to the built-in catalog if none was set
    pub fn build(self) -> Application {
        let catalog = self
            .catalog
            .unwrap_or_else(|| InMemoryBrandCatalog::builtin() as Arc<dyn BrandCatalog>);

        Application {
            generate_query: GenerateQueryUseCase::new(
                Arc::clone(&catalog),
                self.config.store_code_policy,
            ),
            list_brands: ListBrandsUseCase::new(catalog),
        }
    }
}
