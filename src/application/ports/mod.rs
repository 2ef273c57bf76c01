mod brand_catalog;
mod query_exporter;

pub use brand_catalog::{BrandCatalog, CatalogError};
pub use query_exporter::{ExportError, QueryExporter};

#[cfg(test)]
pub use brand_catalog::MockBrandCatalog;
