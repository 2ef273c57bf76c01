mod file_catalog;
mod in_memory_catalog;

pub use file_catalog::FileCatalogLoader;
pub use in_memory_catalog::{InMemoryBrandCatalog, BUILTIN_BRANDS};
