use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::application::ports::CatalogError;
use crate::infrastructure::catalog::InMemoryBrandCatalog;

/// On-disk catalog layout, e.g. in TOML:
///
/// ```toml
/// [[brands]]
/// name = "Rang Ja"
/// sbs_no = 8
/// ```
#[derive(Debug, Deserialize)]
struct CatalogFile {
    brands: Vec<BrandEntry>,
}

#[derive(Debug, Deserialize)]
struct BrandEntry {
    name: String,
    sbs_no: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogFormat {
    Toml,
    Yaml,
    Json,
}

impl CatalogFormat {
    fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Ok(Self::Toml),
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Loads a brand catalog from a TOML, YAML or JSON file
pub struct FileCatalogLoader;

impl FileCatalogLoader {
    pub fn load(path: &Path) -> Result<InMemoryBrandCatalog, CatalogError> {
        let format = CatalogFormat::from_path(path)?;
        debug!(path = %path.display(), ?format, "Reading brand catalog");

        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::parse(&contents, format).map_err(|message| CatalogError::Parse {
            path: path.to_path_buf(),
            message,
        })?;

        let catalog = InMemoryBrandCatalog::from_pairs(
            catalog
                .brands
                .into_iter()
                .map(|entry| (entry.name, entry.sbs_no)),
        )?;

        info!(path = %path.display(), brands = catalog.len(), "Brand catalog loaded");
        Ok(catalog)
    }

    fn parse(contents: &str, format: CatalogFormat) -> Result<CatalogFile, String> {
        match format {
            CatalogFormat::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
            CatalogFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
            CatalogFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
        }
    }
}
