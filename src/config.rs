use std::path::PathBuf;

use crate::domain::value_objects::StoreCodePolicy;

/// Log output style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: LogFormat,
    /// Replaces the built-in brand table when set
    pub catalog_path: Option<PathBuf>,
    pub store_code_policy: StoreCodePolicy,
    /// Settings that were present but unparsable, reported by `validate`
    pub(crate) rejected: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
            catalog_path: None,
            store_code_policy: StoreCodePolicy::default(),
            rejected: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// Unset keys take their defaults. A value that is set but does not parse
    /// keeps the default and is recorded, so `validate` fails instead of
    /// silently running with the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup("QUERY_LOG_LEVEL") {
            config.log_level = level;
        }
        if let Some(value) = lookup("QUERY_LOG_FORMAT") {
            match value.parse() {
                Ok(format) => config.log_format = format,
                Err(_) => config
                    .rejected
                    .push(format!("Invalid QUERY_LOG_FORMAT: {}", value)),
            }
        }
        config.catalog_path = lookup("BRAND_CATALOG_PATH")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        if let Some(value) = lookup("STORE_CODE_POLICY") {
            match value.parse() {
                Ok(policy) => config.store_code_policy = policy,
                Err(_) => config
                    .rejected
                    .push(format!("Invalid STORE_CODE_POLICY: {}", value)),
            }
        }

        config
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(rejected) = self.rejected.first() {
            return Err(rejected.clone());
        }

        if self.log_level.trim().is_empty() {
            return Err("QUERY_LOG_LEVEL cannot be empty".to_string());
        }

        if let Some(path) = &self.catalog_path {
            if !path.is_file() {
                return Err(format!(
                    "BRAND_CATALOG_PATH does not point to a file: {}",
                    path.display()
                ));
            }
        }

        Ok(())
    }
}
