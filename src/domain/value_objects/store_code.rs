use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

static NUMERIC_STORE_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("Invalid store code regex"));

/// How strictly store codes are checked before interpolation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreCodePolicy {
    /// Any non-empty value is interpolated verbatim
    #[default]
    Permissive,
    /// Only ASCII digits are accepted
    Numeric,
}

impl std::fmt::Display for StoreCodePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreCodePolicy::Permissive => write!(f, "permissive"),
            StoreCodePolicy::Numeric => write!(f, "numeric"),
        }
    }
}

impl std::str::FromStr for StoreCodePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "permissive" => Ok(StoreCodePolicy::Permissive),
            "numeric" => Ok(StoreCodePolicy::Numeric),
            _ => Err(format!("Invalid store code policy: {}", s)),
        }
    }
}

/// Store code as typed by the user.
///
/// The value is opaque: it is never trimmed, parsed or escaped, and lands in
/// the generated SQL exactly as given. Under [`StoreCodePolicy::Permissive`]
/// that means a hostile value can rewrite the statement; callers that accept
/// untrusted input should use [`StoreCodePolicy::Numeric`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreCode(String);

impl StoreCode {
    pub fn new(value: String, policy: StoreCodePolicy) -> Result<Self, DomainError> {
        if value.is_empty() {
            return Err(DomainError::InvalidStoreCode(
                "Store code cannot be empty".to_string(),
            ));
        }

        if policy == StoreCodePolicy::Numeric && !NUMERIC_STORE_CODE_REGEX.is_match(&value) {
            return Err(DomainError::InvalidStoreCode(format!(
                "Store code must be numeric: {}",
                value
            )));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoreCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
