mod builder;
pub mod clause;

pub use builder::{CountQueryBuilder, QueryBuilder};
pub use clause::{CountClause, Exclusion, COUNT_CLAUSES};

/// Assembled SQL text, ready for display or export
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratedQuery {
    text: String,
}

impl GeneratedQuery {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl std::fmt::Display for GeneratedQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
