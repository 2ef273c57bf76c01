use std::fmt::Write;

use crate::domain::query::clause::{CountClause, COUNT_CLAUSES};
use crate::domain::query::GeneratedQuery;
use crate::domain::value_objects::{ReportDate, SbsNo, StoreCode};

/// SQL fragments shared by every clause
pub struct QueryBuilder;

impl QueryBuilder {
    /// Separator placed between clauses
    pub const UNION_ALL: &'static str = "\nunion all\n";

    /// Column holding the brand's SBS number
    pub const SBS_COLUMN: &'static str = "sbs_no";

    /// Column bounded from below by the report date
    pub const CREATED_DATE_COLUMN: &'static str = "created_date";

    /// Format mask passed to `to_date`
    pub const SQL_DATE_MASK: &'static str = "dd-mm-yyyy";

    /// `created_date >= to_date('<date>','dd-mm-yyyy')`
    pub fn created_since(date_literal: &str) -> String {
        format!(
            "{} >= to_date('{}','{}')",
            Self::CREATED_DATE_COLUMN,
            date_literal,
            Self::SQL_DATE_MASK
        )
    }
}

/// Renders the store activity count statement.
///
/// The store code, SBS number and date literal are computed once and reused
/// for every clause.
#[derive(Debug, Clone)]
pub struct CountQueryBuilder<'a> {
    store_code: &'a StoreCode,
    sbs_no: SbsNo,
    date_literal: String,
    clauses: Vec<CountClause>,
}

impl<'a> CountQueryBuilder<'a> {
    pub fn new(store_code: &'a StoreCode, sbs_no: SbsNo, date: ReportDate) -> Self {
        Self {
            store_code,
            sbs_no,
            date_literal: date.to_sql_literal(),
            clauses: Vec::with_capacity(COUNT_CLAUSES.len()),
        }
    }

    /// Builder preloaded with Invoices, Slip out, Slip in, Voucher
    pub fn standard(store_code: &'a StoreCode, sbs_no: SbsNo, date: ReportDate) -> Self {
        Self::new(store_code, sbs_no, date).clauses(COUNT_CLAUSES)
    }

    pub fn clause(mut self, clause: CountClause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn clauses(mut self, clauses: impl IntoIterator<Item = CountClause>) -> Self {
        self.clauses.extend(clauses);
        self
    }

    fn render_clause(&self, clause: &CountClause, out: &mut String) {
        // Writing into a String cannot fail
        let _ = write!(
            out,
            "select count(*), '{}' as cat from {} where {}={} and {}={}",
            clause.label,
            clause.table,
            clause.store_column,
            self.store_code,
            QueryBuilder::SBS_COLUMN,
            self.sbs_no
        );
        for exclusion in clause.exclusions {
            let _ = write!(out, " and {}", exclusion);
        }
        let _ = write!(out, " and {}", QueryBuilder::created_since(&self.date_literal));
    }

    pub fn build(&self) -> GeneratedQuery {
        let mut text = String::new();
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                text.push_str(QueryBuilder::UNION_ALL);
            }
            self.render_clause(clause, &mut text);
        }
        GeneratedQuery::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::clause::{SLIP_IN, VOUCHER};
    use crate::domain::value_objects::StoreCodePolicy;

    fn store(code: &str) -> StoreCode {
        StoreCode::new(code.to_string(), StoreCodePolicy::Permissive).unwrap()
    }

    #[test]
    fn test_created_since() {
        assert_eq!(
            QueryBuilder::created_since("05-01-2025"),
            "created_date >= to_date('05-01-2025','dd-mm-yyyy')"
        );
    }

    #[test]
    fn test_single_clause_has_no_separator() {
        let code = store("42");
        let query = CountQueryBuilder::new(
            &code,
            SbsNo::new(3).unwrap(),
            ReportDate::from_ymd(2024, 3, 3).unwrap(),
        )
        .clause(SLIP_IN)
        .build();

        assert_eq!(
            query.text(),
            "select count(*), 'Slip in' as cat from slip where in_store_no=42 and sbs_no=3 and held not in (1) and created_date >= to_date('03-03-2024','dd-mm-yyyy')"
        );
    }

    #[test]
    fn test_extra_exclusion_follows_held() {
        let code = store("7");
        let query = CountQueryBuilder::new(
            &code,
            SbsNo::new(12).unwrap(),
            ReportDate::from_ymd(2023, 12, 31).unwrap(),
        )
        .clause(VOUCHER)
        .build();

        assert!(query
            .text()
            .contains("sbs_no=12 and held not in (1) and vou_class not in (2) and created_date"));
    }

    #[test]
    fn test_standard_builder_renders_four_clauses() {
        let code = store("126");
        let query = CountQueryBuilder::standard(
            &code,
            SbsNo::new(8).unwrap(),
            ReportDate::from_ymd(2025, 1, 5).unwrap(),
        )
        .build();

        assert_eq!(query.text().matches(QueryBuilder::UNION_ALL).count(), 3);
        assert_eq!(query.text().lines().count(), 7);
        assert!(!query.text().ends_with('\n'));
    }

    #[test]
    fn test_empty_builder_renders_empty_text() {
        let code = store("1");
        let query = CountQueryBuilder::new(
            &code,
            SbsNo::new(1).unwrap(),
            ReportDate::from_ymd(2024, 1, 1).unwrap(),
        )
        .build();
        assert!(query.text().is_empty());
    }
}
