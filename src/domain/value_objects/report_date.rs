use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Display and SQL literal format (`dd-MM-yyyy`)
pub const REPORT_DATE_FORMAT: &str = "%d-%m-%Y";

/// Alternative input format accepted from the command line
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Lower bound applied to `created_date`, day granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReportDate(NaiveDate);

impl ReportDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DomainError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, day)))
    }

    /// Parse `dd-mm-yyyy` or ISO `yyyy-mm-dd`
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, REPORT_DATE_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(s, ISO_DATE_FORMAT))
            .map(Self)
            .map_err(|e| DomainError::InvalidDate(format!("{}: {}", s, e)))
    }

    pub fn as_naive_date(&self) -> &NaiveDate {
        &self.0
    }

    /// Zero-padded `dd-MM-yyyy` literal embedded in `to_date(...)`
    pub fn to_sql_literal(&self) -> String {
        self.0.format(REPORT_DATE_FORMAT).to_string()
    }
}

impl From<NaiveDate> for ReportDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl std::fmt::Display for ReportDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(REPORT_DATE_FORMAT))
    }
}

impl std::str::FromStr for ReportDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
