//! # store_count_query - Store Activity Count Query Generator
//!
//! Builds the fixed four-way `union all` count statement used to check a
//! store's invoices, outbound and inbound slips, and vouchers for one brand
//! since a given date. Nothing is executed: the output is SQL text for a
//! human to paste elsewhere.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Brands, value objects, clause records and the SQL builder
//! - **Application**: Use cases, input validation and ports (interfaces)
//! - **Infrastructure**: Catalog adapters (built-in table, files) and exporters
//!
//! ## Example Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use store_count_query::application::builder::ApplicationBuilder;
//! use store_count_query::Config;
//!
//! let app = ApplicationBuilder::new(Config::default()).build();
//! let query = app
//!     .generate_query
//!     .generate(Some("Rang Ja"), Some("126"), NaiveDate::from_ymd_opt(2025, 1, 5))
//!     .unwrap();
//! assert!(query.text().contains("sbs_no=8"));
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, query, value_objects};
