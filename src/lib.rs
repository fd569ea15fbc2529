//! Sales Analytics Engine Library
//! # Overview
//!
//! This library turns a pipe-delimited sales-transaction feed into a set
//! of aggregate analytics and a formatted plain-text report, in one
//! single-threaded batch pass.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, AnalyticsError)
//! - [`cli`] - CLI arguments parsing
//! - [`io`] - Feed reading, line parsing, and dump output:
//!   - [`io::reader`] - encoding-fallback feed reading with header skip
//!   - [`io::line_format`] - pipe-delimited record parsing
//!   - [`io::dump`] - enriched-record dump writing
//! - [`core`] - Business logic components:
//!   - [`core::validator`] - business-rule validation and filtering
//!   - [`core::analytics`] - the six aggregate analytical views
//!   - [`core::enrich`] - product-catalog enrichment
//!   - [`core::report`] - report composition
//!
//! # Pipeline
//!
//! Data flows strictly forward:
//!
//! ```text
//! raw lines -> parsed records -> valid/filtered records -> aggregates -> report
//! ```
//!
//! Each stage receives an immutable view of its predecessor's output and
//! returns a freshly constructed result. Unparseable lines are dropped
//! silently; invalid-but-parseable records are dropped and counted;
//! aggregations over empty inputs return explicit empty results.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{
    compose_report, customer_analysis, daily_sales_trend, enrich_transactions,
    find_peak_sales_day, region_wise_sales, top_selling_products, total_revenue,
    validate_and_filter, CustomerStats, DailySales, EnrichedTransaction, FilterSummary, PeakDay,
    ProductCatalog, ProductInfo, ProductSales, RegionSales,
};
pub use crate::io::{parse_line, parse_transactions, read_sales_lines, write_enriched_dump};
pub use crate::types::{AnalyticsError, Transaction};
