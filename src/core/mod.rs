//! Core business logic module
//!
//! This module contains the pipeline stages with non-trivial semantics:
//! - `validator` - business-rule validation and optional filtering
//! - `analytics` - the six aggregate analytical views
//! - `enrich` - product-catalog enrichment
//! - `report` - plain-text report composition

pub mod analytics;
pub mod enrich;
pub mod report;
pub mod validator;

pub use analytics::{
    customer_analysis, daily_sales_trend, find_peak_sales_day, region_wise_sales,
    top_selling_products, total_revenue, CustomerStats, DailySales, PeakDay, ProductSales,
    RegionSales,
};
pub use enrich::{enrich_transactions, EnrichedTransaction, ProductCatalog, ProductInfo};
pub use report::compose_report;
pub use validator::{validate_and_filter, FilterSummary};
