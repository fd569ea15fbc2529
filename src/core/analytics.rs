//! Aggregate analytical views over a validated transaction set
//!
//! Six independent read-only views, each a pure function of its input
//! slice: total revenue, region breakdown, top-N products, customer
//! analysis, daily trend, and peak sales day. Every view is recomputed
//! from scratch on each call; nothing is cached or updated incrementally.
//!
//! # Grouping
//!
//! Grouped views accumulate into an explicit accumulator vector in
//! first-encounter order, with a side map from group key to vector index.
//! The final ordering always comes from an explicit stable sort, never
//! from the iteration order of a map.
//!
//! # Rounding
//!
//! Monetary outputs are rounded to 2 decimal places (half away from zero,
//! never truncated) exactly where each view specifies. In particular, a
//! region's percentage is computed from the UNROUNDED region total and
//! the UNROUNDED grand total before the region total itself is rounded
//! for output. These placements are contractual; do not consolidate them.

use crate::types::Transaction;
use std::collections::{HashMap, HashSet};

/// One region's share of the breakdown, ordered by descending sales
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSales {
    /// Region label
    pub region: String,
    /// Revenue attributed to the region, rounded to 2 decimals
    pub total_sales: f64,
    /// Share of total revenue in percent, rounded to 2 decimals
    pub percentage: f64,
    /// Number of transactions in the region
    pub transaction_count: usize,
}

/// One product's sales totals, ordered by descending quantity
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSales {
    /// Product name (post-cleaning)
    pub product_name: String,
    /// Total units sold
    pub quantity: i64,
    /// Total revenue, left unrounded
    pub revenue: f64,
}

/// One customer's purchase profile, ordered by descending spend
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerStats {
    /// Customer identifier
    pub customer_id: String,
    /// Total spend, rounded to 2 decimals
    pub total_spent: f64,
    /// Number of purchases
    pub purchase_count: usize,
    /// Average order value (spend / purchases, 0 when empty), rounded
    pub avg_order_value: f64,
    /// Distinct product names purchased; NO ordering guarantee
    pub products_bought: Vec<String>,
}

/// One day's sales activity, ordered by ascending date string
#[derive(Debug, Clone, PartialEq)]
pub struct DailySales {
    /// Date in `YYYY-MM-DD` form
    pub date: String,
    /// Revenue for the day, rounded to 2 decimals
    pub revenue: f64,
    /// Number of transactions on the day
    pub transaction_count: usize,
    /// Number of distinct customers on the day
    pub unique_customers: usize,
}

/// The day with the highest aggregate revenue
#[derive(Debug, Clone, PartialEq)]
pub struct PeakDay {
    /// Date of the peak
    pub date: String,
    /// Revenue of the peak day (already rounded, from the daily trend)
    pub revenue: f64,
    /// Number of transactions on the peak day
    pub transaction_count: usize,
}

/// Round to 2 decimal places, half away from zero
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Total revenue over all transactions
///
/// Plain floating-point accumulation with no intermediate rounding.
pub fn total_revenue(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(Transaction::amount).sum()
}

/// Per-region sales breakdown
///
/// Returns an empty vector when total revenue is exactly zero. Ties on
/// the rounded total keep first-encountered order (stable sort).
pub fn region_wise_sales(transactions: &[Transaction]) -> Vec<RegionSales> {
    let grand_total = total_revenue(transactions);
    if grand_total == 0.0 {
        return Vec::new();
    }

    struct Acc {
        region: String,
        total_sales: f64,
        transaction_count: usize,
    }

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Acc> = Vec::new();
    for t in transactions {
        let i = *index.entry(t.region.clone()).or_insert_with(|| {
            groups.push(Acc {
                region: t.region.clone(),
                total_sales: 0.0,
                transaction_count: 0,
            });
            groups.len() - 1
        });
        groups[i].total_sales += t.amount();
        groups[i].transaction_count += 1;
    }

    let mut stats: Vec<RegionSales> = groups
        .into_iter()
        .map(|g| RegionSales {
            region: g.region,
            // Percentage from the unrounded totals, then the region total
            // is rounded for output.
            percentage: round2(g.total_sales / grand_total * 100.0),
            total_sales: round2(g.total_sales),
            transaction_count: g.transaction_count,
        })
        .collect();

    stats.sort_by(|a, b| b.total_sales.total_cmp(&a.total_sales));
    stats
}

/// Top `n` products by total quantity sold
///
/// Revenue is accumulated but left unrounded. Quantity ties keep
/// first-encountered order (stable sort).
pub fn top_selling_products(transactions: &[Transaction], n: usize) -> Vec<ProductSales> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut products: Vec<ProductSales> = Vec::new();
    for t in transactions {
        let i = *index.entry(t.product_name.clone()).or_insert_with(|| {
            products.push(ProductSales {
                product_name: t.product_name.clone(),
                quantity: 0,
                revenue: 0.0,
            });
            products.len() - 1
        });
        products[i].quantity += t.quantity;
        products[i].revenue += t.amount();
    }

    products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    products.truncate(n);
    products
}

/// Per-customer purchase analysis
///
/// Spend ties on the rounded total keep first-encountered order. The
/// distinct product list is materialized from a set; its order carries
/// no meaning.
pub fn customer_analysis(transactions: &[Transaction]) -> Vec<CustomerStats> {
    struct Acc {
        customer_id: String,
        total_spent: f64,
        purchase_count: usize,
        products: HashSet<String>,
    }

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Acc> = Vec::new();
    for t in transactions {
        let i = *index.entry(t.customer_id.clone()).or_insert_with(|| {
            groups.push(Acc {
                customer_id: t.customer_id.clone(),
                total_spent: 0.0,
                purchase_count: 0,
                products: HashSet::new(),
            });
            groups.len() - 1
        });
        groups[i].total_spent += t.amount();
        groups[i].purchase_count += 1;
        groups[i].products.insert(t.product_name.clone());
    }

    let mut stats: Vec<CustomerStats> = groups
        .into_iter()
        .map(|g| {
            let avg = if g.purchase_count > 0 {
                g.total_spent / g.purchase_count as f64
            } else {
                0.0
            };
            CustomerStats {
                customer_id: g.customer_id,
                total_spent: round2(g.total_spent),
                purchase_count: g.purchase_count,
                avg_order_value: round2(avg),
                products_bought: g.products.into_iter().collect(),
            }
        })
        .collect();

    stats.sort_by(|a, b| b.total_spent.total_cmp(&a.total_spent));
    stats
}

/// Daily sales trend, ascending by date string
///
/// Dates are opaque sortable strings; lexicographic order is correct for
/// the `YYYY-MM-DD` form and no calendar parsing is attempted.
pub fn daily_sales_trend(transactions: &[Transaction]) -> Vec<DailySales> {
    struct Acc {
        date: String,
        revenue: f64,
        transaction_count: usize,
        customers: HashSet<String>,
    }

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Acc> = Vec::new();
    for t in transactions {
        let i = *index.entry(t.date.clone()).or_insert_with(|| {
            groups.push(Acc {
                date: t.date.clone(),
                revenue: 0.0,
                transaction_count: 0,
                customers: HashSet::new(),
            });
            groups.len() - 1
        });
        groups[i].revenue += t.amount();
        groups[i].transaction_count += 1;
        groups[i].customers.insert(t.customer_id.clone());
    }

    let mut trend: Vec<DailySales> = groups
        .into_iter()
        .map(|g| DailySales {
            date: g.date,
            revenue: round2(g.revenue),
            transaction_count: g.transaction_count,
            unique_customers: g.customers.len(),
        })
        .collect();

    trend.sort_by(|a, b| a.date.cmp(&b.date));
    trend
}

/// The date with the highest revenue in the daily trend
///
/// Comparison is exact on the already-rounded daily revenues. The scan
/// runs over the ascending-date trend with a strictly-greater test, so
/// the earliest date wins ties. Returns `None` for an empty input.
pub fn find_peak_sales_day(transactions: &[Transaction]) -> Option<PeakDay> {
    let trend = daily_sales_trend(transactions);

    let mut peak: Option<&DailySales> = None;
    for day in &trend {
        match peak {
            Some(best) if day.revenue <= best.revenue => {}
            _ => peak = Some(day),
        }
    }

    peak.map(|day| PeakDay {
        date: day.date.clone(),
        revenue: day.revenue,
        transaction_count: day.transaction_count,
    })
}
