//! Report composition
//!
//! Assembles the aggregate views plus the enrichment flags into one
//! plain-text document. This module is pure text assembly: the caller
//! supplies the transactions, the enriched records, and the generation
//! timestamp, and receives the finished report as a `String`. Writing it
//! anywhere is the caller's job.

use crate::core::analytics::{
    customer_analysis, daily_sales_trend, find_peak_sales_day, region_wise_sales, round2,
    top_selling_products, total_revenue,
};
use crate::core::enrich::EnrichedTransaction;
use crate::types::Transaction;
use std::collections::HashSet;
use std::fmt::Write;

const RULE: &str = "------------------------------------------";
const BANNER: &str = "==========================================";

/// Maximum unenriched product ids sampled in the enrichment summary
const UNENRICHED_SAMPLE_LIMIT: usize = 10;

/// Format a currency value with thousands separators and 2 decimals
///
/// `1234567.891` renders as `1,234,567.89`. The `$` sign is the caller's
/// concern so the helper composes with column alignment.
pub(crate) fn format_currency(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::new();
    let digits = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Bottom `n` products by total quantity, ascending
///
/// Groups in first-encounter order and stable-sorts ascending, so
/// quantity ties keep encounter order. This is not the reverse of the
/// top-products view, whose descending stable sort orders ties the other
/// way around.
fn bottom_products_by_quantity(transactions: &[Transaction], n: usize) -> Vec<(String, i64)> {
    let mut index: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    let mut products: Vec<(String, i64)> = Vec::new();
    for t in transactions {
        let i = *index.entry(t.product_name.clone()).or_insert_with(|| {
            products.push((t.product_name.clone(), 0));
            products.len() - 1
        });
        products[i].1 += t.quantity;
    }
    products.sort_by_key(|&(_, quantity)| quantity);
    products.truncate(n);
    products
}

/// Compose the full sales analytics report
///
/// Sections, in fixed order: header, overall summary, region-wise
/// performance, top 5 products, top 5 customers, daily sales trend,
/// product performance analysis, API enrichment summary. `generated_at`
/// is the pre-formatted generation timestamp for the header.
pub fn compose_report(
    transactions: &[Transaction],
    enriched: &[EnrichedTransaction],
    generated_at: &str,
) -> String {
    let mut out = String::new();

    // 1. HEADER
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "          SALES ANALYTICS REPORT");
    let _ = writeln!(out, "          Generated: {generated_at}");
    let _ = writeln!(out, "          Records Processed: {}", transactions.len());
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out);

    // 2. OVERALL SUMMARY
    let revenue = total_revenue(transactions);
    let count = transactions.len();
    let avg_order = if count > 0 { revenue / count as f64 } else { 0.0 };
    let date_range = match (
        transactions.iter().map(|t| t.date.as_str()).min(),
        transactions.iter().map(|t| t.date.as_str()).max(),
    ) {
        (Some(first), Some(last)) => format!("{first} to {last}"),
        _ => "N/A".to_string(),
    };

    let _ = writeln!(out, "OVERALL SUMMARY");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Total Revenue:       ${}", format_currency(revenue));
    let _ = writeln!(out, "Total Transactions:  {count}");
    let _ = writeln!(out, "Average Order Value: ${}", format_currency(avg_order));
    let _ = writeln!(out, "Date Range:          {date_range}");
    let _ = writeln!(out);

    // 3. REGION-WISE PERFORMANCE
    let region_stats = region_wise_sales(transactions);
    let _ = writeln!(out, "REGION-WISE PERFORMANCE");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "{:<15} {:<15} {:<15} {:<15}",
        "Region", "Sales", "% of Total", "Transactions"
    );
    for stats in &region_stats {
        let _ = writeln!(
            out,
            "{:<15} ${:<14} {:<14} {:<15}",
            stats.region,
            format_currency(stats.total_sales),
            format!("{:.2}%", stats.percentage),
            stats.transaction_count
        );
    }
    let _ = writeln!(out);

    // 4. TOP 5 PRODUCTS
    let _ = writeln!(out, "TOP 5 PRODUCTS");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "{:<5} {:<30} {:<10} {:<15}",
        "Rank", "Product Name", "Quantity", "Revenue"
    );
    for (rank, product) in top_selling_products(transactions, 5).iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<5} {:<30} {:<10} ${:<15}",
            rank + 1,
            product.product_name,
            product.quantity,
            format_currency(product.revenue)
        );
    }
    let _ = writeln!(out);

    // 5. TOP 5 CUSTOMERS
    let customer_stats = customer_analysis(transactions);
    let _ = writeln!(out, "TOP 5 CUSTOMERS");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "{:<5} {:<15} {:<20} {:<10}",
        "Rank", "Customer ID", "Total Spent", "Order Count"
    );
    for (rank, customer) in customer_stats.iter().take(5).enumerate() {
        let _ = writeln!(
            out,
            "{:<5} {:<15} ${:<19} {:<10}",
            rank + 1,
            customer.customer_id,
            format_currency(customer.total_spent),
            customer.purchase_count
        );
    }
    let _ = writeln!(out);

    // 6. DAILY SALES TREND
    let _ = writeln!(out, "DAILY SALES TREND");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "{:<15} {:<20} {:<15} {:<20}",
        "Date", "Revenue", "Transactions", "Unique Customers"
    );
    for day in daily_sales_trend(transactions) {
        let _ = writeln!(
            out,
            "{:<15} ${:<19} {:<14} {:<20}",
            day.date,
            format_currency(day.revenue),
            day.transaction_count,
            day.unique_customers
        );
    }
    let _ = writeln!(out);

    // 7. PRODUCT PERFORMANCE ANALYSIS
    let _ = writeln!(out, "PRODUCT PERFORMANCE ANALYSIS");
    let _ = writeln!(out, "{RULE}");
    let best_day = match find_peak_sales_day(transactions) {
        Some(peak) => format!(
            "{} (${} with {} txns)",
            peak.date,
            format_currency(peak.revenue),
            peak.transaction_count
        ),
        None => "N/A".to_string(),
    };
    let _ = writeln!(out, "Best Selling Day: {best_day}");

    let _ = writeln!(out, "Low Performing Products (Bottom 3 by Qty):");
    for (name, quantity) in bottom_products_by_quantity(transactions, 3) {
        let _ = writeln!(out, "  - {name}: {quantity} units");
    }

    let _ = writeln!(out, "Avg Transaction Value per Region:");
    for stats in &region_stats {
        let avg = if stats.transaction_count > 0 {
            stats.total_sales / stats.transaction_count as f64
        } else {
            0.0
        };
        let _ = writeln!(out, "  - {}: ${}", stats.region, format_currency(avg));
    }
    let _ = writeln!(out);

    // 8. API ENRICHMENT SUMMARY
    let total_enriched = enriched.iter().filter(|e| e.enriched()).count();
    let success_rate = if transactions.is_empty() {
        0.0
    } else {
        round2(total_enriched as f64 / transactions.len() as f64 * 100.0)
    };

    let _ = writeln!(out, "API ENRICHMENT SUMMARY");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Total Products Enriched: {total_enriched}");
    let _ = writeln!(out, "Success Rate:            {success_rate:.2}%");
    let _ = writeln!(out, "Unenriched Products (Sample IDs):");

    let mut seen: HashSet<&str> = HashSet::new();
    let mut unenriched_ids: Vec<&str> = Vec::new();
    for record in enriched {
        if !record.enriched() && seen.insert(record.transaction.product_id.as_str()) {
            unenriched_ids.push(record.transaction.product_id.as_str());
        }
    }
    for product_id in unenriched_ids.iter().take(UNENRICHED_SAMPLE_LIMIT) {
        let _ = writeln!(out, "  - {product_id}");
    }
    if unenriched_ids.len() > UNENRICHED_SAMPLE_LIMIT {
        let _ = writeln!(
            out,
            "  ... (+{} more)",
            unenriched_ids.len() - UNENRICHED_SAMPLE_LIMIT
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::enrich::{enrich_transactions, ProductCatalog};
    use rstest::rstest;

    fn tx(id: &str, date: &str, product: &str, product_id: &str, qty: i64, price: f64, customer: &str, region: &str) -> Transaction {
        Transaction {
            transaction_id: id.to_string(),
            date: date.to_string(),
            product_id: product_id.to_string(),
            product_name: product.to_string(),
            quantity: qty,
            unit_price: price,
            customer_id: customer.to_string(),
            region: region.to_string(),
        }
    }

    fn sample_data() -> Vec<Transaction> {
        vec![
            tx("T001", "2024-12-01", "Mouse Wireless", "P101", 10, 25.0, "C001", "North"),
            tx("T002", "2024-12-01", "Keyboard", "P102", 5, 50.0, "C002", "North"),
            tx("T003", "2024-12-02", "Monitor", "P103", 2, 199.99, "C001", "South"),
        ]
    }

    fn sample_report() -> String {
        let data = sample_data();
        let catalog = ProductCatalog::from_json(
            r#"{"products": [{"id": 101, "title": "Wireless Mouse", "category": "electronics", "brand": "Logi", "rating": 4.5}]}"#,
        )
        .unwrap();
        let enriched = enrich_transactions(&data, &catalog);
        compose_report(&data, &enriched, "2024-12-31 12:00:00")
    }

    #[rstest]
    #[case(0.0, "0.00")]
    #[case(25.0, "25.00")]
    #[case(999.999, "1,000.00")]
    #[case(1234.5, "1,234.50")]
    #[case(1234567.891, "1,234,567.89")]
    #[case(-1234.5, "-1,234.50")]
    fn test_format_currency(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_currency(value), expected);
    }

    #[test]
    fn test_report_sections_in_fixed_order() {
        let report = sample_report();
        let sections = [
            "SALES ANALYTICS REPORT",
            "OVERALL SUMMARY",
            "REGION-WISE PERFORMANCE",
            "TOP 5 PRODUCTS",
            "TOP 5 CUSTOMERS",
            "DAILY SALES TREND",
            "PRODUCT PERFORMANCE ANALYSIS",
            "API ENRICHMENT SUMMARY",
        ];
        let mut last = 0;
        for section in sections {
            let at = report.find(section).unwrap_or_else(|| {
                panic!("section '{section}' missing from report:\n{report}")
            });
            assert!(at >= last, "section '{section}' out of order");
            last = at;
        }
    }

    #[test]
    fn test_report_header_and_summary_values() {
        let report = sample_report();
        assert!(report.contains("Generated: 2024-12-31 12:00:00"));
        assert!(report.contains("Records Processed: 3"));
        // 250 + 250 + 399.98
        assert!(report.contains("Total Revenue:       $899.98"));
        assert!(report.contains("Total Transactions:  3"));
        assert!(report.contains("Date Range:          2024-12-01 to 2024-12-02"));
    }

    #[test]
    fn test_report_region_rows() {
        let report = sample_report();
        // North 500.00 of 899.98 = 55.56%, South 399.98 = 44.44%
        assert!(report.contains("North"));
        assert!(report.contains("55.56%"));
        assert!(report.contains("44.44%"));
    }

    #[test]
    fn test_report_best_day_line() {
        let report = sample_report();
        assert!(report.contains("Best Selling Day: 2024-12-01 ($500.00 with 2 txns)"));
    }

    #[test]
    fn test_report_enrichment_summary() {
        let report = sample_report();
        // One of three records matched the catalog.
        assert!(report.contains("Total Products Enriched: 1"));
        assert!(report.contains("Success Rate:            33.33%"));
        assert!(report.contains("  - P102"));
        assert!(report.contains("  - P103"));
    }

    #[test]
    fn test_report_empty_input_is_well_formed() {
        let report = compose_report(&[], &[], "2024-12-31 12:00:00");
        assert!(report.contains("Records Processed: 0"));
        assert!(report.contains("Date Range:          N/A"));
        assert!(report.contains("Best Selling Day: N/A"));
        assert!(report.contains("Success Rate:            0.00%"));
    }

    #[test]
    fn test_report_samples_at_most_ten_unenriched_ids() {
        let data: Vec<Transaction> = (0..14)
            .map(|i| {
                tx(
                    &format!("T{i:03}"),
                    "2024-12-01",
                    &format!("Item{i}"),
                    &format!("P9{i:02}"),
                    1,
                    10.0,
                    "C001",
                    "North",
                )
            })
            .collect();
        let enriched = enrich_transactions(&data, &ProductCatalog::empty());
        let report = compose_report(&data, &enriched, "ts");

        let sampled = report.matches("  - P9").count();
        assert_eq!(sampled, 10);
        assert!(report.contains("  ... (+4 more)"));
    }

    #[test]
    fn test_bottom_products_ascending_with_stable_ties() {
        let data = vec![
            tx("T001", "2024-12-01", "Mouse", "P1", 5, 1.0, "C001", "North"),
            tx("T002", "2024-12-01", "Keyboard", "P2", 2, 1.0, "C001", "North"),
            tx("T003", "2024-12-01", "Webcam", "P3", 2, 1.0, "C001", "North"),
            tx("T004", "2024-12-01", "Monitor", "P4", 9, 1.0, "C001", "North"),
        ];
        let bottom = bottom_products_by_quantity(&data, 3);
        let names: Vec<&str> = bottom.iter().map(|(n, _)| n.as_str()).collect();
        // Keyboard and Webcam tie at 2 and keep encounter order.
        assert_eq!(names, vec!["Keyboard", "Webcam", "Mouse"]);
    }
}
