//! Sales Analytics Engine CLI
//!
//! Command-line interface for the batch sales analytics pipeline.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- data/sales_data.txt
//! cargo run -- --region North data/sales_data.txt
//! cargo run -- --min-amount 50 --max-amount 5000 data/sales_data.txt
//! cargo run -- --catalog products.json --report out/report.txt data/sales_data.txt
//! ```
//!
//! The program reads the transaction feed, validates and optionally
//! filters it, prints the analytics to stdout, enriches the records from
//! the product catalog, and writes the enriched dump and the formatted
//! report.
//!
//! # Exit Codes
//!
//! - 0: Success (including clean exits on an empty feed)
//! - 1: Fatal error (file not found, output not writable, etc.)

use sales_analytics_engine::cli;
use sales_analytics_engine::core::{
    compose_report, customer_analysis, enrich_transactions, find_peak_sales_day,
    region_wise_sales, top_selling_products, total_revenue, validate_and_filter,
    EnrichedTransaction, ProductCatalog,
};
use sales_analytics_engine::io::{parse_transactions, read_sales_lines, write_enriched_dump};
use sales_analytics_engine::types::AnalyticsError;
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    let args = cli::parse_args();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &cli::CliArgs) -> Result<(), AnalyticsError> {
    println!("==========================================");
    println!("      Sales Data Analytics System");
    println!("==========================================\n");

    // --- Step 1: File operations ---
    println!("[INFO] Reading file: {}", args.input_file.display());
    let raw_lines = read_sales_lines(&args.input_file)?;
    if raw_lines.is_empty() {
        println!("[ERROR] No data found. Exiting.");
        return Ok(());
    }
    println!("[INFO] Read {} raw lines.\n", raw_lines.len());

    // --- Step 2: Cleaning and parsing ---
    println!("[INFO] Parsing and cleaning data...");
    let all_transactions = parse_transactions(&raw_lines);

    // --- Step 3: Validation and filtering ---
    let (valid_transactions, _invalid_count, summary) = validate_and_filter(
        all_transactions,
        args.region.as_deref(),
        args.min_amount,
        args.max_amount,
    );

    println!("Available Regions: {:?}", summary.available_regions);
    match summary.amount_range {
        Some((min, max)) => {
            println!("Transaction Amount Range: Min={:.2}, Max={:.2}", min, max)
        }
        None => println!("Transaction Amount Range: N/A (no valid transactions)"),
    }

    println!("\n[INFO] Data Validation Summary:");
    println!("   - Total Parsed: {}", summary.total_input);
    println!("   - Invalid Rows: {}", summary.invalid);
    if args.region.is_some() {
        println!("   - Removed by Region: {}", summary.filtered_by_region);
    }
    if args.min_amount.is_some() || args.max_amount.is_some() {
        println!("   - Removed by Amount: {}", summary.filtered_by_amount);
    }
    println!("   - Valid Rows:   {}", summary.final_count);

    if valid_transactions.is_empty() {
        println!("[ERROR] No valid transactions to analyze. Exiting.");
        return Ok(());
    }

    // --- Step 4: Analytics ---
    println!("\n==========================================");
    println!("           ANALYTICS REPORT");
    println!("==========================================\n");

    let revenue = total_revenue(&valid_transactions);
    println!("1. Total Revenue: ${:.2}", revenue);

    println!("\n2. Sales by Region:");
    for stats in region_wise_sales(&valid_transactions) {
        println!(
            "   - {}: ${:.2} ({:.2}%) | {} txns",
            stats.region, stats.total_sales, stats.percentage, stats.transaction_count
        );
    }

    println!("\n3. Top 5 Selling Products:");
    for (rank, product) in top_selling_products(&valid_transactions, 5).iter().enumerate() {
        println!(
            "   {}. {}: {} units sold (${:.2})",
            rank + 1,
            product.product_name,
            product.quantity,
            product.revenue
        );
    }

    println!("\n4. Peak Sales Day:");
    match find_peak_sales_day(&valid_transactions) {
        Some(peak) => {
            println!("   - Date: {}", peak.date);
            println!("   - Revenue: ${:.2}", peak.revenue);
            println!("   - Transactions: {}", peak.transaction_count);
        }
        None => println!("   - N/A"),
    }

    println!("\n5. Top 3 Customers (by Spend):");
    for customer in customer_analysis(&valid_transactions).iter().take(3) {
        println!(
            "   - {}: ${:.2} (Bought {} unique items)",
            customer.customer_id,
            customer.total_spent,
            customer.products_bought.len()
        );
    }

    // --- Step 5: Catalog enrichment ---
    let catalog = load_catalog(args.catalog.as_deref());
    println!("\n[INFO] Loaded catalog with {} products.", catalog.len());

    println!("[INFO] Enriching transactions with catalog data...");
    let enriched_transactions = enrich_transactions(&valid_transactions, &catalog);

    // --- Step 5.5: Enriched dump ---
    println!(
        "[INFO] Saving enriched data to {}...",
        args.enriched.display()
    );
    write_output_dump(&args.enriched, &enriched_transactions)?;

    // --- Step 6: Report generation ---
    println!("\n[INFO] Generating comprehensive report...");
    let generated_at = chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();
    let report = compose_report(&valid_transactions, &enriched_transactions, &generated_at);
    write_output_text(&args.report, &report)?;
    println!("Report successfully generated at: {}", args.report.display());

    println!("\n==========================================");
    println!("           System Finished");
    println!("==========================================");

    Ok(())
}

/// Load the product catalog, degrading to an empty mapping
///
/// The enrichment collaborator may only surface failure as an empty
/// mapping: a missing flag or an unreadable/invalid document warns on
/// stderr and enrichment proceeds with no entries.
fn load_catalog(path: Option<&Path>) -> ProductCatalog {
    let Some(path) = path else {
        println!("\n[INFO] No product catalog supplied; skipping enrichment lookups.");
        return ProductCatalog::empty();
    };

    println!("\n[INFO] Loading product catalog from {}...", path.display());
    match ProductCatalog::load(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("[WARN] Could not load catalog: {}. Continuing unenriched.", e);
            ProductCatalog::empty()
        }
    }
}

/// Write the enriched dump, creating parent directories
fn write_output_dump(
    path: &Path,
    records: &[EnrichedTransaction],
) -> Result<(), AnalyticsError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = fs::File::create(path)?;
    write_enriched_dump(records, &mut file)
}

/// Write a text document, creating parent directories
fn write_output_text(path: &Path, content: &str) -> Result<(), AnalyticsError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;
    Ok(())
}
