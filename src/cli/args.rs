use clap::Parser;
use std::path::PathBuf;

/// Analyze a pipe-delimited sales-transaction feed
#[derive(Parser, Debug)]
#[command(name = "sales-analytics")]
#[command(about = "Batch sales analytics: validate, aggregate, enrich, report", long_about = None)]
pub struct CliArgs {
    /// Input feed path containing pipe-delimited transaction records
    #[arg(value_name = "INPUT", help = "Path to the sales data feed")]
    pub input_file: PathBuf,

    /// Keep only transactions from this region (exact, case-sensitive)
    #[arg(long = "region", value_name = "REGION")]
    pub region: Option<String>,

    /// Keep only transactions with amount >= this value
    #[arg(long = "min-amount", value_name = "AMOUNT")]
    pub min_amount: Option<f64>,

    /// Keep only transactions with amount <= this value
    #[arg(long = "max-amount", value_name = "AMOUNT")]
    pub max_amount: Option<f64>,

    /// Product catalog JSON used for enrichment
    ///
    /// A missing or absent catalog degrades to an empty mapping; every
    /// record is then flagged unenriched.
    #[arg(long = "catalog", value_name = "JSON")]
    pub catalog: Option<PathBuf>,

    /// Where to write the formatted report
    #[arg(
        long = "report",
        value_name = "PATH",
        default_value = "output/sales_report.txt"
    )]
    pub report: PathBuf,

    /// Where to write the enriched-record dump
    #[arg(
        long = "enriched",
        value_name = "PATH",
        default_value = "output/enriched_sales_data.txt"
    )]
    pub enriched: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_minimal_invocation() {
        let args = CliArgs::try_parse_from(["program", "data/sales_data.txt"]).unwrap();
        assert_eq!(args.input_file, PathBuf::from("data/sales_data.txt"));
        assert_eq!(args.region, None);
        assert_eq!(args.min_amount, None);
        assert_eq!(args.max_amount, None);
        assert_eq!(args.catalog, None);
        assert_eq!(args.report, PathBuf::from("output/sales_report.txt"));
        assert_eq!(args.enriched, PathBuf::from("output/enriched_sales_data.txt"));
    }

    #[rstest]
    #[case::region(&["program", "--region", "North", "in.txt"], Some("North"), None, None)]
    #[case::min_amount(&["program", "--min-amount", "50", "in.txt"], None, Some(50.0), None)]
    #[case::max_amount(&["program", "--max-amount", "5000", "in.txt"], None, None, Some(5000.0))]
    #[case::all_filters(
        &["program", "--region", "North", "--min-amount", "50", "--max-amount", "5000", "in.txt"],
        Some("North"),
        Some(50.0),
        Some(5000.0)
    )]
    fn test_filter_options(
        #[case] argv: &[&str],
        #[case] region: Option<&str>,
        #[case] min_amount: Option<f64>,
        #[case] max_amount: Option<f64>,
    ) {
        let args = CliArgs::try_parse_from(argv).unwrap();
        assert_eq!(args.region.as_deref(), region);
        assert_eq!(args.min_amount, min_amount);
        assert_eq!(args.max_amount, max_amount);
    }

    #[test]
    fn test_output_path_overrides() {
        let args = CliArgs::try_parse_from([
            "program",
            "--catalog",
            "products.json",
            "--report",
            "out/r.txt",
            "--enriched",
            "out/e.txt",
            "in.txt",
        ])
        .unwrap();
        assert_eq!(args.catalog, Some(PathBuf::from("products.json")));
        assert_eq!(args.report, PathBuf::from("out/r.txt"));
        assert_eq!(args.enriched, PathBuf::from("out/e.txt"));
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::non_numeric_min(&["program", "--min-amount", "lots", "in.txt"])]
    #[case::non_numeric_max(&["program", "--max-amount", "much", "in.txt"])]
    fn test_parsing_errors(#[case] argv: &[&str]) {
        assert!(CliArgs::try_parse_from(argv).is_err());
    }
}
