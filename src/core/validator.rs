//! Business-rule validation and optional filtering
//!
//! This module classifies parsed transactions as valid or invalid, then
//! applies the optional region and amount filters, keeping auditable
//! counts at every stage.
//!
//! # Count semantics
//!
//! Each removal count is relative to the set as it stood ENTERING that
//! stage, not to the original valid set. With both filters active:
//!
//! ```text
//! total_input = invalid + valid_count
//! valid_count = final_count + filtered_by_region + filtered_by_amount
//! ```
//!
//! Changing these to original-set-relative counts would be a behavior
//! change, not a cleanup.

use crate::types::Transaction;

/// Bookkeeping for one validate/filter run
///
/// Purely informational value record, created fresh per invocation. The
/// five counts describe the run; `available_regions` and `amount_range`
/// surface the observational pass over the valid set taken before any
/// filter fires.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSummary {
    /// Number of parsed records handed to the validator
    pub total_input: usize,

    /// Records dropped by business-rule validation
    pub invalid: usize,

    /// Records removed by the region filter (0 if not applied)
    pub filtered_by_region: usize,

    /// Records removed by the amount filter (0 if not applied)
    pub filtered_by_amount: usize,

    /// Records surviving validation and all filters
    pub final_count: usize,

    /// Sorted distinct non-empty regions present in the valid set
    pub available_regions: Vec<String>,

    /// Minimum and maximum transaction amount across the valid set,
    /// or `None` when the valid set is empty
    pub amount_range: Option<(f64, f64)>,
}

/// Check a parsed record against the business rules
///
/// A record is valid when: quantity and unit price are positive, all six
/// text fields are non-empty, and the transaction/product/customer ids
/// carry their `T`/`P`/`C` prefixes.
pub fn is_valid(t: &Transaction) -> bool {
    t.quantity > 0
        && t.unit_price > 0.0
        && !t.transaction_id.is_empty()
        && !t.date.is_empty()
        && !t.product_id.is_empty()
        && !t.product_name.is_empty()
        && !t.customer_id.is_empty()
        && !t.region.is_empty()
        && t.transaction_id.starts_with('T')
        && t.product_id.starts_with('P')
        && t.customer_id.starts_with('C')
}

/// Validate transactions and apply the optional filters
///
/// Three passes, in order:
///
/// 1. **Validation** (always runs): invalid records are dropped and
///    counted; they never reach a later stage.
/// 2. **Informational** (observational only): distinct regions and the
///    min/max amount of the valid set, surfaced on the summary.
/// 3. **Filtering**: region filter first (exact, case-sensitive match),
///    then the amount filter as one combined `[min, max]` inclusive pass,
///    open-ended on whichever bound is omitted. Each filter's removal
///    count is taken against the set entering it.
///
/// Returns the surviving records, the invalid count, and the summary.
pub fn validate_and_filter(
    transactions: Vec<Transaction>,
    region: Option<&str>,
    min_amount: Option<f64>,
    max_amount: Option<f64>,
) -> (Vec<Transaction>, usize, FilterSummary) {
    let total_input = transactions.len();

    let mut valid: Vec<Transaction> = Vec::new();
    let mut invalid = 0usize;
    for t in transactions {
        if is_valid(&t) {
            valid.push(t);
        } else {
            invalid += 1;
        }
    }

    let available_regions = distinct_regions(&valid);
    let amount_range = amount_range(&valid);

    let mut current = valid;
    let mut filtered_by_region = 0usize;
    if let Some(wanted) = region {
        let before = current.len();
        current.retain(|t| t.region == wanted);
        filtered_by_region = before - current.len();
    }

    let mut filtered_by_amount = 0usize;
    if min_amount.is_some() || max_amount.is_some() {
        let before = current.len();
        current.retain(|t| {
            let amount = t.amount();
            min_amount.map_or(true, |min| amount >= min)
                && max_amount.map_or(true, |max| amount <= max)
        });
        filtered_by_amount = before - current.len();
    }

    let summary = FilterSummary {
        total_input,
        invalid,
        filtered_by_region,
        filtered_by_amount,
        final_count: current.len(),
        available_regions,
        amount_range,
    };

    (current, invalid, summary)
}

/// Sorted distinct non-empty regions in a transaction set
pub fn distinct_regions(transactions: &[Transaction]) -> Vec<String> {
    let mut regions: Vec<String> = transactions
        .iter()
        .filter(|t| !t.region.is_empty())
        .map(|t| t.region.clone())
        .collect();
    regions.sort();
    regions.dedup();
    regions
}

/// Minimum and maximum transaction amount, or `None` for an empty set
pub fn amount_range(transactions: &[Transaction]) -> Option<(f64, f64)> {
    let mut amounts = transactions.iter().map(Transaction::amount);
    let first = amounts.next()?;
    Some(amounts.fold((first, first), |(min, max), a| {
        (min.min(a), max.max(a))
    }))
}
