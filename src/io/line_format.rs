//! Feed line format handling
//!
//! This module centralizes the pipe-delimited feed format: splitting a raw
//! line into fields, cleaning them, and converting to the domain
//! [`Transaction`] type. All functions are pure (no I/O) for easy testing.
//!
//! # Rejection semantics
//!
//! A line that cannot be parsed (wrong field count, non-numeric quantity
//! or price) is rejected, and [`parse_transactions`] omits it silently.
//! That tier is distinct from business-rule validation: rejected lines are
//! not counted anywhere, while invalid records are counted by the
//! validator.

use crate::types::Transaction;

/// Number of pipe-delimited fields in a well-formed feed line
const FIELD_COUNT: usize = 8;

/// Convert one raw feed line into a [`Transaction`]
///
/// The line must contain exactly 8 `|`-delimited fields in the order:
/// transaction id, date, product id, product name, quantity, unit price,
/// customer id, region.
///
/// Cleaning applied before conversion:
/// - product name: every comma becomes a single space
///   (`"Mouse,Wireless"` parses as `"Mouse Wireless"`)
/// - quantity and unit price: thousands-separator commas stripped
/// - every field trimmed of surrounding whitespace
///
/// # Errors
///
/// Returns a description of the rejection. Callers that implement the
/// silent-drop contract discard it.
pub fn parse_line(line: &str) -> Result<Transaction, String> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        ));
    }

    let quantity_str = fields[4].replace(',', "");
    let quantity: i64 = quantity_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid quantity '{}'", fields[4]))?;

    let price_str = fields[5].replace(',', "");
    let unit_price: f64 = price_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid unit price '{}'", fields[5]))?;

    Ok(Transaction {
        transaction_id: fields[0].trim().to_string(),
        date: fields[1].trim().to_string(),
        product_id: fields[2].trim().to_string(),
        product_name: fields[3].replace(',', " ").trim().to_string(),
        quantity,
        unit_price,
        customer_id: fields[6].trim().to_string(),
        region: fields[7].trim().to_string(),
    })
}

/// Parse a batch of raw feed lines, silently omitting rejected lines
///
/// Every returned record has the full structural shape of
/// [`Transaction`]; no partially-populated records are emitted. Raw vs.
/// parsed count visibility is the caller's responsibility.
pub fn parse_transactions(lines: &[String]) -> Vec<Transaction> {
    lines
        .iter()
        .filter_map(|line| parse_line(line).ok())
        .collect()
}
