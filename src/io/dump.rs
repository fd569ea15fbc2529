//! Enriched-record dump writing
//!
//! Writes the enriched transaction set as a pipe-delimited document: one
//! header line, one line per record. The header carries the base
//! transaction columns, the enrichment columns when the FIRST record is
//! enriched, and the `enriched` flag; enrichment values missing on a
//! record render as empty strings.

use crate::core::enrich::EnrichedTransaction;
use crate::types::AnalyticsError;
use std::io::Write;

/// Base transaction column names, in feed order
const BASE_COLUMNS: [&str; 8] = [
    "TransactionID",
    "Date",
    "ProductID",
    "ProductName",
    "Quantity",
    "UnitPrice",
    "CustomerID",
    "Region",
];

/// Enrichment column names, in catalog order
const ENRICHMENT_COLUMNS: [&str; 4] = ["title", "category", "brand", "rating"];

/// Write the enriched transaction dump
///
/// The column set follows the first record: base columns always, the
/// enrichment columns only when the first record carries metadata, and
/// the `enriched` flag last. An empty record set produces no output at
/// all, matching the upstream contract of only writing when there is
/// something to dump.
///
/// # Errors
///
/// * [`AnalyticsError::Dump`] if a record cannot be written
/// * [`AnalyticsError::Io`] if the underlying writer fails to flush
pub fn write_enriched_dump(
    records: &[EnrichedTransaction],
    output: &mut dyn Write,
) -> Result<(), AnalyticsError> {
    let Some(first) = records.first() else {
        return Ok(());
    };

    let with_enrichment = first.enriched();

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'|')
        .from_writer(output);

    let mut header: Vec<&str> = BASE_COLUMNS.to_vec();
    if with_enrichment {
        header.extend(ENRICHMENT_COLUMNS);
    }
    header.push("enriched");
    writer.write_record(&header)?;

    for record in records {
        let t = &record.transaction;
        let mut row: Vec<String> = vec![
            t.transaction_id.clone(),
            t.date.clone(),
            t.product_id.clone(),
            t.product_name.clone(),
            t.quantity.to_string(),
            t.unit_price.to_string(),
            t.customer_id.clone(),
            t.region.clone(),
        ];

        if with_enrichment {
            let info = record.info.as_ref();
            row.push(field(info.and_then(|i| i.title.clone())));
            row.push(field(info.and_then(|i| i.category.clone())));
            row.push(field(info.and_then(|i| i.brand.clone())));
            row.push(field(
                info.and_then(|i| i.rating.map(|r| r.to_string())),
            ));
        }
        row.push(record.enriched().to_string());

        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Missing values render as empty strings
fn field(value: Option<String>) -> String {
    value.unwrap_or_default()
}
