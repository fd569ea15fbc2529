//! Transaction-related types for the Sales Analytics Engine
//!
//! This module defines the central transaction record produced by the
//! parser and consumed read-only by every later pipeline stage.

/// One sales transaction as parsed from a feed line
///
/// Created once by the parser and never mutated afterwards. Records that
/// fail a business rule are excluded by the validator, never repaired.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Transaction identifier, expected to start with `T`
    pub transaction_id: String,

    /// Transaction date in `YYYY-MM-DD` form
    ///
    /// Treated as an opaque sortable string throughout the pipeline.
    /// No calendar validation is performed; lexicographic order is the
    /// date order.
    pub date: String,

    /// Product identifier, expected to start with `P`
    pub product_id: String,

    /// Product name with any commas already replaced by spaces
    pub product_name: String,

    /// Units sold; must be positive to pass validation
    pub quantity: i64,

    /// Price per unit; must be positive to pass validation
    pub unit_price: f64,

    /// Customer identifier, expected to start with `C`
    pub customer_id: String,

    /// Free-form region label
    pub region: String,
}

impl Transaction {
    /// Transaction amount: quantity x unit price
    ///
    /// Always recomputed on demand, never cached on the record.
    pub fn amount(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction {
            transaction_id: "T001".to_string(),
            date: "2024-12-01".to_string(),
            product_id: "P101".to_string(),
            product_name: "Mouse Wireless".to_string(),
            quantity: 10,
            unit_price: 25.0,
            customer_id: "C001".to_string(),
            region: "North".to_string(),
        }
    }

    #[test]
    fn test_amount_is_quantity_times_unit_price() {
        assert_eq!(sample().amount(), 250.0);
    }

    #[test]
    fn test_amount_recomputes_from_current_fields() {
        let mut t = sample();
        t.quantity = 3;
        t.unit_price = 1.5;
        assert_eq!(t.amount(), 4.5);
    }
}
