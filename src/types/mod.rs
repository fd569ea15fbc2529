//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: the central sales transaction record
//! - `error`: fatal error type for the outer pipeline layers

pub mod error;
pub mod transaction;

pub use error::AnalyticsError;
pub use transaction::Transaction;
