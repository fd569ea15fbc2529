//! I/O module
//!
//! Handles feed reading, line parsing, and dump output.
//!
//! # Components
//!
//! - `reader` - sales feed reading with encoding fallback and header skip
//! - `line_format` - pipe-delimited line format handling (pure, no I/O)
//! - `dump` - enriched-record dump writing

pub mod dump;
pub mod line_format;
pub mod reader;

pub use dump::write_enriched_dump;
pub use line_format::{parse_line, parse_transactions};
pub use reader::read_sales_lines;
