//! Product-catalog enrichment
//!
//! Attaches externally supplied product metadata (title, category, brand,
//! rating) to validated transactions by product-id lookup. The catalog is
//! consumed as a pre-built mapping loaded from a JSON document; how that
//! document was produced is not this crate's concern, and a collaborator
//! failure may only ever surface here as an EMPTY catalog.
//!
//! # Lookup strategy
//!
//! For a transaction's product id (`P101`): strip a single leading `P`,
//! attempt an integer conversion and look up by integer key; on
//! conversion failure, fall back to looking up the original id string.

use crate::types::{AnalyticsError, Transaction};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Catalog metadata for one product
///
/// Every field is optional: upstream documents routinely omit brand or
/// rating, and a missing value renders as an empty string in the dump.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductInfo {
    /// Product title
    #[serde(default)]
    pub title: Option<String>,
    /// Product category
    #[serde(default)]
    pub category: Option<String>,
    /// Product brand
    #[serde(default)]
    pub brand: Option<String>,
    /// Product rating
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Catalog entry id: integer or string, as the upstream document has it
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum EntryId {
    Number(u64),
    Code(String),
}

/// One catalog document entry
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: Option<EntryId>,
    #[serde(flatten)]
    info: ProductInfo,
}

/// Catalog document: either `{"products": [...]}` or a bare array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Wrapped {
        #[serde(default)]
        products: Vec<CatalogEntry>,
    },
    Bare(Vec<CatalogEntry>),
}

/// Pre-built product-id to metadata mapping
///
/// Holds integer-keyed and string-keyed entries separately so lookups can
/// try the integer form first and fall back to the raw id string.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    by_number: HashMap<u64, ProductInfo>,
    by_code: HashMap<String, ProductInfo>,
}

impl ProductCatalog {
    /// Create an empty catalog
    ///
    /// Every lookup against an empty catalog misses; enrichment over it
    /// flags all records `enriched = false` without failing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON document
    ///
    /// Accepts the wrapped form `{"products": [...]}` and a bare entry
    /// array. Entries without an id are skipped.
    ///
    /// # Errors
    ///
    /// * [`AnalyticsError::Io`] if the file cannot be read
    /// * [`AnalyticsError::Catalog`] if the document is not valid JSON of
    ///   either accepted shape
    pub fn load(path: &Path) -> Result<Self, AnalyticsError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse a catalog from JSON text
    pub fn from_json(text: &str) -> Result<Self, AnalyticsError> {
        let document: CatalogDocument = serde_json::from_str(text)?;
        let entries = match document {
            CatalogDocument::Wrapped { products } => products,
            CatalogDocument::Bare(entries) => entries,
        };

        let mut catalog = Self::empty();
        for entry in entries {
            match entry.id {
                Some(EntryId::Number(n)) => {
                    catalog.by_number.insert(n, entry.info);
                }
                Some(EntryId::Code(code)) => {
                    catalog.by_code.insert(code, entry.info);
                }
                None => {}
            }
        }
        Ok(catalog)
    }

    /// Number of entries in the catalog
    pub fn len(&self) -> usize {
        self.by_number.len() + self.by_code.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.by_number.is_empty() && self.by_code.is_empty()
    }

    /// Look up metadata for a transaction product id
    ///
    /// Strips one leading `P`, tries the integer-keyed entries, then
    /// falls back to the string-keyed entries under the ORIGINAL id.
    pub fn lookup(&self, product_id: &str) -> Option<&ProductInfo> {
        let stripped = product_id.strip_prefix('P').unwrap_or(product_id);
        match stripped.parse::<u64>() {
            Ok(number) => self.by_number.get(&number),
            Err(_) => self.by_code.get(product_id),
        }
    }
}

/// A validated transaction plus its catalog metadata, if any
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedTransaction {
    /// The underlying transaction, unchanged
    pub transaction: Transaction,
    /// Catalog metadata; `None` when the lookup missed
    pub info: Option<ProductInfo>,
}

impl EnrichedTransaction {
    /// Whether the catalog lookup matched
    pub fn enriched(&self) -> bool {
        self.info.is_some()
    }
}

/// Enrich every transaction against the catalog
///
/// Unmatched transactions carry `info = None`; an empty catalog yields a
/// fully unenriched result and never fails.
pub fn enrich_transactions(
    transactions: &[Transaction],
    catalog: &ProductCatalog,
) -> Vec<EnrichedTransaction> {
    transactions
        .iter()
        .map(|t| EnrichedTransaction {
            transaction: t.clone(),
            info: catalog.lookup(&t.product_id).cloned(),
        })
        .collect()
}
