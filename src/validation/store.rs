use std::collections::HashMap;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A named regular expression used to validate the contact info field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatternRecord {
    /// Key selecting the expression (e.g. "email", "phone", "website")
    pub expression_type: String,

    /// Regular expression source text
    pub pattern: String,
}

/// In-memory store of validation patterns, keyed by expression type.
///
/// Populated once at startup and read for the lifetime of the process;
/// concurrent reads never block each other.
#[derive(Debug, Default)]
pub struct PatternStore {
    records: RwLock<HashMap<String, String>>,
}

impl PatternStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-key lookup. `None` is a normal outcome, not an error.
    pub fn get(&self, expression_type: &str) -> Option<PatternRecord> {
        self.records
            .read()
            .get(expression_type)
            .map(|pattern| PatternRecord {
                expression_type: expression_type.to_string(),
                pattern: pattern.clone(),
            })
    }

    /// All stored records, in no particular order.
    pub fn list(&self) -> Vec<PatternRecord> {
        self.records
            .read()
            .iter()
            .map(|(expression_type, pattern)| PatternRecord {
                expression_type: expression_type.clone(),
                pattern: pattern.clone(),
            })
            .collect()
    }

    /// Inserts or overwrites the pattern stored under `expression_type`.
    pub fn put(&self, expression_type: &str, pattern: &str) {
        trace!("Storing pattern for type: {}", expression_type);
        self.records
            .write()
            .insert(expression_type.to_string(), pattern.to_string());
    }

    /// Number of stored patterns.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}
