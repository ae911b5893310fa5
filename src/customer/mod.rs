use std::sync::atomic::{AtomicI64, Ordering};

use parking_lot::RwLock;
use serde::Serialize;
use tracing::trace;

/// A customer record created from a successful form submission.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Customer {
    /// Auto-generated identifier, assigned on save
    pub id: i64,

    /// The validated contact info value
    pub contact_info: String,
}

/// In-memory customer storage with auto-incrementing identifiers.
///
/// Only records that passed validation are ever saved here.
#[derive(Debug, Default)]
pub struct CustomerStore {
    next_id: AtomicI64,
    records: RwLock<Vec<Customer>>,
}

impl CustomerStore {
    /// Creates an empty store; the first saved record gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new customer record and assigns it the next id.
    pub fn save(&self, contact_info: &str) -> Customer {
        let customer = Customer {
            id: self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
            contact_info: contact_info.to_string(),
        };
        trace!("Saving customer record with id: {}", customer.id);
        self.records.write().push(customer.clone());
        customer
    }

    /// All stored customer records, in insertion order.
    pub fn list(&self) -> Vec<Customer> {
        self.records.read().clone()
    }

    /// Number of stored customer records.
    pub fn count(&self) -> usize {
        self.records.read().len()
    }
}
