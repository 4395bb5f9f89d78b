//! The modification store: leader identity to ordered modification records.

use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{LeaderIdentity, LeaderModification};

use super::source::ModificationSource;

/// Registry of modification records grouped by the leader they target.
///
/// Each identity's list keeps discovery order, which is also resolution
/// order: later records override earlier ones field by field. The store is
/// shared by every leader; pass it by reference wherever traits or
/// portraits are resolved.
#[derive(Debug, Clone, Default)]
pub struct ModificationStore {
    modifications: HashMap<LeaderIdentity, Vec<Arc<LeaderModification>>>,
}

impl ModificationStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self { modifications: HashMap::new() }
    }

    /// Build a store directly from records, in the given order.
    pub fn from_records(records: impl IntoIterator<Item = LeaderModification>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.register(record);
        }
        store
    }

    /// Replace the store's contents with everything `source` discovers.
    ///
    /// Prior state is always cleared. When discovery finds nothing the store
    /// stays empty and nothing is logged.
    pub fn reload(&mut self, source: &dyn ModificationSource) {
        self.modifications.clear();

        let records = source.discover();
        if records.is_empty() {
            return;
        }

        log::info!("Applying leader modifications");

        for record in records {
            self.register(record);
        }

        log::info!("Finished applying leader modifications");
    }

    /// Append a record after any already registered for its leader.
    pub fn register(&mut self, record: LeaderModification) {
        self.modifications.entry(record.leader).or_default().push(Arc::new(record));
    }

    /// Snapshot of the records targeting `identity`, in resolution order.
    ///
    /// Empty when nothing targets this leader.
    pub fn modifications_for(&self, identity: LeaderIdentity) -> Vec<Arc<LeaderModification>> {
        self.modifications.get(&identity).cloned().unwrap_or_default()
    }

    /// Number of leaders with at least one record.
    pub fn len(&self) -> usize {
        self.modifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifications.is_empty()
    }

    /// Total number of records across all leaders.
    pub fn record_count(&self) -> usize {
        self.modifications.values().map(Vec::len).sum()
    }

    /// Leaders with at least one record, in identity order.
    pub fn identities(&self) -> Vec<LeaderIdentity> {
        let mut identities: Vec<_> = self.modifications.keys().copied().collect();
        identities.sort();
        identities
    }

    /// Clear all records.
    pub fn clear(&mut self) {
        self.modifications.clear();
    }
}
