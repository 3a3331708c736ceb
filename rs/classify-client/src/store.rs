use parking_lot::RwLock;
use std::sync::Arc;

use crate::types::resultset::ResultSet;

/// Holds the single current ResultSet for a session, or none before the
/// first successful classification. Replacement is atomic; a reader that
/// already cloned out an `Arc` keeps a consistent snapshot.
#[derive(Default)]
pub struct RecordStore {
    slot: RwLock<Option<Arc<ResultSet>>>,
}

impl RecordStore {
    pub fn new() -> Self {
        RecordStore::default()
    }

    pub fn replace(&self, set: ResultSet) {
        *self.slot.write() = Some(Arc::new(set));
    }

    pub fn current(&self) -> Option<Arc<ResultSet>> {
        self.slot.read().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.read().is_none()
    }
}
