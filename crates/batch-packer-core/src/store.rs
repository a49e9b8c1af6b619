use std::sync::{Arc, RwLock};

use crate::model::PackResult;

/// Explicit single-slot store for the most recent packing result.
///
/// Holds at most one result; `store` atomically replaces the previous value
/// (last writer wins). Meant to be owned by a presentation layer that wants to
/// export the result of the last run in a separate step. The packer itself is
/// stateless between calls and never touches this.
///
/// Clones share the same slot.
#[derive(Debug, Default, Clone)]
pub struct ResultSlot {
    inner: Arc<RwLock<Option<Arc<PackResult>>>>,
}

impl ResultSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the slot's contents and returns a handle to the stored result.
    pub fn store(&self, result: PackResult) -> Arc<PackResult> {
        let handle = Arc::new(result);
        *self.write_guard() = Some(handle.clone());
        handle
    }

    /// The most recently stored result, if any run has completed.
    pub fn latest(&self) -> Option<Arc<PackResult>> {
        self.read_guard().clone()
    }

    pub fn clear(&self) {
        *self.write_guard() = None;
    }

    pub fn is_empty(&self) -> bool {
        self.read_guard().is_none()
    }

    // A poisoned lock only means another thread panicked mid-replace; the
    // slot's Option is still a coherent value, so recover it.
    fn read_guard(&self) -> std::sync::RwLockReadGuard<'_, Option<Arc<PackResult>>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_guard(&self) -> std::sync::RwLockWriteGuard<'_, Option<Arc<PackResult>>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}
