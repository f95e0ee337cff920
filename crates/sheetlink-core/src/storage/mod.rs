//! Sheet storage.
//!
//! The workbook only needs keyed get/save/delete over sheets. Each stored
//! sheet sits behind its own lock, so writers to different sheets never
//! contend and a write to one sheet is atomic for its readers.

mod memory;

pub use memory::MemoryStore;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

use crate::workbook::{Sheet, SheetId};

/// A sheet shared between the store and its callers.
///
/// The id is fixed at creation, so it is kept outside the lock.
#[derive(Clone, Debug)]
pub struct SharedSheet {
    id: SheetId,
    inner: Arc<RwLock<Sheet>>,
}

impl SharedSheet {
    pub fn new(sheet: Sheet) -> SharedSheet {
        SharedSheet {
            id: sheet.id().clone(),
            inner: Arc::new(RwLock::new(sheet)),
        }
    }

    pub fn id(&self) -> &SheetId {
        &self.id
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Sheet> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Sheet> {
        self.inner.write()
    }
}

/// Keyed storage for sheets.
pub trait SheetStore: Send + Sync {
    /// Store (or re-store) a sheet and return its id.
    fn save(&self, sheet: SharedSheet) -> SheetId;

    /// Re-store a sheet only if its id is still present. Returns whether it
    /// was written; a sheet deleted meanwhile stays deleted.
    fn update(&self, sheet: SharedSheet) -> bool;

    fn get(&self, id: &str) -> Option<SharedSheet>;

    fn exists(&self, id: &str) -> bool;

    /// Remove a sheet. Returns whether anything was removed.
    fn delete(&self, id: &str) -> bool;

    fn ids(&self) -> Vec<SheetId>;
}
