//! In-memory sheet store backed by `DashMap`.

use dashmap::DashMap;

use super::{SharedSheet, SheetStore};
use crate::workbook::SheetId;

/// Thread-safe in-memory store. Instances do not share state.
#[derive(Default)]
pub struct MemoryStore {
    sheets: DashMap<SheetId, SharedSheet>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SheetStore for MemoryStore {
    fn save(&self, sheet: SharedSheet) -> SheetId {
        let id = sheet.id().clone();
        self.sheets.insert(id.clone(), sheet);
        id
    }

    fn update(&self, sheet: SharedSheet) -> bool {
        match self.sheets.get_mut(sheet.id().as_str()) {
            Some(mut entry) => {
                *entry = sheet;
                true
            }
            None => false,
        }
    }

    fn get(&self, id: &str) -> Option<SharedSheet> {
        self.sheets.get(id).map(|entry| entry.value().clone())
    }

    fn exists(&self, id: &str) -> bool {
        self.sheets.contains_key(id)
    }

    fn delete(&self, id: &str) -> bool {
        self.sheets.remove(id).is_some()
    }

    fn ids(&self) -> Vec<SheetId> {
        let mut ids: Vec<SheetId> = self.sheets.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }
}
