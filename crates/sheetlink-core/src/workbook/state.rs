use super::{Sheet, SheetId, SheetSnapshot, SnapshotMode};
use crate::error::{Result, SheetError};
use crate::storage::{MemoryStore, SharedSheet, SheetStore};
use sheetlink_engine::engine::{Column, Scalar, Schema};

/// Entry point for sheet operations over a [`SheetStore`].
///
/// A write holds its sheet's write lock from validation through commit, so
/// readers of that sheet see either the state before or after the write.
pub struct Workbook<S: SheetStore = MemoryStore> {
    store: S,
}

impl Workbook<MemoryStore> {
    /// Create a workbook backed by a fresh in-memory store.
    pub fn new() -> Self {
        Workbook::with_store(MemoryStore::new())
    }
}

impl Default for Workbook<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SheetStore> Workbook<S> {
    pub fn with_store(store: S) -> Self {
        Workbook { store }
    }

    /// Create a sheet with the given columns and return its id.
    pub fn create_sheet(&self, columns: Vec<Column>) -> Result<SheetId> {
        let schema = Schema::new(columns)?;
        let sheet = SharedSheet::new(Sheet::new(schema));
        let id = self.store.save(sheet);
        log::info!("created sheet {}", id);
        Ok(id)
    }

    pub fn get_sheet(&self, sheet_id: &str) -> Result<SharedSheet> {
        self.store
            .get(sheet_id)
            .ok_or_else(|| SheetError::SheetNotFound(sheet_id.to_string()))
    }

    pub fn delete_sheet(&self, sheet_id: &str) -> Result<()> {
        if !self.store.delete(sheet_id) {
            return Err(SheetError::SheetNotFound(sheet_id.to_string()));
        }
        log::info!("deleted sheet {}", sheet_id);
        Ok(())
    }

    pub fn sheet_ids(&self) -> Vec<SheetId> {
        self.store.ids()
    }

    /// Set one cell to a literal or a `lookup(COL,ROW)` expression.
    ///
    /// If the sheet is deleted while the write is in flight the write is
    /// dropped with it and the call reports the sheet as not found.
    pub fn set_cell(&self, sheet_id: &str, column: &str, row: u32, value: Scalar) -> Result<()> {
        let sheet = self.get_sheet(sheet_id)?;
        {
            let mut guard = sheet.write();
            if let Err(err) = guard.set_cell(column, row, value) {
                log::debug!("sheet {}: rejected write to {}{}: {}", sheet_id, column, row, err);
                return Err(err);
            }
        }
        if !self.store.update(sheet) {
            log::debug!("sheet {}: deleted during write to {}{}", sheet_id, column, row);
            return Err(SheetError::SheetNotFound(sheet_id.to_string()));
        }
        Ok(())
    }

    /// Resolved value of a single cell.
    pub fn get_cell_value(&self, sheet_id: &str, column: &str, row: u32) -> Result<Option<Scalar>> {
        let sheet = self.get_sheet(sheet_id)?;
        let guard = sheet.read();
        if guard.schema().column(column).is_none() {
            return Err(SheetError::ColumnNotFound(column.to_string()));
        }
        Ok(guard.resolve(column, row).cloned())
    }

    /// Snapshot with lookup cells reported as their resolved values.
    pub fn get_sheet_snapshot(&self, sheet_id: &str) -> Result<SheetSnapshot> {
        self.get_sheet_snapshot_with(sheet_id, SnapshotMode::Resolved)
    }

    pub fn get_sheet_snapshot_with(&self, sheet_id: &str, mode: SnapshotMode) -> Result<SheetSnapshot> {
        let sheet = self.get_sheet(sheet_id)?;
        let snapshot = sheet.read().snapshot(mode);
        Ok(snapshot)
    }
}
