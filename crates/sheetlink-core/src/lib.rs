//! sheetlink-core - Workbook model: sheet store, cell writes and snapshots.

pub mod error;
pub mod storage;
pub mod workbook;

pub use error::{ErrorKind, Result, SheetError};
pub use storage::{MemoryStore, SharedSheet, SheetStore};
pub use workbook::{CellSnapshot, Sheet, SheetId, SheetSnapshot, SnapshotMode, Workbook};

pub use sheetlink_engine::engine::{CellKey, Column, ColumnType, Scalar};
