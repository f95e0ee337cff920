//! Workbook state and logic: sheets, cell writes and snapshots.

mod ops;
mod sheet;
mod snapshot;
mod state;

pub use sheet::{Sheet, SheetId};
pub use snapshot::{CellSnapshot, SheetSnapshot, SnapshotMode};
pub use state::Workbook;
