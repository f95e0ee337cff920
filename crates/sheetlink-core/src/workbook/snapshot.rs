//! Read-side view of a sheet.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::{Sheet, SheetId};
use crate::error::Result;
use sheetlink_engine::engine::{Column, Scalar, resolve};

/// How cell values are reported in a snapshot.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotMode {
    /// Lookup cells report the value at the end of their chain.
    #[default]
    Resolved,
    /// Lookup cells report their expression text.
    Raw,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CellSnapshot {
    pub column: String,
    pub row: u32,
    /// `None` when a lookup chain ends at an unwritten cell.
    pub value: Option<Scalar>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SheetSnapshot {
    pub sheet_id: SheetId,
    pub columns: Vec<Column>,
    pub cells: Vec<CellSnapshot>,
}

impl SheetSnapshot {
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Write the snapshot as JSON.
    pub fn write_json(&self, path: &Path, pretty: bool) -> Result<()> {
        let mut content = self.to_json(pretty)?;
        content.push('\n');
        fs::write(path, content)?;
        Ok(())
    }

    /// Value reported for a cell, if the cell exists.
    pub fn value(&self, column: &str, row: u32) -> Option<&Scalar> {
        self.cells
            .iter()
            .find(|c| c.column == column && c.row == row)
            .and_then(|c| c.value.as_ref())
    }
}

impl Sheet {
    /// Capture columns and cells, ordered by column declaration then row.
    pub fn snapshot(&self, mode: SnapshotMode) -> SheetSnapshot {
        let schema = self.schema();
        let mut keys: Vec<_> = self.cells.keys().collect();
        keys.sort_by_key(|key| (schema.position(&key.column), key.row));

        let cells = keys
            .into_iter()
            .map(|key| {
                let value = match mode {
                    SnapshotMode::Resolved => resolve(&self.cells, key).cloned(),
                    SnapshotMode::Raw => self.cells.get(key).map(|cell| cell.raw_value()),
                };
                CellSnapshot {
                    column: key.column.clone(),
                    row: key.row,
                    value,
                }
            })
            .collect();

        SheetSnapshot {
            sheet_id: self.id().clone(),
            columns: schema.columns().to_vec(),
            cells,
        }
    }
}
