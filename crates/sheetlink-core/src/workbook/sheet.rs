use serde::{Deserialize, Serialize};
use sheetlink_engine::engine::{CellKey, CellStore, PendingEdges, Schema, Scalar, resolve};
use std::borrow::Borrow;
use std::fmt;
use uuid::Uuid;

/// Opaque sheet identifier (a UUID v4 string for generated ids).
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SheetId(String);

impl SheetId {
    /// Generate a fresh random id.
    pub fn generate() -> SheetId {
        SheetId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SheetId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SheetId {
    fn from(value: &str) -> Self {
        SheetId(value.to_string())
    }
}

/// A sheet: fixed schema plus the cells written so far.
///
/// Cells are only changed through [`Sheet::set_cell`], which keeps the
/// reference graph acyclic and type-correct.
#[derive(Clone, Debug)]
pub struct Sheet {
    id: SheetId,
    schema: Schema,
    pub(crate) cells: CellStore,
    /// Lookups whose target cell has not been written yet.
    pub(crate) pending: PendingEdges,
}

impl Sheet {
    /// Create an empty sheet with a freshly generated id.
    pub fn new(schema: Schema) -> Sheet {
        Sheet::with_id(SheetId::generate(), schema)
    }

    pub fn with_id(id: SheetId, schema: Schema) -> Sheet {
        Sheet {
            id,
            schema,
            cells: CellStore::new(),
            pending: PendingEdges::new(),
        }
    }

    pub fn id(&self) -> &SheetId {
        &self.id
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn cells(&self) -> &CellStore {
        &self.cells
    }

    /// Effective value of a cell, following lookups.
    pub fn resolve(&self, column: &str, row: u32) -> Option<&Scalar> {
        resolve(&self.cells, &CellKey::new(column, row))
    }
}
