//! Cell data structures for a sheet.
//!
//! This module provides the core data types for representing cells:
//! - [`CellKey`] - The (column, row) coordinate of a cell
//! - [`CellContents`] - A literal value or a lookup to another cell
//! - [`Cell`] - Contents plus the reverse edges of cells that look it up
//! - [`CellStore`] - Sparse storage for the cells of one sheet
//!
//! Cells never hold pointers to each other. A lookup names its target by key,
//! so the store is a flat arena and the reference graph lives in the keys.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::scalar::Scalar;

/// Coordinate of a cell: column name and 1-based row number.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CellKey {
    pub column: String,
    pub row: u32,
}

impl CellKey {
    pub fn new(column: impl Into<String>, row: u32) -> CellKey {
        CellKey {
            column: column.into(),
            row,
        }
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

/// What a cell holds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellContents {
    Literal(Scalar),
    /// The original expression text and the cell it points at.
    Lookup { text: String, target: CellKey },
}

/// A cell in a sheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub contents: CellContents,
    /// Cells whose lookup target is this cell, in the order they were recorded.
    pub dependents: Vec<CellKey>,
}

impl Cell {
    pub fn new_literal(value: Scalar) -> Cell {
        Cell {
            contents: CellContents::Literal(value),
            dependents: vec![],
        }
    }

    pub fn new_lookup(text: &str, target: CellKey) -> Cell {
        Cell {
            contents: CellContents::Lookup {
                text: text.to_string(),
                target,
            },
            dependents: vec![],
        }
    }

    pub fn with_dependents(mut self, dependents: Vec<CellKey>) -> Cell {
        self.dependents = dependents;
        self
    }

    pub fn is_lookup(&self) -> bool {
        matches!(self.contents, CellContents::Lookup { .. })
    }

    /// The referenced cell, present iff this is a lookup cell.
    pub fn lookup_target(&self) -> Option<&CellKey> {
        match &self.contents {
            CellContents::Lookup { target, .. } => Some(target),
            CellContents::Literal(_) => None,
        }
    }

    /// The literal value, if this is not a lookup.
    pub fn literal(&self) -> Option<&Scalar> {
        match &self.contents {
            CellContents::Literal(value) => Some(value),
            CellContents::Lookup { .. } => None,
        }
    }

    /// The stored value: the literal, or the reference text for lookups.
    pub fn raw_value(&self) -> Scalar {
        match &self.contents {
            CellContents::Literal(value) => value.clone(),
            CellContents::Lookup { text, .. } => Scalar::Str(text.clone()),
        }
    }
}

/// Sparse cell storage for one sheet.
pub type CellStore = HashMap<CellKey, Cell>;
