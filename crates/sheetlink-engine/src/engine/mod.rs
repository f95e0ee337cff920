//! Sheet reference engine API.
//!
//! This module provides everything needed to store typed cells and follow
//! references between them:
//!
//! - [`Scalar`], [`ColumnType`] - Literal values and declared column types
//! - [`Column`], [`Schema`] - Immutable, ordered column definitions
//! - [`Cell`], [`CellKey`], [`CellStore`] - Sparse cell storage keyed by (column, row)
//! - [`parse_lookup`] - Recognize `lookup(COL,ROW)` reference expressions
//! - [`validate_literal`], [`validate_reference`] - Type compatibility rules
//! - [`would_cycle`] - Reject reference edges that would close a cycle
//! - [`add_edge`], [`remove_edge`] - Reverse-edge (dependents) bookkeeping
//! - [`resolve`] - Follow a reference chain to its literal value

mod cell;
mod cycle;
mod deps;
mod lookup;
mod resolve;
mod scalar;
mod schema;
mod validate;

pub use cell::{Cell, CellContents, CellKey, CellStore};
pub use cycle::would_cycle;
pub use deps::{PendingEdges, add_edge, adopt_pending, remove_edge};
pub use lookup::{LookupTarget, parse_lookup};
pub use resolve::resolve;
pub use scalar::{ColumnType, ParseColumnTypeError, Scalar};
pub use schema::{Column, Schema, SchemaError};
pub use validate::{coerce_literal, validate_literal, validate_reference};
