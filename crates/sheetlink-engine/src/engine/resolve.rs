//! Pull-based value resolution.
//!
//! Nothing is cached: every read follows the lookup chain from scratch, so a
//! change to an upstream literal is visible downstream on the next read.

use super::{CellKey, CellStore, Scalar};

/// Resolve the effective value of the cell at `key`.
///
/// Returns `None` for a missing cell, or for a chain that ends at a missing
/// cell. Writes are cycle-checked, so the walk visits each cell of the chain
/// once; the hop limit only matters if the store was built by hand.
pub fn resolve<'a>(cells: &'a CellStore, key: &CellKey) -> Option<&'a Scalar> {
    let mut cell = cells.get(key)?;
    for _ in 0..=cells.len() {
        match cell.lookup_target() {
            None => return cell.literal(),
            Some(target) => cell = cells.get(target)?,
        }
    }
    log::warn!("lookup chain from {} does not terminate", key);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Cell;

    #[test]
    fn test_resolve_literal() {
        let mut cells = CellStore::new();
        cells.insert(CellKey::new("A", 1), Cell::new_literal(Scalar::from("hello")));
        assert_eq!(
            resolve(&cells, &CellKey::new("A", 1)),
            Some(&Scalar::from("hello"))
        );
    }

    #[test]
    fn test_resolve_lookup_chain() {
        let mut cells = CellStore::new();
        cells.insert(
            CellKey::new("A", 1),
            Cell::new_literal(Scalar::from("final_value")),
        );
        cells.insert(
            CellKey::new("B", 1),
            Cell::new_lookup("lookup(A,1)", CellKey::new("A", 1)),
        );
        cells.insert(
            CellKey::new("C", 1),
            Cell::new_lookup("lookup(B,1)", CellKey::new("B", 1)),
        );
        assert_eq!(
            resolve(&cells, &CellKey::new("C", 1)),
            Some(&Scalar::from("final_value"))
        );
    }

    #[test]
    fn test_resolve_missing_cell() {
        let cells = CellStore::new();
        assert_eq!(resolve(&cells, &CellKey::new("A", 1)), None);
    }

    #[test]
    fn test_resolve_chain_to_unwritten_cell() {
        let mut cells = CellStore::new();
        cells.insert(
            CellKey::new("B", 1),
            Cell::new_lookup("lookup(A,1)", CellKey::new("A", 1)),
        );
        assert_eq!(resolve(&cells, &CellKey::new("B", 1)), None);
    }

    #[test]
    fn test_resolve_hand_built_cycle_terminates() {
        let mut cells = CellStore::new();
        cells.insert(
            CellKey::new("A", 1),
            Cell::new_lookup("lookup(B,1)", CellKey::new("B", 1)),
        );
        cells.insert(
            CellKey::new("B", 1),
            Cell::new_lookup("lookup(A,1)", CellKey::new("A", 1)),
        );
        assert_eq!(resolve(&cells, &CellKey::new("A", 1)), None);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut cells = CellStore::new();
        cells.insert(CellKey::new("A", 1), Cell::new_literal(Scalar::Int(7)));
        cells.insert(
            CellKey::new("B", 1),
            Cell::new_lookup("lookup(A,1)", CellKey::new("A", 1)),
        );
        let first = resolve(&cells, &CellKey::new("B", 1)).cloned();
        let second = resolve(&cells, &CellKey::new("B", 1)).cloned();
        assert_eq!(first, Some(Scalar::Int(7)));
        assert_eq!(first, second);
    }
}
