//! Reverse-edge bookkeeping for lookup cells.
//!
//! Every lookup cell `B` pointing at `A` is recorded once in `A.dependents`.
//! Resolution never reads these lists; they exist so later consumers can
//! answer "which cells read this one?" without scanning the store.
//!
//! A lookup may point at a cell that has not been written yet. Such edges
//! wait in [`PendingEdges`] and are moved onto the target by
//! [`adopt_pending`] when it is first created.

use std::collections::HashMap;

use super::{CellKey, CellStore};

/// Edges whose target cell does not exist yet, keyed by target.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PendingEdges {
    waiting: HashMap<CellKey, Vec<CellKey>>,
}

impl PendingEdges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dependents waiting for `target` to be written, in the order recorded.
    pub fn waiting_on(&self, target: &CellKey) -> &[CellKey] {
        self.waiting.get(target).map(Vec::as_slice).unwrap_or_default()
    }

    fn park(&mut self, target: &CellKey, dependent: &CellKey) -> bool {
        let waiting = self.waiting.entry(target.clone()).or_default();
        if waiting.contains(dependent) {
            return false;
        }
        waiting.push(dependent.clone());
        true
    }

    fn unpark(&mut self, target: &CellKey, dependent: &CellKey) -> bool {
        let Some(waiting) = self.waiting.get_mut(target) else {
            return false;
        };
        let before = waiting.len();
        waiting.retain(|d| d != dependent);
        let removed = waiting.len() != before;
        if waiting.is_empty() {
            self.waiting.remove(target);
        }
        removed
    }
}

/// Record `dependent` on the cell at `target`.
///
/// If the target cell does not exist yet the edge is parked in `pending`.
/// A dependent is never listed twice. Returns whether the edge was recorded
/// on an existing cell.
pub fn add_edge(
    cells: &mut CellStore,
    pending: &mut PendingEdges,
    target: &CellKey,
    dependent: &CellKey,
) -> bool {
    let Some(cell) = cells.get_mut(target) else {
        pending.park(target, dependent);
        return false;
    };
    if cell.dependents.contains(dependent) {
        return false;
    }
    cell.dependents.push(dependent.clone());
    true
}

/// Drop `dependent` from the cell at `target`, or from the parked edges.
pub fn remove_edge(
    cells: &mut CellStore,
    pending: &mut PendingEdges,
    target: &CellKey,
    dependent: &CellKey,
) -> bool {
    let Some(cell) = cells.get_mut(target) else {
        return pending.unpark(target, dependent);
    };
    let before = cell.dependents.len();
    cell.dependents.retain(|d| d != dependent);
    cell.dependents.len() != before
}

/// Move the edges parked on `target` onto its cell.
///
/// Call after `target` is created for the first time. Adopted dependents are
/// appended in the order they were parked. Returns the number of edges added.
pub fn adopt_pending(cells: &mut CellStore, pending: &mut PendingEdges, target: &CellKey) -> usize {
    let Some(waiting) = pending.waiting.remove(target) else {
        return 0;
    };
    waiting
        .iter()
        .filter(|dependent| add_edge(cells, pending, target, dependent))
        .count()
}
