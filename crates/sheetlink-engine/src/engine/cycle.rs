//! Circular reference detection for lookup cells.
//!
//! Before a lookup edge `from -> to` is committed we walk the references
//! already in the store, starting at `to`, and look for `from`. Finding it
//! means the new edge would close a cycle, and the cycle's length is the
//! number of edges walked plus the proposed one.

use std::collections::HashSet;

use super::{CellKey, CellStore};

/// Check whether adding the lookup edge `from -> to` would create a cycle.
/// Returns Some(cycle_length) if it would, None if the edge is safe.
///
/// A direct self-reference (`from == to`) is a cycle of length 1.
pub fn would_cycle(cells: &CellStore, from: &CellKey, to: &CellKey) -> Option<usize> {
    let mut visited = HashSet::new();
    let mut stack = vec![(to, 0usize)];

    while let Some((current, depth)) = stack.pop() {
        if current == from {
            return Some(depth + 1);
        }
        // Guards against walking an already-malformed graph forever.
        if !visited.insert(current) {
            continue;
        }
        if let Some(next) = cells.get(current).and_then(|cell| cell.lookup_target()) {
            stack.push((next, depth + 1));
        }
    }

    None
}
