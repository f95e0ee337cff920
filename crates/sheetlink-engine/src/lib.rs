//! sheetlink_engine - Typed cells, lookup references and their resolution.

pub mod engine;

#[cfg(test)]
mod tests {
    use crate::engine::*;

    fn string_store() -> (CellStore, PendingEdges) {
        (CellStore::new(), PendingEdges::new())
    }

    /// Write through the same steps a workbook would, without the sheet glue.
    fn write(
        (cells, pending): &mut (CellStore, PendingEdges),
        key: CellKey,
        text: &str,
    ) -> Result<(), usize> {
        let previous = cells.get(&key).map(|c| c.dependents.clone());
        let cell = match parse_lookup(text).and_then(|target| target.cell_key()) {
            Some(target) => {
                if let Some(len) = would_cycle(cells, &key, &target) {
                    return Err(len);
                }
                Cell::new_lookup(text, target)
            }
            None => Cell::new_literal(Scalar::from(text)),
        };
        let target = cell.lookup_target().cloned();
        let is_new = previous.is_none();
        cells.insert(key.clone(), cell.with_dependents(previous.unwrap_or_default()));
        if let Some(target) = target {
            add_edge(cells, pending, &target, &key);
        }
        if is_new {
            adopt_pending(cells, pending, &key);
        }
        Ok(())
    }

    #[test]
    fn test_pull_resolution_sees_upstream_changes() {
        let mut sheet = string_store();
        write(&mut sheet, CellKey::new("A", 1), "X").unwrap();
        write(&mut sheet, CellKey::new("B", 1), "lookup(A,1)").unwrap();
        assert_eq!(resolve(&sheet.0, &CellKey::new("B", 1)), Some(&Scalar::from("X")));

        write(&mut sheet, CellKey::new("A", 1), "Y").unwrap();
        assert_eq!(resolve(&sheet.0, &CellKey::new("B", 1)), Some(&Scalar::from("Y")));
        assert_eq!(sheet.0[&CellKey::new("A", 1)].dependents, vec![CellKey::new("B", 1)]);
    }

    #[test]
    fn test_cycle_lengths() {
        let mut sheet = string_store();
        assert_eq!(write(&mut sheet, CellKey::new("A", 1), "lookup(A,1)"), Err(1));

        write(&mut sheet, CellKey::new("A", 1), "lookup(B,1)").unwrap();
        assert_eq!(write(&mut sheet, CellKey::new("B", 1), "lookup(A,1)"), Err(2));

        write(&mut sheet, CellKey::new("B", 1), "lookup(C,1)").unwrap();
        assert_eq!(write(&mut sheet, CellKey::new("C", 1), "lookup(A,1)"), Err(3));
        assert!(!sheet.0.contains_key(&CellKey::new("C", 1)));
    }

    #[test]
    fn test_pending_edge_adopted_when_target_written() {
        let mut sheet = string_store();
        write(&mut sheet, CellKey::new("B", 1), "lookup(A,1)").unwrap();
        write(&mut sheet, CellKey::new("A", 1), "X").unwrap();
        assert_eq!(sheet.0[&CellKey::new("A", 1)].dependents, vec![CellKey::new("B", 1)]);
    }
}
