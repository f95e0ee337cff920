use super::Sheet;
use crate::error::{Result, SheetError};
use sheetlink_engine::engine::{
    Cell, CellKey, ColumnType, LookupTarget, Scalar, add_edge, adopt_pending, coerce_literal,
    parse_lookup, remove_edge, validate_literal, validate_reference, would_cycle,
};

impl Sheet {
    /// Set a cell from a literal value or a `lookup(COL,ROW)` expression.
    ///
    /// Every check runs before the store is touched, so a failed write leaves
    /// the sheet exactly as it was.
    pub fn set_cell(&mut self, column: &str, row: u32, value: Scalar) -> Result<()> {
        let column_type = self
            .schema()
            .column(column)
            .map(|c| c.column_type)
            .ok_or_else(|| SheetError::ColumnNotFound(column.to_string()))?;
        if row == 0 {
            return Err(SheetError::InvalidRow(u64::from(row)));
        }
        let key = CellKey::new(column, row);

        let lookup = match &value {
            Scalar::Str(text) => parse_lookup(text).map(|target| (text.clone(), target)),
            _ => None,
        };

        let cell = match lookup {
            Some((text, target)) => {
                let target = self.check_lookup(&key, column_type, &target)?;
                Cell::new_lookup(&text, target)
            }
            None => literal_cell(value, column_type)?,
        };

        self.commit(key, cell);
        Ok(())
    }

    /// Validate a parsed lookup against the schema and the current graph,
    /// returning the cell it points at.
    fn check_lookup(
        &self,
        key: &CellKey,
        column_type: ColumnType,
        target: &LookupTarget,
    ) -> Result<CellKey> {
        let target_type = self
            .schema()
            .column(&target.column)
            .map(|c| c.column_type)
            .ok_or_else(|| SheetError::ColumnNotFound(target.column.clone()))?;
        let target_key = target
            .cell_key()
            .ok_or(SheetError::InvalidRow(target.row))?;
        if !validate_reference(column_type, target_type) {
            return Err(SheetError::LookupTypeMismatch {
                column: key.column.clone(),
                source_type: column_type,
                target: target.column.clone(),
                target_type,
            });
        }
        if let Some(length) = would_cycle(&self.cells, key, &target_key) {
            return Err(SheetError::Cycle(length));
        }
        Ok(target_key)
    }

    /// Replace the cell at `key`, carrying over its dependents and keeping
    /// the reverse edges in step with the new contents.
    fn commit(&mut self, key: CellKey, cell: Cell) {
        let new_target = cell.lookup_target().cloned();
        let (dependents, old_target) = match self.cells.remove(&key) {
            Some(old) => {
                let old_target = old.lookup_target().cloned();
                (Some(old.dependents), old_target)
            }
            None => (None, None),
        };
        let is_new = dependents.is_none();

        if let Some(old_target) = old_target
            && new_target.as_ref() != Some(&old_target)
        {
            remove_edge(&mut self.cells, &mut self.pending, &old_target, &key);
        }

        log::debug!("sheet {}: set {} to {:?}", self.id(), key, cell.contents);
        self.cells
            .insert(key.clone(), cell.with_dependents(dependents.unwrap_or_default()));

        if let Some(target) = new_target {
            add_edge(&mut self.cells, &mut self.pending, &target, &key);
        }
        if is_new {
            let adopted = adopt_pending(&mut self.cells, &mut self.pending, &key);
            if adopted > 0 {
                log::debug!("sheet {}: {} adopted {} pending dependents", self.id(), key, adopted);
            }
        }
    }
}

/// Build a literal cell, widening ints for double columns.
fn literal_cell(value: Scalar, column_type: ColumnType) -> Result<Cell> {
    let actual = value.type_name();
    if !validate_literal(&value, column_type) {
        return Err(SheetError::TypeMismatch {
            expected: column_type,
            actual,
        });
    }
    let int = match value {
        Scalar::Int(n) => Some(n),
        _ => None,
    };
    coerce_literal(value, column_type)
        .map(Cell::new_literal)
        .ok_or_else(|| match int {
            Some(n) => SheetError::InexactDouble(n),
            None => SheetError::TypeMismatch {
                expected: column_type,
                actual,
            },
        })
}
