//! Type compatibility between values, columns and references.
//!
//! Literal rules are exact and asymmetric: a double column accepts ints, but
//! nothing else widens, and booleans are never numbers. A reference is only
//! legal between columns of the same declared type.

use super::scalar::{ColumnType, Scalar};

/// Whether `value` may be stored in a column of type `column_type`.
pub fn validate_literal(value: &Scalar, column_type: ColumnType) -> bool {
    matches!(
        (column_type, value),
        (ColumnType::Boolean, Scalar::Bool(_))
            | (ColumnType::Int, Scalar::Int(_))
            | (ColumnType::Double, Scalar::Int(_) | Scalar::Double(_))
            | (ColumnType::String, Scalar::Str(_))
    )
}

/// Whether a cell in a `source` column may look up a cell in a `target` column.
pub fn validate_reference(source: ColumnType, target: ColumnType) -> bool {
    source == target
}

/// Integers up to this magnitude convert to `f64` exactly.
const MAX_EXACT_DOUBLE_INT: u64 = 1 << 53;

/// Validate `value` and convert it to the column's storage form.
///
/// Ints written to a double column are stored as doubles. Returns `None`
/// for an illegal value, and for an int whose magnitude exceeds 2^53 since
/// widening it would round.
pub fn coerce_literal(value: Scalar, column_type: ColumnType) -> Option<Scalar> {
    if !validate_literal(&value, column_type) {
        return None;
    }
    match (column_type, value) {
        (ColumnType::Double, Scalar::Int(n)) if n.unsigned_abs() > MAX_EXACT_DOUBLE_INT => None,
        (ColumnType::Double, Scalar::Int(n)) => Some(Scalar::Double(n as f64)),
        (_, value) => Some(value),
    }
}
