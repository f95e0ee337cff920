//! Lookup expression parsing.
//!
//! A cell value of the form `lookup(COL,ROW)` is a reference to another cell
//! rather than a literal string. The keyword is case-sensitive, the column
//! letters are normalized to uppercase and the row is an unsigned base-10
//! integer. Surrounding whitespace is allowed, internal whitespace is not.
//!
//! # Examples
//!
//! ```
//! use sheetlink_engine::engine::{parse_lookup, CellKey};
//!
//! let target = parse_lookup("lookup(abc,1)").unwrap();
//! assert_eq!(target.cell_key(), Some(CellKey::new("ABC", 1)));
//! assert_eq!(parse_lookup("LOOKUP(A,1)"), None);
//! ```

use regex::Regex;
use std::sync::OnceLock;

use super::cell::CellKey;

fn lookup_re() -> &'static Regex {
    static LOOKUP_RE: OnceLock<Regex> = OnceLock::new();
    LOOKUP_RE.get_or_init(|| {
        Regex::new(r"^\s*lookup\((?<column>[A-Za-z]+),(?<row>[0-9]+)\)\s*$")
            .expect("lookup expression regex must compile")
    })
}

/// Target of a lookup expression, as written.
///
/// The row is whatever digits the expression held, so it may be 0 or too
/// large for a cell row; [`LookupTarget::cell_key`] tells the two apart.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LookupTarget {
    pub column: String,
    /// Saturates at `u64::MAX` for longer digit strings.
    pub row: u64,
}

impl LookupTarget {
    /// The referenced cell, or `None` if the row is 0 or out of range.
    pub fn cell_key(&self) -> Option<CellKey> {
        let row = u32::try_from(self.row).ok().filter(|row| *row > 0)?;
        Some(CellKey::new(self.column.clone(), row))
    }
}

/// Classify `text` as a lookup, returning its target.
///
/// Anything that is not exactly a lookup expression (wrong keyword casing,
/// missing arguments, non-numeric row) is a literal and yields `None`.
pub fn parse_lookup(text: &str) -> Option<LookupTarget> {
    let caps = lookup_re().captures(text)?;
    let column = caps["column"].to_ascii_uppercase();
    // The pattern only admits digits, so parsing can only fail on overflow.
    let row = caps["row"].parse::<u64>().unwrap_or(u64::MAX);
    Some(LookupTarget { column, row })
}
