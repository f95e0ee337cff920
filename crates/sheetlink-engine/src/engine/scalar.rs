//! Literal values and the column types they are checked against.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared type of a column.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Boolean,
    Int,
    Double,
    String,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Boolean => "boolean",
            ColumnType::Int => "int",
            ColumnType::Double => "double",
            ColumnType::String => "string",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColumnTypeError(pub String);

impl fmt::Display for ParseColumnTypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid column type: {}. Valid types: boolean, int, double, string",
            self.0
        )
    }
}

impl std::error::Error for ParseColumnTypeError {}

impl FromStr for ColumnType {
    type Err = ParseColumnTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boolean" => Ok(ColumnType::Boolean),
            "int" => Ok(ColumnType::Int),
            "double" => Ok(ColumnType::Double),
            "string" => Ok(ColumnType::String),
            other => Err(ParseColumnTypeError(other.to_string())),
        }
    }
}

/// A literal cell value.
///
/// Serialized untagged, so JSON `true`, `42`, `3.5` and `"x"` map onto
/// `Bool`, `Int`, `Double` and `Str` respectively.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Double(f64),
    Str(String),
}

impl Scalar {
    /// Short name of the runtime type, used in mismatch messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::Double(_) => "float",
            Scalar::Str(_) => "str",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Double(n) => write!(f, "{}", n),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Double(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_type_from_str() {
        assert_eq!("boolean".parse::<ColumnType>(), Ok(ColumnType::Boolean));
        assert_eq!("int".parse::<ColumnType>(), Ok(ColumnType::Int));
        assert_eq!("double".parse::<ColumnType>(), Ok(ColumnType::Double));
        assert_eq!("string".parse::<ColumnType>(), Ok(ColumnType::String));
        assert!("float".parse::<ColumnType>().is_err());
        assert!("Int".parse::<ColumnType>().is_err());
    }

    #[test]
    fn test_scalar_deserializes_untagged() {
        let values: Vec<Scalar> = serde_json::from_str(r#"[true, 42, 3.5, "x"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Scalar::Bool(true),
                Scalar::Int(42),
                Scalar::Double(3.5),
                Scalar::Str("x".to_string()),
            ]
        );
    }

    #[test]
    fn test_column_type_serializes_lowercase() {
        let json = serde_json::to_string(&ColumnType::Double).unwrap();
        assert_eq!(json, "\"double\"");
    }
}
