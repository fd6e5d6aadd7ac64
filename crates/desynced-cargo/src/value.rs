//! Instance values as seen by the printer.
//!
//! A [`Value`] is a borrowed view of one field of a record instance. The
//! printer never looks at the original Rust types; it walks values alongside
//! the analyzed schema.

use std::fmt;

use crate::descriptor::CargoRecord;

/// A field value borrowed from a record instance.
#[derive(Debug, Clone)]
pub enum Value<'a> {
    /// Missing value; renders as an empty string.
    Null,
    Bool(bool),
    Int(i64),
    /// 32-bit floating point.
    Float(f32),
    /// 64-bit floating point.
    Double(f64),
    String(&'a str),
    /// Enum variant, already mapped through its value table.
    Enum(&'static str),
    List(Vec<Value<'a>>),
    Record(&'a dyn CargoRecord),
}

impl<'a> Value<'a> {
    /// Short kind name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Float(_) | Value::Double(_) => "float",
            Value::String(_) => "string",
            Value::Enum(_) => "enum",
            Value::List(_) => "list",
            Value::Record(_) => "record",
        }
    }
}

/// Renders the value as it appears after `=` in a data line.
///
/// Floats use the shortest round-trip form and always keep a fractional
/// part (`2.0`, `0.1`). Lists and records have no flat form and render as
/// their debug representation.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{:?}", v),
            Value::Double(v) => write!(f, "{:?}", v),
            Value::String(s) => f.write_str(s),
            Value::Enum(s) => f.write_str(s),
            Value::List(items) => write!(f, "{:?}", items),
            Value::Record(r) => write!(f, "{:?}", r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Int(28).to_string(), "28");
        assert_eq!(Value::Int(0).to_string(), "0");
        assert_eq!(Value::Double(2.0).to_string(), "2.0");
        assert_eq!(Value::Float(0.1).to_string(), "0.1");
        assert_eq!(Value::Bool(true).to_string(), "True");
        assert_eq!(Value::String("Alice").to_string(), "Alice");
        assert_eq!(Value::Enum("red").to_string(), "red");
    }
}
