//! Typed option values carried through the facade.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The value attached to an option name.
///
/// Legacy parsers hand over options in whatever shape they produced:
/// scalars, lists of repeated values, or a bare name with no value at all
/// (`Absent`). The facade stores these as-is and never converts between
/// variants.
///
/// Variant order matters for untagged deserialization: `null` maps to
/// `Absent`, and whole numbers are tried as `Int` before `Float`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Option was supplied without a value (JSON `null`).
    Absent,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Repeated occurrences, in the order the parser saw them.
    List(Vec<String>),
}

impl OptionValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, OptionValue::Absent)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            OptionValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            OptionValue::Float(f) => Some(*f),
            OptionValue::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            OptionValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    /// Renders the value as a plain scalar; lists are comma-joined and
    /// `Absent` is empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Absent => Ok(()),
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Int(n) => write!(f, "{}", n),
            OptionValue::Float(x) => write!(f, "{}", x),
            OptionValue::Str(s) => f.write_str(s),
            OptionValue::List(items) => f.write_str(&items.join(",")),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(values: Vec<String>) -> Self {
        OptionValue::List(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_null_as_absent() {
        let value: OptionValue = serde_json::from_str("null").unwrap();
        assert_eq!(value, OptionValue::Absent);
        assert!(value.is_absent());
    }

    #[test]
    fn test_deserialize_integer_stays_int() {
        let value: OptionValue = serde_json::from_str("3").unwrap();
        assert_eq!(value, OptionValue::Int(3));
    }

    #[test]
    fn test_deserialize_fractional_as_float() {
        let value: OptionValue = serde_json::from_str("2.5").unwrap();
        assert_eq!(value, OptionValue::Float(2.5));
    }

    #[test]
    fn test_deserialize_bool() {
        let value: OptionValue = serde_json::from_str("true").unwrap();
        assert_eq!(value, OptionValue::Bool(true));
    }

    #[test]
    fn test_deserialize_string_list() {
        let value: OptionValue = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(
            value,
            OptionValue::List(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_serialize_absent_as_null() {
        let json = serde_json::to_string(&OptionValue::Absent).unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn test_accessors_reject_other_variants() {
        let value = OptionValue::Str("json".to_string());
        assert_eq!(value.as_str(), Some("json"));
        assert_eq!(value.as_bool(), None);
        assert_eq!(value.as_int(), None);
        assert_eq!(value.as_list(), None);
    }

    #[test]
    fn test_as_float_widens_int() {
        assert_eq!(OptionValue::Int(4).as_float(), Some(4.0));
        assert_eq!(OptionValue::Float(0.5).as_float(), Some(0.5));
    }

    #[test]
    fn test_display_scalars() {
        assert_eq!(OptionValue::Str("out.txt".into()).to_string(), "out.txt");
        assert_eq!(OptionValue::Bool(false).to_string(), "false");
        assert_eq!(OptionValue::Int(-7).to_string(), "-7");
        assert_eq!(OptionValue::Absent.to_string(), "");
    }

    #[test]
    fn test_display_list_comma_joined() {
        let value = OptionValue::List(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(value.to_string(), "x,y");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(OptionValue::from("text"), OptionValue::Str("text".into()));
        assert_eq!(OptionValue::from(true), OptionValue::Bool(true));
        assert_eq!(OptionValue::from(9i64), OptionValue::Int(9));
        assert_eq!(OptionValue::from(1.5f64), OptionValue::Float(1.5));
    }
}
