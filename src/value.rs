//! Values carried by predicates and rows.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A value that can appear in a comparison or a returned row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// String value.
    String(String),
    /// JSON value.
    Json(serde_json::Value),
}

impl QueryValue {
    /// Check if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Name of the variant, used in type-mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Json(_) => "json",
        }
    }

    /// The text form embedded into a SQL literal (before escaping/quoting).
    ///
    /// Booleans render as `1`/`0` so they survive the quote-everything
    /// literal contract; see the compiler module for how `Null` bypasses
    /// quoting entirely.
    pub fn literal_text(&self) -> Cow<'_, str> {
        match self {
            Self::Null => Cow::Borrowed("NULL"),
            Self::Bool(true) => Cow::Borrowed("1"),
            Self::Bool(false) => Cow::Borrowed("0"),
            Self::Int(v) => Cow::Owned(v.to_string()),
            Self::Float(v) => Cow::Owned(v.to_string()),
            Self::String(v) => Cow::Borrowed(v),
            Self::Json(v) => Cow::Owned(v.to_string()),
        }
    }
}

impl From<bool> for QueryValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for QueryValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i64> for QueryValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for QueryValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<serde_json::Value> for QueryValue {
    fn from(v: serde_json::Value) -> Self {
        Self::Json(v)
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(QueryValue::from(42i32), QueryValue::Int(42));
        assert_eq!(QueryValue::from("hello"), QueryValue::String("hello".to_string()));
        assert_eq!(QueryValue::from(true), QueryValue::Bool(true));
        assert_eq!(QueryValue::from(None::<i64>), QueryValue::Null);
        assert_eq!(QueryValue::from(Some(7i64)), QueryValue::Int(7));
    }

    #[test]
    fn literal_text_forms() {
        assert_eq!(QueryValue::Int(5).literal_text(), "5");
        assert_eq!(QueryValue::Bool(true).literal_text(), "1");
        assert_eq!(QueryValue::Bool(false).literal_text(), "0");
        assert_eq!(QueryValue::from("abc").literal_text(), "abc");
    }

    #[test]
    fn json_literal_is_serialized() {
        let v = QueryValue::from(serde_json::json!({"a": 1}));
        assert_eq!(v.literal_text(), r#"{"a":1}"#);
    }

    #[test]
    fn null_reports_itself() {
        assert!(QueryValue::Null.is_null());
        assert!(!QueryValue::Int(0).is_null());
    }
}
