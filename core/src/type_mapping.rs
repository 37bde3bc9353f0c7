#![deny(missing_docs)]

//! # Type Mapping
//!
//! Classifies JSON scalars into target Java types and models the type
//! expressions used by generated fields. Classification is a closed match
//! over the value model; booleans are a distinct variant, so they can never
//! be misread as a numeric subtype.

use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

/// The closed set of scalar target types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JavaType {
    /// A string value.
    String,
    /// A boolean value.
    Boolean,
    /// An integer-valued number.
    Integer,
    /// A fractional number.
    Double,
    /// The generic fallback type (null, or anything non-scalar).
    Object,
}

impl JavaType {
    /// Classifies a single JSON value. Total over every `Value` variant.
    pub fn of_scalar(value: &Value) -> Self {
        match value {
            Value::String(_) => JavaType::String,
            Value::Bool(_) => JavaType::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => JavaType::Integer,
            Value::Number(_) => JavaType::Double,
            Value::Null | Value::Array(_) | Value::Object(_) => JavaType::Object,
        }
    }

    /// True for the four concrete scalar types, false for the generic
    /// `Object` fallback.
    pub fn is_concrete(&self) -> bool {
        !matches!(self, JavaType::Object)
    }
}

impl Display for JavaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            JavaType::String => "String",
            JavaType::Boolean => "Boolean",
            JavaType::Integer => "Integer",
            JavaType::Double => "Double",
            JavaType::Object => "Object",
        };
        write!(f, "{}", name)
    }
}

/// A target-language type expression for a generated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FieldType {
    /// A scalar type.
    Scalar(JavaType),
    /// A reference to another generated class.
    Class(String),
    /// A `List` of the inner type.
    List(Box<FieldType>),
}

impl FieldType {
    /// Whether emitting this type requires `java.util.List`.
    pub fn needs_list_import(&self) -> bool {
        matches!(self, FieldType::List(_))
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::Scalar(ty) => write!(f, "{}", ty),
            FieldType::Class(name) => write!(f, "{}", name),
            FieldType::List(inner) => write!(f, "List<{}>", inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_classification() {
        let cases = vec![
            (json!("Ada"), JavaType::String),
            (json!(true), JavaType::Boolean),
            (json!(false), JavaType::Boolean),
            (json!(3), JavaType::Integer),
            (json!(-7), JavaType::Integer),
            (json!(3.25), JavaType::Double),
            (json!(null), JavaType::Object),
            (json!([1, 2]), JavaType::Object),
            (json!({"k": 1}), JavaType::Object),
        ];

        for (input, expected) in cases {
            assert_eq!(JavaType::of_scalar(&input), expected, "input: {}", input);
        }
    }

    #[test]
    fn test_boolean_never_integer() {
        // Some source representations treat booleans as a numeric subtype;
        // the closed match rules that out structurally.
        assert_ne!(JavaType::of_scalar(&json!(true)), JavaType::Integer);
        assert_ne!(JavaType::of_scalar(&json!(false)), JavaType::Integer);
    }

    #[test]
    fn test_concrete_types() {
        assert!(JavaType::Integer.is_concrete());
        assert!(JavaType::String.is_concrete());
        assert!(!JavaType::Object.is_concrete());
    }

    #[test]
    fn test_field_type_display() {
        assert_eq!(FieldType::Scalar(JavaType::Double).to_string(), "Double");
        assert_eq!(FieldType::Class("Address".into()).to_string(), "Address");
        assert_eq!(
            FieldType::List(Box::new(FieldType::Scalar(JavaType::String))).to_string(),
            "List<String>"
        );
        assert_eq!(
            FieldType::List(Box::new(FieldType::Class("Item".into()))).to_string(),
            "List<Item>"
        );
    }
}
