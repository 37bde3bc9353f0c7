#![deny(missing_docs)]

//! # Schema Inference
//!
//! Recursively walks an example JSON object and produces the registry of
//! record specs describing its shape.
//!
//! Arrays are sampled at their first element only: a heterogeneous array is
//! typed after element zero, and later elements are never inspected.

use crate::error::{AppError, AppResult};
use crate::naming::{capitalize_first, singularize};
use crate::records::{Annotation, FieldSpec, RecordSpec, Registry};
use crate::type_mapping::{FieldType, JavaType};
use serde_json::{Map, Value};

/// Parses an example document, requiring a JSON object at the root.
///
/// `path` is only used to label errors with the offending file.
pub fn parse_object(path: &str, text: &str) -> AppResult<Map<String, Value>> {
    let value: Value = serde_json::from_str(text).map_err(|e| AppError::Json {
        path: path.to_string(),
        message: e.to_string(),
    })?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(AppError::Json {
            path: path.to_string(),
            message: format!("top-level value must be an object, got {}", json_kind(&other)),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Infers the full registry of record specs for one document.
///
/// The registry is created here and threaded through the recursion; separate
/// calls share no state. Each record is registered before its nested shapes
/// are visited, so registry order is root-first, then first-seen order.
pub fn infer(root: &Map<String, Value>, root_name: &str) -> AppResult<Registry> {
    let mut registry = Registry::new();
    infer_record(root, root_name, &mut registry)?;
    Ok(registry)
}

fn infer_record(
    object: &Map<String, Value>,
    name: &str,
    registry: &mut Registry,
) -> AppResult<()> {
    let mut fields = Vec::with_capacity(object.len());
    let mut nested: Vec<(String, &Map<String, Value>)> = Vec::new();

    for (key, value) in object {
        let field = match value {
            Value::Object(inner) => {
                let class = capitalize_first(key);
                nested.push((class.clone(), inner));
                FieldSpec::new(
                    key,
                    FieldType::Class(class),
                    vec![Annotation::NotNull, Annotation::Valid],
                    None,
                )
            }
            Value::Array(items) => infer_array_field(key, items, &mut nested),
            scalar => infer_scalar_field(key, scalar),
        };
        fields.push(field);
    }

    registry.insert(RecordSpec {
        name: name.to_string(),
        fields,
    })?;

    for (class, inner) in nested {
        infer_record(inner, &class, registry)?;
    }
    Ok(())
}

fn infer_array_field<'a>(
    key: &str,
    items: &'a [Value],
    nested: &mut Vec<(String, &'a Map<String, Value>)>,
) -> FieldSpec {
    match items.first() {
        Some(Value::Object(inner)) => {
            let class = capitalize_first(singularize(key));
            nested.push((class.clone(), inner));
            FieldSpec::new(
                key,
                FieldType::List(Box::new(FieldType::Class(class))),
                vec![Annotation::NotNull, Annotation::Valid],
                None,
            )
        }
        first => {
            // Empty arrays fall back to the generic element type.
            let element = first.map(JavaType::of_scalar).unwrap_or(JavaType::Object);
            FieldSpec::new(
                key,
                FieldType::List(Box::new(FieldType::Scalar(element))),
                vec![Annotation::NotNull],
                None,
            )
        }
    }
}

fn infer_scalar_field(key: &str, value: &Value) -> FieldSpec {
    let ty = JavaType::of_scalar(value);
    // Null fields carry no presence marker: nullable by construction.
    let markers = match value {
        Value::String(_) => vec![Annotation::NotBlank],
        Value::Null => Vec::new(),
        _ => vec![Annotation::NotNull],
    };
    FieldSpec::new(key, FieldType::Scalar(ty), markers, Some(value.clone()))
}
