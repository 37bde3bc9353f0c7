#![deny(missing_docs)]

//! # Record Model
//!
//! Data carriers produced by inference and consumed by the emitters:
//! annotated fields, named record specs, the per-document registry, and the
//! request/response entity pairing.

use crate::error::{AppError, AppResult};
use crate::type_mapping::FieldType;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

/// Import for the Swagger `@Schema` annotation. The class-level description
/// annotation is always emitted, so this import is always required.
pub const SCHEMA_IMPORT: &str = "import io.swagger.v3.oas.annotations.media.Schema;";

/// A validation or documentation marker attached to a generated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Annotation {
    /// The field must be present.
    NotNull,
    /// The field must be a non-blank string.
    NotBlank,
    /// Nested contents are validated recursively (cascade validation).
    Valid,
    /// Swagger description carrying the original JSON key.
    Description(String),
}

impl Annotation {
    /// The Java import this annotation requires.
    pub fn import(&self) -> &'static str {
        match self {
            Annotation::NotNull => "import javax.validation.constraints.NotNull;",
            Annotation::NotBlank => "import javax.validation.constraints.NotBlank;",
            Annotation::Valid => "import javax.validation.Valid;",
            Annotation::Description(_) => SCHEMA_IMPORT,
        }
    }
}

impl Display for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Annotation::NotNull => write!(f, "@NotNull"),
            Annotation::NotBlank => write!(f, "@NotBlank"),
            Annotation::Valid => write!(f, "@Valid"),
            Annotation::Description(key) => write!(f, "@Schema(description=\"{}\")", key),
        }
    }
}

/// One typed, annotated field derived from a JSON key/value pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Original JSON key.
    pub name: String,
    /// Target type expression.
    pub ty: FieldType,
    /// Validation markers; always ends with a `Description` of the key.
    pub annotations: Vec<Annotation>,
    /// Raw scalar example, used only by the endpoint emitter.
    pub example: Option<Value>,
}

impl FieldSpec {
    /// Builds a field, appending the trailing description marker.
    pub fn new(name: &str, ty: FieldType, markers: Vec<Annotation>, example: Option<Value>) -> Self {
        let mut annotations = markers;
        annotations.push(Annotation::Description(name.to_string()));
        Self {
            name: name.to_string(),
            ty,
            annotations,
            example,
        }
    }
}

/// A named set of fields derived from one JSON object shape.
///
/// Field order equals first-seen key order in the source object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSpec {
    /// Class name, unique within one generation run.
    pub name: String,
    /// Fields in source key order.
    pub fields: Vec<FieldSpec>,
}

impl RecordSpec {
    /// Shape comparison: name, field names, types, and markers.
    ///
    /// Example literals are excluded; they feed only the endpoint emitter
    /// and do not change the generated class.
    pub fn same_shape(&self, other: &RecordSpec) -> bool {
        self.name == other.name
            && self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .zip(&other.fields)
                .all(|(a, b)| a.name == b.name && a.ty == b.ty && a.annotations == b.annotations)
    }
}

/// The complete set of record specs inferred from one JSON document, in
/// first-seen order.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Registry {
    records: IndexMap<String, RecordSpec>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a record.
    ///
    /// Re-registering an identical shape is a no-op (the first-seen example
    /// values win); a different shape under the same name is a conflict,
    /// never a silent overwrite.
    pub fn insert(&mut self, record: RecordSpec) -> AppResult<()> {
        match self.records.get(&record.name) {
            Some(existing) if existing.same_shape(&record) => Ok(()),
            Some(_) => Err(AppError::NameConflict(record.name)),
            None => {
                self.records.insert(record.name.clone(), record);
                Ok(())
            }
        }
    }

    /// Looks up a record by class name.
    pub fn get(&self, name: &str) -> Option<&RecordSpec> {
        self.records.get(name)
    }

    /// Number of registered records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in first-seen order.
    pub fn records(&self) -> impl Iterator<Item = &RecordSpec> {
        self.records.values()
    }
}

/// The request/response pairing that drives one generation cycle.
#[derive(Debug, Clone, Serialize)]
pub struct Entity {
    /// Capitalized filename stem, e.g. `Order`.
    pub name: String,
    /// Registry inferred from the request example.
    pub request: Registry,
    /// Registry inferred from the response example.
    pub response: Registry,
    /// Request fixture filename, copied verbatim to test resources.
    pub request_fixture: String,
    /// Response fixture filename, copied verbatim to test resources.
    pub response_fixture: String,
}

impl Entity {
    /// Class name of the request body type.
    pub fn request_class(&self) -> String {
        format!("{}Request", self.name)
    }

    /// Class name of the response body type.
    pub fn response_class(&self) -> String {
        format!("{}Response", self.name)
    }
}
