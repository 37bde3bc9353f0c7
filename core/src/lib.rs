#![deny(missing_docs)]

//! # Bootgen Core
//!
//! Core library for the JSON-example driven Spring Boot scaffolder: schema
//! inference over example documents and deterministic source emission.

/// Shared error types.
pub mod error;

/// Schema inference over example JSON documents.
pub mod inference;

/// Class, accessor, and route naming rules.
pub mod naming;

/// Record specs, registries, and entities.
pub mod records;

/// Scalar classification and field type expressions.
pub mod type_mapping;

/// Source emitters (model classes, controller stub, round-trip test).
pub mod codegen;

pub use codegen::{generate_controller, generate_controller_test, generate_model_class};
pub use error::{AppError, AppResult};
pub use inference::{infer, parse_object};
pub use records::{Annotation, Entity, FieldSpec, RecordSpec, Registry};
pub use type_mapping::{FieldType, JavaType};
