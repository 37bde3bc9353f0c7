#![deny(missing_docs)]

//! # Code Generation
//!
//! Renders record specs into Spring Boot source text. All emitters are pure
//! string builders: identical inputs produce byte-identical output, which
//! keeps regeneration diffable.

/// Create-endpoint controller emission.
pub mod controller;

/// Model class emission.
pub mod model;

/// Round-trip MockMvc test emission.
pub mod test_gen;

pub use controller::generate_controller;
pub use model::generate_model_class;
pub use test_gen::generate_controller_test;
