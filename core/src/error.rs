#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// A fixture contained malformed JSON, or its root was not an object.
    #[from(ignore)]
    #[display("Invalid JSON in {path}: {message}")]
    Json {
        /// Path of the offending fixture file.
        path: String,
        /// Parser diagnostic.
        message: String,
    },

    /// Two distinct object shapes resolved to the same generated class name.
    /// We ignore this for `From<String>` to avoid conflict with General.
    #[from(ignore)]
    #[display("Conflicting definitions for generated class '{_0}'")]
    NameConflict(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
