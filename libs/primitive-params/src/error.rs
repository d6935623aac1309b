//! # Parameter Errors
//!
//! Error types for parameter record edits and legacy settings conversion.

use crate::kind::{ParamField, ShapeKind};
use thiserror::Error;

/// Errors that can occur while editing or decoding a parameter record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    /// Kind string not known at all.
    #[error("Unknown primitive kind: {0}")]
    UnknownKind(String),

    /// Kind reserved by the legacy vocabulary but without a generator.
    #[error("Primitive kind '{0}' is not implemented")]
    Unimplemented(String),

    /// Cap type string not known.
    #[error("Unknown cap type: {0}")]
    UnknownCapType(String),

    /// The record's shape kind does not use this field.
    #[error("Field '{field}' does not apply to {kind}")]
    FieldNotApplicable { field: ParamField, kind: ShapeKind },

    /// Length edits must be finite numbers.
    #[error("Field '{field}' must be finite, got {value}")]
    NonFinite { field: ParamField, value: f64 },
}

impl ParamError {
    /// Creates a field-not-applicable error.
    pub fn not_applicable(field: ParamField, kind: ShapeKind) -> Self {
        Self::FieldNotApplicable { field, kind }
    }
}

// =============================================================================
// TESTS
// =============================================================================
