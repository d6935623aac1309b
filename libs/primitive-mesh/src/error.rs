//! # Mesh Errors
//!
//! Error types for mesh generation and regeneration dispatch.

use primitive_params::ParamError;
use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Parameter error from the params layer
    #[error("Parameter error: {0}")]
    Param(#[from] ParamError),

    /// Invalid mesh topology
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Regeneration requested on a mesh that carries no parameter record
    #[error("Mesh has no primitive parameters")]
    MissingRecord,

    /// Regeneration requested on a record that was made permanent
    #[error("Primitive has been made permanent and can no longer be regenerated")]
    Permanent,
}

impl MeshError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitive_params::{ParamField, ShapeKind};

    #[test]
    fn test_param_error_converts() {
        let err: MeshError = ParamError::not_applicable(ParamField::Radius, ShapeKind::Cube).into();
        assert!(matches!(err, MeshError::Param(_)));
        assert!(err.to_string().contains("radius"));
    }

    #[test]
    fn test_invalid_topology_message() {
        let err = MeshError::invalid_topology("face 3 has 2 corners");
        assert_eq!(err.to_string(), "Invalid topology: face 3 has 2 corners");
    }
}
