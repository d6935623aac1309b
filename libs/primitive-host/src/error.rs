//! # Host Errors

use crate::scene::ObjectHandle;
use primitive_mesh::MeshError;
use primitive_params::ParamError;
use thiserror::Error;

/// Errors returned by scene commands.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    /// The handle does not name an object in the scene.
    #[error("Unknown object: {0}")]
    UnknownObject(ObjectHandle),

    /// The object exists but holds no mesh.
    #[error("Object {0} is not a mesh")]
    NotAMesh(ObjectHandle),

    /// Generation or regeneration failed or was refused.
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),

    /// A parameter could not be decoded.
    #[error("Parameter error: {0}")]
    Param(#[from] ParamError),
}

impl HostError {
    /// True when the target primitive was made permanent.
    pub fn is_permanent(&self) -> bool {
        matches!(self, HostError::Mesh(MeshError::Permanent))
    }
}
