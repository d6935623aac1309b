//! # Scene Abstraction
//!
//! The narrow surface a host application exposes to the primitive commands.

use crate::error::HostError;
use glam::{DQuat, DVec3};
use primitive_mesh::PrimitiveMesh;
use std::fmt;

/// Opaque reference to a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHandle(pub u32);

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Data attached to a scene object.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectData {
    /// A mesh, live primitive or plain.
    Mesh(PrimitiveMesh),
    /// Anything that is not a mesh (empties, lights, cameras).
    Empty,
}

impl ObjectData {
    /// The mesh, if this object has one.
    pub fn as_mesh(&self) -> Option<&PrimitiveMesh> {
        match self {
            ObjectData::Mesh(mesh) => Some(mesh),
            ObjectData::Empty => None,
        }
    }

    /// The mesh for editing, if this object has one.
    pub fn as_mesh_mut(&mut self) -> Option<&mut PrimitiveMesh> {
        match self {
            ObjectData::Mesh(mesh) => Some(mesh),
            ObjectData::Empty => None,
        }
    }
}

/// Host scene operations used by the primitive commands.
///
/// Implementations decide where objects live and how redraws happen. All
/// calls are synchronous; exclusive `&mut` access serializes commands.
///
/// # Examples
/// ```
/// use primitive_host::{MemoryScene, ObjectData, SceneHost};
/// let mut scene = MemoryScene::default();
/// let handle = scene.create_mesh_object("Empty", ObjectData::Empty);
/// assert!(scene.object_data(handle).unwrap().as_mesh().is_none());
/// ```
pub trait SceneHost {
    /// Creates an unlinked object holding `data`. The host may adjust the
    /// name to keep it unique.
    fn create_mesh_object(&mut self, name: &str, data: ObjectData) -> ObjectHandle;

    /// Deletes an object. Handles of other objects stay valid.
    fn remove_object(&mut self, handle: ObjectHandle) -> Result<ObjectData, HostError>;

    /// Links the object into the active collection.
    fn link(&mut self, handle: ObjectHandle) -> Result<(), HostError>;

    /// 3D cursor position.
    fn cursor_location(&self) -> DVec3;

    /// 3D cursor orientation.
    fn cursor_rotation(&self) -> DQuat;

    /// Sets the object's world location and rotation.
    fn set_transform(
        &mut self,
        handle: ObjectHandle,
        location: DVec3,
        rotation: DQuat,
    ) -> Result<(), HostError>;

    /// Requests a redraw of the object.
    fn mark_dirty(&mut self, handle: ObjectHandle) -> Result<(), HostError>;

    /// Object data by handle.
    fn object_data(&self, handle: ObjectHandle) -> Result<&ObjectData, HostError>;

    /// Object data by handle, for editing.
    fn object_data_mut(&mut self, handle: ObjectHandle) -> Result<&mut ObjectData, HostError>;
}
