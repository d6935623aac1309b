//! # Primitive Commands
//!
//! Entry points a host binds to its menus and property panels. Every
//! command takes the scene by `&mut`, so commands never interleave.

use crate::error::HostError;
use crate::scene::{ObjectData, ObjectHandle, SceneHost};
use glam::{DQuat, DVec3};
use primitive_mesh::PrimitiveMesh;
use primitive_params::{ParamEdit, ParameterRecord, PrimitiveSettings, ShapeParams};

/// Request to add a changeable primitive at the 3D cursor.
///
/// # Examples
/// ```
/// use primitive_host::CreatePrimitive;
/// use primitive_params::{ShapeKind, ShapeParams};
///
/// let cmd = CreatePrimitive::new(ShapeParams::default_for(ShapeKind::Cone)).smooth(true);
/// assert!(cmd.smooth);
/// assert!(!cmd.align_to_cursor);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePrimitive {
    pub shape: ShapeParams,
    pub smooth: bool,
    /// Copy the cursor rotation instead of using the world orientation.
    pub align_to_cursor: bool,
    /// Object name, defaults to the kind's name.
    pub name: Option<String>,
}

impl CreatePrimitive {
    pub fn new(shape: ShapeParams) -> Self {
        Self {
            shape,
            smooth: false,
            align_to_cursor: false,
            name: None,
        }
    }

    pub fn smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    pub fn align_to_cursor(mut self, align: bool) -> Self {
        self.align_to_cursor = align;
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Creates a live primitive object at the 3D cursor.
///
/// The mesh is generated before the object exists, so a failed generation
/// adds nothing to the scene. If the host fails to place the new object it
/// is removed again.
///
/// # Examples
/// ```
/// use primitive_host::{create_primitive, CreatePrimitive, MemoryScene, SceneHost};
/// use primitive_params::{CubeParams, ShapeParams};
///
/// let mut scene = MemoryScene::default();
/// let cube = create_primitive(&mut scene, &CreatePrimitive::new(ShapeParams::Cube(CubeParams::default()))).unwrap();
/// let mesh = scene.object_data(cube).unwrap().as_mesh().unwrap();
/// assert_eq!(mesh.geometry().vertex_count(), 8);
/// ```
pub fn create_primitive<H: SceneHost + ?Sized>(
    host: &mut H,
    cmd: &CreatePrimitive,
) -> Result<ObjectHandle, HostError> {
    let record = ParameterRecord::new(cmd.shape)?.with_smooth(cmd.smooth);
    let mesh = PrimitiveMesh::new_live(record)?;

    let kind = record.kind();
    let name = cmd
        .name
        .as_deref()
        .unwrap_or_else(|| kind.default_object_name());
    let location = host.cursor_location();
    let rotation = if cmd.align_to_cursor {
        host.cursor_rotation()
    } else {
        DQuat::IDENTITY
    };

    let handle = host.create_mesh_object(name, ObjectData::Mesh(mesh));
    if let Err(err) = place(host, handle, location, rotation) {
        log::warn!("could not place {} as {}: {}", kind, handle, err);
        if let Err(cleanup) = host.remove_object(handle) {
            log::warn!("could not remove {}: {}", handle, cleanup);
        }
        return Err(err);
    }

    log::debug!("created {} as {}", kind, handle);
    Ok(handle)
}

fn place<H: SceneHost + ?Sized>(
    host: &mut H,
    handle: ObjectHandle,
    location: DVec3,
    rotation: DQuat,
) -> Result<(), HostError> {
    host.link(handle)?;
    host.set_transform(handle, location, rotation)?;
    host.mark_dirty(handle)
}

/// Creates a primitive from the legacy flat settings.
///
/// `TUBE` and `ARC` are rejected with `Unimplemented` and nothing is added.
pub fn create_from_settings<H: SceneHost + ?Sized>(
    host: &mut H,
    settings: &PrimitiveSettings,
) -> Result<ObjectHandle, HostError> {
    let record = match ParameterRecord::from_settings(settings) {
        Ok(record) => record,
        Err(err) => {
            log::warn!("cannot create primitive: {}", err);
            return Err(err.into());
        }
    };
    let cmd = CreatePrimitive::new(*record.shape()).smooth(record.is_smooth());
    create_primitive(host, &cmd)
}

/// Rebuilds the object's geometry from its stored parameters.
pub fn update_primitive<H: SceneHost + ?Sized>(
    host: &mut H,
    handle: ObjectHandle,
) -> Result<(), HostError> {
    live_mesh(host, handle)?.regenerate()?;
    host.mark_dirty(handle)
}

/// Writes one parameter and regenerates the object.
///
/// On a permanent primitive the value is stored, the geometry is kept and
/// the error reports `Permanent`.
pub fn set_parameter<H: SceneHost + ?Sized>(
    host: &mut H,
    handle: ObjectHandle,
    edit: ParamEdit,
) -> Result<(), HostError> {
    live_mesh(host, handle)?.apply(edit)?;
    host.mark_dirty(handle)
}

/// Replaces the object's whole shape payload and regenerates.
pub fn set_shape<H: SceneHost + ?Sized>(
    host: &mut H,
    handle: ObjectHandle,
    shape: ShapeParams,
) -> Result<(), HostError> {
    live_mesh(host, handle)?.set_shape(shape)?;
    host.mark_dirty(handle)
}

/// Freezes the object's primitive. Returns false if it already was.
pub fn make_permanent<H: SceneHost + ?Sized>(
    host: &mut H,
    handle: ObjectHandle,
) -> Result<bool, HostError> {
    let changed = live_mesh(host, handle)?.make_permanent()?;
    Ok(changed)
}

fn live_mesh<H: SceneHost + ?Sized>(
    host: &mut H,
    handle: ObjectHandle,
) -> Result<&mut PrimitiveMesh, HostError> {
    host.object_data_mut(handle)?
        .as_mesh_mut()
        .ok_or(HostError::NotAMesh(handle))
}
