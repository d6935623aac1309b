//! Host-facing entry points for changeable primitives.
//!
//! A host application implements [`SceneHost`] and binds the commands in
//! this crate to its menus and property panels. [`MemoryScene`] is the
//! in-memory host used by tests and headless tools.
//!
//! ```
//! use primitive_host::{create_primitive, set_parameter, CreatePrimitive, MemoryScene};
//! use primitive_params::{CylinderParams, ParamEdit, ShapeParams};
//!
//! let mut scene = MemoryScene::default();
//! let cmd = CreatePrimitive::new(ShapeParams::Cylinder(CylinderParams::default()));
//! let handle = create_primitive(&mut scene, &cmd).unwrap();
//! set_parameter(&mut scene, handle, ParamEdit::XSubdivisions(6)).unwrap();
//!
//! let mesh = scene.object(handle).unwrap().data.as_mesh().unwrap();
//! assert_eq!(mesh.geometry().vertex_count(), 12);
//! ```

mod commands;
mod error;
mod memory;
mod scene;

pub use commands::{
    create_from_settings, create_primitive, make_permanent, set_parameter, set_shape,
    update_primitive, CreatePrimitive,
};
pub use error::HostError;
pub use memory::{MemoryScene, SceneObject};
pub use scene::{ObjectData, ObjectHandle, SceneHost};
