//! # Primitive Mesh
//!
//! Mesh generation for changeable primitives.
//! Converts parameter records from `primitive-params` into polygon meshes.
//!
//! ## Architecture
//!
//! ```text
//! primitive-params (ParameterRecord) → primitive-mesh (Mesh)
//! ```
//!
//! ## Algorithms
//!
//! - **Primitives**: Grid, cube, circle, cone, UV sphere and icosphere builders
//! - **Subdivision**: Evenly spaced edge cuts with quad-strip and fan splits
//! - **Spin**: Profile sweep around an axis (torus)
//! - **Weld**: Seam merging after a full sweep
//!
//! ## Usage
//!
//! ```rust
//! use primitive_mesh::PrimitiveMesh;
//! use primitive_params::{ParamEdit, ParameterRecord, ShapeParams, TorusParams};
//!
//! let record = ParameterRecord::new(ShapeParams::Torus(TorusParams::default())).unwrap();
//! let mut torus = PrimitiveMesh::new_live(record).unwrap();
//! torus.apply(ParamEdit::YSubdivisions(6)).unwrap();
//! assert_eq!(torus.geometry().vertex_count(), 48 * 6);
//! ```

pub mod error;
pub mod from_params;
pub mod live;
pub mod mesh;
pub mod ops;
pub mod primitives;

pub use error::MeshError;
pub use from_params::{generate, generate_with};
pub use live::PrimitiveMesh;
pub use mesh::{Face, Mesh};
