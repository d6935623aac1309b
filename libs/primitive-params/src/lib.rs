//! # Primitive Params
//!
//! Parameter records that travel with every changeable primitive mesh.
//!
//! ## Architecture
//!
//! ```text
//! host UI edit (ParamEdit) → ParameterRecord (ShapeParams) → primitive-mesh
//! ```
//!
//! Each shape kind owns a typed payload (`CylinderParams`, `TorusParams`, ...).
//! Edits arrive in the flat field vocabulary the host panels use
//! (`x_subdivisions`, `diameter1`, ...) and are mapped onto the payload of the
//! record's kind, clamped to that kind's minimums.
//!
//! ## Example
//!
//! ```rust
//! use primitive_params::{CubeParams, ParamEdit, ParameterRecord, ShapeParams};
//!
//! let mut record = ParameterRecord::new(ShapeParams::Cube(CubeParams::default()))?;
//! record.set(ParamEdit::XSubdivisions(0))?;
//!
//! // Below-minimum values are clamped, not rejected
//! match record.shape() {
//!     ShapeParams::Cube(cube) => assert_eq!(cube.x_subdivisions, 2),
//!     _ => unreachable!(),
//! }
//! # Ok::<(), primitive_params::ParamError>(())
//! ```

pub mod error;
pub mod kind;
pub mod record;
pub mod settings;
pub mod shapes;

pub use error::ParamError;
pub use kind::{CapType, FieldSpec, ParamField, ShapeKind};
pub use record::{ParamEdit, ParameterRecord};
pub use settings::PrimitiveSettings;
pub use shapes::{
    CircleParams, ConeParams, CubeParams, CylinderParams, IcosphereParams, PlaneParams,
    ShapeParams, TorusParams, UvSphereParams,
};
