//! # Legacy Flat Settings
//!
//! The flat field set that parameters were historically stored in. Kept as
//! a serializable snapshot so a record can travel with a mesh in whatever
//! storage the host has, and converted to and from the typed payloads.
//!
//! Axis reuse per kind:
//!
//! | Kind      | x            | y              | z              | diameter1    | diameter2    |
//! |-----------|--------------|----------------|----------------|--------------|--------------|
//! | Plane     | X quads      | Y quads        |                |              |              |
//! | Cube      | X verts      | Y verts        | Z verts        |              |              |
//! | Circle    | segments     | U subdivisions |                |              |              |
//! | Cylinder  | segments     | U subdivisions | V subdivisions | diameter     |              |
//! | Cone      | segments     | U subdivisions | V subdivisions | diameter 1   | diameter 2   |
//! | UvSphere  |              | segments       | rings          | diameter     |              |
//! | Icosphere | level        |                |                | diameter     |              |
//! | Torus     | major segs   | minor segs     |                | major radius | minor radius |

use crate::error::ParamError;
use crate::kind::{CapType, ShapeKind};
use crate::record::ParameterRecord;
use crate::shapes::{
    CircleParams, ConeParams, CubeParams, CylinderParams, IcosphereParams, PlaneParams,
    ShapeParams, TorusParams, UvSphereParams,
};
use config::constants::DEFAULT_LENGTH;
use serde::{Deserialize, Serialize};

/// Flat parameter snapshot.
///
/// Defaults match a freshly created, not yet initialized property group:
/// disabled, `PLANE`, all subdivisions 2, cap `NONE`, all lengths 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimitiveSettings {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub x_subdivisions: i32,
    pub y_subdivisions: i32,
    pub z_subdivisions: i32,
    pub cap_type: String,
    pub radius: f64,
    pub diameter1: f64,
    pub diameter2: f64,
    pub height: f64,
    pub use_smooth_shading: bool,
}

impl Default for PrimitiveSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            kind: ShapeKind::Plane.legacy_name().to_string(),
            x_subdivisions: 2,
            y_subdivisions: 2,
            z_subdivisions: 2,
            cap_type: CapType::None.legacy_name().to_string(),
            radius: DEFAULT_LENGTH,
            diameter1: DEFAULT_LENGTH,
            diameter2: DEFAULT_LENGTH,
            height: DEFAULT_LENGTH,
            use_smooth_shading: false,
        }
    }
}

/// Negative counts from old files become zero and are then clamped by the
/// payload.
fn count(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

fn flat(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

impl ShapeParams {
    /// Decodes the payload from a flat snapshot.
    ///
    /// # Errors
    ///
    /// Unknown or unimplemented kind strings, unknown cap strings and
    /// non-finite lengths.
    pub fn from_settings(settings: &PrimitiveSettings) -> Result<Self, ParamError> {
        let kind: ShapeKind = settings.kind.parse()?;
        let cap: CapType = settings.cap_type.parse()?;
        let x = count(settings.x_subdivisions);
        let y = count(settings.y_subdivisions);
        let z = count(settings.z_subdivisions);

        let shape = match kind {
            ShapeKind::Plane => ShapeParams::Plane(PlaneParams {
                x_subdivisions: x,
                y_subdivisions: y,
                size: settings.height,
            }),
            ShapeKind::Cube => ShapeParams::Cube(CubeParams {
                x_subdivisions: x,
                y_subdivisions: y,
                z_subdivisions: z,
                size: settings.height,
            }),
            ShapeKind::Circle => ShapeParams::Circle(CircleParams {
                segments: x,
                u_subdivisions: y,
                radius: settings.radius,
                cap,
            }),
            ShapeKind::Cylinder => ShapeParams::Cylinder(CylinderParams {
                segments: x,
                u_subdivisions: y,
                v_subdivisions: z,
                diameter: settings.diameter1,
                height: settings.height,
                cap,
            }),
            ShapeKind::Cone => ShapeParams::Cone(ConeParams {
                segments: x,
                u_subdivisions: y,
                v_subdivisions: z,
                diameter1: settings.diameter1,
                diameter2: settings.diameter2,
                height: settings.height,
                cap,
            }),
            ShapeKind::UvSphere => ShapeParams::UvSphere(UvSphereParams {
                segments: y,
                rings: z,
                diameter: settings.diameter1,
            }),
            ShapeKind::Icosphere => ShapeParams::Icosphere(IcosphereParams {
                subdivisions: x,
                diameter: settings.diameter1,
            }),
            ShapeKind::Torus => ShapeParams::Torus(TorusParams {
                major_segments: x,
                minor_segments: y,
                major_radius: settings.diameter1,
                minor_radius: settings.diameter2,
            }),
        };
        shape.validate()?;
        Ok(shape.clamped())
    }

    /// Encodes the payload into a flat snapshot. Fields the kind does not
    /// use keep their defaults.
    pub fn to_settings(&self) -> PrimitiveSettings {
        let mut s = PrimitiveSettings {
            kind: self.kind().legacy_name().to_string(),
            ..PrimitiveSettings::default()
        };
        match *self {
            ShapeParams::Plane(p) => {
                s.x_subdivisions = flat(p.x_subdivisions);
                s.y_subdivisions = flat(p.y_subdivisions);
                s.height = p.size;
            }
            ShapeParams::Cube(p) => {
                s.x_subdivisions = flat(p.x_subdivisions);
                s.y_subdivisions = flat(p.y_subdivisions);
                s.z_subdivisions = flat(p.z_subdivisions);
                s.height = p.size;
            }
            ShapeParams::Circle(p) => {
                s.x_subdivisions = flat(p.segments);
                s.y_subdivisions = flat(p.u_subdivisions);
                s.radius = p.radius;
                s.cap_type = p.cap.legacy_name().to_string();
            }
            ShapeParams::Cylinder(p) => {
                s.x_subdivisions = flat(p.segments);
                s.y_subdivisions = flat(p.u_subdivisions);
                s.z_subdivisions = flat(p.v_subdivisions);
                s.diameter1 = p.diameter;
                s.height = p.height;
                s.cap_type = p.cap.legacy_name().to_string();
            }
            ShapeParams::Cone(p) => {
                s.x_subdivisions = flat(p.segments);
                s.y_subdivisions = flat(p.u_subdivisions);
                s.z_subdivisions = flat(p.v_subdivisions);
                s.diameter1 = p.diameter1;
                s.diameter2 = p.diameter2;
                s.height = p.height;
                s.cap_type = p.cap.legacy_name().to_string();
            }
            ShapeParams::UvSphere(p) => {
                s.y_subdivisions = flat(p.segments);
                s.z_subdivisions = flat(p.rings);
                s.diameter1 = p.diameter;
            }
            ShapeParams::Icosphere(p) => {
                s.x_subdivisions = flat(p.subdivisions);
                s.diameter1 = p.diameter;
            }
            ShapeParams::Torus(p) => {
                s.x_subdivisions = flat(p.major_segments);
                s.y_subdivisions = flat(p.minor_segments);
                s.diameter1 = p.major_radius;
                s.diameter2 = p.minor_radius;
            }
        }
        s
    }
}

impl ParameterRecord {
    /// Decodes a record from a flat snapshot, keeping its enabled and smooth
    /// flags.
    ///
    /// # Example
    ///
    /// ```rust
    /// use primitive_params::{ParameterRecord, PrimitiveSettings, ShapeKind};
    ///
    /// let settings = PrimitiveSettings {
    ///     enabled: true,
    ///     kind: "SPHERE".to_string(),
    ///     ..PrimitiveSettings::default()
    /// };
    /// let record = ParameterRecord::from_settings(&settings).unwrap();
    /// assert_eq!(record.kind(), ShapeKind::UvSphere);
    /// assert!(record.is_enabled());
    /// ```
    pub fn from_settings(settings: &PrimitiveSettings) -> Result<Self, ParamError> {
        let shape = ShapeParams::from_settings(settings)?;
        Ok(ParameterRecord::from_parts(
            shape,
            settings.enabled,
            settings.use_smooth_shading,
        ))
    }

    /// Encodes the record into a flat snapshot.
    pub fn to_settings(&self) -> PrimitiveSettings {
        PrimitiveSettings {
            enabled: self.is_enabled(),
            use_smooth_shading: self.is_smooth(),
            ..self.shape().to_settings()
        }
    }
}

#[cfg(test)]
mod tests;
