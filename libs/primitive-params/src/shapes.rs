//! # Shape Parameters
//!
//! One typed payload per implemented shape kind. Field names say what the
//! value means for that shape; the legacy flat axis each field is stored in
//! is noted on the field.

use crate::error::ParamError;
use crate::kind::{CapType, ParamField, ShapeKind};
use crate::record::ParamEdit;
use config::constants::{
    clamp_length, DEFAULT_ICOSPHERE_LEVEL, DEFAULT_LENGTH, DEFAULT_PLANE_SUBDIVISIONS,
    DEFAULT_SEGMENTS, DEFAULT_SPHERE_RINGS, DEFAULT_SPHERE_SEGMENTS,
    DEFAULT_TORUS_MAJOR_RADIUS, DEFAULT_TORUS_MAJOR_SEGMENTS, DEFAULT_TORUS_MINOR_RADIUS,
    DEFAULT_TORUS_MINOR_SEGMENTS, MAX_ICOSPHERE_LEVEL, MIN_CUBE_SUBDIVISIONS,
    MIN_ICOSPHERE_LEVEL, MIN_PLANE_SUBDIVISIONS, MIN_RING_SUBDIVISIONS, MIN_SEGMENTS,
    MIN_SPHERE_RINGS, MIN_TORUS_SEGMENTS,
};
use serde::{Deserialize, Serialize};

/// Grid of quads on the XY plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneParams {
    /// Quads along X (x).
    pub x_subdivisions: u32,
    /// Quads along Y (y).
    pub y_subdivisions: u32,
    /// Side length (height).
    pub size: f64,
}

impl Default for PlaneParams {
    fn default() -> Self {
        Self {
            x_subdivisions: DEFAULT_PLANE_SUBDIVISIONS,
            y_subdivisions: DEFAULT_PLANE_SUBDIVISIONS,
            size: DEFAULT_LENGTH,
        }
    }
}

impl PlaneParams {
    /// Returns a copy with every field raised to its minimum.
    pub fn clamped(self) -> Self {
        Self {
            x_subdivisions: self.x_subdivisions.max(MIN_PLANE_SUBDIVISIONS),
            y_subdivisions: self.y_subdivisions.max(MIN_PLANE_SUBDIVISIONS),
            size: clamp_length(self.size),
        }
    }
}

/// Axis-aligned cube. Subdivisions count vertices per edge, so 2 is the
/// plain cube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeParams {
    /// Vertices along X edges (x).
    pub x_subdivisions: u32,
    /// Vertices along Y edges (y).
    pub y_subdivisions: u32,
    /// Vertices along Z edges (z).
    pub z_subdivisions: u32,
    /// Side length (height).
    pub size: f64,
}

impl Default for CubeParams {
    fn default() -> Self {
        Self {
            x_subdivisions: MIN_CUBE_SUBDIVISIONS,
            y_subdivisions: MIN_CUBE_SUBDIVISIONS,
            z_subdivisions: MIN_CUBE_SUBDIVISIONS,
            size: DEFAULT_LENGTH,
        }
    }
}

impl CubeParams {
    /// Returns a copy with every field raised to its minimum.
    pub fn clamped(self) -> Self {
        Self {
            x_subdivisions: self.x_subdivisions.max(MIN_CUBE_SUBDIVISIONS),
            y_subdivisions: self.y_subdivisions.max(MIN_CUBE_SUBDIVISIONS),
            z_subdivisions: self.z_subdivisions.max(MIN_CUBE_SUBDIVISIONS),
            size: clamp_length(self.size),
        }
    }
}

/// Flat regular polygon in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleParams {
    /// Edges around the circle (x).
    pub segments: u32,
    /// Concentric ring density of a triangle-fan cap (y).
    pub u_subdivisions: u32,
    /// Circumradius (radius).
    pub radius: f64,
    /// Fill style (cap_type).
    pub cap: CapType,
}

impl Default for CircleParams {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            u_subdivisions: MIN_RING_SUBDIVISIONS,
            radius: DEFAULT_LENGTH,
            cap: CapType::None,
        }
    }
}

impl CircleParams {
    /// Returns a copy with every field raised to its minimum.
    pub fn clamped(self) -> Self {
        Self {
            segments: self.segments.max(MIN_SEGMENTS),
            u_subdivisions: self.u_subdivisions.max(MIN_RING_SUBDIVISIONS),
            radius: clamp_length(self.radius),
            cap: self.cap,
        }
    }
}

/// Cylinder along Z, centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderParams {
    /// Edges around each end ring (x).
    pub segments: u32,
    /// Concentric ring density of triangle-fan caps (y).
    pub u_subdivisions: u32,
    /// Vertices along the length, 2 means no cuts (z).
    pub v_subdivisions: u32,
    /// End diameter (diameter1).
    pub diameter: f64,
    /// Length along Z (height).
    pub height: f64,
    /// Fill style of both ends (cap_type).
    pub cap: CapType,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            u_subdivisions: MIN_RING_SUBDIVISIONS,
            v_subdivisions: MIN_RING_SUBDIVISIONS,
            diameter: DEFAULT_LENGTH,
            height: DEFAULT_LENGTH,
            cap: CapType::None,
        }
    }
}

impl CylinderParams {
    /// Returns a copy with every field raised to its minimum.
    pub fn clamped(self) -> Self {
        Self {
            segments: self.segments.max(MIN_SEGMENTS),
            u_subdivisions: self.u_subdivisions.max(MIN_RING_SUBDIVISIONS),
            v_subdivisions: self.v_subdivisions.max(MIN_RING_SUBDIVISIONS),
            diameter: clamp_length(self.diameter),
            height: clamp_length(self.height),
            cap: self.cap,
        }
    }
}

/// Cone or frustum along Z, centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConeParams {
    /// Edges around each end ring (x).
    pub segments: u32,
    /// Concentric ring density of triangle-fan caps (y).
    pub u_subdivisions: u32,
    /// Vertices along the length, 2 means no cuts (z).
    pub v_subdivisions: u32,
    /// Diameter at -Z (diameter1).
    pub diameter1: f64,
    /// Diameter at +Z, zero for a pointed apex (diameter2).
    pub diameter2: f64,
    /// Length along Z (height).
    pub height: f64,
    /// Fill style of the non-apex ends (cap_type).
    pub cap: CapType,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            u_subdivisions: MIN_RING_SUBDIVISIONS,
            v_subdivisions: MIN_RING_SUBDIVISIONS,
            diameter1: DEFAULT_LENGTH,
            diameter2: 0.0,
            height: DEFAULT_LENGTH,
            cap: CapType::None,
        }
    }
}

impl ConeParams {
    /// Returns a copy with every field raised to its minimum.
    pub fn clamped(self) -> Self {
        Self {
            segments: self.segments.max(MIN_SEGMENTS),
            u_subdivisions: self.u_subdivisions.max(MIN_RING_SUBDIVISIONS),
            v_subdivisions: self.v_subdivisions.max(MIN_RING_SUBDIVISIONS),
            diameter1: clamp_length(self.diameter1),
            diameter2: clamp_length(self.diameter2),
            height: clamp_length(self.height),
            cap: self.cap,
        }
    }
}

/// Latitude/longitude sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvSphereParams {
    /// Longitude segments (y).
    pub segments: u32,
    /// Latitude bands between the poles (z).
    pub rings: u32,
    /// Sphere diameter (diameter1).
    pub diameter: f64,
}

impl Default for UvSphereParams {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SPHERE_SEGMENTS,
            rings: DEFAULT_SPHERE_RINGS,
            diameter: DEFAULT_LENGTH,
        }
    }
}

impl UvSphereParams {
    /// Returns a copy with every field raised to its minimum.
    pub fn clamped(self) -> Self {
        Self {
            segments: self.segments.max(MIN_SEGMENTS),
            rings: self.rings.max(MIN_SPHERE_RINGS),
            diameter: clamp_length(self.diameter),
        }
    }
}

/// Geodesic sphere refined from an icosahedron.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IcosphereParams {
    /// Refinement level, 1 is the bare icosahedron (x).
    pub subdivisions: u32,
    /// Sphere diameter (diameter1).
    pub diameter: f64,
}

impl Default for IcosphereParams {
    fn default() -> Self {
        Self {
            subdivisions: DEFAULT_ICOSPHERE_LEVEL,
            diameter: DEFAULT_LENGTH,
        }
    }
}

impl IcosphereParams {
    /// Returns a copy with the level inside its valid range.
    pub fn clamped(self) -> Self {
        Self {
            subdivisions: self
                .subdivisions
                .clamp(MIN_ICOSPHERE_LEVEL, MAX_ICOSPHERE_LEVEL),
            diameter: clamp_length(self.diameter),
        }
    }
}

/// Ring-shaped tube swept around Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorusParams {
    /// Sweep steps around the Z axis (x).
    pub major_segments: u32,
    /// Segments of the tube profile (y).
    pub minor_segments: u32,
    /// Distance from the axis to the tube center (diameter1).
    pub major_radius: f64,
    /// Tube radius (diameter2).
    pub minor_radius: f64,
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            major_segments: DEFAULT_TORUS_MAJOR_SEGMENTS,
            minor_segments: DEFAULT_TORUS_MINOR_SEGMENTS,
            major_radius: DEFAULT_TORUS_MAJOR_RADIUS,
            minor_radius: DEFAULT_TORUS_MINOR_RADIUS,
        }
    }
}

impl TorusParams {
    /// Returns a copy with every field raised to its minimum.
    pub fn clamped(self) -> Self {
        Self {
            major_segments: self.major_segments.max(MIN_TORUS_SEGMENTS),
            minor_segments: self.minor_segments.max(MIN_TORUS_SEGMENTS),
            major_radius: clamp_length(self.major_radius),
            minor_radius: clamp_length(self.minor_radius),
        }
    }
}

/// Shape payload of a parameter record.
///
/// # Example
///
/// ```rust
/// use primitive_params::{ShapeKind, ShapeParams, TorusParams};
///
/// let shape = ShapeParams::Torus(TorusParams::default());
/// assert_eq!(shape.kind(), ShapeKind::Torus);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeParams {
    Plane(PlaneParams),
    Cube(CubeParams),
    Circle(CircleParams),
    Cylinder(CylinderParams),
    Cone(ConeParams),
    UvSphere(UvSphereParams),
    Icosphere(IcosphereParams),
    Torus(TorusParams),
}

impl ShapeParams {
    /// Default payload for a kind.
    pub fn default_for(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Plane => ShapeParams::Plane(PlaneParams::default()),
            ShapeKind::Cube => ShapeParams::Cube(CubeParams::default()),
            ShapeKind::Circle => ShapeParams::Circle(CircleParams::default()),
            ShapeKind::Cylinder => ShapeParams::Cylinder(CylinderParams::default()),
            ShapeKind::Cone => ShapeParams::Cone(ConeParams::default()),
            ShapeKind::UvSphere => ShapeParams::UvSphere(UvSphereParams::default()),
            ShapeKind::Icosphere => ShapeParams::Icosphere(IcosphereParams::default()),
            ShapeKind::Torus => ShapeParams::Torus(TorusParams::default()),
        }
    }

    /// Discriminator of this payload.
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeParams::Plane(_) => ShapeKind::Plane,
            ShapeParams::Cube(_) => ShapeKind::Cube,
            ShapeParams::Circle(_) => ShapeKind::Circle,
            ShapeParams::Cylinder(_) => ShapeKind::Cylinder,
            ShapeParams::Cone(_) => ShapeKind::Cone,
            ShapeParams::UvSphere(_) => ShapeKind::UvSphere,
            ShapeParams::Icosphere(_) => ShapeKind::Icosphere,
            ShapeParams::Torus(_) => ShapeKind::Torus,
        }
    }

    /// Returns a copy with every field inside its valid range.
    pub fn clamped(self) -> Self {
        match self {
            ShapeParams::Plane(p) => ShapeParams::Plane(p.clamped()),
            ShapeParams::Cube(p) => ShapeParams::Cube(p.clamped()),
            ShapeParams::Circle(p) => ShapeParams::Circle(p.clamped()),
            ShapeParams::Cylinder(p) => ShapeParams::Cylinder(p.clamped()),
            ShapeParams::Cone(p) => ShapeParams::Cone(p.clamped()),
            ShapeParams::UvSphere(p) => ShapeParams::UvSphere(p.clamped()),
            ShapeParams::Icosphere(p) => ShapeParams::Icosphere(p.clamped()),
            ShapeParams::Torus(p) => ShapeParams::Torus(p.clamped()),
        }
    }

    /// Length fields of the payload under their flat names.
    fn lengths(&self) -> Vec<(ParamField, f64)> {
        match self {
            ShapeParams::Plane(p) => vec![(ParamField::Height, p.size)],
            ShapeParams::Cube(p) => vec![(ParamField::Height, p.size)],
            ShapeParams::Circle(p) => vec![(ParamField::Radius, p.radius)],
            ShapeParams::Cylinder(p) => vec![
                (ParamField::Diameter1, p.diameter),
                (ParamField::Height, p.height),
            ],
            ShapeParams::Cone(p) => vec![
                (ParamField::Diameter1, p.diameter1),
                (ParamField::Diameter2, p.diameter2),
                (ParamField::Height, p.height),
            ],
            ShapeParams::UvSphere(p) => vec![(ParamField::Diameter1, p.diameter)],
            ShapeParams::Icosphere(p) => vec![(ParamField::Diameter1, p.diameter)],
            ShapeParams::Torus(p) => vec![
                (ParamField::Diameter1, p.major_radius),
                (ParamField::Diameter2, p.minor_radius),
            ],
        }
    }

    /// Rejects payloads carrying a NaN or infinite length.
    ///
    /// Must run before [`ShapeParams::clamped`], which turns NaN into zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use primitive_params::{ParamError, ParamField, ShapeParams, TorusParams};
    ///
    /// let torus = ShapeParams::Torus(TorusParams {
    ///     minor_radius: f64::INFINITY,
    ///     ..TorusParams::default()
    /// });
    /// assert!(matches!(
    ///     torus.validate(),
    ///     Err(ParamError::NonFinite { field: ParamField::Diameter2, .. })
    /// ));
    /// ```
    pub fn validate(&self) -> Result<(), ParamError> {
        match self.lengths().into_iter().find(|(_, value)| !value.is_finite()) {
            Some((field, value)) => Err(ParamError::NonFinite { field, value }),
            None => Ok(()),
        }
    }

    /// Writes one flat field into the payload, clamping the result.
    ///
    /// Fields the kind does not use are rejected and leave the payload
    /// unchanged. `Smooth` is a record-level field and is rejected here.
    pub fn apply(&mut self, edit: ParamEdit) -> Result<(), ParamError> {
        let field = edit.field();
        if let Some(value) = edit.length() {
            if !value.is_finite() {
                return Err(ParamError::NonFinite { field, value });
            }
        }

        let kind = self.kind();
        let not_applicable = || ParamError::not_applicable(field, kind);

        match (&mut *self, edit) {
            (ShapeParams::Plane(p), ParamEdit::XSubdivisions(n)) => p.x_subdivisions = n,
            (ShapeParams::Plane(p), ParamEdit::YSubdivisions(n)) => p.y_subdivisions = n,
            (ShapeParams::Plane(p), ParamEdit::Height(v)) => p.size = v,

            (ShapeParams::Cube(p), ParamEdit::XSubdivisions(n)) => p.x_subdivisions = n,
            (ShapeParams::Cube(p), ParamEdit::YSubdivisions(n)) => p.y_subdivisions = n,
            (ShapeParams::Cube(p), ParamEdit::ZSubdivisions(n)) => p.z_subdivisions = n,
            (ShapeParams::Cube(p), ParamEdit::Height(v)) => p.size = v,

            (ShapeParams::Circle(p), ParamEdit::XSubdivisions(n)) => p.segments = n,
            (ShapeParams::Circle(p), ParamEdit::YSubdivisions(n)) => p.u_subdivisions = n,
            (ShapeParams::Circle(p), ParamEdit::CapType(c)) => p.cap = c,
            (ShapeParams::Circle(p), ParamEdit::Radius(v)) => p.radius = v,

            (ShapeParams::Cylinder(p), ParamEdit::XSubdivisions(n)) => p.segments = n,
            (ShapeParams::Cylinder(p), ParamEdit::YSubdivisions(n)) => p.u_subdivisions = n,
            (ShapeParams::Cylinder(p), ParamEdit::ZSubdivisions(n)) => p.v_subdivisions = n,
            (ShapeParams::Cylinder(p), ParamEdit::CapType(c)) => p.cap = c,
            (ShapeParams::Cylinder(p), ParamEdit::Diameter1(v)) => p.diameter = v,
            (ShapeParams::Cylinder(p), ParamEdit::Height(v)) => p.height = v,

            (ShapeParams::Cone(p), ParamEdit::XSubdivisions(n)) => p.segments = n,
            (ShapeParams::Cone(p), ParamEdit::YSubdivisions(n)) => p.u_subdivisions = n,
            (ShapeParams::Cone(p), ParamEdit::ZSubdivisions(n)) => p.v_subdivisions = n,
            (ShapeParams::Cone(p), ParamEdit::CapType(c)) => p.cap = c,
            (ShapeParams::Cone(p), ParamEdit::Diameter1(v)) => p.diameter1 = v,
            (ShapeParams::Cone(p), ParamEdit::Diameter2(v)) => p.diameter2 = v,
            (ShapeParams::Cone(p), ParamEdit::Height(v)) => p.height = v,

            (ShapeParams::UvSphere(p), ParamEdit::YSubdivisions(n)) => p.segments = n,
            (ShapeParams::UvSphere(p), ParamEdit::ZSubdivisions(n)) => p.rings = n,
            (ShapeParams::UvSphere(p), ParamEdit::Diameter1(v)) => p.diameter = v,

            (ShapeParams::Icosphere(p), ParamEdit::XSubdivisions(n)) => p.subdivisions = n,
            (ShapeParams::Icosphere(p), ParamEdit::Diameter1(v)) => p.diameter = v,

            (ShapeParams::Torus(p), ParamEdit::XSubdivisions(n)) => p.major_segments = n,
            (ShapeParams::Torus(p), ParamEdit::YSubdivisions(n)) => p.minor_segments = n,
            (ShapeParams::Torus(p), ParamEdit::Diameter1(v)) => p.major_radius = v,
            (ShapeParams::Torus(p), ParamEdit::Diameter2(v)) => p.minor_radius = v,

            _ => return Err(not_applicable()),
        }

        *self = self.clamped();
        Ok(())
    }
}

#[cfg(test)]
mod tests;
