//! # Shape Kinds and Fields
//!
//! Discriminators shared by the parameter record, the generators and the
//! host panels.

use crate::error::ParamError;
use config::constants::{
    MAX_ICOSPHERE_LEVEL, MIN_CUBE_SUBDIVISIONS, MIN_ICOSPHERE_LEVEL, MIN_PLANE_SUBDIVISIONS,
    MIN_RING_SUBDIVISIONS, MIN_SEGMENTS, MIN_SPHERE_RINGS, MIN_TORUS_SEGMENTS,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Implemented primitive kinds.
///
/// The legacy vocabulary also names `TUBE` and `ARC`; they have no generator
/// and are rejected when parsed.
///
/// # Example
///
/// ```rust
/// use primitive_params::{ParamError, ShapeKind};
///
/// assert_eq!("CYLINDER".parse::<ShapeKind>(), Ok(ShapeKind::Cylinder));
/// assert_eq!(
///     "TUBE".parse::<ShapeKind>(),
///     Err(ParamError::Unimplemented("TUBE".to_string()))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Plane,
    Cube,
    Circle,
    Cylinder,
    Cone,
    UvSphere,
    Icosphere,
    Torus,
}

/// Legacy kind names reserved for shapes that were declared but never built.
const RESERVED_KINDS: [&str; 2] = ["TUBE", "ARC"];

impl ShapeKind {
    /// All implemented kinds in menu order.
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Plane,
        ShapeKind::Cube,
        ShapeKind::Circle,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::UvSphere,
        ShapeKind::Icosphere,
        ShapeKind::Torus,
    ];

    /// Name stored in the legacy flat settings.
    pub fn legacy_name(self) -> &'static str {
        match self {
            ShapeKind::Plane => "PLANE",
            ShapeKind::Cube => "CUBE",
            ShapeKind::Circle => "CIRCLE",
            ShapeKind::Cylinder => "CYLINDER",
            ShapeKind::Cone => "CONE",
            ShapeKind::UvSphere => "SPHERE",
            ShapeKind::Icosphere => "ICOSPHERE",
            ShapeKind::Torus => "TORUS",
        }
    }

    /// Name given to the host object created for this kind.
    pub fn default_object_name(self) -> &'static str {
        match self {
            ShapeKind::Plane => "Plane",
            ShapeKind::Cube => "Cube",
            ShapeKind::Circle => "Circle",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Cone => "Cone",
            ShapeKind::UvSphere => "Sphere",
            ShapeKind::Icosphere => "Icosphere",
            ShapeKind::Torus => "Torus",
        }
    }

    /// Editable fields of this kind, in panel order, with their labels.
    ///
    /// # Example
    ///
    /// ```rust
    /// use primitive_params::{ParamField, ShapeKind};
    ///
    /// let fields = ShapeKind::Circle.fields();
    /// assert_eq!(fields[0].field, ParamField::XSubdivisions);
    /// assert_eq!(fields[0].label, "Segments");
    /// assert_eq!(fields[0].minimum, Some(3));
    /// ```
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            ShapeKind::Plane => PLANE_FIELDS,
            ShapeKind::Cube => CUBE_FIELDS,
            ShapeKind::Circle => CIRCLE_FIELDS,
            ShapeKind::Cylinder => CYLINDER_FIELDS,
            ShapeKind::Cone => CONE_FIELDS,
            ShapeKind::UvSphere => UV_SPHERE_FIELDS,
            ShapeKind::Icosphere => ICOSPHERE_FIELDS,
            ShapeKind::Torus => TORUS_FIELDS,
        }
    }

    /// Upper bound for an integer field, where one exists.
    pub fn maximum(self, field: ParamField) -> Option<u32> {
        match (self, field) {
            (ShapeKind::Icosphere, ParamField::XSubdivisions) => Some(MAX_ICOSPHERE_LEVEL),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Plane => "Plane",
            ShapeKind::Cube => "Cube",
            ShapeKind::Circle => "Circle",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Cone => "Cone",
            ShapeKind::UvSphere => "UV Sphere",
            ShapeKind::Icosphere => "Icosphere",
            ShapeKind::Torus => "Torus",
        };
        f.write_str(name)
    }
}

impl FromStr for ShapeKind {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        if upper == "UV_SPHERE" {
            return Ok(ShapeKind::UvSphere);
        }
        if let Some(kind) = ShapeKind::ALL.iter().find(|k| k.legacy_name() == upper) {
            return Ok(*kind);
        }
        if RESERVED_KINDS.contains(&upper.as_str()) {
            log::warn!("primitive kind {} is declared but has no generator", upper);
            return Err(ParamError::Unimplemented(upper));
        }
        Err(ParamError::UnknownKind(s.to_string()))
    }
}

const PLANE_FIELDS: &[FieldSpec] = &[
    FieldSpec::count(ParamField::XSubdivisions, "X Subdivisions", MIN_PLANE_SUBDIVISIONS),
    FieldSpec::count(ParamField::YSubdivisions, "Y Subdivisions", MIN_PLANE_SUBDIVISIONS),
    FieldSpec::value(ParamField::Height, "Size"),
    FieldSpec::value(ParamField::Smooth, "Smooth Shading"),
];

const CUBE_FIELDS: &[FieldSpec] = &[
    FieldSpec::count(ParamField::XSubdivisions, "X Subdivisions", MIN_CUBE_SUBDIVISIONS),
    FieldSpec::count(ParamField::YSubdivisions, "Y Subdivisions", MIN_CUBE_SUBDIVISIONS),
    FieldSpec::count(ParamField::ZSubdivisions, "Z Subdivisions", MIN_CUBE_SUBDIVISIONS),
    FieldSpec::value(ParamField::Height, "Size"),
    FieldSpec::value(ParamField::Smooth, "Smooth Shading"),
];

const CIRCLE_FIELDS: &[FieldSpec] = &[
    FieldSpec::count(ParamField::XSubdivisions, "Segments", MIN_SEGMENTS),
    FieldSpec::count(ParamField::YSubdivisions, "U Subdivisions", MIN_RING_SUBDIVISIONS),
    FieldSpec::value(ParamField::CapType, "Cap Type"),
    FieldSpec::value(ParamField::Radius, "Radius"),
    FieldSpec::value(ParamField::Smooth, "Smooth Shading"),
];

const CYLINDER_FIELDS: &[FieldSpec] = &[
    FieldSpec::count(ParamField::XSubdivisions, "Segments", MIN_SEGMENTS),
    FieldSpec::count(ParamField::YSubdivisions, "U Subdivisions", MIN_RING_SUBDIVISIONS),
    FieldSpec::count(ParamField::ZSubdivisions, "V Subdivisions", MIN_RING_SUBDIVISIONS),
    FieldSpec::value(ParamField::CapType, "Cap Type"),
    FieldSpec::value(ParamField::Diameter1, "Diameter"),
    FieldSpec::value(ParamField::Height, "Height"),
    FieldSpec::value(ParamField::Smooth, "Smooth Shading"),
];

const CONE_FIELDS: &[FieldSpec] = &[
    FieldSpec::count(ParamField::XSubdivisions, "Segments", MIN_SEGMENTS),
    FieldSpec::count(ParamField::YSubdivisions, "U Subdivisions", MIN_RING_SUBDIVISIONS),
    FieldSpec::count(ParamField::ZSubdivisions, "V Subdivisions", MIN_RING_SUBDIVISIONS),
    FieldSpec::value(ParamField::CapType, "Cap Type"),
    FieldSpec::value(ParamField::Diameter1, "Diameter 1"),
    FieldSpec::value(ParamField::Diameter2, "Diameter 2"),
    FieldSpec::value(ParamField::Height, "Height"),
    FieldSpec::value(ParamField::Smooth, "Smooth Shading"),
];

const UV_SPHERE_FIELDS: &[FieldSpec] = &[
    FieldSpec::count(ParamField::YSubdivisions, "Segments", MIN_SEGMENTS),
    FieldSpec::count(ParamField::ZSubdivisions, "Rings", MIN_SPHERE_RINGS),
    FieldSpec::value(ParamField::Diameter1, "Diameter"),
    FieldSpec::value(ParamField::Smooth, "Smooth Shading"),
];

const ICOSPHERE_FIELDS: &[FieldSpec] = &[
    FieldSpec::count(ParamField::XSubdivisions, "Subdivisions", MIN_ICOSPHERE_LEVEL),
    FieldSpec::value(ParamField::Diameter1, "Diameter"),
    FieldSpec::value(ParamField::Smooth, "Smooth Shading"),
];

const TORUS_FIELDS: &[FieldSpec] = &[
    FieldSpec::count(ParamField::XSubdivisions, "Major Segments", MIN_TORUS_SEGMENTS),
    FieldSpec::count(ParamField::YSubdivisions, "Minor Segments", MIN_TORUS_SEGMENTS),
    FieldSpec::value(ParamField::Diameter1, "Major Radius"),
    FieldSpec::value(ParamField::Diameter2, "Minor Radius"),
    FieldSpec::value(ParamField::Smooth, "Smooth Shading"),
];

/// How the open ends of circular profiles are closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapType {
    /// Open ring, no faces.
    #[default]
    None,
    /// Triangles fanned out from a center vertex.
    TriangleFan,
    /// A single n-gon.
    NGon,
}

impl CapType {
    /// Name stored in the legacy flat settings.
    pub fn legacy_name(self) -> &'static str {
        match self {
            CapType::None => "NONE",
            CapType::TriangleFan => "TRI",
            CapType::NGon => "FACE",
        }
    }
}

impl FromStr for CapType {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NONE" => Ok(CapType::None),
            "TRI" | "TRIFAN" | "TRIANGLE_FAN" => Ok(CapType::TriangleFan),
            "FACE" | "NGON" => Ok(CapType::NGon),
            _ => Err(ParamError::UnknownCapType(s.to_string())),
        }
    }
}

/// Flat field names of the parameter record, as the host panels know them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamField {
    XSubdivisions,
    YSubdivisions,
    ZSubdivisions,
    CapType,
    Radius,
    Diameter1,
    Diameter2,
    Height,
    Smooth,
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamField::XSubdivisions => "x_subdivisions",
            ParamField::YSubdivisions => "y_subdivisions",
            ParamField::ZSubdivisions => "z_subdivisions",
            ParamField::CapType => "cap_type",
            ParamField::Radius => "radius",
            ParamField::Diameter1 => "diameter1",
            ParamField::Diameter2 => "diameter2",
            ParamField::Height => "height",
            ParamField::Smooth => "use_smooth_shading",
        };
        f.write_str(name)
    }
}

/// Panel description of one editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Flat field edited by this entry.
    pub field: ParamField,
    /// Label shown next to the widget.
    pub label: &'static str,
    /// Integer minimum, for count fields.
    pub minimum: Option<u32>,
}

impl FieldSpec {
    const fn count(field: ParamField, label: &'static str, minimum: u32) -> Self {
        Self {
            field,
            label,
            minimum: Some(minimum),
        }
    }

    const fn value(field: ParamField, label: &'static str) -> Self {
        Self {
            field,
            label,
            minimum: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_names_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.legacy_name().parse::<ShapeKind>(), Ok(kind));
        }
        assert_eq!("uv_sphere".parse::<ShapeKind>(), Ok(ShapeKind::UvSphere));
    }

    #[test]
    fn test_reserved_kinds_are_unimplemented() {
        assert_eq!(
            "arc".parse::<ShapeKind>(),
            Err(ParamError::Unimplemented("ARC".to_string()))
        );
    }

    #[test]
    fn test_unknown_kind() {
        assert_eq!(
            "teapot".parse::<ShapeKind>(),
            Err(ParamError::UnknownKind("teapot".to_string()))
        );
    }

    #[test]
    fn test_cap_type_parse() {
        assert_eq!("TRI".parse::<CapType>(), Ok(CapType::TriangleFan));
        assert_eq!("FACE".parse::<CapType>(), Ok(CapType::NGon));
        assert_eq!("none".parse::<CapType>(), Ok(CapType::None));
        assert!("lid".parse::<CapType>().is_err());
    }

    #[test]
    fn test_every_kind_offers_smooth_shading() {
        for kind in ShapeKind::ALL {
            assert!(kind.fields().iter().any(|f| f.field == ParamField::Smooth));
        }
    }

    #[test]
    fn test_cylinder_panel_labels() {
        let labels: Vec<_> = ShapeKind::Cylinder.fields().iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            vec![
                "Segments",
                "U Subdivisions",
                "V Subdivisions",
                "Cap Type",
                "Diameter",
                "Height",
                "Smooth Shading"
            ]
        );
    }

    #[test]
    fn test_icosphere_level_has_maximum() {
        assert_eq!(
            ShapeKind::Icosphere.maximum(ParamField::XSubdivisions),
            Some(MAX_ICOSPHERE_LEVEL)
        );
        assert_eq!(ShapeKind::Cube.maximum(ParamField::XSubdivisions), None);
    }
}
