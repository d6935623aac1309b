//! # Parameter Record
//!
//! The record attached to every changeable primitive: shape payload,
//! live/permanent flag and smooth shading flag.

use crate::error::ParamError;
use crate::kind::{CapType, ParamField, ShapeKind};
use crate::shapes::ShapeParams;
use serde::{Deserialize, Serialize};

/// A write to one flat field of a parameter record.
///
/// The variants mirror the flat field set the host panels edit. Which payload
/// field a variant lands in depends on the record's shape kind, e.g.
/// `XSubdivisions` is the segment count of a cylinder and the refinement
/// level of an icosphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ParamEdit {
    XSubdivisions(u32),
    YSubdivisions(u32),
    ZSubdivisions(u32),
    CapType(CapType),
    Radius(f64),
    Diameter1(f64),
    Diameter2(f64),
    Height(f64),
    Smooth(bool),
}

impl ParamEdit {
    /// The field this edit writes.
    pub fn field(&self) -> ParamField {
        match self {
            ParamEdit::XSubdivisions(_) => ParamField::XSubdivisions,
            ParamEdit::YSubdivisions(_) => ParamField::YSubdivisions,
            ParamEdit::ZSubdivisions(_) => ParamField::ZSubdivisions,
            ParamEdit::CapType(_) => ParamField::CapType,
            ParamEdit::Radius(_) => ParamField::Radius,
            ParamEdit::Diameter1(_) => ParamField::Diameter1,
            ParamEdit::Diameter2(_) => ParamField::Diameter2,
            ParamEdit::Height(_) => ParamField::Height,
            ParamEdit::Smooth(_) => ParamField::Smooth,
        }
    }

    /// The written length, for length fields.
    pub fn length(&self) -> Option<f64> {
        match *self {
            ParamEdit::Radius(v)
            | ParamEdit::Diameter1(v)
            | ParamEdit::Diameter2(v)
            | ParamEdit::Height(v) => Some(v),
            _ => None,
        }
    }
}

/// Parameters that travel with a generated mesh.
///
/// A record starts live. [`ParameterRecord::make_permanent`] is the only way
/// to freeze it and there is no way back. A frozen record still accepts
/// edits; it is up to the regeneration dispatch to refuse rebuilding.
///
/// # Example
///
/// ```rust
/// use primitive_params::{CylinderParams, ParamEdit, ParameterRecord, ShapeParams};
///
/// let mut record = ParameterRecord::new(ShapeParams::Cylinder(CylinderParams::default())).unwrap();
/// assert!(record.is_enabled());
///
/// record.set(ParamEdit::XSubdivisions(12)).unwrap();
/// record.make_permanent();
/// assert!(!record.is_enabled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRecord {
    shape: ShapeParams,
    enabled: bool,
    #[serde(default)]
    smooth: bool,
}

impl ParameterRecord {
    /// Creates a live record with flat shading. The payload is clamped.
    ///
    /// # Errors
    ///
    /// `NonFinite` if any length is NaN or infinite.
    pub fn new(shape: ShapeParams) -> Result<Self, ParamError> {
        shape.validate()?;
        Ok(Self {
            shape: shape.clamped(),
            enabled: true,
            smooth: false,
        })
    }

    /// Sets the smooth shading flag, builder style.
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    /// Shape kind of the payload.
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Shape payload.
    #[inline]
    pub fn shape(&self) -> &ShapeParams {
        &self.shape
    }

    /// True while the mesh is still derived from this record.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether generated faces are marked smooth.
    #[inline]
    pub fn is_smooth(&self) -> bool {
        self.smooth
    }

    /// Writes one flat field, clamping to the kind's minimums.
    ///
    /// Accepted whether the record is live or permanent.
    pub fn set(&mut self, edit: ParamEdit) -> Result<(), ParamError> {
        match edit {
            ParamEdit::Smooth(smooth) => {
                self.smooth = smooth;
                Ok(())
            }
            other => self.shape.apply(other),
        }
    }

    /// Replaces the whole payload, clamped. The kind may change.
    ///
    /// A payload with a non-finite length is rejected and the record is
    /// left unchanged.
    pub fn set_shape(&mut self, shape: ShapeParams) -> Result<(), ParamError> {
        shape.validate()?;
        self.shape = shape.clamped();
        Ok(())
    }

    /// Freezes the record. Returns false if it already was permanent.
    pub fn make_permanent(&mut self) -> bool {
        let was_enabled = self.enabled;
        self.enabled = false;
        was_enabled
    }

    pub(crate) fn from_parts(shape: ShapeParams, enabled: bool, smooth: bool) -> Self {
        Self {
            shape: shape.clamped(),
            enabled,
            smooth,
        }
    }
}
