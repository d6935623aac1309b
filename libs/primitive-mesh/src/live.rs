//! # Live Primitives
//!
//! A mesh paired with the parameter record it was generated from. While the
//! record is live, every edit rebuilds the mesh from scratch; once it is
//! permanent the mesh is left alone.

use crate::error::MeshError;
use crate::from_params::generate_with;
use crate::mesh::Mesh;
use config::constants::GeneratorConfig;
use primitive_params::{ParamEdit, ParameterRecord, ShapeParams};

/// A mesh with optional primitive parameters.
///
/// A mesh without a record is a plain mesh and cannot be regenerated.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::PrimitiveMesh;
/// use primitive_params::{CubeParams, ParamEdit, ParameterRecord, ShapeParams};
///
/// let record = ParameterRecord::new(ShapeParams::Cube(CubeParams::default())).unwrap();
/// let mut cube = PrimitiveMesh::new_live(record).unwrap();
/// cube.apply(ParamEdit::XSubdivisions(3)).unwrap();
/// assert_eq!(cube.geometry().vertex_count(), 12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveMesh {
    geometry: Mesh,
    record: Option<ParameterRecord>,
    config: GeneratorConfig,
}

impl PrimitiveMesh {
    /// Generates the mesh for `record` and keeps both together.
    pub fn new_live(record: ParameterRecord) -> Result<Self, MeshError> {
        Self::new_live_with(record, GeneratorConfig::default())
    }

    /// Like [`PrimitiveMesh::new_live`] with explicit tolerances.
    pub fn new_live_with(record: ParameterRecord, config: GeneratorConfig) -> Result<Self, MeshError> {
        let geometry = generate_with(&record, &config)?;
        Ok(Self {
            geometry,
            record: Some(record),
            config,
        })
    }

    /// Wraps a mesh that has no primitive parameters.
    pub fn plain(geometry: Mesh) -> Self {
        Self {
            geometry,
            record: None,
            config: GeneratorConfig::default(),
        }
    }

    /// Current geometry.
    #[inline]
    pub fn geometry(&self) -> &Mesh {
        &self.geometry
    }

    /// Geometry for manual editing. Edits on a live primitive are lost at
    /// the next regeneration.
    #[inline]
    pub fn geometry_mut(&mut self) -> &mut Mesh {
        &mut self.geometry
    }

    /// Parameter record, if any.
    #[inline]
    pub fn record(&self) -> Option<&ParameterRecord> {
        self.record.as_ref()
    }

    /// True when a live record drives the geometry.
    pub fn is_live(&self) -> bool {
        self.record.map_or(false, |r| r.is_enabled())
    }

    /// Rebuilds the geometry from the record, discarding manual edits.
    ///
    /// The new mesh is built completely before it replaces the old one, so
    /// a failure leaves the current geometry untouched.
    ///
    /// # Errors
    ///
    /// `MissingRecord` for plain meshes, `Permanent` for frozen records.
    pub fn regenerate(&mut self) -> Result<(), MeshError> {
        let record = self.record.ok_or(MeshError::MissingRecord)?;
        if !record.is_enabled() {
            return Err(MeshError::Permanent);
        }
        let geometry = generate_with(&record, &self.config)?;
        log::debug!(
            "regenerated {}: {} vertices, {} edges, {} faces",
            record.kind(),
            geometry.vertex_count(),
            geometry.edge_count(),
            geometry.face_count()
        );
        self.geometry = geometry;
        Ok(())
    }

    /// Writes one parameter and regenerates.
    ///
    /// On a permanent record the value is stored but the geometry is kept
    /// and `Permanent` is returned.
    pub fn apply(&mut self, edit: ParamEdit) -> Result<(), MeshError> {
        let record = self.record.as_mut().ok_or(MeshError::MissingRecord)?;
        record.set(edit)?;
        if !record.is_enabled() {
            log::warn!(
                "{} was not regenerated: primitive is permanent",
                edit.field()
            );
            return Err(MeshError::Permanent);
        }
        self.regenerate()
    }

    /// Replaces the whole shape payload and regenerates.
    ///
    /// Same permanence rules as [`PrimitiveMesh::apply`].
    pub fn set_shape(&mut self, shape: ShapeParams) -> Result<(), MeshError> {
        let record = self.record.as_mut().ok_or(MeshError::MissingRecord)?;
        record.set_shape(shape)?;
        if !record.is_enabled() {
            log::warn!("{} was not regenerated: primitive is permanent", shape.kind());
            return Err(MeshError::Permanent);
        }
        self.regenerate()
    }

    /// Freezes the record so the geometry can be edited freely.
    ///
    /// Returns false if it was already permanent.
    pub fn make_permanent(&mut self) -> Result<bool, MeshError> {
        let record = self.record.as_mut().ok_or(MeshError::MissingRecord)?;
        let changed = record.make_permanent();
        if changed {
            log::debug!("{} made permanent", record.kind());
        }
        Ok(changed)
    }
}
