//! # Primitives
//!
//! Raw mesh builders for the primitive shapes. Inputs are expected to be
//! clamped already; zero lengths give degenerate but well-formed meshes.

pub mod circle;
pub mod cone;
pub mod cube;
pub mod grid;
pub mod icosphere;
pub mod sphere;

pub use circle::create_circle;
pub use cone::create_cone;
pub use cube::create_cube;
pub use grid::create_grid;
pub use icosphere::create_icosphere;
pub use sphere::create_uv_sphere;

use crate::mesh::Mesh;
use glam::{DVec2, DVec3};

/// A built primitive plus the triangle-fan centers it created.
///
/// Fan centers are reported by index so later steps never have to search
/// for them by position.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveBuild {
    pub mesh: Mesh,
    pub fan_centers: Vec<u32>,
}

/// Planar UV of a point on a disc of `radius`, mapped into [0, 1]².
pub(crate) fn disc_uv(p: DVec3, radius: f64) -> DVec2 {
    if radius > 0.0 {
        DVec2::new(0.5 + p.x / (2.0 * radius), 0.5 + p.y / (2.0 * radius))
    } else {
        DVec2::splat(0.5)
    }
}

/// Point `j` of `segments` on a ring of `radius` at height `z`, starting on +X.
pub(crate) fn ring_point(j: u32, segments: u32, radius: f64, z: f64) -> DVec3 {
    let theta = std::f64::consts::TAU * j as f64 / segments as f64;
    DVec3::new(radius * theta.cos(), radius * theta.sin(), z)
}
