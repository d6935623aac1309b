//! # Spin
//!
//! Sweeps the edges of a profile around an axis.
//!
//! ## Algorithm
//!
//! 1. The profile is copied `steps + 1` times, copy `s` rotated by
//!    `angle * s / steps` about the axis through `center`
//! 2. Each profile edge `a-b` generates one quad per step,
//!    `[a_s, a_s+1, b_s+1, b_s]`
//!
//! A full turn leaves the last copy on top of the first one; the caller
//! welds them.

use crate::mesh::Mesh;
use glam::{DQuat, DVec2, DVec3};

/// Sweeps `profile` around `axis` through `angle` radians in `steps` steps.
///
/// Vertex `v` of copy `s` has index `s * profile.vertex_count() + v`.
/// UVs run along the sweep in `u` and along the profile edge order in `v`.
/// Profile faces are not swept.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{ops::spin, Mesh};
/// use glam::DVec3;
///
/// let mut line = Mesh::new();
/// line.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// line.add_vertex(DVec3::new(1.0, 0.0, 1.0));
/// line.add_edge(0, 1);
///
/// let band = spin(&line, DVec3::Z, DVec3::ZERO, std::f64::consts::PI, 4);
/// assert_eq!(band.vertex_count(), 10);
/// assert_eq!(band.face_count(), 4);
/// ```
pub fn spin(profile: &Mesh, axis: DVec3, center: DVec3, angle: f64, steps: u32) -> Mesh {
    let steps = steps.max(1);
    let axis = axis.try_normalize().unwrap_or(DVec3::Z);
    let stride = profile.vertex_count() as u32;
    let edge_total = profile.edge_count().max(1) as f64;

    let mut mesh = Mesh::with_capacity(
        profile.vertex_count() * (steps as usize + 1),
        profile.edge_count() * steps as usize,
    );

    for s in 0..=steps {
        let rotation = DQuat::from_axis_angle(axis, angle * s as f64 / steps as f64);
        for &p in profile.vertices() {
            mesh.add_vertex(center + rotation * (p - center));
        }
    }

    for s in 0..steps {
        let u0 = s as f64 / steps as f64;
        let u1 = (s + 1) as f64 / steps as f64;
        let (here, next) = (s * stride, (s + 1) * stride);
        for (e, &[a, b]) in profile.edges().iter().enumerate() {
            let v0 = e as f64 / edge_total;
            let v1 = (e + 1) as f64 / edge_total;
            mesh.add_face(
                vec![here + a, next + a, next + b, here + b],
                vec![
                    DVec2::new(u0, v0),
                    DVec2::new(u1, v0),
                    DVec2::new(u1, v1),
                    DVec2::new(u0, v1),
                ],
            );
        }
    }

    mesh
}
