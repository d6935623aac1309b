//! # UV Sphere Primitive
//!
//! Generates mesh for sphere shapes using latitude/longitude tessellation.

use crate::mesh::Mesh;
use glam::{DVec2, DVec3};
use std::f64::consts::{PI, TAU};

/// Creates a UV sphere centered on the origin.
///
/// # Arguments
///
/// * `segments` - Longitude segments around Z
/// * `rings` - Latitude bands from pole to pole
/// * `radius` - Sphere radius
///
/// # Algorithm
///
/// - One vertex at each pole
/// - `rings - 1` inner rings of `segments` vertices, ring k at polar angle
///   `PI * k / rings`
/// - Triangle fans at the poles, quads between inner rings
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::create_uv_sphere;
///
/// let mesh = create_uv_sphere(8, 4, 1.0);
/// assert_eq!(mesh.vertex_count(), 8 * 3 + 2);
/// assert_eq!(mesh.face_count(), 8 * 4);
/// ```
pub fn create_uv_sphere(segments: u32, rings: u32, radius: f64) -> Mesh {
    let (n, m) = (segments.max(3), rings.max(2));
    let mut mesh = Mesh::with_capacity((n * (m - 1) + 2) as usize, (n * m) as usize);

    let top = mesh.add_vertex(DVec3::new(0.0, 0.0, radius));
    for k in 1..m {
        let phi = PI * k as f64 / m as f64;
        let (ring_radius, z) = (radius * phi.sin(), radius * phi.cos());
        for j in 0..n {
            let theta = TAU * j as f64 / n as f64;
            mesh.add_vertex(DVec3::new(
                ring_radius * theta.cos(),
                ring_radius * theta.sin(),
                z,
            ));
        }
    }
    let bottom = mesh.add_vertex(DVec3::new(0.0, 0.0, -radius));

    // Inner ring k (1-based) vertex j
    let at = |k: u32, j: u32| 1 + (k - 1) * n + j % n;
    let uv = |k: u32, j: u32| DVec2::new(j as f64 / n as f64, 1.0 - k as f64 / m as f64);
    let pole_uv = |k: u32, j: u32| DVec2::new((j as f64 + 0.5) / n as f64, 1.0 - k as f64 / m as f64);

    for j in 0..n {
        mesh.add_face(
            vec![top, at(1, j), at(1, j + 1)],
            vec![pole_uv(0, j), uv(1, j), uv(1, j + 1)],
        );
    }

    for k in 1..m - 1 {
        for j in 0..n {
            mesh.add_face(
                vec![at(k, j), at(k + 1, j), at(k + 1, j + 1), at(k, j + 1)],
                vec![uv(k, j), uv(k + 1, j), uv(k + 1, j + 1), uv(k, j + 1)],
            );
        }
    }

    for j in 0..n {
        mesh.add_face(
            vec![bottom, at(m - 1, j + 1), at(m - 1, j)],
            vec![pole_uv(m, j), uv(m - 1, j + 1), uv(m - 1, j)],
        );
    }

    mesh
}
