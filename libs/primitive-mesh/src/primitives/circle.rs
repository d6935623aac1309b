//! # Circle Primitive
//!
//! Generates a flat regular polygon with an optional fill.

use super::{disc_uv, ring_point, PrimitiveBuild};
use crate::mesh::Mesh;
use glam::DVec3;
use primitive_params::CapType;

/// Creates a regular `segments`-gon of circumradius `radius` in the XY
/// plane, first vertex on +X.
///
/// - `CapType::None`: ring of loose edges, no faces
/// - `CapType::NGon`: one face over the ring
/// - `CapType::TriangleFan`: a center vertex, added after the ring, and one
///   triangle per segment; its index is returned in `fan_centers`
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::create_circle;
/// use primitive_params::CapType;
///
/// let build = create_circle(6, 1.0, CapType::TriangleFan);
/// assert_eq!(build.mesh.vertex_count(), 7);
/// assert_eq!(build.mesh.face_count(), 6);
/// assert_eq!(build.fan_centers, vec![6]);
/// ```
pub fn create_circle(segments: u32, radius: f64, cap: CapType) -> PrimitiveBuild {
    let n = segments.max(3);
    let mut mesh = Mesh::with_capacity(n as usize + 1, n as usize);
    let ring: Vec<u32> = (0..n)
        .map(|j| mesh.add_vertex(ring_point(j, n, radius, 0.0)))
        .collect();
    let uv = |mesh: &Mesh, v: u32| disc_uv(mesh.vertex(v), radius);

    let mut fan_centers = Vec::new();
    match cap {
        CapType::None => {
            for j in 0..n as usize {
                mesh.add_edge(ring[j], ring[(j + 1) % n as usize]);
            }
        }
        CapType::NGon => {
            let uvs = ring.iter().map(|&v| uv(&mesh, v)).collect();
            mesh.add_face(ring.clone(), uvs);
        }
        CapType::TriangleFan => {
            let center = mesh.add_vertex(DVec3::ZERO);
            for j in 0..n as usize {
                let (a, b) = (ring[j], ring[(j + 1) % n as usize]);
                let uvs = vec![uv(&mesh, center), uv(&mesh, a), uv(&mesh, b)];
                mesh.add_face(vec![center, a, b], uvs);
            }
            fan_centers.push(center);
        }
    }

    PrimitiveBuild { mesh, fan_centers }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec2;

    #[test]
    fn test_open_circle() {
        let build = create_circle(6, 1.0, CapType::None);
        assert_eq!(build.mesh.vertex_count(), 6);
        assert_eq!(build.mesh.edge_count(), 6);
        assert_eq!(build.mesh.face_count(), 0);
        assert!(build.fan_centers.is_empty());
    }

    #[test]
    fn test_ngon_circle() {
        let build = create_circle(6, 1.0, CapType::NGon);
        assert_eq!(build.mesh.face_count(), 1);
        assert_eq!(build.mesh.face(0).len(), 6);
        assert_relative_eq!(build.mesh.face_normal(0).z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fan_circle() {
        let build = create_circle(6, 1.0, CapType::TriangleFan);
        let mesh = &build.mesh;
        assert_eq!(mesh.vertex_count(), 7);
        assert_eq!(mesh.edge_count(), 12);
        assert!(mesh.faces().iter().all(|f| f.len() == 3));
        assert_eq!(mesh.vertex(build.fan_centers[0]), DVec3::ZERO);
        assert_eq!(mesh.face(0).uvs[0], DVec2::splat(0.5));
    }

    #[test]
    fn test_first_vertex_on_x() {
        let build = create_circle(8, 2.0, CapType::None);
        assert_relative_eq!(build.mesh.vertex(0).x, 2.0);
        assert_relative_eq!(build.mesh.vertex(0).y, 0.0);
    }
}
