//! # Cone Primitive
//!
//! Generates mesh for cylinder, cone and frustum shapes along Z.

use super::{disc_uv, ring_point, PrimitiveBuild};
use crate::mesh::Mesh;
use config::constants::approx_zero;
use glam::{DVec2, DVec3};
use primitive_params::CapType;

/// One end of the cone: a ring, or a single apex when the radius is zero.
enum End {
    Ring(Vec<u32>),
    Apex(u32),
}

fn build_end(mesh: &mut Mesh, segments: u32, radius: f64, z: f64) -> End {
    if approx_zero(radius) {
        End::Apex(mesh.add_vertex(DVec3::new(0.0, 0.0, z)))
    } else {
        End::Ring(
            (0..segments)
                .map(|j| mesh.add_vertex(ring_point(j, segments, radius, z)))
                .collect(),
        )
    }
}

/// Creates a cone of height `depth` centered on the origin along Z.
///
/// # Arguments
///
/// * `segments` - Number of segments around each ring
/// * `radius_bottom` - Radius at z = -depth/2, zero for an apex
/// * `radius_top` - Radius at z = depth/2, zero for an apex
/// * `depth` - Height along Z
/// * `cap` - Fill style of the ring ends; apex ends are never capped
///
/// Side quads are `[b_i, b_i+1, t_i+1, t_i]`. Triangle-fan centers are
/// returned bottom first.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::create_cone;
/// use primitive_params::CapType;
///
/// // Cylinder
/// let build = create_cone(8, 1.0, 1.0, 2.0, CapType::NGon);
/// assert_eq!(build.mesh.vertex_count(), 16);
/// assert_eq!(build.mesh.face_count(), 10);
///
/// // Cone, pointed at +Z
/// let build = create_cone(8, 1.0, 0.0, 2.0, CapType::TriangleFan);
/// assert_eq!(build.mesh.vertex_count(), 10);
/// assert_eq!(build.fan_centers.len(), 1);
/// ```
pub fn create_cone(
    segments: u32,
    radius_bottom: f64,
    radius_top: f64,
    depth: f64,
    cap: CapType,
) -> PrimitiveBuild {
    let n = segments.max(3);
    let (z_bottom, z_top) = (-depth / 2.0, depth / 2.0);
    let mut mesh = Mesh::with_capacity(2 * n as usize + 2, 3 * n as usize);

    let bottom = build_end(&mut mesh, n, radius_bottom, z_bottom);
    let top = build_end(&mut mesh, n, radius_top, z_top);

    let u = |j: usize| j as f64 / n as f64;
    let count = n as usize;

    // Sides
    match (&bottom, &top) {
        (End::Ring(b), End::Ring(t)) => {
            for j in 0..count {
                let k = (j + 1) % count;
                mesh.add_face(
                    vec![b[j], b[k], t[k], t[j]],
                    vec![
                        DVec2::new(u(j), 0.0),
                        DVec2::new(u(j + 1), 0.0),
                        DVec2::new(u(j + 1), 1.0),
                        DVec2::new(u(j), 1.0),
                    ],
                );
            }
        }
        (End::Ring(b), End::Apex(apex)) => {
            for j in 0..count {
                let k = (j + 1) % count;
                mesh.add_face(
                    vec![b[j], b[k], *apex],
                    vec![
                        DVec2::new(u(j), 0.0),
                        DVec2::new(u(j + 1), 0.0),
                        DVec2::new((u(j) + u(j + 1)) / 2.0, 1.0),
                    ],
                );
            }
        }
        (End::Apex(apex), End::Ring(t)) => {
            for j in 0..count {
                let k = (j + 1) % count;
                mesh.add_face(
                    vec![*apex, t[k], t[j]],
                    vec![
                        DVec2::new((u(j) + u(j + 1)) / 2.0, 0.0),
                        DVec2::new(u(j + 1), 1.0),
                        DVec2::new(u(j), 1.0),
                    ],
                );
            }
        }
        (End::Apex(a), End::Apex(b)) => {
            mesh.add_edge(*a, *b);
        }
    }

    // Caps
    let mut fan_centers = Vec::new();
    if let End::Ring(ring) = &bottom {
        if let Some(center) = add_cap(&mut mesh, ring, cap, radius_bottom, z_bottom, true) {
            fan_centers.push(center);
        }
    }
    if let End::Ring(ring) = &top {
        if let Some(center) = add_cap(&mut mesh, ring, cap, radius_top, z_top, false) {
            fan_centers.push(center);
        }
    }

    PrimitiveBuild { mesh, fan_centers }
}

/// Closes a ring. Bottom caps face -Z, top caps +Z. Returns the fan center.
fn add_cap(
    mesh: &mut Mesh,
    ring: &[u32],
    cap: CapType,
    radius: f64,
    z: f64,
    facing_down: bool,
) -> Option<u32> {
    let n = ring.len();
    match cap {
        CapType::None => None,
        CapType::NGon => {
            let mut loop_verts = ring.to_vec();
            if facing_down {
                loop_verts.reverse();
            }
            let uvs = loop_verts
                .iter()
                .map(|&v| disc_uv(mesh.vertex(v), radius))
                .collect();
            mesh.add_face(loop_verts, uvs);
            None
        }
        CapType::TriangleFan => {
            let center = mesh.add_vertex(DVec3::new(0.0, 0.0, z));
            for j in 0..n {
                let (a, b) = (ring[j], ring[(j + 1) % n]);
                let corners = if facing_down {
                    vec![center, b, a]
                } else {
                    vec![center, a, b]
                };
                let uvs = corners
                    .iter()
                    .map(|&v| disc_uv(mesh.vertex(v), radius))
                    .collect();
                mesh.add_face(corners, uvs);
            }
            Some(center)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_outward(mesh: &Mesh) {
        for i in 0..mesh.face_count() {
            let n = mesh.face_normal(i);
            let c = mesh.face_center(i);
            assert!(n.dot(c) > 0.0, "face {} points inward", i);
        }
    }

    #[test]
    fn test_open_cylinder() {
        let build = create_cone(12, 1.0, 1.0, 2.0, CapType::None);
        assert_eq!(build.mesh.vertex_count(), 24);
        assert_eq!(build.mesh.face_count(), 12);
        assert_eq!(build.mesh.edge_count(), 36);
        assert!(build.fan_centers.is_empty());
    }

    #[test]
    fn test_closed_cylinder_is_manifold() {
        let build = create_cone(12, 1.0, 1.0, 2.0, CapType::NGon);
        assert_eq!(build.mesh.non_manifold_edge_count(), 0);
        assert_outward(&build.mesh);
    }

    #[test]
    fn test_fan_cylinder() {
        let build = create_cone(6, 1.0, 1.0, 2.0, CapType::TriangleFan);
        assert_eq!(build.mesh.vertex_count(), 14);
        assert_eq!(build.mesh.face_count(), 18);
        assert_eq!(build.fan_centers, vec![12, 13]);
        assert_eq!(build.mesh.vertex(12), DVec3::new(0.0, 0.0, -1.0));
        assert_eq!(build.mesh.non_manifold_edge_count(), 0);
        assert_outward(&build.mesh);
    }

    #[test]
    fn test_cone_apex_is_single_vertex() {
        let build = create_cone(8, 1.0, 0.0, 2.0, CapType::NGon);
        assert_eq!(build.mesh.vertex_count(), 9);
        assert_eq!(build.mesh.face_count(), 9);
        assert_eq!(build.mesh.non_manifold_edge_count(), 0);
        assert_outward(&build.mesh);
    }

    #[test]
    fn test_inverted_cone() {
        let build = create_cone(8, 0.0, 1.0, 2.0, CapType::TriangleFan);
        assert_eq!(build.mesh.vertex(0), DVec3::new(0.0, 0.0, -1.0));
        assert_eq!(build.fan_centers, vec![9]);
        assert_outward(&build.mesh);
    }

    #[test]
    fn test_cone_height_is_centered() {
        let (min, max) = create_cone(8, 1.0, 0.5, 3.0, CapType::None).mesh.bounding_box();
        assert_relative_eq!(min.z, -1.5);
        assert_relative_eq!(max.z, 1.5);
    }

    #[test]
    fn test_both_apexes_leave_a_line() {
        let build = create_cone(8, 0.0, 0.0, 1.0, CapType::NGon);
        assert_eq!(build.mesh.vertex_count(), 2);
        assert_eq!(build.mesh.edge_count(), 1);
        assert_eq!(build.mesh.face_count(), 0);
    }
}
