//! # Cube Primitive
//!
//! Generates the plain 8-vertex cube. Subdivision is applied afterwards.

use crate::mesh::Mesh;
use glam::{DVec2, DVec3};

/// Corner loops per face, counter-clockwise seen from outside.
const CUBE_FACES: [[u32; 4]; 6] = [
    [0, 3, 2, 1], // -Z
    [4, 5, 6, 7], // +Z
    [0, 1, 5, 4], // -Y
    [2, 3, 7, 6], // +Y
    [0, 4, 7, 3], // -X
    [1, 2, 6, 5], // +X
];

/// Creates a cube of side `size` centered on the origin.
///
/// Each face is one quad with its own [0, 1]² UV square.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::create_cube;
///
/// let mesh = create_cube(2.0);
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.edge_count(), 12);
/// assert_eq!(mesh.face_count(), 6);
/// ```
pub fn create_cube(size: f64) -> Mesh {
    let h = size / 2.0;
    let mut mesh = Mesh::with_capacity(8, 6);

    // Bottom ring then top ring
    for z in [-h, h] {
        mesh.add_vertex(DVec3::new(-h, -h, z));
        mesh.add_vertex(DVec3::new(h, -h, z));
        mesh.add_vertex(DVec3::new(h, h, z));
        mesh.add_vertex(DVec3::new(-h, h, z));
    }

    let uvs = [
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(0.0, 1.0),
    ];
    for face in CUBE_FACES {
        mesh.add_face(face.to_vec(), uvs.to_vec());
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cube_basic() {
        let mesh = create_cube(1.0);
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.edge_count(), 12);
        assert_eq!(mesh.face_count(), 6);
        assert!(mesh.validate());
    }

    #[test]
    fn test_cube_is_closed() {
        let mesh = create_cube(1.0);
        assert_eq!(mesh.non_manifold_edge_count(), 0);
    }

    #[test]
    fn test_cube_normals_point_outward() {
        let mesh = create_cube(2.0);
        for i in 0..mesh.face_count() {
            let outward = mesh.face_center(i).normalize();
            assert_relative_eq!(mesh.face_normal(i).dot(outward), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cube_bounds() {
        let (min, max) = create_cube(3.0).bounding_box();
        assert_eq!(min, DVec3::splat(-1.5));
        assert_eq!(max, DVec3::splat(1.5));
    }

    #[test]
    fn test_zero_size_cube_is_well_formed() {
        let mesh = create_cube(0.0);
        assert_eq!(mesh.vertex_count(), 8);
        assert!(mesh.validate());
    }
}
