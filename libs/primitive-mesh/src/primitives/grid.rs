//! # Grid Primitive
//!
//! Generates the subdivided plane.

use crate::mesh::Mesh;
use glam::{DVec2, DVec3};

/// Creates an `x_subdivisions × y_subdivisions` grid of quads.
///
/// The grid lies on the XY plane, centered on the origin, with side length
/// `size` and normals along +Z. UVs span [0, 1]².
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::create_grid;
///
/// let mesh = create_grid(2, 3, 1.0);
/// assert_eq!(mesh.vertex_count(), 12);
/// assert_eq!(mesh.face_count(), 6);
/// ```
pub fn create_grid(x_subdivisions: u32, y_subdivisions: u32, size: f64) -> Mesh {
    let (nx, ny) = (x_subdivisions.max(1), y_subdivisions.max(1));
    let cols = nx + 1;
    let mut mesh = Mesh::with_capacity(((nx + 1) * (ny + 1)) as usize, (nx * ny) as usize);

    let uv = |i: u32, j: u32| DVec2::new(i as f64 / nx as f64, j as f64 / ny as f64);

    for j in 0..=ny {
        for i in 0..=nx {
            let t = uv(i, j);
            mesh.add_vertex(DVec3::new((t.x - 0.5) * size, (t.y - 0.5) * size, 0.0));
        }
    }

    for j in 0..ny {
        for i in 0..nx {
            let v = j * cols + i;
            mesh.add_face(
                vec![v, v + 1, v + 1 + cols, v + cols],
                vec![uv(i, j), uv(i + 1, j), uv(i + 1, j + 1), uv(i, j + 1)],
            );
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grid_counts() {
        let mesh = create_grid(4, 2, 1.0);
        assert_eq!(mesh.vertex_count(), 15);
        assert_eq!(mesh.face_count(), 8);
        // 4 * 3 horizontal + 5 * 2 vertical
        assert_eq!(mesh.edge_count(), 22);
        assert!(mesh.validate());
    }

    #[test]
    fn test_grid_is_centered() {
        let mesh = create_grid(2, 2, 4.0);
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-2.0, -2.0, 0.0));
        assert_eq!(max, DVec3::new(2.0, 2.0, 0.0));
    }

    #[test]
    fn test_grid_faces_up() {
        let mesh = create_grid(1, 1, 1.0);
        assert_relative_eq!(mesh.face_normal(0).z, 1.0);
        assert_eq!(mesh.face(0).uvs[2], DVec2::ONE);
    }
}
