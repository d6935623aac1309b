//! # Icosphere Primitive
//!
//! Generates a geodesic sphere by refining an icosahedron.
//!
//! ## Algorithm
//!
//! 1. Start from the 12-vertex icosahedron on the unit sphere
//! 2. Split every triangle 4:1 at its edge midpoints, pushing each midpoint
//!    back onto the unit sphere; shared midpoints are cached per edge
//! 3. Repeat `level - 1` times, then scale by the radius
//!
//! Level n has `20 * 4^(n-1)` faces.

use crate::mesh::Mesh;
use glam::{DVec2, DVec3};
use std::collections::HashMap;
use std::f64::consts::{PI, TAU};

/// Icosahedron faces, counter-clockwise seen from outside.
const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosahedron_vertices() -> Vec<DVec3> {
    let t = (1.0 + 5.0_f64.sqrt()) / 2.0;
    [
        (-1.0, t, 0.0),
        (1.0, t, 0.0),
        (-1.0, -t, 0.0),
        (1.0, -t, 0.0),
        (0.0, -1.0, t),
        (0.0, 1.0, t),
        (0.0, -1.0, -t),
        (0.0, 1.0, -t),
        (t, 0.0, -1.0),
        (t, 0.0, 1.0),
        (-t, 0.0, -1.0),
        (-t, 0.0, 1.0),
    ]
    .iter()
    .map(|&(x, y, z)| DVec3::new(x, y, z).normalize())
    .collect()
}

/// Spherical UV of a unit vector.
fn sphere_uv(p: DVec3) -> DVec2 {
    let u = 0.5 + p.y.atan2(p.x) / TAU;
    let v = 0.5 + p.z.clamp(-1.0, 1.0).asin() / PI;
    DVec2::new(u, v)
}

/// UVs for one triangle, unwrapped across the u = 0/1 seam.
fn face_uvs(points: [DVec3; 3]) -> Vec<DVec2> {
    let mut uvs: Vec<DVec2> = points.iter().map(|&p| sphere_uv(p)).collect();
    let (min_u, max_u) = uvs
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), uv| (lo.min(uv.x), hi.max(uv.x)));
    if max_u - min_u > 0.5 {
        for uv in &mut uvs {
            if uv.x < 0.5 {
                uv.x += 1.0;
            }
        }
    }
    uvs
}

/// Creates an icosphere of the given refinement `level` and `radius`.
///
/// Level 1 is the bare icosahedron.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::create_icosphere;
///
/// let mesh = create_icosphere(2, 1.0);
/// assert_eq!(mesh.vertex_count(), 42);
/// assert_eq!(mesh.face_count(), 80);
/// ```
pub fn create_icosphere(level: u32, radius: f64) -> Mesh {
    let mut unit = icosahedron_vertices();
    let mut faces: Vec<[u32; 3]> = ICOSAHEDRON_FACES.to_vec();

    for _ in 1..level.max(1) {
        let mut midpoints: HashMap<(u32, u32), u32> = HashMap::with_capacity(faces.len() * 3 / 2);
        let mut refined = Vec::with_capacity(faces.len() * 4);
        let mut midpoint = |a: u32, b: u32, unit: &mut Vec<DVec3>| -> u32 {
            let key = if a < b { (a, b) } else { (b, a) };
            *midpoints.entry(key).or_insert_with(|| {
                let p = (unit[a as usize] + unit[b as usize]).normalize();
                unit.push(p);
                (unit.len() - 1) as u32
            })
        };
        for &[a, b, c] in &faces {
            let ab = midpoint(a, b, &mut unit);
            let bc = midpoint(b, c, &mut unit);
            let ca = midpoint(c, a, &mut unit);
            refined.push([a, ab, ca]);
            refined.push([b, bc, ab]);
            refined.push([c, ca, bc]);
            refined.push([ab, bc, ca]);
        }
        faces = refined;
    }

    let mut mesh = Mesh::with_capacity(unit.len(), faces.len());
    for &p in &unit {
        mesh.add_vertex(p * radius);
    }
    for &[a, b, c] in &faces {
        let uvs = face_uvs([unit[a as usize], unit[b as usize], unit[c as usize]]);
        mesh.add_face(vec![a, b, c], uvs);
    }

    mesh
}
