//! # Edge Subdivision
//!
//! Inserts evenly spaced vertices into selected edges and re-splits the
//! faces around them.
//!
//! ## Face Patterns
//!
//! 1. Quad with two opposite sides cut: strip of `cuts + 1` quads
//! 2. Triangle with two sides cut: tip triangle at the shared corner plus
//!    `cuts` quads (concentric rings on a triangle fan)
//! 3. Anything else: cut vertices are inserted into the face loop

use super::Axis;
use crate::mesh::{Face, Mesh};
use glam::DVec2;
use std::collections::{HashMap, HashSet};

/// Selects the edges whose endpoints differ along `axis` by more than
/// `tolerance`.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::ops::{select_axis_edges, Axis};
/// use primitive_mesh::primitives::create_cube;
///
/// let cube = create_cube(2.0);
/// assert_eq!(select_axis_edges(&cube, Axis::X, 1e-10).len(), 4);
/// ```
pub fn select_axis_edges(mesh: &Mesh, axis: Axis, tolerance: f64) -> Vec<u32> {
    mesh.edges()
        .iter()
        .enumerate()
        .filter(|(_, [a, b])| {
            let span = axis.component(mesh.vertex(*a)) - axis.component(mesh.vertex(*b));
            span.abs() > tolerance
        })
        .map(|(i, _)| i as u32)
        .collect()
}

/// Cut vertices per selected edge, stored in the edge's own direction.
struct Cuts {
    chains: HashMap<u32, Vec<u32>>,
    count: u32,
}

impl Cuts {
    /// Cut vertices walking from `from` to `to`, if that side was cut.
    fn along(&self, mesh: &Mesh, from: u32, to: u32) -> Option<Vec<u32>> {
        let edge = mesh.find_edge(from, to)?;
        let chain = self.chains.get(&edge)?;
        if mesh.edge(edge)[0] == from {
            Some(chain.clone())
        } else {
            Some(chain.iter().rev().copied().collect())
        }
    }

    /// Parameter of the k-th cut (zero-based) from the side's start.
    fn t(&self, k: usize) -> f64 {
        (k + 1) as f64 / (self.count + 1) as f64
    }
}

/// Subdivides the given edges with `cuts` new vertices each.
///
/// Returns a new mesh. Vertices keep their indices, cut vertices are
/// appended in edge order. Faces keep their order, split faces are
/// replaced in place by their pieces, which inherit the smooth flag and
/// get interpolated UVs. Loose edges are split as well.
///
/// Out-of-range edge indices are ignored.
pub fn subdivide_edges(mesh: &Mesh, edges: &[u32], cuts: u32) -> Mesh {
    if cuts == 0 || edges.is_empty() {
        return mesh.clone();
    }

    let selected: HashSet<u32> = edges
        .iter()
        .copied()
        .filter(|&e| (e as usize) < mesh.edge_count())
        .collect();

    let added = selected.len() * cuts as usize;
    let mut out = Mesh::with_capacity(mesh.vertex_count() + added, mesh.face_count() * 2);
    for &v in mesh.vertices() {
        out.add_vertex(v);
    }

    let mut cut_map = Cuts {
        chains: HashMap::with_capacity(selected.len()),
        count: cuts,
    };
    for (i, &[a, b]) in mesh.edges().iter().enumerate() {
        let index = i as u32;
        if !selected.contains(&index) {
            continue;
        }
        let (pa, pb) = (mesh.vertex(a), mesh.vertex(b));
        let chain = (0..cuts as usize)
            .map(|k| out.add_vertex(pa.lerp(pb, cut_map.t(k))))
            .collect();
        cut_map.chains.insert(index, chain);
    }

    for (i, &[a, b]) in mesh.edges().iter().enumerate() {
        match cut_map.chains.get(&(i as u32)) {
            Some(chain) => {
                let mut prev = a;
                for &c in chain {
                    out.add_edge(prev, c);
                    prev = c;
                }
                out.add_edge(prev, b);
            }
            None => {
                out.add_edge(a, b);
            }
        }
    }

    for face in mesh.faces() {
        for piece in split_face(mesh, face, &cut_map) {
            out.push_face(piece);
        }
    }

    out
}

fn rotated<T: Clone>(items: &[T], start: usize) -> Vec<T> {
    let n = items.len();
    (0..n).map(|i| items[(start + i) % n].clone()).collect()
}

fn split_face(mesh: &Mesh, face: &Face, cuts: &Cuts) -> Vec<Face> {
    let n = face.len();
    let sides: Vec<Option<Vec<u32>>> = face
        .boundary()
        .map(|(a, b)| cuts.along(mesh, a, b))
        .collect();
    let cut_sides: Vec<usize> = (0..n).filter(|&i| sides[i].is_some()).collect();

    if cut_sides.is_empty() {
        return vec![face.clone()];
    }

    match (n, cut_sides.as_slice()) {
        (4, &[i, j]) if j == i + 2 => split_quad_strip(face, &sides, i),
        (3, &[i, j]) => {
            // The uncut side is the one not listed; its opposite corner is shared
            let uncut = 3 - i - j;
            split_triangle_fan(face, &sides, uncut, cuts)
        }
        _ => vec![insert_cuts(face, &sides, cuts)],
    }
}

fn piece(verts: Vec<u32>, uvs: Vec<DVec2>, smooth: bool) -> Face {
    Face { verts, uvs, smooth }
}

/// Quad whose sides `start` and `start + 2` are cut.
fn split_quad_strip(face: &Face, sides: &[Option<Vec<u32>>], start: usize) -> Vec<Face> {
    let q = rotated(&face.verts, start);
    let uv = rotated(&face.uvs, start);
    let near = sides[start].clone().unwrap_or_default();
    let far: Vec<u32> = sides[(start + 2) % 4]
        .iter()
        .flatten()
        .rev()
        .copied()
        .collect();

    // A runs q0 -> q1, B runs q3 -> q2
    let mut a = vec![q[0]];
    a.extend(&near);
    a.push(q[1]);
    let mut b = vec![q[3]];
    b.extend(&far);
    b.push(q[2]);

    let steps = a.len() - 1;
    let uv_at = |from: DVec2, to: DVec2, k: usize| from.lerp(to, k as f64 / steps as f64);

    (0..steps)
        .map(|k| {
            piece(
                vec![a[k], a[k + 1], b[k + 1], b[k]],
                vec![
                    uv_at(uv[0], uv[1], k),
                    uv_at(uv[0], uv[1], k + 1),
                    uv_at(uv[3], uv[2], k + 1),
                    uv_at(uv[3], uv[2], k),
                ],
                face.smooth,
            )
        })
        .collect()
}

/// Triangle cut on both sides next to the corner opposite side `uncut`.
fn split_triangle_fan(
    face: &Face,
    sides: &[Option<Vec<u32>>],
    uncut: usize,
    cuts: &Cuts,
) -> Vec<Face> {
    let start = (uncut + 2) % 3;
    let t = rotated(&face.verts, start);
    let uv = rotated(&face.uvs, start);
    let (c, a, b) = (t[0], t[1], t[2]);

    // Side c -> a is stored forward, side b -> c has to be reversed
    let mut a_chain = sides[start].clone().unwrap_or_default();
    a_chain.push(a);
    let mut b_chain: Vec<u32> = sides[(start + 2) % 3]
        .iter()
        .flatten()
        .rev()
        .copied()
        .collect();
    b_chain.push(b);

    let uv_a = |k: usize| uv[0].lerp(uv[1], cuts.t(k));
    let uv_b = |k: usize| uv[0].lerp(uv[2], cuts.t(k));

    let mut pieces = Vec::with_capacity(a_chain.len());
    pieces.push(piece(
        vec![c, a_chain[0], b_chain[0]],
        vec![uv[0], uv_a(0), uv_b(0)],
        face.smooth,
    ));
    for k in 0..a_chain.len() - 1 {
        pieces.push(piece(
            vec![a_chain[k], a_chain[k + 1], b_chain[k + 1], b_chain[k]],
            vec![uv_a(k), uv_a(k + 1), uv_b(k + 1), uv_b(k)],
            face.smooth,
        ));
    }
    pieces
}

/// Keeps the face whole and threads the cut vertices into its loop.
fn insert_cuts(face: &Face, sides: &[Option<Vec<u32>>], cuts: &Cuts) -> Face {
    let n = face.len();
    let mut verts = Vec::with_capacity(n * (cuts.count as usize + 1));
    let mut uvs = Vec::with_capacity(verts.capacity());
    for i in 0..n {
        verts.push(face.verts[i]);
        uvs.push(face.uvs[i]);
        if let Some(chain) = &sides[i] {
            let next_uv = face.uvs[(i + 1) % n];
            for (k, &v) in chain.iter().enumerate() {
                verts.push(v);
                uvs.push(face.uvs[i].lerp(next_uv, cuts.t(k)));
            }
        }
    }
    piece(verts, uvs, face.smooth)
}
