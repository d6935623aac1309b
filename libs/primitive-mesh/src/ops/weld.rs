//! # Vertex Welding
//!
//! Merges coincident vertices, typically the seam a full spin leaves behind.

use crate::mesh::{Face, Mesh};

/// Merges candidates closer than `distance` into the first one found.
///
/// Only vertices listed in `candidates` take part. Surviving vertices keep
/// their relative order and are renumbered. Faces drop repeated corners and
/// disappear when fewer than three remain; edges that collapse or become
/// duplicates are dropped.
pub fn weld_vertices(mesh: &Mesh, candidates: &[u32], distance: f64) -> Mesh {
    let count = mesh.vertex_count();
    let mut target: Vec<u32> = (0..count as u32).collect();
    let mut kept: Vec<u32> = Vec::new();

    for &c in candidates {
        if c as usize >= count || target[c as usize] != c || kept.contains(&c) {
            continue;
        }
        let p = mesh.vertex(c);
        match kept
            .iter()
            .find(|&&k| mesh.vertex(k).distance(p) <= distance)
        {
            Some(&k) => target[c as usize] = k,
            None => kept.push(c),
        }
    }

    rebuild(mesh, &target)
}

/// Merges the second vertex of each pair into the first when they lie
/// within `distance`.
///
/// Unlike [`weld_vertices`] a vertex only ever meets its partner, so a
/// sweep seam closes one to one even when a profile has coincident
/// vertices of its own.
pub fn weld_pairs(mesh: &Mesh, pairs: &[(u32, u32)], distance: f64) -> Mesh {
    let count = mesh.vertex_count();
    let mut target: Vec<u32> = (0..count as u32).collect();

    for &(keep, drop) in pairs {
        if keep as usize >= count || drop as usize >= count {
            continue;
        }
        let keep = root(&target, keep);
        if keep == drop || target[drop as usize] != drop {
            continue;
        }
        if mesh.vertex(keep).distance(mesh.vertex(drop)) <= distance {
            target[drop as usize] = keep;
        }
    }

    rebuild(mesh, &target)
}

fn root(target: &[u32], mut v: u32) -> u32 {
    while target[v as usize] != v {
        v = target[v as usize];
    }
    v
}

/// Rebuilds `mesh` with every vertex replaced by its merge root.
fn rebuild(mesh: &Mesh, target: &[u32]) -> Mesh {
    let count = mesh.vertex_count();
    let mut out = Mesh::with_capacity(count, mesh.face_count());
    let mut renumber = vec![0u32; count];
    for v in 0..count {
        if target[v] as usize == v {
            renumber[v] = out.add_vertex(mesh.vertices()[v]);
        }
    }
    let map = |v: u32| renumber[root(target, v) as usize];

    for &[a, b] in mesh.edges() {
        let (a, b) = (map(a), map(b));
        if a != b {
            out.add_edge(a, b);
        }
    }

    for face in mesh.faces() {
        let n = face.len();
        let mut verts = Vec::with_capacity(n);
        let mut uvs = Vec::with_capacity(n);
        for i in 0..n {
            let v = map(face.verts[i]);
            if verts.last() != Some(&v) {
                verts.push(v);
                uvs.push(face.uvs[i]);
            }
        }
        while verts.len() > 1 && verts.first() == verts.last() {
            verts.pop();
            uvs.pop();
        }
        if verts.len() >= 3 {
            out.push_face(Face {
                verts,
                uvs,
                smooth: face.smooth,
            });
        }
    }

    out
}
