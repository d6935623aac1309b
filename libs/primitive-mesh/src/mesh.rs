//! # Mesh Data Structure
//!
//! Polygon mesh with vertices, deduplicated edges and faces carrying
//! per-corner UVs and a smooth shading flag.

use crate::error::MeshError;
use glam::{DMat4, DVec2, DVec3};
use std::collections::HashMap;

/// A polygon face.
///
/// `verts` is the vertex loop, counter-clockwise seen from outside.
/// `uvs` holds one texture coordinate per corner, in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub verts: Vec<u32>,
    pub uvs: Vec<DVec2>,
    pub smooth: bool,
}

impl Face {
    /// Number of corners.
    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Returns true if the face has no corners.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Iterates the face's boundary as `(from, to)` vertex pairs.
    pub fn boundary(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let n = self.verts.len();
        (0..n).map(move |i| (self.verts[i], self.verts[(i + 1) % n]))
    }
}

/// A polygon mesh.
///
/// All geometry calculations use f64. Export to f32 only happens through
/// [`Mesh::vertices_f32`] for GPU upload. Edges are unique per unordered
/// vertex pair and stay in insertion order, so building the same mesh twice
/// gives identical buffers.
///
/// Edges may exist without faces (an open circle is a ring of loose edges).
///
/// # Example
///
/// ```rust
/// use primitive_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_face(vec![0, 1, 2], Vec::new());
/// assert_eq!(mesh.edge_count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Edges as stored, first vertex is the one they were created from
    edges: Vec<[u32; 2]>,
    /// Unordered vertex pair to edge index
    edge_lookup: HashMap<(u32, u32), u32>,
    /// Polygon faces
    faces: Vec<Face>,
}

fn edge_key(a: u32, b: u32) -> (u32, u32) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            edges: Vec::with_capacity(vertex_count + face_count),
            edge_lookup: HashMap::with_capacity(vertex_count + face_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds the edge `a`-`b` unless it already exists. Returns its index.
    pub fn add_edge(&mut self, a: u32, b: u32) -> u32 {
        let next = self.edges.len() as u32;
        let index = *self.edge_lookup.entry(edge_key(a, b)).or_insert(next);
        if index == next {
            self.edges.push([a, b]);
        }
        index
    }

    /// Looks up the edge between two vertices, in either direction.
    pub fn find_edge(&self, a: u32, b: u32) -> Option<u32> {
        self.edge_lookup.get(&edge_key(a, b)).copied()
    }

    /// Adds a flat-shaded face and the edges around it. Returns its index.
    ///
    /// Missing UVs are filled with zero.
    pub fn add_face(&mut self, verts: Vec<u32>, mut uvs: Vec<DVec2>) -> usize {
        uvs.resize(verts.len(), DVec2::ZERO);
        let face = Face {
            verts,
            uvs,
            smooth: false,
        };
        self.push_face(face)
    }

    /// Adds a prepared face and the edges around it. Returns its index.
    pub fn push_face(&mut self, face: Face) -> usize {
        let n = face.verts.len();
        for i in 0..n {
            self.add_edge(face.verts[i], face.verts[(i + 1) % n]);
        }
        self.faces.push(face);
        self.faces.len() - 1
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the edges.
    #[inline]
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the edge at the given index.
    #[inline]
    pub fn edge(&self, index: u32) -> [u32; 2] {
        self.edges[index as usize]
    }

    /// Returns the face at the given index.
    #[inline]
    pub fn face(&self, index: usize) -> &Face {
        &self.faces[index]
    }

    /// Marks every face smooth or flat.
    pub fn set_smooth(&mut self, smooth: bool) {
        for face in &mut self.faces {
            face.smooth = smooth;
        }
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Face normal by Newell's method. Zero for degenerate faces.
    pub fn face_normal(&self, index: usize) -> DVec3 {
        let mut normal = DVec3::ZERO;
        for (a, b) in self.faces[index].boundary() {
            let p = self.vertices[a as usize];
            let q = self.vertices[b as usize];
            normal.x += (p.y - q.y) * (p.z + q.z);
            normal.y += (p.z - q.z) * (p.x + q.x);
            normal.z += (p.x - q.x) * (p.y + q.y);
        }
        normal.normalize_or_zero()
    }

    /// Centroid of a face's corners.
    pub fn face_center(&self, index: usize) -> DVec3 {
        let face = &self.faces[index];
        if face.is_empty() {
            return DVec3::ZERO;
        }
        let sum: DVec3 = face.verts.iter().map(|&v| self.vertices[v as usize]).sum();
        sum / face.len() as f64
    }

    /// Number of faces using each edge, indexed like [`Mesh::edges`].
    pub fn edge_face_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.edges.len()];
        for face in &self.faces {
            for (a, b) in face.boundary() {
                if let Some(edge) = self.find_edge(a, b) {
                    counts[edge as usize] += 1;
                }
            }
        }
        counts
    }

    /// Edges not shared by exactly two faces.
    ///
    /// Zero for a closed manifold surface. Loose and boundary edges count.
    pub fn non_manifold_edge_count(&self) -> usize {
        self.edge_face_counts().iter().filter(|&&c| c != 2).count()
    }

    /// Transforms all vertices by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Splits every face into a triangle fan from its first corner.
    pub fn triangulate(&self) -> Vec<[u32; 3]> {
        let mut triangles = Vec::with_capacity(self.faces.len() * 2);
        for face in &self.faces {
            for i in 1..face.len().saturating_sub(1) {
                triangles.push([face.verts[0], face.verts[i], face.verts[i + 1]]);
            }
        }
        triangles
    }

    /// Checks index ranges and face shape.
    ///
    /// Checks:
    /// - Every edge and face index is a valid vertex
    /// - No edge joins a vertex to itself
    /// - Faces have at least three corners, one UV per corner and no
    ///   repeated consecutive vertex
    /// - Every face side has an edge
    pub fn check(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len() as u32;

        if let Some(i) = self.vertices.iter().position(|v| !v.is_finite()) {
            return Err(MeshError::invalid_topology(format!(
                "vertex {} is not finite",
                i
            )));
        }

        for (i, edge) in self.edges.iter().enumerate() {
            if edge[0] >= vertex_count || edge[1] >= vertex_count {
                return Err(MeshError::invalid_topology(format!(
                    "edge {} references a missing vertex",
                    i
                )));
            }
            if edge[0] == edge[1] {
                return Err(MeshError::invalid_topology(format!(
                    "edge {} is a loop on vertex {}",
                    i, edge[0]
                )));
            }
        }

        for (i, face) in self.faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(MeshError::invalid_topology(format!(
                    "face {} has {} corners",
                    i,
                    face.len()
                )));
            }
            if face.uvs.len() != face.len() {
                return Err(MeshError::invalid_topology(format!(
                    "face {} has {} UVs for {} corners",
                    i,
                    face.uvs.len(),
                    face.len()
                )));
            }
            for (a, b) in face.boundary() {
                if a >= vertex_count || b >= vertex_count {
                    return Err(MeshError::invalid_topology(format!(
                        "face {} references a missing vertex",
                        i
                    )));
                }
                if a == b {
                    return Err(MeshError::invalid_topology(format!(
                        "face {} repeats vertex {}",
                        i, a
                    )));
                }
                if self.find_edge(a, b).is_none() {
                    return Err(MeshError::invalid_topology(format!(
                        "face {} side {}-{} has no edge",
                        i, a, b
                    )));
                }
            }
        }

        Ok(())
    }

    /// Validates the mesh for correctness.
    ///
    /// Returns true if [`Mesh::check`] passes.
    pub fn validate(&self) -> bool {
        self.check().is_ok()
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports triangulated indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangulate().into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_face(vec![0, 1, 2, 3], Vec::new());
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_edges_are_deduplicated() {
        let mut mesh = unit_square();
        assert_eq!(mesh.edge_count(), 4);
        assert_eq!(mesh.add_edge(1, 0), 0);
        assert_eq!(mesh.edge_count(), 4);
        assert_eq!(mesh.find_edge(3, 0), Some(3));
        assert_eq!(mesh.find_edge(0, 2), None);
    }

    #[test]
    fn test_add_face_fills_uvs() {
        let mesh = unit_square();
        assert_eq!(mesh.face(0).uvs, vec![DVec2::ZERO; 4]);
        assert!(!mesh.face(0).smooth);
    }

    #[test]
    fn test_face_normal() {
        let mesh = unit_square();
        let n = mesh.face_normal(0);
        assert_relative_eq!(n.z, 1.0, epsilon = 1e-12);
        assert_relative_eq!(mesh.face_center(0).x, 0.5);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_open_square_is_all_boundary() {
        let mesh = unit_square();
        assert_eq!(mesh.edge_face_counts(), vec![1, 1, 1, 1]);
        assert_eq!(mesh.non_manifold_edge_count(), 4);
    }

    #[test]
    fn test_triangulate_quad() {
        let mesh = unit_square();
        assert_eq!(mesh.triangulate(), vec![[0, 1, 2], [0, 2, 3]]);
        assert_eq!(mesh.indices_u32(), vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_set_smooth() {
        let mut mesh = unit_square();
        mesh.set_smooth(true);
        assert!(mesh.faces().iter().all(|f| f.smooth));
    }

    #[test]
    fn test_transform_and_translate() {
        let mut mesh = unit_square();
        mesh.translate(DVec3::new(0.0, 0.0, 2.0));
        mesh.transform(&DMat4::from_scale(DVec3::splat(2.0)));
        assert_eq!(mesh.vertex(2), DVec3::new(2.0, 2.0, 4.0));
    }

    #[test]
    fn test_validate_valid() {
        assert!(unit_square().validate());
    }

    #[test]
    fn test_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_face(vec![0, 1, 2], Vec::new());
        assert!(!mesh.validate());
        assert!(matches!(
            mesh.check(),
            Err(MeshError::InvalidTopology { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_two_corner_face() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_face(vec![0, 1], Vec::new());
        assert!(!mesh.validate());
    }

    #[test]
    fn test_check_rejects_non_finite_vertex() {
        let mut mesh = unit_square();
        mesh.add_vertex(DVec3::new(f64::INFINITY, 0.0, 0.0));
        assert_eq!(
            mesh.check(),
            Err(MeshError::invalid_topology("vertex 4 is not finite"))
        );
        let mut mesh = unit_square();
        mesh.add_vertex(DVec3::new(0.0, f64::NAN, 0.0));
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_vertices_f32() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.vertices_f32(), vec![1.0f32, 2.0, 3.0]);
    }
}
