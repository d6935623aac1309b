//! # Mesh Operation Tests
//!
//! Tests for subdivide_edges, spin, weld_vertices and weld_pairs.

use super::*;
use crate::mesh::Mesh;
use crate::primitives::{create_circle, create_cube, create_grid};
use approx::assert_relative_eq;
use glam::{DVec2, DVec3};
use primitive_params::CapType;
use std::f64::consts::TAU;

fn segment() -> Mesh {
    let mut mesh = Mesh::new();
    mesh.add_vertex(DVec3::ZERO);
    mesh.add_vertex(DVec3::new(3.0, 0.0, 0.0));
    mesh.add_edge(0, 1);
    mesh
}

// =============================================================================
// SELECTION
// =============================================================================

#[test]
fn test_select_axis_edges_on_cube() {
    let cube = create_cube(1.0);
    for axis in Axis::ALL {
        let edges = select_axis_edges(&cube, axis, 1e-10);
        assert_eq!(edges.len(), 4);
        for e in edges {
            let [a, b] = cube.edge(e);
            let span = axis.component(cube.vertex(a) - cube.vertex(b));
            assert_relative_eq!(span.abs(), 1.0);
        }
    }
}

#[test]
fn test_select_ignores_flat_edges() {
    let grid = create_grid(2, 2, 1.0);
    assert!(select_axis_edges(&grid, Axis::Z, 1e-10).is_empty());
}

// =============================================================================
// SUBDIVISION
// =============================================================================

#[test]
fn test_subdivide_loose_edge() {
    let mesh = subdivide_edges(&segment(), &[0], 2);
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.edge_count(), 3);
    assert_relative_eq!(mesh.vertex(2).x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(mesh.vertex(3).x, 2.0, epsilon = 1e-12);
    assert_eq!(mesh.edges(), &[[0, 2], [2, 3], [3, 1]]);
}

#[test]
fn test_subdivide_nothing_is_identity() {
    let cube = create_cube(1.0);
    assert_eq!(subdivide_edges(&cube, &[], 3), cube);
    assert_eq!(subdivide_edges(&cube, &[0, 1], 0), cube);
}

#[test]
fn test_out_of_range_edges_are_ignored() {
    let mesh = subdivide_edges(&segment(), &[0, 7], 1);
    assert_eq!(mesh.vertex_count(), 3);
}

#[test]
fn test_quad_strip_keeps_winding_and_uvs() {
    let grid = create_grid(1, 1, 1.0);
    let edges = select_axis_edges(&grid, Axis::X, 1e-10);
    let mesh = subdivide_edges(&grid, &edges, 1);

    assert_eq!(mesh.face_count(), 2);
    for i in 0..mesh.face_count() {
        assert_relative_eq!(mesh.face_normal(i).z, 1.0, epsilon = 1e-12);
    }
    // Left half spans u in [0, 0.5]
    let left = mesh.face(0);
    assert_eq!(left.uvs[0], DVec2::new(0.0, 0.0));
    assert_eq!(left.uvs[1], DVec2::new(0.5, 0.0));
    assert_eq!(left.uvs[2], DVec2::new(0.5, 1.0));
    assert_eq!(left.uvs[3], DVec2::new(0.0, 1.0));
}

#[test]
fn test_single_cut_side_is_threaded_into_face() {
    let grid = create_grid(1, 1, 1.0);
    let bottom = grid.find_edge(0, 1).unwrap();
    let mesh = subdivide_edges(&grid, &[bottom], 1);
    assert_eq!(mesh.face_count(), 1);
    assert_eq!(mesh.face(0).verts, vec![0, 4, 1, 3, 2]);
    assert_eq!(mesh.face(0).uvs[1], DVec2::new(0.5, 0.0));
    assert!(mesh.validate());
}

#[test]
fn test_fan_triangle_splits_into_rings() {
    let build = create_circle(4, 1.0, CapType::TriangleFan);
    let center = build.fan_centers[0];
    let spokes: Vec<u32> = (0..build.mesh.edge_count() as u32)
        .filter(|&e| build.mesh.edge(e).contains(&center))
        .collect();
    assert_eq!(spokes.len(), 4);

    let mesh = subdivide_edges(&build.mesh, &spokes, 1);
    assert_eq!(mesh.face_count(), 8);
    let tips: Vec<_> = mesh.faces().iter().filter(|f| f.len() == 3).collect();
    assert_eq!(tips.len(), 4);
    assert!(tips.iter().all(|f| f.verts[0] == center));
    for i in 0..mesh.face_count() {
        assert!(mesh.face_normal(i).z > 0.0);
    }
}

#[test]
fn test_subdivide_keeps_smooth_flag() {
    let mut grid = create_grid(1, 1, 1.0);
    grid.set_smooth(true);
    let edges = select_axis_edges(&grid, Axis::Y, 1e-10);
    let mesh = subdivide_edges(&grid, &edges, 3);
    assert_eq!(mesh.face_count(), 4);
    assert!(mesh.faces().iter().all(|f| f.smooth));
}

// =============================================================================
// SPIN
// =============================================================================

#[test]
fn test_spin_copies_profile() {
    let band = spin(&segment(), DVec3::Z, DVec3::ZERO, TAU / 4.0, 2);
    assert_eq!(band.vertex_count(), 6);
    assert_eq!(band.face_count(), 2);
    let end = band.vertex(5);
    assert_relative_eq!(end.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(end.y, 3.0, epsilon = 1e-12);
}

#[test]
fn test_spin_about_offset_center() {
    let mut point = Mesh::new();
    point.add_vertex(DVec3::new(2.0, 0.0, 0.0));
    let swept = spin(&point, DVec3::Z, DVec3::new(1.0, 0.0, 0.0), TAU / 2.0, 1);
    assert_relative_eq!(swept.vertex(1).x, 0.0, epsilon = 1e-12);
    assert_eq!(swept.face_count(), 0);
}

#[test]
fn test_spin_uvs_cover_unit_square() {
    let band = spin(&segment(), DVec3::Z, DVec3::ZERO, TAU, 4);
    let last = band.face(3);
    assert_eq!(last.uvs[1], DVec2::new(1.0, 0.0));
    assert_eq!(last.uvs[2], DVec2::new(1.0, 1.0));
}

// =============================================================================
// WELD
// =============================================================================

#[test]
fn test_weld_closes_full_spin() {
    let band = spin(&segment(), DVec3::Z, DVec3::ZERO, TAU, 4);
    assert_eq!(band.vertex_count(), 10);

    let seam = [0, 1, 8, 9];
    let welded = weld_vertices(&band, &seam, 1e-4);
    assert_eq!(welded.vertex_count(), 8);
    assert_eq!(welded.face_count(), 4);
    assert_eq!(welded.face(3).verts, vec![6, 0, 1, 7]);
    assert!(welded.validate());
}

#[test]
fn test_weld_ignores_non_candidates() {
    let mut mesh = Mesh::new();
    mesh.add_vertex(DVec3::ZERO);
    mesh.add_vertex(DVec3::ZERO);
    mesh.add_vertex(DVec3::X);
    mesh.add_edge(0, 1);
    mesh.add_edge(1, 2);

    let welded = weld_vertices(&mesh, &[2], 1e-4);
    assert_eq!(welded, mesh);
}

#[test]
fn test_weld_drops_collapsed_faces() {
    let mut mesh = Mesh::new();
    mesh.add_vertex(DVec3::ZERO);
    mesh.add_vertex(DVec3::new(1e-6, 0.0, 0.0));
    mesh.add_vertex(DVec3::Y);
    mesh.add_face(vec![0, 1, 2], Vec::new());

    let welded = weld_vertices(&mesh, &[0, 1], 1e-4);
    assert_eq!(welded.vertex_count(), 2);
    assert_eq!(welded.face_count(), 0);
    assert_eq!(welded.edge_count(), 1);
}

#[test]
fn test_weld_pairs_keeps_coincident_profile_vertices_apart() {
    let mut point = Mesh::new();
    point.add_vertex(DVec3::new(2.0, 0.0, 0.0));
    point.add_vertex(DVec3::new(2.0, 0.0, 0.0));
    point.add_edge(0, 1);
    let band = spin(&point, DVec3::Z, DVec3::ZERO, TAU, 4);

    // a candidate weld swallows the whole first copy
    assert_eq!(weld_vertices(&band, &[0, 1, 8, 9], 1e-4).vertex_count(), 7);

    let welded = weld_pairs(&band, &[(0, 8), (1, 9)], 1e-4);
    assert_eq!(welded.vertex_count(), 8);
    assert_eq!(welded.face_count(), 4);
    assert_eq!(welded.face(3).verts, vec![6, 0, 1, 7]);
    assert!(welded.validate());
}

#[test]
fn test_weld_pairs_skips_distant_and_invalid_pairs() {
    let band = spin(&segment(), DVec3::Z, DVec3::ZERO, TAU, 4);
    let welded = weld_pairs(&band, &[(0, 1), (2, 99)], 1e-4);
    assert_eq!(welded, band);
}
