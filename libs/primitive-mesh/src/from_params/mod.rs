//! # Parameters to Mesh Conversion
//!
//! Builds the canonical mesh of a parameter record. Every call starts from
//! an empty buffer, so the result depends on the record alone.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::{select_axis_edges, spin, subdivide_edges, weld_pairs, Axis};
use crate::primitives::{
    create_circle, create_cone, create_cube, create_grid, create_icosphere, create_uv_sphere,
    PrimitiveBuild,
};
use config::constants::GeneratorConfig;
use glam::{DMat4, DVec3};
use primitive_params::{
    CapType, CircleParams, ConeParams, CubeParams, CylinderParams, ParameterRecord, ShapeParams,
    TorusParams,
};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Builds the mesh for a record with the default tolerances.
///
/// Live and permanent records are both accepted; refusing to rebuild a
/// permanent primitive is the caller's decision.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::generate;
/// use primitive_params::{CubeParams, ParameterRecord, ShapeParams};
///
/// let record = ParameterRecord::new(ShapeParams::Cube(CubeParams::default())).unwrap();
/// let mesh = generate(&record).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// ```
pub fn generate(record: &ParameterRecord) -> Result<Mesh, MeshError> {
    generate_with(record, &GeneratorConfig::default())
}

/// Builds the mesh for a record with explicit tolerances.
///
/// The payload is validated and clamped first, the shape smooth flag is
/// applied to every face last, and the result is checked before it is
/// returned.
pub fn generate_with(record: &ParameterRecord, config: &GeneratorConfig) -> Result<Mesh, MeshError> {
    record.shape().validate()?;
    let mut mesh = shape_to_mesh(&record.shape().clamped(), config);
    mesh.set_smooth(record.is_smooth());
    mesh.check()?;
    Ok(mesh)
}

/// Converts a shape payload to a mesh.
pub fn shape_to_mesh(shape: &ShapeParams, config: &GeneratorConfig) -> Mesh {
    match shape {
        ShapeParams::Plane(p) => create_grid(p.x_subdivisions, p.y_subdivisions, p.size),
        ShapeParams::Cube(p) => cube_to_mesh(p, config),
        ShapeParams::Circle(p) => circle_to_mesh(p),
        ShapeParams::Cylinder(p) => cylinder_to_mesh(p, config),
        ShapeParams::Cone(p) => cone_to_mesh(p, config),
        ShapeParams::UvSphere(p) => create_uv_sphere(p.segments, p.rings, p.diameter / 2.0),
        ShapeParams::Icosphere(p) => create_icosphere(p.subdivisions, p.diameter / 2.0),
        ShapeParams::Torus(p) => torus_to_mesh(p, config),
    }
}

/// Number of cuts for a subdivision value, where 2 means none.
fn cuts_for(subdivisions: u32) -> u32 {
    subdivisions.saturating_sub(2)
}

/// Cuts every edge spanning `axis`.
fn subdivide_axis(mesh: Mesh, axis: Axis, subdivisions: u32, config: &GeneratorConfig) -> Mesh {
    let cuts = cuts_for(subdivisions);
    if cuts == 0 {
        return mesh;
    }
    let edges = select_axis_edges(&mesh, axis, config.tolerance);
    subdivide_edges(&mesh, &edges, cuts)
}

/// Cuts the spokes of the triangle fans, adding concentric rings.
fn subdivide_fans(build: PrimitiveBuild, subdivisions: u32) -> Mesh {
    let PrimitiveBuild { mesh, fan_centers } = build;
    let cuts = cuts_for(subdivisions);
    if cuts == 0 || fan_centers.is_empty() {
        return mesh;
    }
    let spokes: Vec<u32> = mesh
        .edges()
        .iter()
        .enumerate()
        .filter(|(_, [a, b])| fan_centers.contains(a) || fan_centers.contains(b))
        .map(|(i, _)| i as u32)
        .collect();
    subdivide_edges(&mesh, &spokes, cuts)
}

fn cube_to_mesh(p: &CubeParams, config: &GeneratorConfig) -> Mesh {
    let axes = [
        (Axis::X, p.x_subdivisions),
        (Axis::Y, p.y_subdivisions),
        (Axis::Z, p.z_subdivisions),
    ];
    axes.into_iter()
        .fold(create_cube(p.size), |mesh, (axis, subdivisions)| {
            subdivide_axis(mesh, axis, subdivisions, config)
        })
}

fn circle_to_mesh(p: &CircleParams) -> Mesh {
    subdivide_fans(create_circle(p.segments, p.radius, p.cap), p.u_subdivisions)
}

fn cylinder_to_mesh(p: &CylinderParams, config: &GeneratorConfig) -> Mesh {
    let radius = p.diameter / 2.0;
    let build = create_cone(p.segments, radius, radius, p.height, p.cap);
    let mesh = subdivide_fans(build, p.u_subdivisions);
    subdivide_axis(mesh, Axis::Z, p.v_subdivisions, config)
}

fn cone_to_mesh(p: &ConeParams, config: &GeneratorConfig) -> Mesh {
    let build = create_cone(
        p.segments,
        p.diameter1 / 2.0,
        p.diameter2 / 2.0,
        p.height,
        p.cap,
    );
    let mesh = subdivide_fans(build, p.u_subdivisions);
    subdivide_axis(mesh, Axis::Z, p.v_subdivisions, config)
}

/// Tube profile stood up in the XZ plane, swept around Z and welded shut.
fn torus_to_mesh(p: &TorusParams, config: &GeneratorConfig) -> Mesh {
    let mut profile = create_circle(p.minor_segments, p.minor_radius, CapType::None).mesh;
    profile.transform(&DMat4::from_rotation_x(FRAC_PI_2));
    profile.translate(DVec3::new(p.major_radius, 0.0, 0.0));

    let swept = spin(&profile, DVec3::Z, DVec3::ZERO, TAU, p.major_segments);

    // The last profile copy lands on the first one
    let stride = profile.vertex_count() as u32;
    let last = p.major_segments.max(1) * stride;
    let seam: Vec<(u32, u32)> = (0..stride).map(|i| (i, last + i)).collect();
    weld_pairs(&swept, &seam, config.weld_distance)
}
