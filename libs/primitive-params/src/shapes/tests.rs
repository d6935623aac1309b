use super::*;
use crate::kind::ParamField;

#[test]
fn test_default_for_matches_kind() {
    for kind in ShapeKind::ALL {
        assert_eq!(ShapeParams::default_for(kind).kind(), kind);
    }
}

#[test]
fn test_cube_subdivisions_clamp_to_two() {
    let mut shape = ShapeParams::Cube(CubeParams::default());
    shape.apply(ParamEdit::XSubdivisions(0)).unwrap();
    match shape {
        ShapeParams::Cube(cube) => assert_eq!(cube.x_subdivisions, 2),
        other => panic!("unexpected payload {:?}", other),
    }
}

#[test]
fn test_negative_lengths_clamp_to_zero() {
    let mut shape = ShapeParams::Cylinder(CylinderParams::default());
    shape.apply(ParamEdit::Height(-3.0)).unwrap();
    match shape {
        ShapeParams::Cylinder(cyl) => assert_eq!(cyl.height, 0.0),
        other => panic!("unexpected payload {:?}", other),
    }
}

#[test]
fn test_icosphere_level_is_bounded() {
    let mut shape = ShapeParams::Icosphere(IcosphereParams::default());
    shape.apply(ParamEdit::XSubdivisions(40)).unwrap();
    assert_eq!(
        shape,
        ShapeParams::Icosphere(IcosphereParams {
            subdivisions: MAX_ICOSPHERE_LEVEL,
            ..IcosphereParams::default()
        })
    );

    shape.apply(ParamEdit::XSubdivisions(0)).unwrap();
    assert_eq!(
        shape,
        ShapeParams::Icosphere(IcosphereParams {
            subdivisions: MIN_ICOSPHERE_LEVEL,
            ..IcosphereParams::default()
        })
    );
}

#[test]
fn test_uv_sphere_segments_live_in_y() {
    let mut shape = ShapeParams::UvSphere(UvSphereParams::default());
    shape.apply(ParamEdit::YSubdivisions(8)).unwrap();
    shape.apply(ParamEdit::ZSubdivisions(1)).unwrap();
    assert_eq!(
        shape,
        ShapeParams::UvSphere(UvSphereParams {
            segments: 8,
            rings: MIN_SPHERE_RINGS,
            ..UvSphereParams::default()
        })
    );
}

#[test]
fn test_torus_radii_live_in_diameters() {
    let mut shape = ShapeParams::Torus(TorusParams::default());
    shape.apply(ParamEdit::Diameter1(2.0)).unwrap();
    shape.apply(ParamEdit::Diameter2(0.5)).unwrap();
    match shape {
        ShapeParams::Torus(torus) => {
            assert_eq!(torus.major_radius, 2.0);
            assert_eq!(torus.minor_radius, 0.5);
        }
        other => panic!("unexpected payload {:?}", other),
    }
}

#[test]
fn test_unused_field_is_rejected() {
    let mut shape = ShapeParams::Cube(CubeParams::default());
    let before = shape;
    let err = shape.apply(ParamEdit::Radius(2.0)).unwrap_err();
    assert_eq!(
        err,
        ParamError::FieldNotApplicable {
            field: ParamField::Radius,
            kind: ShapeKind::Cube,
        }
    );
    assert_eq!(shape, before);
}

#[test]
fn test_smooth_is_not_a_payload_field() {
    let mut shape = ShapeParams::Plane(PlaneParams::default());
    assert!(shape.apply(ParamEdit::Smooth(true)).is_err());
}

#[test]
fn test_non_finite_length_is_rejected() {
    let mut shape = ShapeParams::Circle(CircleParams::default());
    let err = shape.apply(ParamEdit::Radius(f64::NAN)).unwrap_err();
    assert!(matches!(
        err,
        ParamError::NonFinite {
            field: ParamField::Radius,
            ..
        }
    ));
}

#[test]
fn test_validate_checks_every_length() {
    for kind in ShapeKind::ALL {
        assert_eq!(ShapeParams::default_for(kind).validate(), Ok(()), "{}", kind);
    }
    let cone = ShapeParams::Cone(ConeParams {
        height: f64::NEG_INFINITY,
        ..ConeParams::default()
    });
    assert!(matches!(
        cone.validate(),
        Err(ParamError::NonFinite {
            field: ParamField::Height,
            ..
        })
    ));
    let sphere = ShapeParams::UvSphere(UvSphereParams {
        diameter: f64::NAN,
        ..UvSphereParams::default()
    });
    assert!(sphere.validate().is_err());
}

#[test]
fn test_cone_accepts_cap_change() {
    let mut shape = ShapeParams::Cone(ConeParams::default());
    shape.apply(ParamEdit::CapType(CapType::NGon)).unwrap();
    match shape {
        ShapeParams::Cone(cone) => assert_eq!(cone.cap, CapType::NGon),
        other => panic!("unexpected payload {:?}", other),
    }
}

#[test]
fn test_serde_tagged_by_kind() {
    let json = serde_json::to_value(ShapeParams::Plane(PlaneParams::default())).unwrap();
    assert_eq!(json["kind"], "plane");
    assert_eq!(json["x_subdivisions"], 2);
}
