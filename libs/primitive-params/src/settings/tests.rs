use super::*;
use crate::kind::ParamField;
use crate::record::ParamEdit;

#[test]
fn test_default_settings_match_legacy_values() {
    let s = PrimitiveSettings::default();
    assert!(!s.enabled);
    assert_eq!(s.kind, "PLANE");
    assert_eq!(s.x_subdivisions, 2);
    assert_eq!(s.cap_type, "NONE");
    assert_eq!(s.diameter2, 1.0);
    assert!(!s.use_smooth_shading);
}

#[test]
fn test_sphere_segments_read_from_y() {
    let settings = PrimitiveSettings {
        kind: "SPHERE".to_string(),
        x_subdivisions: 99,
        y_subdivisions: 12,
        z_subdivisions: 6,
        diameter1: 3.0,
        ..PrimitiveSettings::default()
    };
    let shape = ShapeParams::from_settings(&settings).unwrap();
    assert_eq!(
        shape,
        ShapeParams::UvSphere(UvSphereParams {
            segments: 12,
            rings: 6,
            diameter: 3.0,
        })
    );
}

#[test]
fn test_negative_counts_clamp_to_minimum() {
    let settings = PrimitiveSettings {
        kind: "CYLINDER".to_string(),
        x_subdivisions: -5,
        ..PrimitiveSettings::default()
    };
    match ShapeParams::from_settings(&settings).unwrap() {
        ShapeParams::Cylinder(cyl) => assert_eq!(cyl.segments, 3),
        other => panic!("unexpected payload {:?}", other),
    }
}

#[test]
fn test_reserved_kind_is_unimplemented() {
    let settings = PrimitiveSettings {
        kind: "TUBE".to_string(),
        ..PrimitiveSettings::default()
    };
    assert_eq!(
        ParameterRecord::from_settings(&settings),
        Err(ParamError::Unimplemented("TUBE".to_string()))
    );
}

#[test]
fn test_unknown_cap_is_rejected() {
    let settings = PrimitiveSettings {
        kind: "CIRCLE".to_string(),
        cap_type: "DOME".to_string(),
        ..PrimitiveSettings::default()
    };
    assert_eq!(
        ShapeParams::from_settings(&settings),
        Err(ParamError::UnknownCapType("DOME".to_string()))
    );
}

#[test]
fn test_non_finite_lengths_are_rejected() {
    let settings = PrimitiveSettings {
        kind: "PLANE".to_string(),
        height: f64::INFINITY,
        ..PrimitiveSettings::default()
    };
    assert_eq!(
        ShapeParams::from_settings(&settings),
        Err(ParamError::NonFinite {
            field: ParamField::Height,
            value: f64::INFINITY
        })
    );

    // unused fields are not inspected
    let settings = PrimitiveSettings {
        kind: "TORUS".to_string(),
        diameter2: f64::NAN,
        ..PrimitiveSettings::default()
    };
    assert!(matches!(
        ParameterRecord::from_settings(&settings),
        Err(ParamError::NonFinite { field: ParamField::Diameter2, .. })
    ));
    let settings = PrimitiveSettings {
        kind: "CUBE".to_string(),
        radius: f64::NAN,
        ..PrimitiveSettings::default()
    };
    assert!(ShapeParams::from_settings(&settings).is_ok());
}

#[test]
fn test_record_flags_survive_snapshot() {
    let mut record = ParameterRecord::new(ShapeParams::Torus(TorusParams::default()))
        .unwrap()
        .with_smooth(true);
    record.set(ParamEdit::XSubdivisions(20)).unwrap();
    record.make_permanent();

    let settings = record.to_settings();
    assert_eq!(settings.kind, "TORUS");
    assert_eq!(settings.x_subdivisions, 20);
    assert_eq!(settings.diameter2, 0.25);
    assert!(!settings.enabled);
    assert!(settings.use_smooth_shading);

    assert_eq!(ParameterRecord::from_settings(&settings), Ok(record));
}

#[test]
fn test_json_uses_legacy_keys() {
    let json = r#"{
        "enabled": true,
        "type": "CONE",
        "x_subdivisions": 16,
        "cap_type": "TRI",
        "diameter1": 2.0,
        "diameter2": 0.0
    }"#;
    let settings: PrimitiveSettings = serde_json::from_str(json).unwrap();
    assert_eq!(settings.height, 1.0);

    let record = ParameterRecord::from_settings(&settings).unwrap();
    assert_eq!(
        record.shape(),
        &ShapeParams::Cone(ConeParams {
            segments: 16,
            u_subdivisions: 2,
            v_subdivisions: 2,
            diameter1: 2.0,
            diameter2: 0.0,
            height: 1.0,
            cap: CapType::TriangleFan,
        })
    );

    let back = serde_json::to_value(record.to_settings()).unwrap();
    assert_eq!(back["type"], "CONE");
    assert_eq!(back["cap_type"], "TRI");
}
