//! Tests for the generator configuration.

use super::*;

/// Ensures default configuration values are sane and positive.
#[test]
fn default_config_is_valid() {
    let cfg = GeneratorConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert!(cfg.weld_distance > cfg.tolerance);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GeneratorConfig::new(0.0, 1.0e-4).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GeneratorConfig::new(1.0e-9, -1.0).unwrap_err(),
        ConfigError::InvalidWeldDistance(-1.0)
    );
    assert!(GeneratorConfig::new(f64::NAN, 1.0e-4).is_err());
}

#[test]
fn config_error_display_names_the_field() {
    let err = ConfigError::InvalidWeldDistance(0.0);
    assert!(err.to_string().contains("weld_distance"));
}
