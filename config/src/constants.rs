//! # Configuration Constants
//!
//! Centralized constants for the changeable primitive pipeline. Parameter
//! minimums, default dimensions and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Minimums**: Smallest accepted subdivision counts per shape
//! - **Defaults**: Initial values offered when a primitive is created

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Also used as the span threshold when selecting the edges that run along
/// an axis: an edge whose endpoints differ by less than this along the axis
/// is considered perpendicular to it.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Maximum distance between two seam vertices that are merged after a sweep.
///
/// A full 360° spin ends with a profile copy lying on top of the first one.
/// Rotation round-off leaves the copies ~1e-16 apart, far below this value.
///
/// # Example
///
/// ```rust
/// use config::constants::{EPSILON, WELD_DISTANCE};
///
/// assert!(WELD_DISTANCE > EPSILON);
/// ```
pub const WELD_DISTANCE: f64 = 1e-4;

// =============================================================================
// MINIMUM CONSTANTS
// =============================================================================

/// Minimum quads per axis of a plane.
pub const MIN_PLANE_SUBDIVISIONS: u32 = 1;

/// Minimum vertices per cube edge. Two means the plain 8-vertex cube.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_CUBE_SUBDIVISIONS;
///
/// // cuts inserted along an axis
/// let cuts = MIN_CUBE_SUBDIVISIONS.saturating_sub(2);
/// assert_eq!(cuts, 0);
/// ```
pub const MIN_CUBE_SUBDIVISIONS: u32 = 2;

/// Minimum segments around any circular profile (a triangle).
pub const MIN_SEGMENTS: u32 = 3;

/// Minimum U/V subdivision for circles, cylinders and cones.
///
/// Values above the minimum insert `value - 2` cuts.
pub const MIN_RING_SUBDIVISIONS: u32 = 2;

/// Minimum latitude rings of a UV sphere.
pub const MIN_SPHERE_RINGS: u32 = 3;

/// Minimum icosphere subdivision level. Level one is the bare icosahedron.
pub const MIN_ICOSPHERE_LEVEL: u32 = 1;

/// Maximum icosphere subdivision level.
///
/// Each level quadruples the face count, level eight already yields
/// 327 680 triangles.
///
/// # Example
///
/// ```rust
/// use config::constants::{MAX_ICOSPHERE_LEVEL, MIN_ICOSPHERE_LEVEL};
///
/// let faces = 20 * 4u64.pow(MAX_ICOSPHERE_LEVEL - MIN_ICOSPHERE_LEVEL);
/// assert_eq!(faces, 327_680);
/// ```
pub const MAX_ICOSPHERE_LEVEL: u32 = 8;

/// Minimum major and minor segment count of a torus.
pub const MIN_TORUS_SEGMENTS: u32 = 3;

/// Lengths (sizes, radii, diameters, heights) never go below zero.
pub const MIN_LENGTH: f64 = 0.0;

// =============================================================================
// DEFAULT CONSTANTS
// =============================================================================

/// Default size, radius, diameter and height of a new primitive.
pub const DEFAULT_LENGTH: f64 = 1.0;

/// Default quads per axis of a new plane.
pub const DEFAULT_PLANE_SUBDIVISIONS: u32 = 2;

/// Default segments of a new circle, cylinder or cone.
pub const DEFAULT_SEGMENTS: u32 = 32;

/// Default longitude segments of a UV sphere.
pub const DEFAULT_SPHERE_SEGMENTS: u32 = 32;

/// Default latitude rings of a UV sphere.
pub const DEFAULT_SPHERE_RINGS: u32 = 16;

/// Default icosphere subdivision level.
pub const DEFAULT_ICOSPHERE_LEVEL: u32 = 2;

/// Default segments swept around the torus axis.
pub const DEFAULT_TORUS_MAJOR_SEGMENTS: u32 = 48;

/// Default segments of the torus tube profile.
pub const DEFAULT_TORUS_MINOR_SEGMENTS: u32 = 12;

/// Default distance from the torus axis to the tube center.
pub const DEFAULT_TORUS_MAJOR_RADIUS: f64 = 1.0;

/// Default torus tube radius.
pub const DEFAULT_TORUS_MINOR_RADIUS: f64 = 0.25;

// =============================================================================
// GENERATOR CONFIGURATION
// =============================================================================

/// Tolerances handed to the mesh generators.
///
/// # Examples
/// ```
/// use config::constants::GeneratorConfig;
/// let config = GeneratorConfig::default();
/// assert!(config.tolerance > 0.0);
/// assert!(config.weld_distance > config.tolerance);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Span threshold used when selecting edges along an axis.
    pub tolerance: f64,
    /// Merge distance for seam welding.
    pub weld_distance: f64,
}

impl GeneratorConfig {
    /// Builds a configuration, rejecting non-positive or non-finite values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GeneratorConfig;
    /// let cfg = GeneratorConfig::new(1.0e-8, 1.0e-3).expect("valid config");
    /// assert_eq!(cfg.weld_distance, 1.0e-3);
    /// ```
    pub fn new(tolerance: f64, weld_distance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !weld_distance.is_finite() || weld_distance <= 0.0 {
            return Err(ConfigError::InvalidWeldDistance(weld_distance));
        }
        Ok(Self {
            tolerance,
            weld_distance,
        })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            weld_distance: WELD_DISTANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the weld distance is zero, negative or not finite.
    InvalidWeldDistance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidWeldDistance(value) => {
                write!(f, "weld_distance must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Clamps a length to [`MIN_LENGTH`].
///
/// # Example
///
/// ```rust
/// use config::constants::clamp_length;
///
/// assert_eq!(clamp_length(-2.0), 0.0);
/// assert_eq!(clamp_length(1.5), 1.5);
/// ```
#[inline]
pub fn clamp_length(value: f64) -> f64 {
    value.max(MIN_LENGTH)
}

#[cfg(test)]
mod tests;
