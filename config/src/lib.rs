//! # Config Crate
//!
//! Centralized configuration constants for the changeable primitive
//! workspace. Parameter minimums, default shape dimensions and geometric
//! tolerances are defined here so the parameter record, the generators and
//! the host commands agree on the same values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MIN_SEGMENTS, WELD_DISTANCE};
//!
//! // Segment counts below the minimum are clamped, never rejected
//! let requested: u32 = 1;
//! assert_eq!(requested.max(MIN_SEGMENTS), 3);
//!
//! // Seam vertices closer than WELD_DISTANCE are merged
//! assert!(WELD_DISTANCE > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host Compatible**: Defaults match the values offered by the creation menus
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
