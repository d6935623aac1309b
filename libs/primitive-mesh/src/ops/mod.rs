//! # Mesh Operations
//!
//! Topology editing used to compose primitives:
//! - **subdivide_edges**: Insert evenly spaced cuts into selected edges
//! - **spin**: Sweep profile edges around an axis into a band of quads
//! - **weld_vertices**: Merge coincident vertices left by a full sweep
//! - **weld_pairs**: Close a sweep seam vertex by vertex

mod spin;
mod subdivide;
mod weld;

#[cfg(test)]
mod tests;

pub use spin::spin;
pub use subdivide::{select_axis_edges, subdivide_edges};
pub use weld::{weld_pairs, weld_vertices};

use glam::DVec3;

/// Coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in X, Y, Z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component of `v` along this axis.
    #[inline]
    pub fn component(self, v: DVec3) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}
