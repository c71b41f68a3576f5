//! Planar geometry used by the planner.
//!
//! Purpose
//! - Convex hulls of projected portal sets (strict left turns, collinear
//!   boundary points dropped).
//! - The interior crossing test that keeps the link graph planar.
//!
//! Both operate on `nalgebra::Vector2<f64>` in the projector's pixel frame.

mod hull;
mod segment;

pub use hull::{convex_hull_indices, cross};
pub use segment::{segments_cross, DEFAULT_CROSSING_EPS};

#[cfg(test)]
mod tests;
