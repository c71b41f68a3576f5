//! Fan construction per cluster and hull stitching across clusters.
//!
//! Purpose
//! - Pass 1 of a planning run: decide every link, key requirement and field.
//!   Results are structural (`ClusterFan`, `StitchPlan`) and carry no text;
//!   `plan::assemble` renders them once the graph is final.
//!
//! Layout
//! - `order.rs`: anchor choice and widest-gap angular ordering.
//! - `build.rs`: per-cluster fan links.
//! - `stitch.rs`: hull-to-hull links between clusters.

mod build;
mod order;
mod stitch;
mod types;

pub use build::build_cluster_fan;
pub use order::{select_anchor, widest_gap_fan};
pub use stitch::stitch_hulls;
pub use types::{ClusterFan, FanStep, LinkAction, StitchPlan, StitchStep};
