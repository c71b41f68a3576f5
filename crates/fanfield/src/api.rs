//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is a convenience surface for stage-by-stage callers (tests, benches,
//!   experiments). Breaking changes are allowed.
//! - The one-shot entry point is `plan::plan`; everything below exposes the
//!   individual stages it chains together.

// Geometry
pub use crate::geom2::{convex_hull_indices, segments_cross};
// Projection service
pub use crate::geo::{haversine_m, GeoProjector, LatLng, WebMercator};
// Stages
pub use crate::cluster::bisect;
pub use crate::context::PlanningContext;
pub use crate::fan::{build_cluster_fan, select_anchor, stitch_hulls, widest_gap_fan};
pub use crate::fan::{ClusterFan, FanStep, LinkAction, StitchPlan, StitchStep};
// Pass 2
pub use crate::plan::{assemble, render_csv, PlanStats};
