//! Fan-field planning over geo-located portals.
//!
//! Pipeline (leaves first)
//! - `geo`: projection of (lat, lng) onto the planar map frame and ground distance.
//! - `cluster`: bisecting partition of the portal set into `k` groups.
//! - `geom2`: monotone-chain hull and the interior segment-crossing predicate.
//! - `fan`: anchor choice, widest-gap ordering, per-cluster link graph, hull stitching.
//! - `plan`: the run driver plus the second pass that renders sections and steps.
//!
//! API Policy
//! - The curated surface lives in `api` and `prelude`; module paths may move.

pub mod api;
pub mod cluster;
pub mod context;
pub mod error;
pub mod fan;
pub mod geo;
pub mod geom2;
pub mod model;
pub mod plan;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::PlanError;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geo::{GeoProjector, LatLng, WebMercator};
    pub use crate::model::{PortalId, PortalInput};
    pub use crate::plan::{
        plan, plan_mercator, render_csv, PlanCfg, PlanResult, PlanSection, PlanStats, PlanStep,
        SectionKind,
    };
    pub use crate::PlanError;
}
