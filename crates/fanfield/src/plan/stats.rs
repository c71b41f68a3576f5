//! Summary numbers for a finished plan.

use serde::{Deserialize, Serialize};

use crate::context::PlanningContext;
use crate::geo::GeoProjector;
use crate::model::PortalId;

/// AP awarded per captured portal, link and field.
pub const AP_PER_PORTAL: u64 = 1750;
pub const AP_PER_LINK: u64 = 313;
pub const AP_PER_FIELD: u64 = 1250;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanStats {
    pub portals: usize,
    pub fields: usize,
    pub links: usize,
    pub max_keys: u32,
    /// Walk along the step sequence, in meters.
    pub walk_m: f64,
    pub ap: u64,
}

impl PlanStats {
    /// Counts from `ctx`; the walk follows `route` (steps in section order).
    pub fn collect<P: GeoProjector + ?Sized>(
        ctx: &PlanningContext,
        route: &[PortalId],
        projector: &P,
    ) -> Self {
        let walk_m: f64 = route
            .windows(2)
            .map(|w| projector.distance(ctx.portal(w[0]).pos, ctx.portal(w[1]).pos))
            .sum();
        let portals = ctx.portal_count();
        let links = ctx.links().len();
        let fields = ctx.fields().len();
        Self {
            portals,
            fields,
            links,
            max_keys: ctx.max_key_requirement(),
            walk_m,
            ap: AP_PER_PORTAL * portals as u64
                + AP_PER_LINK * links as u64
                + AP_PER_FIELD * fields as u64,
        }
    }

    /// Walk distance in kilometres, two decimals.
    pub fn walk_km(&self) -> String {
        format!("{:.2}", self.walk_m / 1000.0)
    }
}
