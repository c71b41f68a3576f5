//! One planning run: validate, project, cluster, fan, stitch, render.
//!
//! Purpose
//! - `plan` chains every stage over a fresh `PlanningContext` and returns a
//!   self-contained, serializable `PlanResult`.
//!
//! Two passes
//! - Pass 1 (`fan::build_cluster_fan`, `fan::stitch_hulls`) fixes every link,
//!   field and key requirement.
//! - Pass 2 (`assemble`) renders sections and steps from the finished graph,
//!   so every "Farm N Keys" line quotes the final requirement.

mod assemble;
mod export;
mod stats;

pub use assemble::{assemble, STITCH_TITLE};
pub use export::{render_csv, write_csv, CSV_HEADER};
pub use stats::PlanStats;

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::cluster::{bisect, DEFAULT_SEED_RETRIES};
use crate::context::PlanningContext;
use crate::error::PlanError;
use crate::fan::{build_cluster_fan, stitch_hulls, ClusterFan, StitchPlan};
use crate::geo::{GeoProjector, WebMercator, DEFAULT_ZOOM};
use crate::geom2::DEFAULT_CROSSING_EPS;
use crate::model::{Portal, PortalId, PortalInput};

/// Minimum number of portals for a non-empty plan.
pub const MIN_PORTALS: usize = 3;

/// Planner configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanCfg {
    /// Requested number of clusters; 0 is treated as 1.
    pub cluster_count: usize,
    /// Zoom of the web-mercator frame built by `projector` and `plan_mercator`.
    pub zoom: u8,
    pub crossing_eps: f64,
    pub seed_retries: usize,
}

impl Default for PlanCfg {
    fn default() -> Self {
        Self {
            cluster_count: 1,
            zoom: DEFAULT_ZOOM,
            crossing_eps: DEFAULT_CROSSING_EPS,
            seed_retries: DEFAULT_SEED_RETRIES,
        }
    }
}

impl PlanCfg {
    pub fn with_clusters(cluster_count: usize) -> Self {
        Self {
            cluster_count,
            ..Self::default()
        }
    }

    #[inline]
    pub fn effective_clusters(&self) -> usize {
        self.cluster_count.max(1)
    }

    /// Host-map projector at `zoom`.
    #[inline]
    pub fn projector(&self) -> WebMercator {
        WebMercator::new(self.zoom)
    }
}

/// Portal row of a finished plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortalOut {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub label: String,
    pub anchor: bool,
    /// Final key requirement.
    pub keys: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkOut {
    pub from: String,
    pub to: String,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOut {
    pub corners: [String; 3],
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub label: String,
    pub size: usize,
    pub anchor: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Cluster,
    Stitch,
}

/// One portal visit with its rendered actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStep {
    pub id: String,
    pub label: String,
    pub name: String,
    pub visited_before: bool,
    pub actions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSection {
    pub title: String,
    pub kind: SectionKind,
    pub steps: Vec<PlanStep>,
}

/// Everything a renderer or exporter needs from one run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    pub portals: Vec<PortalOut>,
    pub clusters: Vec<ClusterSummary>,
    pub links: Vec<LinkOut>,
    pub fields: Vec<FieldOut>,
    pub sections: Vec<PlanSection>,
    pub stats: PlanStats,
}

impl PlanResult {
    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.fields.is_empty() && self.sections.is_empty()
    }

    pub fn portal(&self, id: &str) -> Option<&PortalOut> {
        self.portals.iter().find(|p| p.id == id)
    }
}

/// Run the full pipeline over `inputs`.
///
/// Fewer than `MIN_PORTALS` portals yield an empty plan (portals listed, no
/// links, fields or sections). Only malformed records are errors.
pub fn plan<P, R>(
    inputs: &[PortalInput],
    cfg: &PlanCfg,
    projector: &P,
    rng: &mut R,
) -> Result<PlanResult, PlanError>
where
    P: GeoProjector + ?Sized,
    R: Rng + ?Sized,
{
    validate(inputs)?;
    let portals: Vec<Portal> = inputs
        .iter()
        .map(|p| Portal::from_input(p, projector))
        .collect();
    let mut ctx = PlanningContext::with_crossing_eps(portals, cfg.crossing_eps);
    if ctx.portal_count() < MIN_PORTALS {
        tracing::debug!(portals = ctx.portal_count(), "too few portals, empty plan");
        return Ok(finish(&ctx, &[], &StitchPlan::default(), projector));
    }

    let all: Vec<PortalId> = ctx.ids().collect();
    let global_hull: HashSet<PortalId> = ctx.hull_of(&all).into_iter().collect();
    let clusters = bisect(
        &all,
        cfg.effective_clusters(),
        cfg.seed_retries,
        |a, b| projector.distance(ctx.portal(a).pos, ctx.portal(b).pos),
        rng,
    );

    let mut fans: Vec<ClusterFan> = Vec::with_capacity(clusters.len());
    for (i, members) in clusters.iter().enumerate() {
        if let Some(fan) = build_cluster_fan(&mut ctx, i, members, &global_hull) {
            fans.push(fan);
        }
    }
    let stitch = if cfg.effective_clusters() > 1 {
        stitch_hulls(&mut ctx, &fans)
    } else {
        StitchPlan::default()
    };

    let result = finish(&ctx, &fans, &stitch, projector);
    tracing::info!(
        portals = result.stats.portals,
        clusters = result.clusters.len(),
        links = result.stats.links,
        fields = result.stats.fields,
        max_keys = result.stats.max_keys,
        "plan ready"
    );
    Ok(result)
}

/// `plan` over the web-mercator frame at `cfg.zoom`.
pub fn plan_mercator<R: Rng + ?Sized>(
    inputs: &[PortalInput],
    cfg: &PlanCfg,
    rng: &mut R,
) -> Result<PlanResult, PlanError> {
    plan(inputs, cfg, &cfg.projector(), rng)
}

fn validate(inputs: &[PortalInput]) -> Result<(), PlanError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(inputs.len());
    for (index, p) in inputs.iter().enumerate() {
        if p.id.is_empty() {
            return Err(PlanError::EmptyId { index });
        }
        let lat_ok = p.lat.is_finite() && (-90.0..=90.0).contains(&p.lat);
        let lng_ok = p.lng.is_finite() && (-180.0..=180.0).contains(&p.lng);
        if !(lat_ok && lng_ok) {
            return Err(PlanError::InvalidCoordinate {
                id: p.id.clone(),
                lat: p.lat,
                lng: p.lng,
            });
        }
        if !seen.insert(p.id.as_str()) {
            return Err(PlanError::DuplicateId { id: p.id.clone() });
        }
    }
    Ok(())
}

/// Pass 2 plus output conversion.
fn finish<P: GeoProjector + ?Sized>(
    ctx: &PlanningContext,
    fans: &[ClusterFan],
    stitch: &StitchPlan,
    projector: &P,
) -> PlanResult {
    let sections = assemble(ctx, fans, stitch);
    let route: Vec<PortalId> = fans
        .iter()
        .flat_map(|f| f.steps.iter().map(|s| s.portal))
        .chain(stitch.steps.iter().map(|s| s.portal))
        .collect();
    let stats = PlanStats::collect(ctx, &route, projector);
    let guid = |id: PortalId| ctx.portal(id).guid.clone();

    PlanResult {
        portals: ctx
            .ids()
            .map(|id| {
                let p = ctx.portal(id);
                PortalOut {
                    id: p.guid.clone(),
                    name: p.name.clone(),
                    lat: p.pos.lat,
                    lng: p.pos.lng,
                    label: p.label.clone(),
                    anchor: p.is_anchor,
                    keys: ctx.key_requirement(id),
                }
            })
            .collect(),
        clusters: fans
            .iter()
            .map(|f| ClusterSummary {
                label: f.letter.clone(),
                size: f.size(),
                anchor: guid(f.anchor),
            })
            .collect(),
        links: ctx
            .links()
            .iter()
            .map(|l| LinkOut {
                from: guid(l.from),
                to: guid(l.to),
                color: l.color.hex().to_string(),
            })
            .collect(),
        fields: ctx
            .fields()
            .iter()
            .map(|f| FieldOut {
                corners: f.corners.map(guid),
                color: f.color.hex().to_string(),
            })
            .collect(),
        sections,
        stats,
    }
}

#[cfg(test)]
mod tests;
