//! Pass 2: render the finished link graph into plan sections.

use std::collections::HashSet;

use super::{PlanSection, PlanStep, SectionKind};
use crate::context::PlanningContext;
use crate::fan::{ClusterFan, LinkAction, StitchPlan};
use crate::model::PortalId;

/// Title of the stitching section.
pub const STITCH_TITLE: &str = "Stitching (Hull Zipper)";

/// Render cluster sections in cluster order, then the stitch section if it has steps.
///
/// Key requirements are read from `ctx` as they stand after Pass 1. A portal's
/// farm line appears once, at its first step across all sections.
pub fn assemble(ctx: &PlanningContext, fans: &[ClusterFan], stitch: &StitchPlan) -> Vec<PlanSection> {
    let mut farmed: HashSet<PortalId> = HashSet::new();
    let mut sections = Vec::with_capacity(fans.len() + 1);
    for fan in fans {
        let steps = fan
            .steps
            .iter()
            .map(|s| render_step(ctx, s.portal, false, false, &s.links, &mut farmed))
            .collect();
        sections.push(PlanSection {
            title: format!("Cluster {}", fan.letter),
            kind: SectionKind::Cluster,
            steps,
        });
    }
    if !stitch.is_empty() {
        let steps = stitch
            .steps
            .iter()
            .map(|s| render_step(ctx, s.portal, true, s.visited_before, &s.links, &mut farmed))
            .collect();
        sections.push(PlanSection {
            title: STITCH_TITLE.to_string(),
            kind: SectionKind::Stitch,
            steps,
        });
    }
    sections
}

fn render_step(
    ctx: &PlanningContext,
    id: PortalId,
    stitching: bool,
    visited_before: bool,
    links: &[LinkAction],
    farmed: &mut HashSet<PortalId>,
) -> PlanStep {
    let portal = ctx.portal(id);
    let mut actions = Vec::with_capacity(links.len() + 2);
    if stitching && visited_before {
        actions.push("Arrive at (Already Captured)".to_string());
    } else {
        actions.push("Capture".to_string());
    }
    let keys = ctx.key_requirement(id);
    if keys > 0 && farmed.insert(id) {
        actions.push(format!("Farm {keys} Keys"));
    }
    for link in links {
        let target = ctx.portal(link.to).target_name();
        if link.fields > 0 {
            actions.push(format!("Link to {target} [+{}F]", link.fields));
        } else {
            actions.push(format!("Link to {target}"));
        }
    }
    PlanStep {
        id: portal.guid.clone(),
        label: portal.label.clone(),
        name: portal.name.clone(),
        visited_before,
        actions,
    }
}
