//! Hull-to-hull links between clusters.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::types::{ClusterFan, LinkAction, StitchPlan, StitchStep};
use crate::context::PlanningContext;
use crate::model::{LinkColor, PortalId};

/// Link every hull point of each later cluster to every hull point of each
/// earlier one, where the link is new and crosses nothing.
///
/// The key is drawn from the earlier cluster's endpoint. Steps are grouped per
/// throwing portal (first-seen order) and then sorted north to south.
pub fn stitch_hulls(ctx: &mut PlanningContext, fans: &[ClusterFan]) -> StitchPlan {
    let mut steps: Vec<StitchStep> = Vec::new();
    let mut slot: HashMap<PortalId, usize> = HashMap::new();
    for i in 1..fans.len() {
        for j in 0..i {
            for &p1 in &fans[i].hull {
                for &p2 in &fans[j].hull {
                    let Some(fields) = ctx.try_link(p1, p2, LinkColor::Stitch) else {
                        continue;
                    };
                    let k = match slot.get(&p1) {
                        Some(&k) => k,
                        None => {
                            steps.push(StitchStep {
                                portal: p1,
                                visited_before: ctx.is_visited(p1),
                                links: Vec::new(),
                            });
                            slot.insert(p1, steps.len() - 1);
                            steps.len() - 1
                        }
                    };
                    steps[k].links.push(LinkAction { to: p2, fields });
                }
            }
        }
    }
    steps.sort_by(|a, b| {
        let (la, lb) = (ctx.portal(a.portal).pos.lat, ctx.portal(b.portal).pos.lat);
        lb.partial_cmp(&la).unwrap_or(Ordering::Equal)
    });
    let plan = StitchPlan { steps };
    tracing::debug!(
        steps = plan.steps.len(),
        links = plan.link_count(),
        "hulls stitched"
    );
    plan
}
