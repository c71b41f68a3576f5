//! Per-cluster fan links.

use nalgebra::Vector2;
use std::collections::HashSet;

use super::order::{select_anchor, widest_gap_fan};
use super::types::{ClusterFan, FanStep, LinkAction};
use crate::context::PlanningContext;
use crate::model::{cluster_letter, LinkColor, PortalId};

/// Fan one cluster out of its anchor.
///
/// Labels the anchor with the cluster letter and every other member with
/// `<letter><n>` in fan order. Each target first links to the anchor, then to
/// every earlier non-anchor member, skipping existing or crossing links. The
/// donor of every link is the portal linked *to*.
///
/// Returns `None` for an empty cluster.
pub fn build_cluster_fan(
    ctx: &mut PlanningContext,
    index: usize,
    members: &[PortalId],
    global_hull: &HashSet<PortalId>,
) -> Option<ClusterFan> {
    let hull = ctx.hull_of(members);
    let anchor = select_anchor(&hull, global_hull)?;
    let letter = cluster_letter(index);
    let color = LinkColor::Cluster(index);

    {
        let p = ctx.portal_mut(anchor);
        p.label = letter.clone();
        p.is_anchor = true;
    }
    ctx.mark_visited(anchor);

    let around: Vec<(PortalId, Vector2<f64>)> = members
        .iter()
        .copied()
        .filter(|&id| id != anchor)
        .map(|id| (id, ctx.portal(id).xy))
        .collect();
    let order = widest_gap_fan(ctx.portal(anchor).xy, &around);

    let mut steps = Vec::with_capacity(order.len() + 1);
    steps.push(FanStep {
        portal: anchor,
        links: Vec::new(),
    });
    let mut placed: Vec<PortalId> = Vec::with_capacity(order.len());
    for (n, &target) in order.iter().enumerate() {
        ctx.portal_mut(target).label = format!("{letter}{}", n + 1);
        ctx.mark_visited(target);

        let mut links = Vec::new();
        if let Some(fields) = ctx.try_link(target, anchor, color) {
            links.push(LinkAction { to: anchor, fields });
        }
        for &past in &placed {
            if let Some(fields) = ctx.try_link(target, past, color) {
                links.push(LinkAction { to: past, fields });
            }
        }
        placed.push(target);
        steps.push(FanStep {
            portal: target,
            links,
        });
    }

    let link_count: usize = steps.iter().map(|s| s.links.len()).sum();
    tracing::debug!(
        cluster = %letter,
        anchor = %ctx.portal(anchor).guid,
        members = members.len(),
        links = link_count,
        "cluster fanned"
    );
    Some(ClusterFan {
        letter,
        anchor,
        hull,
        steps,
    })
}
