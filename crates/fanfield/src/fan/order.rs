//! Anchor choice and widest-gap fan ordering.

use nalgebra::Vector2;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::f64::consts::TAU;

use crate::model::PortalId;

/// First cluster-hull point that also lies on the global hull, else the first hull point.
pub fn select_anchor(hull: &[PortalId], global_hull: &HashSet<PortalId>) -> Option<PortalId> {
    hull.iter()
        .copied()
        .find(|id| global_hull.contains(id))
        .or_else(|| hull.first().copied())
}

/// Sort `members` by angle around `anchor`, then rotate so the sequence starts
/// right after the widest angular gap (the gap across ±π counts too).
pub fn widest_gap_fan(anchor: Vector2<f64>, members: &[(PortalId, Vector2<f64>)]) -> Vec<PortalId> {
    let mut by_angle: Vec<(PortalId, f64)> = members
        .iter()
        .map(|&(id, p)| (id, (p.y - anchor.y).atan2(p.x - anchor.x)))
        .collect();
    by_angle.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    let n = by_angle.len();
    if n < 2 {
        return by_angle.into_iter().map(|(id, _)| id).collect();
    }
    let mut max_gap = 0.0;
    let mut split = 0;
    for i in 0..n {
        let mut gap = by_angle[(i + 1) % n].1 - by_angle[i].1;
        if gap < 0.0 {
            gap += TAU;
        }
        if gap > max_gap {
            max_gap = gap;
            split = i + 1;
        }
    }
    by_angle.rotate_left(split % n);
    by_angle.into_iter().map(|(id, _)| id).collect()
}
