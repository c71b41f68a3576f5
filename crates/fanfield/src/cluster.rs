//! Bisecting partition of a portal set into spatially coherent groups.
//!
//! Model
//! - Start from one group holding everything. While fewer than `k` groups
//!   exist, split the largest one (first found on ties) around two random seed
//!   portals, assigning each member to the nearer seed by ground distance.
//! - Splitting stops early once no group has two or more members.
//!
//! Randomness is injected so callers can replay a layout from a seed; the
//! planner draws a fresh one per run to offer alternative layouts.

use rand::Rng;

use crate::model::PortalId;

/// Default number of redraws when both seeds land on the same portal.
pub const DEFAULT_SEED_RETRIES: usize = 10;

/// Partition `ids` into at most `max(k, 1)` non-empty groups.
///
/// Every input id ends up in exactly one group. An empty input yields no groups.
pub fn bisect<R, D>(
    ids: &[PortalId],
    k: usize,
    seed_retries: usize,
    distance: D,
    rng: &mut R,
) -> Vec<Vec<PortalId>>
where
    R: Rng + ?Sized,
    D: Fn(PortalId, PortalId) -> f64,
{
    if ids.is_empty() {
        return Vec::new();
    }
    let k = k.max(1);
    let mut groups = vec![ids.to_vec()];
    while groups.len() < k {
        let (biggest, max_len) = groups
            .iter()
            .enumerate()
            .fold((0usize, 0usize), |best, (i, g)| {
                if g.len() > best.1 {
                    (i, g.len())
                } else {
                    best
                }
            });
        if max_len < 2 {
            tracing::debug!(groups = groups.len(), k, "bisect stopped early");
            break;
        }
        let (left, right) = split_two(&groups[biggest], seed_retries, &distance, rng);
        tracing::debug!(
            from = max_len,
            left = left.len(),
            right = right.len(),
            "bisect split"
        );
        groups.splice(biggest..=biggest, [left, right]);
    }
    groups
}

/// One 2-means step with random seeds. Both halves are non-empty for `points.len() >= 2`.
fn split_two<R, D>(
    points: &[PortalId],
    seed_retries: usize,
    distance: &D,
    rng: &mut R,
) -> (Vec<PortalId>, Vec<PortalId>)
where
    R: Rng + ?Sized,
    D: Fn(PortalId, PortalId) -> f64,
{
    let n = points.len();
    if n < 2 {
        return (points.to_vec(), Vec::new());
    }
    let s1 = rng.gen_range(0..n);
    let mut s2 = rng.gen_range(0..n);
    let mut tries = 0;
    while s1 == s2 && tries < seed_retries {
        s2 = rng.gen_range(0..n);
        tries += 1;
    }
    let (c1, c2) = (points[s1], points[s2]);
    let mut left = Vec::with_capacity(n);
    let mut right = Vec::with_capacity(n);
    for &p in points {
        if distance(p, c1) < distance(p, c2) {
            left.push(p);
        } else {
            right.push(p);
        }
    }
    if left.is_empty() {
        if let Some(p) = right.pop() {
            left.push(p);
        }
    }
    if right.is_empty() {
        if let Some(p) = left.pop() {
            right.push(p);
        }
    }
    (left, right)
}
