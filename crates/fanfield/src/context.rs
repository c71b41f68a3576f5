//! Mutable state of one planning run.
//!
//! `PlanningContext` owns the portals and every derived structure that the
//! stages accumulate: the link list, its normalized-pair lookup set, adjacency,
//! fields, key requirements and the visited set. Stages borrow it mutably in
//! sequence; nothing survives the run.

use std::collections::HashSet;

use crate::geom2::{convex_hull_indices, segments_cross, DEFAULT_CROSSING_EPS};
use crate::model::{Field, Link, LinkColor, LinkKey, Portal, PortalId};

#[derive(Clone, Debug)]
pub struct PlanningContext {
    portals: Vec<Portal>,
    links: Vec<Link>,
    link_set: HashSet<LinkKey>,
    adjacency: Vec<Vec<PortalId>>,
    fields: Vec<Field>,
    key_reqs: Vec<u32>,
    visited: Vec<bool>,
    crossing_eps: f64,
}

impl PlanningContext {
    pub fn new(portals: Vec<Portal>) -> Self {
        Self::with_crossing_eps(portals, DEFAULT_CROSSING_EPS)
    }

    pub fn with_crossing_eps(portals: Vec<Portal>, crossing_eps: f64) -> Self {
        let n = portals.len();
        Self {
            portals,
            links: Vec::new(),
            link_set: HashSet::new(),
            adjacency: vec![Vec::new(); n],
            fields: Vec::new(),
            key_reqs: vec![0; n],
            visited: vec![false; n],
            crossing_eps,
        }
    }

    #[inline]
    pub fn portal_count(&self) -> usize {
        self.portals.len()
    }
    pub fn ids(&self) -> impl Iterator<Item = PortalId> {
        (0..self.portals.len()).map(PortalId)
    }
    #[inline]
    pub fn portal(&self, id: PortalId) -> &Portal {
        &self.portals[id.0]
    }
    #[inline]
    pub fn portal_mut(&mut self, id: PortalId) -> &mut Portal {
        &mut self.portals[id.0]
    }
    pub fn links(&self) -> &[Link] {
        &self.links
    }
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
    #[inline]
    pub fn key_requirement(&self, id: PortalId) -> u32 {
        self.key_reqs[id.0]
    }
    pub fn max_key_requirement(&self) -> u32 {
        self.key_reqs.iter().copied().max().unwrap_or(0)
    }
    #[inline]
    pub fn mark_visited(&mut self, id: PortalId) {
        self.visited[id.0] = true;
    }
    #[inline]
    pub fn is_visited(&self, id: PortalId) -> bool {
        self.visited[id.0]
    }

    /// Hull of a subset, in hull order.
    pub fn hull_of(&self, ids: &[PortalId]) -> Vec<PortalId> {
        let xy: Vec<_> = ids.iter().map(|&id| self.portal(id).xy).collect();
        convex_hull_indices(&xy)
            .into_iter()
            .map(|k| ids[k])
            .collect()
    }

    #[inline]
    pub fn has_link(&self, a: PortalId, b: PortalId) -> bool {
        self.link_set.contains(&LinkKey::new(a, b))
    }

    /// Whether segment `a`–`b` crosses any existing link that shares no endpoint with it.
    pub fn crosses_existing(&self, a: PortalId, b: PortalId) -> bool {
        let (pa, pb) = (self.portal(a).xy, self.portal(b).xy);
        self.links
            .iter()
            .filter(|l| !l.touches(a) && !l.touches(b))
            .any(|l| {
                segments_cross(
                    pa,
                    pb,
                    self.portal(l.from).xy,
                    self.portal(l.to).xy,
                    self.crossing_eps,
                )
            })
    }

    /// Throw `from → to` if it is new and crosses nothing.
    ///
    /// On success the key requirement of `to` grows by one and every third
    /// portal already linked to both ends closes a field. Returns the number
    /// of fields closed, or `None` if the link was not created.
    pub fn try_link(&mut self, from: PortalId, to: PortalId, color: LinkColor) -> Option<usize> {
        if from == to || self.has_link(from, to) || self.crosses_existing(from, to) {
            return None;
        }
        let closing: Vec<PortalId> = self.adjacency[from.0]
            .iter()
            .copied()
            .filter(|&p| self.has_link(to, p))
            .collect();
        for &third in &closing {
            self.fields.push(Field {
                corners: [from, to, third],
                color,
            });
        }
        self.links.push(Link { from, to, color });
        self.link_set.insert(LinkKey::new(from, to));
        self.adjacency[from.0].push(to);
        self.adjacency[to.0].push(from);
        self.key_reqs[to.0] += 1;
        Some(closing.len())
    }
}
