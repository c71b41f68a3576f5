//! Structural records produced by fan building and stitching.

use crate::model::PortalId;

/// One created link, seen from the portal that threw it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkAction {
    pub to: PortalId,
    /// Fields closed by this link.
    pub fields: usize,
}

/// A portal visit inside a cluster fan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FanStep {
    pub portal: PortalId,
    pub links: Vec<LinkAction>,
}

/// Result of fanning one cluster; `steps[0]` is always the anchor.
#[derive(Clone, Debug)]
pub struct ClusterFan {
    pub letter: String,
    pub anchor: PortalId,
    /// Cluster hull in hull order; the stitcher links these.
    pub hull: Vec<PortalId>,
    pub steps: Vec<FanStep>,
}

impl ClusterFan {
    #[inline]
    pub fn size(&self) -> usize {
        self.steps.len()
    }
}

/// A portal visit in the stitching phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StitchStep {
    pub portal: PortalId,
    /// Already captured during the cluster phase.
    pub visited_before: bool,
    pub links: Vec<LinkAction>,
}

/// Stitch steps, north to south.
#[derive(Clone, Debug, Default)]
pub struct StitchPlan {
    pub steps: Vec<StitchStep>,
}

impl StitchPlan {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
    pub fn link_count(&self) -> usize {
        self.steps.iter().map(|s| s.links.len()).sum()
    }
}
