//! Run-local data model: portals, links, fields and their display tags.
//!
//! Everything here is created fresh per planning run. Bookkeeping is keyed by
//! the dense `PortalId`; opaque caller ids only reappear at the output boundary.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::geo::{GeoProjector, LatLng};

/// Caller-supplied portal record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortalInput {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl PortalInput {
    pub fn new(id: impl Into<String>, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat,
            lng,
        }
    }
}

/// Index of a portal within one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortalId(pub usize);

/// A portal as seen by the planner.
#[derive(Clone, Debug)]
pub struct Portal {
    pub guid: String,
    pub name: String,
    pub pos: LatLng,
    /// Planar coordinate, projected once.
    pub xy: Vector2<f64>,
    /// Assigned while fanning; empty until then.
    pub label: String,
    pub is_anchor: bool,
}

impl Portal {
    pub fn from_input<P: GeoProjector + ?Sized>(input: &PortalInput, projector: &P) -> Self {
        let pos = LatLng::new(input.lat, input.lng);
        Self {
            guid: input.id.clone(),
            name: sanitize_name(&input.name),
            pos,
            xy: projector.project(pos),
            label: String::new(),
            is_anchor: false,
        }
    }

    /// `Anchor A Name` for anchors, `A3 Name` otherwise.
    pub fn target_name(&self) -> String {
        if self.is_anchor {
            format!("Anchor {} {}", self.label, self.name)
        } else {
            format!("{} {}", self.label, self.name)
        }
    }
}

/// Strip characters that break the plain-text exports.
pub fn sanitize_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '.' | ',' | ':' | ';' | '#'))
        .collect()
}

/// Unordered portal pair, stored as `(min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LinkKey(PortalId, PortalId);

impl LinkKey {
    #[inline]
    pub fn new(a: PortalId, b: PortalId) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
}

/// Rainbow palette cycled over clusters.
pub const CLUSTER_PALETTE: [&str; 7] = [
    "#FF0000", "#FFA500", "#FFFF00", "#00FF00", "#00FFFF", "#0000FF", "#800080",
];

/// Hex color of stitch links.
pub const STITCH_COLOR: &str = "#FFFFFF";

/// Display group of a link or field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkColor {
    Cluster(usize),
    Stitch,
}

impl LinkColor {
    pub fn hex(self) -> &'static str {
        match self {
            LinkColor::Cluster(i) => CLUSTER_PALETTE[i % CLUSTER_PALETTE.len()],
            LinkColor::Stitch => STITCH_COLOR,
        }
    }
}

/// A link thrown from `from` to `to`; the key is carried from `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub from: PortalId,
    pub to: PortalId,
    pub color: LinkColor,
}

impl Link {
    #[inline]
    pub fn touches(&self, p: PortalId) -> bool {
        self.from == p || self.to == p
    }
}

/// Closed triangle, recorded when its last link was thrown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub corners: [PortalId; 3],
    pub color: LinkColor,
}

/// Cluster letter: `A`..`Z`, then `AA`, `AB`, ...
pub fn cluster_letter(index: usize) -> String {
    let mut rev = Vec::new();
    let mut i = index;
    loop {
        rev.push(char::from(b'A' + (i % 26) as u8));
        if i < 26 {
            break;
        }
        i = i / 26 - 1;
    }
    rev.iter().rev().collect()
}
