//! Projection and ground-distance service.
//!
//! Purpose
//! - All hull, angle and crossing geometry runs on planar coordinates obtained
//!   once per portal from a `GeoProjector`. Clustering and walk distances use
//!   the projector's ground distance instead.
//!
//! The host map is a spherical web-mercator at 256-pixel tiles; `WebMercator`
//! reproduces its pixel frame at a fixed zoom. Callers that own a different
//! frame implement the trait themselves.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Mean earth radius used by the host map for distances (meters).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Latitude bound of the square mercator world.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

/// Reference zoom for projected coordinates.
pub const DEFAULT_ZOOM: u8 = 16;

/// Geographic coordinate in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// External projection service consumed by the planner.
pub trait GeoProjector {
    /// Planar coordinate at the projector's reference zoom.
    fn project(&self, at: LatLng) -> Vector2<f64>;
    /// Ground distance in meters.
    fn distance(&self, a: LatLng, b: LatLng) -> f64;
}

impl<P: GeoProjector + ?Sized> GeoProjector for &P {
    #[inline]
    fn project(&self, at: LatLng) -> Vector2<f64> {
        (**self).project(at)
    }
    #[inline]
    fn distance(&self, a: LatLng, b: LatLng) -> f64 {
        (**self).distance(a, b)
    }
}

/// Spherical web-mercator in pixel space (y grows southwards) with haversine distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WebMercator {
    pub zoom: u8,
}

impl Default for WebMercator {
    fn default() -> Self {
        Self { zoom: DEFAULT_ZOOM }
    }
}

impl WebMercator {
    #[inline]
    pub fn new(zoom: u8) -> Self {
        Self { zoom }
    }

    /// World size in pixels at this zoom.
    #[inline]
    pub fn world_size(&self) -> f64 {
        256.0 * 2f64.powi(i32::from(self.zoom))
    }
}

impl GeoProjector for WebMercator {
    fn project(&self, at: LatLng) -> Vector2<f64> {
        let scale = self.world_size();
        let phi = at.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
        let x = scale * (at.lng + 180.0) / 360.0;
        let y = scale * (0.5 - (PI / 4.0 + phi / 2.0).tan().ln() / (2.0 * PI));
        Vector2::new(x, y)
    }

    #[inline]
    fn distance(&self, a: LatLng, b: LatLng) -> f64 {
        haversine_m(a, b)
    }
}

/// Great-circle distance on a sphere of radius `EARTH_RADIUS_M`.
pub fn haversine_m(a: LatLng, b: LatLng) -> f64 {
    let p1 = a.lat.to_radians();
    let p2 = b.lat.to_radians();
    let dp = p2 - p1;
    let dl = (b.lng - a.lng).to_radians();
    let h = (dp / 2.0).sin().powi(2) + p1.cos() * p2.cos() * (dl / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}
