//! Great-circle distances on a sphere using the haversine formula
//!
//! See [Wikipedia](https://en.wikipedia.org/wiki/Haversine_formula) for
//! background. The Earth is approximated by a sphere; distances are in the
//! unit of the sphere radius (**kilometers** for [`Sphere::EARTH`]).

use crate::error::{Error, Result};
use crate::types::GeoPoint;

/// Radius of the Earth in kilometers
pub const EARTH_RADIUS_KM: f64 = 6378.0;

/// A sphere of fixed radius that distances are measured on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    /// The Earth, with a radius of [`EARTH_RADIUS_KM`]
    pub const EARTH: Sphere = Sphere {
        radius: EARTH_RADIUS_KM,
    };

    /// Create a sphere with a finite, positive radius
    pub fn new(radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidRadius { radius });
        }
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Surface distance between two points
    ///
    /// ```text
    /// d = 2R · asin(√(hav(Δλ) + hav(Δφ)·(1 − hav(Δλ) − hav(2φm))))
    /// ```
    ///
    /// with `Δλ` the longitude difference, `Δφ` the latitude difference and
    /// `φm` the mean latitude, all in radians. The radicand is clamped to
    /// `[0, 1]` so rounding near identical or antipodal points cannot
    /// produce NaN.
    pub fn haversine_distance(&self, p1: GeoPoint, p2: GeoPoint) -> f64 {
        let delta_lon = (p2.lon - p1.lon).to_radians();
        let delta_lat = (p2.lat - p1.lat).to_radians();
        let mean_lat = (0.5 * (p1.lat + p2.lat)).to_radians();

        let hav_lon = haversine(delta_lon);
        let radicand = hav_lon + haversine(delta_lat) * (1.0 - hav_lon - haversine(2.0 * mean_lat));

        2.0 * self.radius * half_central_angle(radicand)
    }
}

/// `asin(√x)`, with `x` clamped into the domain `[0, 1]`
fn half_central_angle(radicand: f64) -> f64 {
    radicand.clamp(0.0, 1.0).sqrt().asin()
}

impl Default for Sphere {
    fn default() -> Self {
        Self::EARTH
    }
}

/// Haversine half-angle transform: `(1 - cos x) / 2`
pub fn haversine(x: f64) -> f64 {
    0.5 * (1.0 - x.cos())
}

/// Distance in kilometers between two points on [`Sphere::EARTH`]
pub fn haversine_distance(p1: GeoPoint, p2: GeoPoint) -> f64 {
    Sphere::EARTH.haversine_distance(p1, p2)
}

/// [`haversine_distance`] for raw `(lon, lat)` coordinates
pub fn haversine_distance_lon_lat(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    haversine_distance(GeoPoint::new(lon1, lat1), GeoPoint::new(lon2, lat2))
}
