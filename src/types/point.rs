use crate::error::{Error, Result};

/// A geographic point in degrees
///
/// Longitude comes first, matching the `(x, y)` order used by map
/// geometries. Valid points have longitude in `[-180, 180]` and latitude in
/// `[-90, 90]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Longitude in degrees
    pub lon: f64,
    /// Latitude in degrees
    pub lat: f64,
}

impl GeoPoint {
    /// Create a point without range checks
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Create a point, rejecting non-finite or out-of-range coordinates
    pub fn try_new(lon: f64, lat: f64) -> Result<Self> {
        let point = Self::new(lon, lat);
        if !point.is_valid() {
            return Err(Error::CoordinateOutOfRange { point });
        }
        Ok(point)
    }

    /// Check that both coordinates are finite and within range
    pub fn is_valid(&self) -> bool {
        (-180.0..=180.0).contains(&self.lon) && (-90.0..=90.0).contains(&self.lat)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(point: GeoPoint) -> Self {
        (point.lon, point.lat)
    }
}
