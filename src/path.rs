//! Route geometry with antimeridian splitting
//!
//! A straight line between two points on a flat world map is the visually
//! correct route as long as the endpoints are at most 180° of longitude
//! apart. Beyond that the short way round crosses the antimeridian, so the
//! route is drawn as two lines that leave the map at the left and right
//! edges at the same latitude.

use crate::types::{GeoPoint, Path, Segment};

/// Longitude of the antimeridian (and the map edge) in degrees
pub const ANTIMERIDIAN: f64 = 180.0;

/// Build the map geometry for a route between two points
///
/// Returns a single segment `[p1, p2]` if the longitude difference is at most
/// 180°, otherwise a split path whose first segment starts at the western
/// (smaller longitude) point and ends at longitude -180, and whose second
/// segment starts at the eastern point and ends at longitude 180.
///
/// A difference of exactly 180° is drawn as a single line.
pub fn build_path(p1: GeoPoint, p2: GeoPoint) -> Path {
    if (p2.lon - p1.lon).abs() <= ANTIMERIDIAN {
        return Path::Line(Segment::new(p1, p2));
    }

    let (left, right) = if p2.lon > p1.lon { (p1, p2) } else { (p2, p1) };
    let y_bound = antimeridian_latitude(left, right);

    tracing::trace!(?left, ?right, y_bound, "splitting route at the antimeridian");

    Path::Split([
        Segment::new(left, GeoPoint::new(-ANTIMERIDIAN, y_bound)),
        Segment::new(right, GeoPoint::new(ANTIMERIDIAN, y_bound)),
    ])
}

/// [`build_path`] for raw `(lon, lat)` coordinates
pub fn build_path_lon_lat(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> Path {
    build_path(GeoPoint::new(lon1, lat1), GeoPoint::new(lon2, lat2))
}

/// Latitude at which the route between `left` and `right` crosses the
/// antimeridian
///
/// Longitude is treated as continuous modulo 360: the line from `right`
/// eastwards to `left + 360` is interpolated linearly at longitude 180.
/// `left` must have the smaller longitude.
///
/// If `left` is at -180 and `right` at 180 both points lie on the
/// antimeridian itself and the halves meet at their mean latitude.
pub fn antimeridian_latitude(left: GeoPoint, right: GeoPoint) -> f64 {
    let span = right.lon - left.lon - 2.0 * ANTIMERIDIAN;
    if span == 0.0 {
        return 0.5 * (left.lat + right.lat);
    }

    right.lat + (right.lat - left.lat) * (ANTIMERIDIAN - right.lon) / span
}
