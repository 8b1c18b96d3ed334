use crate::types::GeoPoint;

/// Errors raised by validating constructors and identifier parsing
///
/// Path construction and distance calculation never fail for finite input;
/// these variants only surface where caller-supplied values are checked.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Coordinate out of range: lon={}, lat={}", .point.lon, .point.lat)]
    CoordinateOutOfRange { point: GeoPoint },

    #[error("Invalid sphere radius: {radius} (expected a finite positive value)")]
    InvalidRadius { radius: f64 },

    #[error("Malformed route name: {name:?} (expected \"SRC-DST\")")]
    MalformedRouteName { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
