#![doc = include_str!("../README.md")]

pub use crate::distance::{EARTH_RADIUS_KM, Sphere, haversine_distance, haversine_distance_lon_lat};
pub use crate::error::{Error, Result};
pub use crate::path::{ANTIMERIDIAN, antimeridian_latitude, build_path, build_path_lon_lat};
pub use crate::route::{route_lines, unique_routes};
pub use crate::types::*;

pub mod distance;
mod error;
#[cfg(feature = "geojson")]
pub mod geojson;
pub mod path;
mod route;
mod types;
pub mod utils;
