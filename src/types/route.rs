use crate::types::{GeoPoint, Path};

/// A flight route between two named airports
///
/// One row of a route query: the names and coordinates of the source and
/// destination airports.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub source_name: String,
    pub destination_name: String,
    pub source: GeoPoint,
    pub destination: GeoPoint,
}

impl Route {
    pub fn new(
        source_name: impl Into<String>,
        source: GeoPoint,
        destination_name: impl Into<String>,
        destination: GeoPoint,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            destination_name: destination_name.into(),
            source,
            destination,
        }
    }

    /// Route name in the form `SRC-DST`
    pub fn name(&self) -> String {
        format!("{}-{}", self.source_name, self.destination_name)
    }

    /// Route name that is the same for both directions of travel
    pub fn undirected_name(&self) -> String {
        if self.destination_name < self.source_name {
            format!("{}-{}", self.destination_name, self.source_name)
        } else {
            self.name()
        }
    }

    /// Map geometry of the route
    pub fn path(&self) -> Path {
        crate::path::build_path(self.source, self.destination)
    }

    /// Great-circle distance on the default Earth sphere
    pub fn distance_km(&self) -> f64 {
        crate::distance::haversine_distance(self.source, self.destination)
    }
}

/// An airport with a size figure used for marker scaling
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub name: String,
    pub location: GeoPoint,
    /// Magnitude of the airport, e.g. number of routes served
    pub size: u32,
}

impl Airport {
    pub fn new(name: impl Into<String>, location: GeoPoint, size: u32) -> Self {
        Self {
            name: name.into(),
            location,
            size,
        }
    }
}

/// A named route geometry, ready to hand to a renderer
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLine {
    pub name: String,
    pub path: Path,
}

impl From<&Route> for RouteLine {
    fn from(route: &Route) -> Self {
        Self {
            name: route.name(),
            path: route.path(),
        }
    }
}
