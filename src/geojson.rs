//! GeoJSON output for map renderers
//!
//! Coordinates are written as `[lon, lat]` in WGS84 degrees (EPSG:4326),
//! the GeoJSON default, so no `crs` member is emitted.

use crate::types::{Airport, GeoPoint, Path, RouteLine, Segment};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for GeoPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.lon, self.lat).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <(f64, f64)>::deserialize(deserializer).map(GeoPoint::from)
    }
}

/// Extent of a geometry or collection, written as GeoJSON `bbox`
///
/// Plain min/max over the coordinates, so a collection containing a split
/// route spans the whole map width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    /// `None` for an empty slice
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = Self::from(*first);
        for &point in rest {
            bbox.extend(point);
        }
        Some(bbox)
    }

    pub fn extend(&mut self, point: GeoPoint) {
        self.merge(Self::from(point));
    }

    pub fn merge(&mut self, other: BoundingBox) {
        self.west = self.west.min(other.west);
        self.south = self.south.min(other.south);
        self.east = self.east.max(other.east);
        self.north = self.north.max(other.north);
    }

    fn merged(mut self, other: BoundingBox) -> Self {
        self.merge(other);
        self
    }
}

impl From<GeoPoint> for BoundingBox {
    fn from(point: GeoPoint) -> Self {
        Self {
            west: point.lon,
            south: point.lat,
            east: point.lon,
            north: point.lat,
        }
    }
}

impl Serialize for BoundingBox {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.west, self.south, self.east, self.north].serialize(serializer)
    }
}

/// GeoJSON geometry object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(GeoPoint),
    LineString(Vec<GeoPoint>),
    MultiLineString(Vec<Vec<GeoPoint>>),
}

fn line_coordinates(segment: &Segment) -> Vec<GeoPoint> {
    vec![segment.start, segment.end]
}

impl Geometry {
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            Geometry::Point(point) => Some(BoundingBox::from(*point)),
            Geometry::LineString(points) => BoundingBox::from_points(points),
            Geometry::MultiLineString(lines) => lines
                .iter()
                .filter_map(|line| BoundingBox::from_points(line))
                .reduce(BoundingBox::merged),
        }
    }
}

impl From<&Path> for Geometry {
    fn from(path: &Path) -> Self {
        match path {
            Path::Line(segment) => Geometry::LineString(line_coordinates(segment)),
            Path::Split(segments) => {
                Geometry::MultiLineString(segments.iter().map(line_coordinates).collect())
            }
        }
    }
}

impl From<GeoPoint> for Geometry {
    fn from(point: GeoPoint) -> Self {
        Geometry::Point(point)
    }
}

/// GeoJSON feature with typed properties
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature<P> {
    #[serde(rename = "type")]
    kind: &'static str,
    pub geometry: Geometry,
    pub properties: P,
}

impl<P> Feature<P> {
    pub fn new(geometry: Geometry, properties: P) -> Self {
        Self {
            kind: "Feature",
            geometry,
            properties,
        }
    }
}

/// GeoJSON feature collection
///
/// `bbox` covers all features and is omitted for an empty collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCollection<P> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    pub features: Vec<Feature<P>>,
}

impl<P> FeatureCollection<P> {
    pub fn new(features: Vec<Feature<P>>) -> Self {
        let bbox = features
            .iter()
            .filter_map(|feature| feature.geometry.bounding_box())
            .reduce(BoundingBox::merged);

        Self {
            kind: "FeatureCollection",
            bbox,
            features,
        }
    }
}

impl<P> FromIterator<Feature<P>> for FeatureCollection<P> {
    fn from_iter<T: IntoIterator<Item = Feature<P>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteProperties {
    /// Route name in the form `SRC-DST`
    pub route: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportProperties {
    pub airport: String,
    pub airport_size: u32,
}

/// Convert named route geometries into a feature collection
pub fn routes_to_geojson(lines: &[RouteLine]) -> FeatureCollection<RouteProperties> {
    lines
        .iter()
        .map(|line| {
            let properties = RouteProperties {
                route: line.name.clone(),
            };
            Feature::new(Geometry::from(&line.path), properties)
        })
        .collect()
}

/// Convert airports into a feature collection of points
pub fn airports_to_geojson(airports: &[Airport]) -> FeatureCollection<AirportProperties> {
    airports
        .iter()
        .map(|airport| {
            let properties = AirportProperties {
                airport: airport.name.clone(),
                airport_size: airport.size,
            };
            Feature::new(Geometry::from(airport.location), properties)
        })
        .collect()
}
