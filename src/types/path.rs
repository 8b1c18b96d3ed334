use crate::types::GeoPoint;

/// A straight map line between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: GeoPoint,
    pub end: GeoPoint,
}

impl Segment {
    pub const fn new(start: GeoPoint, end: GeoPoint) -> Self {
        Self { start, end }
    }

    /// Same segment traversed in the opposite direction
    pub const fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Check whether both segments cover the same line, ignoring direction
    pub fn same_line(&self, other: &Segment) -> bool {
        self == other || *self == other.reversed()
    }
}

/// Map-renderable route geometry
///
/// A route is either a single straight line, or two lines that each run from
/// one endpoint to the map edge when the route crosses the antimeridian.
/// Other segment counts cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum Path {
    /// Route drawn as one straight line
    Line(Segment),
    /// Route split at the antimeridian
    ///
    /// The first segment runs from the western endpoint to longitude -180,
    /// the second from the eastern endpoint to longitude 180. Both end at the
    /// same latitude.
    Split([Segment; 2]),
}

impl Path {
    /// All segments of the path (one or two)
    pub fn segments(&self) -> &[Segment] {
        match self {
            Path::Line(segment) => std::slice::from_ref(segment),
            Path::Split(segments) => segments,
        }
    }

    pub fn is_split(&self) -> bool {
        matches!(self, Path::Split(_))
    }

    /// Check whether two paths draw the same lines
    ///
    /// Segment order and the direction of each segment are ignored, so
    /// `build_path(a, b)` and `build_path(b, a)` compare equal.
    pub fn geometrically_eq(&self, other: &Path) -> bool {
        match (self, other) {
            (Path::Line(a), Path::Line(b)) => a.same_line(b),
            (Path::Split([a1, a2]), Path::Split([b1, b2])) => {
                (a1.same_line(b1) && a2.same_line(b2)) || (a1.same_line(b2) && a2.same_line(b1))
            }
            _ => false,
        }
    }
}

impl From<Segment> for Path {
    fn from(segment: Segment) -> Self {
        Path::Line(segment)
    }
}
