use serde::{Deserialize, Serialize};

use crate::geometry::math::distance;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Two points and the Euclidean distance between them.
///
/// The distance is computed once on construction and cannot drift from the
/// coordinates afterwards, so the fields are read through accessors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PointPair {
    p1: Point,
    p2: Point,
    distance: f64,
}

impl PointPair {
    pub fn new(p1: Point, p2: Point) -> Self {
        PointPair { p1, p2, distance: distance(&p1, &p2) }
    }

    #[inline]
    pub fn first(&self) -> Point {
        self.p1
    }

    #[inline]
    pub fn second(&self) -> Point {
        self.p2
    }

    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    #[inline]
    pub fn points(&self) -> (Point, Point) {
        (self.p1, self.p2)
    }

    /// Unordered comparison: `(a, b)` and `(b, a)` are the same pair.
    pub fn same_points(&self, other: &PointPair) -> bool {
        (self.p1 == other.p1 && self.p2 == other.p2) || (self.p1 == other.p2 && self.p2 == other.p1)
    }
}

impl std::fmt::Display for PointPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <-> {} (distance {:.6})", self.p1, self.p2, self.distance)
    }
}
