use crate::model::Point;

#[inline]
pub fn distance_sq(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x; let dy = a.y - b.y;
    dx*dx + dy*dy
}

#[inline]
pub fn distance(a: &Point, b: &Point) -> f64 {
    distance_sq(a, b).sqrt()
}

/// Horizontal gap between a point and the vertical line `x = line_x`.
#[inline]
pub fn x_gap(p: &Point, line_x: f64) -> f64 {
    (p.x - line_x).abs()
}
