//! Canvas-space geometry shared by the animated layers.

use serde::{Deserialize, Serialize};

/// Size of a drawing surface in CSS pixels.
///
/// Negative or non-finite sizes collapse to zero so every consumer can rely
/// on `0.0 <= width` and `0.0 <= height`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl Bounds {
    /// Create bounds, sanitising negative and non-finite sizes.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// Surface area in square pixels.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Whether a point lies inside the closed rectangle.
    pub fn contains(&self, point: Point) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    /// Clamp an x coordinate into `[0, width]`.
    pub fn clamp_x(&self, x: f64) -> f64 {
        if x.is_nan() { 0.0 } else { x.clamp(0.0, self.width) }
    }

    /// Clamp a y coordinate into `[0, height]`.
    pub fn clamp_y(&self, y: f64) -> f64 {
        if y.is_nan() { 0.0 } else { y.clamp(0.0, self.height) }
    }

    /// Viewport point `client` in the coordinates of a surface whose
    /// top-left corner sits at `origin`, or `None` when it falls outside.
    pub fn localize(&self, origin: Point, client: Point) -> Option<Point> {
        let local = Point::new(client.x - origin.x, client.y - origin.y);
        self.contains(local).then_some(local)
    }

    /// Centre of the surface.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// A point in canvas space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_and_nan_sizes_collapse_to_zero() {
        let b = Bounds::new(-10.0, f64::NAN);
        assert_eq!(b.width, 0.0);
        assert_eq!(b.height, 0.0);
        assert!(b.contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn clamp_keeps_points_inside() {
        let b = Bounds::new(100.0, 50.0);
        assert_eq!(b.clamp_x(-3.0), 0.0);
        assert_eq!(b.clamp_x(130.0), 100.0);
        assert_eq!(b.clamp_y(f64::NAN), 0.0);
        assert!(b.contains(Point::new(b.clamp_x(1e9), b.clamp_y(-1e9))));
    }

    #[test]
    fn localize_offsets_by_origin() {
        let b = Bounds::new(200.0, 100.0);
        let origin = Point::new(50.0, -30.0);
        assert_eq!(b.localize(origin, Point::new(60.0, 20.0)), Some(Point::new(10.0, 50.0)));
        // scrolled past or beside the surface
        assert_eq!(b.localize(origin, Point::new(60.0, 80.0)), None);
        assert_eq!(b.localize(origin, Point::new(10.0, 20.0)), None);
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
    }
}
