//! Drawing-space geometry helpers.
//!
//! Pure functions for distance, angle, octant snapping, and axis
//! equalization, extracted for testability and reusability.

use std::f64::consts::{FRAC_PI_4, TAU};

use serde::{Deserialize, Serialize};

/// A point in drawing-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        distance(*self, other)
    }

    /// Component-wise offset by a delta.
    pub fn offset(&self, dx: i32, dy: i32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = (b.x - a.x) as f64;
    let dy = (b.y - a.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Angle of the vector from `a` to `b`, normalized to `[0, 2π)`.
pub fn angle(a: Point, b: Point) -> f64 {
    let theta = ((b.y - a.y) as f64).atan2((b.x - a.x) as f64);
    if theta < 0.0 { theta + TAU } else { theta }
}

/// Snap `b` to the nearest 45° ray out of `a`, preserving the distance.
///
/// Constrains line drawing to the 8 compass directions.
pub fn snap_to_octant(a: Point, b: Point) -> Point {
    let dist = distance(a, b);
    let snapped = (angle(a, b) / FRAC_PI_4).round() * FRAC_PI_4;
    Point::new(
        a.x + (dist * snapped.cos()).round() as i32,
        a.y + (dist * snapped.sin()).round() as i32,
    )
}

/// Force the vertical delta from `a` to `b` to match the horizontal one,
/// keeping the original vertical direction. Used to hold shapes square
/// (or circular) while a modifier key is down.
pub fn equalize_axes(a: Point, b: Point) -> Point {
    let run = (b.x - a.x).abs();
    let rise = if b.y - a.y < 0 { -run } else { run };
    Point::new(b.x, a.y + rise)
}

/// Normalize an angle in radians to `[0, 2π)`.
pub fn normalize_angle(theta: f64) -> f64 {
    let wrapped = theta % TAU;
    if wrapped < 0.0 { wrapped + TAU } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 0.0001;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_distance() {
        assert!(approx_eq(distance(Point::new(0, 0), Point::new(3, 4)), 5.0));
        assert!(approx_eq(distance(Point::new(5, 5), Point::new(5, 5)), 0.0));
        // Method form delegates to the free function
        assert!(approx_eq(Point::new(0, 0).distance_to(Point::new(3, 4)), 5.0));
    }

    #[test]
    fn test_angle_quadrants() {
        let origin = Point::new(0, 0);
        assert!(approx_eq(angle(origin, Point::new(10, 0)), 0.0));
        assert!(approx_eq(angle(origin, Point::new(0, 10)), PI / 2.0));
        assert!(approx_eq(angle(origin, Point::new(-10, 0)), PI));
        // Negative atan2 results wrap into [0, 2π)
        assert!(approx_eq(angle(origin, Point::new(0, -10)), 3.0 * PI / 2.0));
    }

    #[test]
    fn test_snap_to_octant_horizontal() {
        // Raw angle ~5.7° rounds to the 0° ray
        let snapped = snap_to_octant(Point::new(0, 0), Point::new(10, 1));
        assert_eq!(snapped, Point::new(10, 0));
    }

    #[test]
    fn test_snap_to_octant_diagonal() {
        // 40° is closest to the 45° ray; distance is preserved
        let a = Point::new(0, 0);
        let b = Point::new(100, 84);
        let snapped = snap_to_octant(a, b);
        assert_eq!(snapped.x, snapped.y);
        assert!((distance(a, snapped) - distance(a, b)).abs() < 1.0);
    }

    #[test]
    fn test_snap_to_octant_preserves_offset_origin() {
        let snapped = snap_to_octant(Point::new(50, 50), Point::new(60, 51));
        assert_eq!(snapped, Point::new(60, 50));
    }

    #[test]
    fn test_equalize_axes() {
        let a = Point::new(0, 0);
        assert_eq!(equalize_axes(a, Point::new(10, 3)), Point::new(10, 10));
        assert_eq!(equalize_axes(a, Point::new(10, -3)), Point::new(10, -10));
        assert_eq!(equalize_axes(a, Point::new(-10, 3)), Point::new(-10, 10));
    }

    #[test]
    fn test_equalize_axes_zero_rise() {
        // rise == 0 takes the non-negative branch
        let equalized = equalize_axes(Point::new(0, 5), Point::new(8, 5));
        assert_eq!(equalized, Point::new(8, 13));
    }

    #[test]
    fn test_normalize_angle() {
        assert!(approx_eq(normalize_angle(-PI / 2.0), 3.0 * PI / 2.0));
        assert!(approx_eq(normalize_angle(TAU + 0.5), 0.5));
    }
}
