//! Coordinate value types.

use serde::{Deserialize, Serialize};

/// Scale between fixed-point wire coordinates and decimal degrees.
pub const COORD_FACTOR: f64 = 1e7;

/// A position on the globe.
///
/// Coordinates are decimal degrees scaled by [`COORD_FACTOR`], so the wire
/// representation stays integral and equality is exact. Latitude 31.002° is
/// stored as `310_020_000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub latitude: i32,
    pub longitude: i32,
}

impl Point {
    /// Create a point from fixed-point coordinates.
    pub fn new(latitude: i32, longitude: i32) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in decimal degrees.
    pub fn latitude_degrees(&self) -> f64 {
        f64::from(self.latitude) / COORD_FACTOR
    }

    /// Longitude in decimal degrees.
    pub fn longitude_degrees(&self) -> f64 {
        f64::from(self.longitude) / COORD_FACTOR
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:.4}, {:.4})",
            self.latitude_degrees(),
            self.longitude_degrees()
        )
    }
}

/// An axis-aligned lat/long rectangle.
///
/// There is no invariant that `lo` is the lower-left corner; callers may
/// supply the two corners in any order and consumers normalize with
/// min/max before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    pub lo: Point,
    pub hi: Point,
}

impl Rectangle {
    /// Create a rectangle from two opposite corners, in either order.
    pub fn new(lo: Point, hi: Point) -> Self {
        Self { lo, hi }
    }

    /// The rectangle covering the entire coordinate space.
    pub fn everywhere() -> Self {
        Self {
            lo: Point::new(i32::MIN, i32::MIN),
            hi: Point::new(i32::MAX, i32::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_equality_is_exact() {
        let a = Point::new(310_020_000, 123_440_000);
        let b = Point::new(310_020_000, 123_440_000);
        assert_eq!(a, b);
        assert_ne!(a, Point::new(310_020_001, 123_440_000));
    }

    #[test]
    fn point_degree_conversion() {
        let p = Point::new(310_020_000, -123_440_000);
        assert!((p.latitude_degrees() - 31.002).abs() < 1e-9);
        assert!((p.longitude_degrees() + 12.344).abs() < 1e-9);
    }

    #[test]
    fn everywhere_spans_extremes() {
        let rect = Rectangle::everywhere();
        assert_eq!(rect.lo.latitude, i32::MIN);
        assert_eq!(rect.hi.longitude, i32::MAX);
    }
}
