//! Pure geodesic and planar geometry.
//!
//! Both functions are deterministic and total for any finite fixed-point
//! input: out-of-range coordinates produce a mathematically defined (if
//! geographically meaningless) result rather than an error. Validation, if
//! wanted, belongs to callers.

use crate::types::{COORD_FACTOR, Point, Rectangle};

/// Mean Earth radius in metres.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points in metres, truncated toward
/// zero.
///
/// Uses the haversine formula on a spherical Earth of radius
/// [`EARTH_RADIUS_M`].
pub fn distance(p1: Point, p2: Point) -> i32 {
    let lat1 = to_radians(f64::from(p1.latitude) / COORD_FACTOR);
    let lat2 = to_radians(f64::from(p2.latitude) / COORD_FACTOR);
    let lng1 = to_radians(f64::from(p1.longitude) / COORD_FACTOR);
    let lng2 = to_radians(f64::from(p2.longitude) / COORD_FACTOR);
    let dlat = lat2 - lat1;
    let dlng = lng2 - lng1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (EARTH_RADIUS_M * c) as i32
}

/// Whether `point` lies inside `rect`, bounds inclusive.
///
/// The rectangle's corners may be given in any order; both axes are
/// normalized with min/max first.
pub fn contains(point: Point, rect: Rectangle) -> bool {
    let left = rect.lo.longitude.min(rect.hi.longitude);
    let right = rect.lo.longitude.max(rect.hi.longitude);
    let bottom = rect.lo.latitude.min(rect.hi.latitude);
    let top = rect.lo.latitude.max(rect.hi.latitude);

    point.longitude >= left
        && point.longitude <= right
        && point.latitude >= bottom
        && point.latitude <= top
}

fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}
