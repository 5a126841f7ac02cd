//! Conversions between vegvisir native types and protobuf types.
//!
//! Server-side: proto → native for requests, native → proto for responses.
//! The client reuses the same impls in the opposite direction. Absent
//! message fields degrade to defaults (`unwrap_or_default`) rather than
//! erroring; the geometry layer is total over defaulted values.

use crate::types::{
    Feature, Point, RecommendationMode, RecommendationRequest, Rectangle, RouteSummary,
};

use super::proto;

// =============================================================================
// From Proto → Native (incoming requests)
// =============================================================================

impl From<proto::Point> for Point {
    fn from(p: proto::Point) -> Self {
        Point {
            latitude: p.latitude,
            longitude: p.longitude,
        }
    }
}

impl From<proto::Rectangle> for Rectangle {
    fn from(p: proto::Rectangle) -> Self {
        Rectangle {
            lo: p.lo.map(Into::into).unwrap_or_default(),
            hi: p.hi.map(Into::into).unwrap_or_default(),
        }
    }
}

impl From<proto::Feature> for Feature {
    fn from(p: proto::Feature) -> Self {
        Feature {
            name: p.name,
            location: p.location.map(Into::into).unwrap_or_default(),
        }
    }
}

impl From<proto::RouteSummary> for RouteSummary {
    fn from(p: proto::RouteSummary) -> Self {
        RouteSummary {
            point_count: p.point_count,
            distance: p.distance,
            elapsed_seconds: p.elapsed_seconds,
        }
    }
}

impl From<proto::RecommendationRequest> for RecommendationRequest {
    fn from(p: proto::RecommendationRequest) -> Self {
        // Unknown discriminants fall back to Nearest, matching the wire
        // contract's "anything not farthest is nearest" branch.
        let mode = match proto::RecommendationMode::try_from(p.mode) {
            Ok(proto::RecommendationMode::Farthest) => RecommendationMode::Farthest,
            _ => RecommendationMode::Nearest,
        };
        RecommendationRequest {
            point: p.point.map(Into::into).unwrap_or_default(),
            mode,
        }
    }
}

// =============================================================================
// From Native → Proto (outgoing responses)
// =============================================================================

impl From<Point> for proto::Point {
    fn from(p: Point) -> Self {
        proto::Point {
            latitude: p.latitude,
            longitude: p.longitude,
        }
    }
}

impl From<Rectangle> for proto::Rectangle {
    fn from(r: Rectangle) -> Self {
        proto::Rectangle {
            lo: Some(r.lo.into()),
            hi: Some(r.hi.into()),
        }
    }
}

impl From<Feature> for proto::Feature {
    fn from(f: Feature) -> Self {
        proto::Feature {
            name: f.name,
            location: Some(f.location.into()),
        }
    }
}

impl From<RouteSummary> for proto::RouteSummary {
    fn from(s: RouteSummary) -> Self {
        proto::RouteSummary {
            point_count: s.point_count,
            distance: s.distance,
            elapsed_seconds: s.elapsed_seconds,
        }
    }
}

impl From<RecommendationMode> for proto::RecommendationMode {
    fn from(mode: RecommendationMode) -> Self {
        match mode {
            RecommendationMode::Nearest => proto::RecommendationMode::Nearest,
            RecommendationMode::Farthest => proto::RecommendationMode::Farthest,
        }
    }
}

impl From<RecommendationRequest> for proto::RecommendationRequest {
    fn from(r: RecommendationRequest) -> Self {
        proto::RecommendationRequest {
            point: Some(r.point.into()),
            mode: proto::RecommendationMode::from(r.mode) as i32,
        }
    }
}
