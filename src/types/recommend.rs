//! Recommendation stream types.

use serde::{Deserialize, Serialize};

use super::Point;

/// Which end of the distance ordering a recommendation should pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationMode {
    /// The stored feature closest to the query point.
    #[default]
    Nearest,
    /// The stored feature farthest from the query point.
    Farthest,
}

/// One client-to-server message on the `Recommend` stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub point: Point,
    pub mode: RecommendationMode,
}

impl RecommendationRequest {
    /// Request the feature nearest to `point`.
    pub fn nearest(point: Point) -> Self {
        Self {
            point,
            mode: RecommendationMode::Nearest,
        }
    }

    /// Request the feature farthest from `point`.
    pub fn farthest(point: Point) -> Self {
        Self {
            point,
            mode: RecommendationMode::Farthest,
        }
    }
}
