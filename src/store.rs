//! The feature store.
//!
//! An ordered collection of named places, fixed at construction and shared
//! read-only across every session for the life of the process. Because no
//! writer exists after construction, handlers share it through an `Arc`
//! with no locking.

use tracing::debug;

use crate::geo;
use crate::types::{Feature, Point, RecommendationMode};

/// Ordered, immutable-after-construction collection of features.
#[derive(Debug, Clone, Default)]
pub struct FeatureStore {
    features: Vec<Feature>,
}

impl FeatureStore {
    /// Build a store from features; iteration order is the given order.
    pub fn new(features: Vec<Feature>) -> Self {
        debug!(count = features.len(), "feature store constructed");
        Self { features }
    }

    /// The seed dataset of the reference deployment.
    pub fn seed() -> Self {
        Self::new(vec![
            Feature::new("Old Lighthouse", Point::new(310_020_000, 123_440_000)),
            Feature::new("Harbor Market", Point::new(310_022_514, 123_440_410)),
            Feature::new("Southern Ridge", Point::new(151_421_410, 151_454_241)),
        ])
    }

    /// Exact-coordinate lookup; first match in store order wins.
    pub fn get_by_location(&self, point: Point) -> Option<&Feature> {
        self.features.iter().find(|f| f.location == point)
    }

    /// All features in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    /// Number of stored features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the store holds no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// The feature nearest to (or farthest from) `point`.
    ///
    /// Ties go to the first feature in store order: the running best only
    /// moves on strict improvement. Returns `None` only for an empty store.
    pub fn recommend(&self, point: Point, mode: RecommendationMode) -> Option<&Feature> {
        let mut best: Option<(&Feature, i32)> = None;
        for feature in &self.features {
            let d = geo::distance(feature.location, point);
            let improves = match (&best, mode) {
                (None, _) => true,
                (Some((_, best_d)), RecommendationMode::Nearest) => d < *best_d,
                (Some((_, best_d)), RecommendationMode::Farthest) => d > *best_d,
            };
            if improves {
                best = Some((feature, d));
            }
        }
        best.map(|(feature, _)| feature)
    }
}
