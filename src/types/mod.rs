//! Public types for the Vegvisir API.

mod feature;
mod point;
mod recommend;
mod route;

pub use feature::Feature;
pub use point::{COORD_FACTOR, Point, Rectangle};
pub use recommend::{RecommendationMode, RecommendationRequest};
pub use route::RouteSummary;
