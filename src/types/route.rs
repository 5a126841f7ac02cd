//! Route recording results.

use serde::{Deserialize, Serialize};

/// Summary of one route-recording session.
///
/// Produced exactly once per `RecordRoute` stream, after the client signals
/// end-of-input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Number of points received.
    pub point_count: i32,
    /// Cumulative path length in metres, truncated toward zero.
    pub distance: i32,
    /// Wall-clock seconds from stream open to end-of-input.
    pub elapsed_seconds: i32,
}

impl std::fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} points, {} m, {} s",
            self.point_count, self.distance, self.elapsed_seconds
        )
    }
}
