//! Vegvisir - location-advisory gRPC service
//!
//! One logical service exercising all four RPC interaction shapes over a
//! small read-only store of named places:
//!
//! - `GetFeature` — unary exact-coordinate lookup
//! - `ListFeatures` — server-streamed containment scan
//! - `RecordRoute` — client-streamed route fold into one summary
//! - `Recommend` — bidirectional nearest/farthest advisory stream
//!
//! # Client Example
//!
//! ```rust,no_run
//! use vegvisir::{Point, ServiceClient};
//!
//! #[tokio::main]
//! async fn main() -> vegvisir::Result<()> {
//!     let client = ServiceClient::connect("http://127.0.0.1:9470").await?;
//!
//!     let feature = client
//!         .get_feature(Point::new(310_020_000, 123_440_000))
//!         .await?;
//!     if feature.is_present() {
//!         println!("{feature}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod geo;
pub mod server;
pub mod store;
pub mod telemetry;
pub mod types;

// Re-export main types at crate root
pub use client::{RecommendSession, ServiceClient};
pub use error::{Result, VegvisirError};
pub use server::VegvisirService;
pub use store::FeatureStore;
pub use types::{
    COORD_FACTOR, Feature, Point, RecommendationMode, RecommendationRequest, Rectangle,
    RouteSummary,
};

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
