//! Client library for connecting to vegd.
//!
//! Provides [`ServiceClient`], one driver method per RPC shape, and
//! [`RecommendSession`] for the bidirectional stream.

mod service_client;

pub use service_client::{RecommendSession, ServiceClient};
