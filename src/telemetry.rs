//! Telemetry metric name constants.
//!
//! Centralised metric names for vegvisir operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `vegvisir_`. Counters end in `_total`.
//!
//! # Common labels
//!
//! - `method` — RPC name ("get_feature", "list_features", "record_route",
//!   "recommend")
//! - `status` — outcome: "ok" or "error"
//! - `direction` — stream message direction: "inbound" or "outbound"

/// Total RPC sessions opened, labelled by terminal outcome.
///
/// Labels: `method`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "vegvisir_requests_total";

/// Total individual stream messages processed.
///
/// Labels: `method`, `direction` ("inbound" | "outbound").
pub const STREAM_MESSAGES_TOTAL: &str = "vegvisir_stream_messages_total";
