//! gRPC server and shared proto types.
//!
//! This module provides:
//! - Generated protobuf types (`proto`) used by both server and client
//! - Type conversions between native and proto types (`convert`)
//! - The gRPC service implementation (`service`)
//! - Configuration types (`config`)

pub mod config;
pub mod convert;
pub mod service;

/// Re-exported generated proto types.
pub mod proto {
    tonic::include_proto!("vegvisir.v1");
}

pub use service::VegvisirService;
