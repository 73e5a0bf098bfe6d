//! Shared frontend utilities: configuration, errors, telemetry, simulated
//! latency and build metadata.

pub mod build_info;
pub mod config;
pub mod errors;
pub mod latency;
pub mod telemetry;

pub use errors::{AppError, ServiceError};
