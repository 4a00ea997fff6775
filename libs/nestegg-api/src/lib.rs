//! Shared HTTP plumbing for NestEgg modules.
//!
//! Every module answers with the same JSON envelope:
//! `{"success": bool, "data": {...}?, "error": "..."?}`.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![forbid(unsafe_code)]

pub mod cors;
pub mod envelope;
pub mod error;

pub use cors::{CorsConfig, CorsConfigError, build_cors_layer};
pub use envelope::{ApiResult, Envelope, ok};
pub use error::ApiError;
