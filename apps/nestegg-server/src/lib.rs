//! NestEgg server library: configuration, logging and HTTP assembly.
//!
//! The binary in `main.rs` is a thin CLI over these pieces; integration tests
//! drive [`app::build_app`] directly.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod app;
pub mod config;
pub mod logging;
pub mod signals;

pub use app::{build_app, serve};
pub use config::AppConfig;
