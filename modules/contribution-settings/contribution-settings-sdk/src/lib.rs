//! Contribution settings SDK
//!
//! This crate provides the public API for the contribution-settings module:
//! - `ContributionSettingsApi` trait for inter-module communication
//! - Model types (`ContributionType`, `ContributionSettings`, `ContributionSettingsUpdate`)
//! - Error type (`SettingsError`)
//!
//! Consumers receive the client as an `Arc<dyn ContributionSettingsApi>`:
//! ```ignore
//! let settings = client.get_settings().await;
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![forbid(unsafe_code)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::ContributionSettingsApi;
pub use errors::SettingsError;
pub use models::{ContributionSettings, ContributionSettingsUpdate, ContributionType};
