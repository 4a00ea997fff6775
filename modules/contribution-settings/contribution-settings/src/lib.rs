//! Contribution Settings Module Implementation
//!
//! Stores the single contribution preference in a JSON file and serves it
//! over `/api/contribution-settings`. The public API is defined in
//! `contribution-settings-sdk` and re-exported here.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub use contribution_settings_sdk::{
    ContributionSettings, ContributionSettingsApi, ContributionSettingsUpdate, ContributionType,
    SettingsError,
};

pub mod module;
pub use module::ContributionSettingsModule;

pub mod config;
pub use config::SettingsConfig;

pub mod local_client;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
