//! Retirement Projection Module
//!
//! Projects per-paycheck and annual contributions and the future value of a
//! contribution stream at retirement, for the static user profile and the
//! settings held by the contribution-settings module.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub use config::{ProjectionConfig, ProjectionConfigError};

pub mod module;
pub use module::RetirementProjectionModule;

pub mod domain;
pub use domain::calculator;
pub use domain::model::{
    ContributionProjection, CurrentContributionImpact, ImpactDelta, ProjectionAssumptions,
    UserProfile, YtdSummary,
};

#[doc(hidden)]
pub mod api;
