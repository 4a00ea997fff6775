use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::model::{ProjectionAssumptions, UserProfile};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectionConfig {
    pub profile: UserProfile,
    pub assumptions: ProjectionAssumptions,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionConfigError {
    #[error("profile.paychecks_per_year must be greater than zero")]
    NoPaychecks,

    #[error("profile.{0} must be a finite, non-negative amount")]
    InvalidAmount(&'static str),

    #[error("assumptions.retirement_age must be greater than zero")]
    NoRetirementAge,

    #[error("assumptions.annual_return_rate must be finite and not negative")]
    InvalidReturnRate,
}

impl ProjectionConfig {
    /// # Errors
    /// Returns the first value that would make the projections meaningless.
    pub fn validate(&self) -> Result<(), ProjectionConfigError> {
        let profile = &self.profile;
        if profile.paychecks_per_year == 0 {
            return Err(ProjectionConfigError::NoPaychecks);
        }
        if !is_amount(profile.annual_salary) {
            return Err(ProjectionConfigError::InvalidAmount("annual_salary"));
        }
        if !is_amount(profile.ytd_contributions) {
            return Err(ProjectionConfigError::InvalidAmount("ytd_contributions"));
        }

        let assumptions = &self.assumptions;
        if assumptions.retirement_age == 0 {
            return Err(ProjectionConfigError::NoRetirementAge);
        }
        if !assumptions.annual_return_rate.is_finite() || assumptions.annual_return_rate < 0.0 {
            return Err(ProjectionConfigError::InvalidReturnRate);
        }
        Ok(())
    }
}

fn is_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
