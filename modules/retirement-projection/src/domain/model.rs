//! Projection inputs and results.

use contribution_settings_sdk::ContributionType;
use serde::{Deserialize, Serialize};

/// Static profile of the single user. Comes from configuration and is not
/// editable through the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserProfile {
    pub age: u32,
    pub annual_salary: f64,
    pub paychecks_per_year: u32,
    pub ytd_contributions: f64,
    pub pay_periods_elapsed: u32,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: 22,
            annual_salary: 75_000.0,
            paychecks_per_year: 26,
            ytd_contributions: 4_500.0,
            pay_periods_elapsed: 13,
        }
    }
}

/// Market and retirement assumptions shared by every projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectionAssumptions {
    pub retirement_age: u32,
    pub annual_return_rate: f64,
}

impl Default for ProjectionAssumptions {
    fn default() -> Self {
        Self {
            retirement_age: 65,
            annual_return_rate: 0.07,
        }
    }
}

/// Projection of one contribution setting to retirement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContributionProjection {
    pub contribution_per_paycheck: f64,
    pub annual_contribution: f64,
    pub years_to_retirement: u32,
    pub projected_retirement_savings: f64,
    pub annual_return_rate: f64,
}

/// Extra savings at retirement from moving between two rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactDelta {
    pub additional_contribution_per_paycheck: f64,
    pub additional_annual_contribution: f64,
    pub years_to_retirement: u32,
    pub projected_retirement_savings: f64,
    pub annual_return_rate: f64,
}

/// Year-to-date view of the profile under the current settings.
#[derive(Debug, Clone, PartialEq)]
pub struct YtdSummary {
    pub profile: UserProfile,
    pub current_year: i32,
    pub contribution_type: ContributionType,
    pub contribution_rate: f64,
    pub current_contribution_per_paycheck: f64,
    pub projected_annual_contribution: f64,
}

/// Projection of the stored settings, with the settings it was made from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentContributionImpact {
    pub projection: ContributionProjection,
    pub contribution_type: ContributionType,
    pub contribution_rate: f64,
}
