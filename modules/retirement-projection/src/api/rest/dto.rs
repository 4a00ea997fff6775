use contribution_settings_sdk::ContributionType;
use serde::{Deserialize, Serialize};

use crate::domain::model::{CurrentContributionImpact, ImpactDelta, YtdSummary};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementImpactQuery {
    #[serde(default)]
    pub current_rate: f64,
    #[serde(default)]
    pub new_rate: f64,
    #[serde(default)]
    pub contribution_type: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AgeQuery {
    #[serde(default)]
    pub age: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSettingsDto {
    pub contribution_type: ContributionType,
    pub contribution_rate: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YtdDataDto {
    pub age: u32,
    pub annual_salary: f64,
    pub paychecks_per_year: u32,
    pub ytd_contributions: f64,
    pub current_year: i32,
    pub pay_periods_elapsed: u32,
    pub current_contribution_per_paycheck: f64,
    pub projected_annual_contribution: f64,
    pub current_settings: CurrentSettingsDto,
}

impl From<YtdSummary> for YtdDataDto {
    fn from(ytd: YtdSummary) -> Self {
        Self {
            age: ytd.profile.age,
            annual_salary: ytd.profile.annual_salary,
            paychecks_per_year: ytd.profile.paychecks_per_year,
            ytd_contributions: ytd.profile.ytd_contributions,
            current_year: ytd.current_year,
            pay_periods_elapsed: ytd.profile.pay_periods_elapsed,
            current_contribution_per_paycheck: ytd.current_contribution_per_paycheck,
            projected_annual_contribution: ytd.projected_annual_contribution,
            current_settings: CurrentSettingsDto {
                contribution_type: ytd.contribution_type,
                contribution_rate: ytd.contribution_rate,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementImpactDto {
    pub additional_contribution_per_paycheck: f64,
    pub additional_annual_contribution: f64,
    pub years_to_retirement: u32,
    pub projected_retirement_savings: f64,
    pub annual_return_rate: f64,
}

impl From<ImpactDelta> for RetirementImpactDto {
    fn from(delta: ImpactDelta) -> Self {
        Self {
            additional_contribution_per_paycheck: delta.additional_contribution_per_paycheck,
            additional_annual_contribution: delta.additional_annual_contribution,
            years_to_retirement: delta.years_to_retirement,
            projected_retirement_savings: delta.projected_retirement_savings,
            annual_return_rate: delta.annual_return_rate,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentContributionImpactDto {
    pub contribution_per_paycheck: f64,
    pub annual_contribution: f64,
    pub years_to_retirement: u32,
    pub projected_retirement_savings: f64,
    pub annual_return_rate: f64,
    pub contribution_type: ContributionType,
    pub contribution_rate: f64,
}

impl From<CurrentContributionImpact> for CurrentContributionImpactDto {
    fn from(impact: CurrentContributionImpact) -> Self {
        let projection = impact.projection;
        Self {
            contribution_per_paycheck: projection.contribution_per_paycheck,
            annual_contribution: projection.annual_contribution,
            years_to_retirement: projection.years_to_retirement,
            projected_retirement_savings: projection.projected_retirement_savings,
            annual_return_rate: projection.annual_return_rate,
            contribution_type: impact.contribution_type,
            contribution_rate: impact.contribution_rate,
        }
    }
}
