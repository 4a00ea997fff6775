//! Contribution and retirement-savings arithmetic.
//!
//! Future value uses ordinary-annuity compounding: one contribution of `A` at
//! the end of each year for `n` years at annual return `r`:
//!
//! `FV = A * (((1 + r)^n - 1) / r)` for a positive `r`, otherwise `A * n`.

use contribution_settings_sdk::ContributionType;

use super::model::{
    ContributionProjection, ImpactDelta, ProjectionAssumptions, UserProfile, YtdSummary,
};

/// Gross amount of a single paycheck.
#[must_use]
pub fn paycheck_amount(annual_salary: f64, paychecks_per_year: u32) -> f64 {
    annual_salary / f64::from(paychecks_per_year)
}

/// Contribution taken from one paycheck.
#[must_use]
pub fn contribution_per_paycheck(kind: ContributionType, rate: f64, paycheck_amount: f64) -> f64 {
    match kind {
        ContributionType::Percentage => paycheck_amount * (rate / 100.0),
        ContributionType::Dollar => rate,
    }
}

#[must_use]
pub fn annual_contribution(per_paycheck: f64, paychecks_per_year: u32) -> f64 {
    per_paycheck * f64::from(paychecks_per_year)
}

/// Whole years left until retirement, never less than one.
///
/// An age at or past retirement counts as the year before retirement.
#[must_use]
pub fn years_to_retirement(age: u32, retirement_age: u32) -> u32 {
    let effective_age = if age >= retirement_age {
        retirement_age.saturating_sub(1)
    } else {
        age
    };
    retirement_age.saturating_sub(effective_age).max(1)
}

#[must_use]
pub fn future_value(annual_contribution: f64, annual_return_rate: f64, years: u32) -> f64 {
    let n = f64::from(years);
    if annual_return_rate <= 0.0 {
        return annual_contribution * n;
    }
    annual_contribution * (((1.0 + annual_return_rate).powf(n) - 1.0) / annual_return_rate)
}

/// Calculator bound to one profile and one set of assumptions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projector {
    profile: UserProfile,
    assumptions: ProjectionAssumptions,
}

impl Projector {
    #[must_use]
    pub fn new(profile: UserProfile, assumptions: ProjectionAssumptions) -> Self {
        Self {
            profile,
            assumptions,
        }
    }

    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    fn per_paycheck(&self, kind: ContributionType, rate: f64) -> f64 {
        let paycheck = paycheck_amount(self.profile.annual_salary, self.profile.paychecks_per_year);
        contribution_per_paycheck(kind, rate, paycheck)
    }

    fn grow(&self, annual: f64, age: u32) -> (u32, f64) {
        let years = years_to_retirement(age, self.assumptions.retirement_age);
        let fv = future_value(annual, self.assumptions.annual_return_rate, years);
        (years, fv)
    }

    /// Projects a contribution setting to retirement for someone aged `age`.
    #[must_use]
    pub fn project(&self, kind: ContributionType, rate: f64, age: u32) -> ContributionProjection {
        let per_paycheck = self.per_paycheck(kind, rate);
        let annual = annual_contribution(per_paycheck, self.profile.paychecks_per_year);
        let (years, fv) = self.grow(annual, age);

        ContributionProjection {
            contribution_per_paycheck: per_paycheck,
            annual_contribution: annual,
            years_to_retirement: years,
            projected_retirement_savings: fv,
            annual_return_rate: self.assumptions.annual_return_rate,
        }
    }

    /// Projects only the difference between `current_rate` and `new_rate`.
    /// A lower new rate yields negative amounts.
    #[must_use]
    pub fn project_delta(
        &self,
        kind: ContributionType,
        current_rate: f64,
        new_rate: f64,
        age: u32,
    ) -> ImpactDelta {
        let additional = self.per_paycheck(kind, new_rate) - self.per_paycheck(kind, current_rate);
        let additional_annual = annual_contribution(additional, self.profile.paychecks_per_year);
        let (years, fv) = self.grow(additional_annual, age);

        ImpactDelta {
            additional_contribution_per_paycheck: additional,
            additional_annual_contribution: additional_annual,
            years_to_retirement: years,
            projected_retirement_savings: fv,
            annual_return_rate: self.assumptions.annual_return_rate,
        }
    }

    #[must_use]
    pub fn ytd(&self, kind: ContributionType, rate: f64, current_year: i32) -> YtdSummary {
        let per_paycheck = self.per_paycheck(kind, rate);
        YtdSummary {
            profile: self.profile.clone(),
            current_year,
            contribution_type: kind,
            contribution_rate: rate,
            current_contribution_per_paycheck: per_paycheck,
            projected_annual_contribution: annual_contribution(
                per_paycheck,
                self.profile.paychecks_per_year,
            ),
        }
    }
}
