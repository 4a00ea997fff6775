use std::sync::Arc;

use chrono::{Datelike, Utc};
use contribution_settings_sdk::{ContributionSettingsApi, ContributionType};
use tracing::debug;

use super::calculator::Projector;
use super::error::DomainError;
use super::model::{CurrentContributionImpact, ImpactDelta, YtdSummary};

/// Projection service over the configured profile and the stored settings.
pub struct Service {
    projector: Projector,
    settings: Arc<dyn ContributionSettingsApi>,
}

impl Service {
    pub fn new(projector: Projector, settings: Arc<dyn ContributionSettingsApi>) -> Self {
        Self {
            projector,
            settings,
        }
    }

    pub async fn ytd_data(&self) -> Result<YtdSummary, DomainError> {
        let settings = self.settings.get_settings().await;
        let ytd = self.projector.ytd(
            settings.contribution_type,
            settings.contribution_rate,
            Utc::now().year(),
        );

        ensure_finite(
            "projected annual contribution",
            ytd.projected_annual_contribution,
        )?;
        Ok(ytd)
    }

    /// Impact of moving from `current_rate` to `new_rate`. `age` defaults to
    /// the profile age.
    pub fn retirement_impact(
        &self,
        kind: ContributionType,
        current_rate: f64,
        new_rate: f64,
        age: Option<u32>,
    ) -> Result<ImpactDelta, DomainError> {
        ensure_rate("currentRate", current_rate)?;
        ensure_rate("newRate", new_rate)?;
        let age = age.unwrap_or(self.projector.profile().age);

        debug!(%kind, current_rate, new_rate, age, "projecting retirement impact");
        let delta = self
            .projector
            .project_delta(kind, current_rate, new_rate, age);

        ensure_finite(
            "projected retirement savings",
            delta.projected_retirement_savings,
        )?;
        Ok(delta)
    }

    /// Projection of the stored settings. `age` defaults to the profile age.
    pub async fn current_contribution_impact(
        &self,
        age: Option<u32>,
    ) -> Result<CurrentContributionImpact, DomainError> {
        let settings = self.settings.get_settings().await;
        let age = age.unwrap_or(self.projector.profile().age);

        let projection = self.projector.project(
            settings.contribution_type,
            settings.contribution_rate,
            age,
        );

        ensure_finite(
            "projected retirement savings",
            projection.projected_retirement_savings,
        )?;
        Ok(CurrentContributionImpact {
            projection,
            contribution_type: settings.contribution_type,
            contribution_rate: settings.contribution_rate,
        })
    }
}

/// Parses the `contributionType` query value; absent means percentage.
pub fn parse_contribution_type(raw: Option<&str>) -> Result<ContributionType, DomainError> {
    raw.map_or(Ok(ContributionType::Percentage), |s| {
        s.parse().map_err(|_| DomainError::InvalidContributionType)
    })
}

fn ensure_rate(field: &'static str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::InvalidRate { field })
    }
}

fn ensure_finite(what: &'static str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::NonFinite(what))
    }
}
