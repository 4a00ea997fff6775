use std::sync::Arc;

use chrono::Utc;
use contribution_settings_sdk::models::{
    ContributionSettings, ContributionSettingsUpdate, ContributionType,
};
use tracing::{debug, info, warn};

use super::error::DomainError;
use super::fields::{MAX_PERCENTAGE, SettingsFields};
use super::repo::SettingsRepository;

pub struct Service {
    repo: Arc<dyn SettingsRepository>,
}

impl Service {
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    /// Writes the default record when nothing is stored yet. An unreadable
    /// record is left in place; reads fall back to defaults until the next
    /// successful update.
    pub async fn ensure_initialized(&self) -> Result<(), DomainError> {
        match self.repo.load().await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => {
                let defaults = ContributionSettings::defaults_at(Utc::now());
                self.repo.save(&defaults).await?;
                info!(
                    contribution_type = %defaults.contribution_type,
                    contribution_rate = defaults.contribution_rate,
                    "Initialized contribution settings with defaults"
                );
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Stored contribution settings are unreadable; leaving them untouched");
                Ok(())
            }
        }
    }

    pub async fn get_settings(&self) -> ContributionSettings {
        match self.repo.load().await {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                debug!("No stored contribution settings; using defaults");
                ContributionSettings::defaults_at(Utc::now())
            }
            Err(e) => {
                warn!(error = %e, "Failed to read contribution settings; using defaults");
                ContributionSettings::defaults_at(Utc::now())
            }
        }
    }

    pub async fn update_settings(
        &self,
        update: ContributionSettingsUpdate,
    ) -> Result<ContributionSettings, DomainError> {
        validate_rate(update.contribution_type, update.contribution_rate)?;

        let settings = ContributionSettings {
            contribution_type: update.contribution_type,
            contribution_rate: update.contribution_rate,
            last_updated: Utc::now(),
        };
        self.repo.save(&settings).await?;

        info!(
            contribution_type = %settings.contribution_type,
            contribution_rate = settings.contribution_rate,
            "Contribution settings updated"
        );
        Ok(settings)
    }
}

/// Parses the wire value of `contributionType`.
pub fn parse_contribution_type(raw: Option<&str>) -> Result<ContributionType, DomainError> {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        debug!(field = SettingsFields::CONTRIBUTION_TYPE, "missing value");
        return Err(DomainError::InvalidType);
    };
    raw.parse().map_err(|_| DomainError::InvalidType)
}

/// Rate must be a finite, non-negative number; a percentage may not exceed 100.
pub fn validate_rate(kind: ContributionType, rate: f64) -> Result<(), DomainError> {
    if !rate.is_finite() || rate < 0.0 {
        debug!(field = SettingsFields::CONTRIBUTION_RATE, rate, "rejected rate");
        return Err(DomainError::InvalidRate);
    }
    if kind == ContributionType::Percentage && rate > MAX_PERCENTAGE {
        return Err(DomainError::PercentageTooHigh);
    }
    Ok(())
}
