//! `ContributionSettingsApi` trait definition.

use async_trait::async_trait;

use crate::errors::SettingsError;
use crate::models::{ContributionSettings, ContributionSettingsUpdate};

/// Public API trait for the contribution-settings module.
///
/// There is exactly one implicit user, so no caller context is passed.
#[async_trait]
pub trait ContributionSettingsApi: Send + Sync {
    /// Get the stored settings.
    /// Returns the defaults when nothing is stored or the record is unreadable.
    async fn get_settings(&self) -> ContributionSettings;

    /// Replace the stored settings with a freshly timestamped record.
    async fn update_settings(
        &self,
        update: ContributionSettingsUpdate,
    ) -> Result<ContributionSettings, SettingsError>;
}
