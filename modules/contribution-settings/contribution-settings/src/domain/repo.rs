use async_trait::async_trait;
use contribution_settings_sdk::ContributionSettings;

/// Persistence for the single settings record.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet; `Err` when the stored
    /// record exists but cannot be read or decoded.
    async fn load(&self) -> anyhow::Result<Option<ContributionSettings>>;

    /// Overwrites the stored record.
    async fn save(&self, settings: &ContributionSettings) -> anyhow::Result<()>;
}
