use std::sync::Arc;

use async_trait::async_trait;
use contribution_settings_sdk::{
    ContributionSettings, ContributionSettingsApi, ContributionSettingsUpdate, SettingsError,
};

use crate::domain::service::Service;

/// In-process implementation of `ContributionSettingsApi` over the domain service.
pub struct LocalClient {
    service: Arc<Service>,
}

impl LocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ContributionSettingsApi for LocalClient {
    async fn get_settings(&self) -> ContributionSettings {
        self.service.get_settings().await
    }

    async fn update_settings(
        &self,
        update: ContributionSettingsUpdate,
    ) -> Result<ContributionSettings, SettingsError> {
        self.service
            .update_settings(update)
            .await
            .map_err(Into::into)
    }
}
