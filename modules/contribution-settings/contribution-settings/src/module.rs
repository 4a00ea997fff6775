use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use contribution_settings_sdk::ContributionSettingsApi;
use tracing::info;

use crate::api::rest::routes;
use crate::config::SettingsConfig;
use crate::domain::repo::SettingsRepository;
use crate::domain::service::Service;
use crate::infra::storage::JsonFileSettingsRepository;
use crate::local_client::LocalClient;

/// Wiring for the contribution-settings module: one store, one service,
/// shared by the REST routes and the in-process client.
pub struct ContributionSettingsModule {
    service: Arc<Service>,
}

impl ContributionSettingsModule {
    /// Module backed by the JSON file named in `config`.
    #[must_use]
    pub fn new(config: &SettingsConfig) -> Self {
        info!(data_file = %config.data_file.display(), "Using contribution settings file");
        Self::with_repository(Arc::new(JsonFileSettingsRepository::new(
            config.data_file.clone(),
        )))
    }

    #[must_use]
    pub fn with_repository(repo: Arc<dyn SettingsRepository>) -> Self {
        Self {
            service: Arc::new(Service::new(repo)),
        }
    }

    /// Writes the default record if none exists yet.
    ///
    /// # Errors
    /// Returns an error if the default record cannot be written.
    pub async fn init(&self) -> anyhow::Result<()> {
        self.service
            .ensure_initialized()
            .await
            .context("failed to initialize contribution settings")
    }

    #[must_use]
    pub fn router(&self) -> Router {
        routes::router(Arc::clone(&self.service))
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn ContributionSettingsApi> {
        Arc::new(LocalClient::new(Arc::clone(&self.service)))
    }
}
