use std::sync::Arc;

use axum::Router;
use contribution_settings_sdk::ContributionSettingsApi;
use tracing::info;

use crate::api::rest::routes;
use crate::config::{ProjectionConfig, ProjectionConfigError};
use crate::domain::calculator::Projector;
use crate::domain::service::Service;

/// Wiring for the retirement-projection module.
pub struct RetirementProjectionModule {
    service: Arc<Service>,
}

impl RetirementProjectionModule {
    /// # Errors
    /// Returns an error if `config` fails validation.
    pub fn new(
        config: &ProjectionConfig,
        settings: Arc<dyn ContributionSettingsApi>,
    ) -> Result<Self, ProjectionConfigError> {
        config.validate()?;
        info!(
            retirement_age = config.assumptions.retirement_age,
            annual_return_rate = config.assumptions.annual_return_rate,
            "Retirement projection configured"
        );

        let projector = Projector::new(config.profile.clone(), config.assumptions);
        Ok(Self {
            service: Arc::new(Service::new(projector, settings)),
        })
    }

    #[must_use]
    pub fn router(&self) -> Router {
        routes::router(Arc::clone(&self.service))
    }
}
