use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use crate::api::rest::handlers;
use crate::domain::service::Service;

pub const SETTINGS_PATH: &str = "/api/contribution-settings";

/// Routes served by the contribution-settings module.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route(
            SETTINGS_PATH,
            get(handlers::get_settings).post(handlers::update_settings),
        )
        .layer(Extension(service))
}
