use std::sync::Arc;

use axum::{Extension, Json, extract::rejection::JsonRejection};
use contribution_settings_sdk::models::ContributionSettingsUpdate;
use nestegg_api::{ApiResult, ok};

use crate::domain::service::Service;

use super::dto::{ContributionSettingsDto, UpdateContributionSettingsRequest};

pub async fn get_settings(
    Extension(svc): Extension<Arc<Service>>,
) -> ApiResult<ContributionSettingsDto> {
    ok(svc.get_settings().await.into())
}

pub async fn update_settings(
    Extension(svc): Extension<Arc<Service>>,
    payload: Result<Json<UpdateContributionSettingsRequest>, JsonRejection>,
) -> ApiResult<ContributionSettingsDto> {
    let Json(req) = payload?;
    let update = ContributionSettingsUpdate::try_from(req)?;
    let settings = svc.update_settings(update).await?;
    ok(settings.into())
}
