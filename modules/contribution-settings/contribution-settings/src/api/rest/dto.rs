use chrono::{DateTime, Utc};
use contribution_settings_sdk::models::{
    ContributionSettings, ContributionSettingsUpdate, ContributionType,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::error::DomainError;
use crate::domain::service::parse_contribution_type;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionSettingsDto {
    pub contribution_type: ContributionType,
    pub contribution_rate: f64,
    pub last_updated: DateTime<Utc>,
}

impl From<ContributionSettings> for ContributionSettingsDto {
    fn from(settings: ContributionSettings) -> Self {
        Self {
            contribution_type: settings.contribution_type,
            contribution_rate: settings.contribution_rate,
            last_updated: settings.last_updated,
        }
    }
}

/// Body of `POST /api/contribution-settings`.
///
/// Fields stay untyped so that a wrong JSON type is reported with the same
/// validation message as an out-of-range value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContributionSettingsRequest {
    #[serde(default)]
    pub contribution_type: Option<Value>,
    #[serde(default)]
    pub contribution_rate: Option<Value>,
}

impl TryFrom<UpdateContributionSettingsRequest> for ContributionSettingsUpdate {
    type Error = DomainError;

    fn try_from(req: UpdateContributionSettingsRequest) -> Result<Self, Self::Error> {
        let contribution_type =
            parse_contribution_type(req.contribution_type.as_ref().and_then(Value::as_str))?;
        let contribution_rate = req
            .contribution_rate
            .as_ref()
            .and_then(Value::as_f64)
            .ok_or(DomainError::InvalidRate)?;

        Ok(Self {
            contribution_type,
            contribution_rate,
        })
    }
}
