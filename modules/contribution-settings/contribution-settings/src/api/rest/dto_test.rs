#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::super::*;
    use chrono::{DateTime, Utc};
    use contribution_settings_sdk::models::{
        ContributionSettings, ContributionSettingsUpdate, ContributionType,
    };
    use serde_json::json;

    use crate::domain::error::DomainError;

    fn request(body: serde_json::Value) -> dto::UpdateContributionSettingsRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_settings_to_dto_conversion() {
        let settings = ContributionSettings {
            contribution_type: ContributionType::Dollar,
            contribution_rate: 300.0,
            last_updated: DateTime::<Utc>::UNIX_EPOCH,
        };

        let dto: dto::ContributionSettingsDto = settings.into();
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["contributionType"], "dollar");
        assert_eq!(json["contributionRate"], 300.0);
        assert_eq!(json["lastUpdated"], "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_valid_request_converts_to_update() {
        let update = ContributionSettingsUpdate::try_from(request(json!({
            "contributionType": "percentage",
            "contributionRate": 7
        })))
        .unwrap();

        assert_eq!(update.contribution_type, ContributionType::Percentage);
        assert!((update.contribution_rate - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_type_is_invalid_type() {
        let err = ContributionSettingsUpdate::try_from(request(json!({
            "contributionRate": 7
        })))
        .unwrap_err();

        assert!(matches!(err, DomainError::InvalidType));
    }

    #[test]
    fn test_non_string_type_is_invalid_type() {
        let err = ContributionSettingsUpdate::try_from(request(json!({
            "contributionType": 1,
            "contributionRate": 7
        })))
        .unwrap_err();

        assert!(matches!(err, DomainError::InvalidType));
    }

    #[test]
    fn test_non_numeric_rate_is_invalid_rate() {
        for rate in [json!("5"), json!(true), json!(null), json!([5])] {
            let err = ContributionSettingsUpdate::try_from(request(json!({
                "contributionType": "dollar",
                "contributionRate": rate
            })))
            .unwrap_err();

            assert!(matches!(err, DomainError::InvalidRate));
        }
    }

    #[test]
    fn test_type_is_checked_before_rate() {
        let err = ContributionSettingsUpdate::try_from(request(json!({
            "contributionType": "weekly",
            "contributionRate": "lots"
        })))
        .unwrap_err();

        assert!(matches!(err, DomainError::InvalidType));
    }
}
