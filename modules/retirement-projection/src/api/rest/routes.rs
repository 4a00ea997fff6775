use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use crate::api::rest::handlers;
use crate::domain::service::Service;

pub const YTD_PATH: &str = "/api/ytd-data";
pub const RETIREMENT_IMPACT_PATH: &str = "/api/retirement-impact";
pub const CURRENT_IMPACT_PATH: &str = "/api/current-contribution-impact";

/// Routes served by the retirement-projection module.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route(YTD_PATH, get(handlers::get_ytd_data))
        .route(RETIREMENT_IMPACT_PATH, get(handlers::get_retirement_impact))
        .route(CURRENT_IMPACT_PATH, get(handlers::get_current_contribution_impact))
        .layer(Extension(service))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::domain::calculator::{Projector, future_value};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{DateTime, Utc};
    use contribution_settings_sdk::{
        ContributionSettings, ContributionSettingsApi, ContributionSettingsUpdate,
        ContributionType, SettingsError,
    };
    use serde_json::Value;
    use tower::ServiceExt as _;

    struct StubSettings(ContributionSettings);

    #[async_trait]
    impl ContributionSettingsApi for StubSettings {
        async fn get_settings(&self) -> ContributionSettings {
            self.0.clone()
        }

        async fn update_settings(
            &self,
            _update: ContributionSettingsUpdate,
        ) -> Result<ContributionSettings, SettingsError> {
            Err(SettingsError::internal())
        }
    }

    fn create_test_router(contribution_type: ContributionType, rate: f64) -> Router {
        let settings = Arc::new(StubSettings(ContributionSettings {
            contribution_type,
            contribution_rate: rate,
            last_updated: DateTime::<Utc>::UNIX_EPOCH,
        }));
        router(Arc::new(Service::new(Projector::default(), settings)))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn as_f64(value: &Value) -> f64 {
        value.as_f64().unwrap()
    }

    #[tokio::test]
    async fn test_ytd_data_shape() {
        let app = create_test_router(ContributionType::Percentage, 5.0);

        let (status, json) = get_json(app, YTD_PATH).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        let data = &json["data"];
        assert_eq!(data["age"], 22);
        assert_eq!(data["annualSalary"], 75000.0);
        assert_eq!(data["paychecksPerYear"], 26);
        assert_eq!(data["ytdContributions"], 4500.0);
        assert_eq!(data["payPeriodsElapsed"], 13);
        assert!(data["currentYear"].is_i64());
        assert!((as_f64(&data["currentContributionPerPaycheck"]) - 144.23).abs() < 0.005);
        assert!((as_f64(&data["projectedAnnualContribution"]) - 3750.0).abs() < 1e-9);
        assert_eq!(data["currentSettings"]["contributionType"], "percentage");
        assert_eq!(data["currentSettings"]["contributionRate"], 5.0);
    }

    #[tokio::test]
    async fn test_retirement_impact_with_defaults() {
        let app = create_test_router(ContributionType::Percentage, 5.0);

        let (status, json) = get_json(app, RETIREMENT_IMPACT_PATH).await;

        assert_eq!(status, StatusCode::OK);
        let data = &json["data"];
        assert_eq!(data["additionalContributionPerPaycheck"], 0.0);
        assert_eq!(data["yearsToRetirement"], 43);
        assert_eq!(data["projectedRetirementSavings"], 0.0);
        assert_eq!(data["annualReturnRate"], 0.07);
    }

    #[tokio::test]
    async fn test_retirement_impact_projects_rate_change() {
        let app = create_test_router(ContributionType::Percentage, 5.0);

        let (status, json) = get_json(
            app,
            "/api/retirement-impact?currentRate=5&newRate=10&contributionType=percentage&age=22",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let data = &json["data"];
        assert!((as_f64(&data["additionalAnnualContribution"]) - 3750.0).abs() < 1e-9);
        let expected = future_value(as_f64(&data["additionalAnnualContribution"]), 0.07, 43);
        assert!((as_f64(&data["projectedRetirementSavings"]) - expected).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_retirement_impact_rejects_unknown_type() {
        let app = create_test_router(ContributionType::Percentage, 5.0);

        let (status, json) =
            get_json(app, "/api/retirement-impact?contributionType=weekly").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(
            json["error"],
            "Invalid contribution type. Must be \"percentage\" or \"dollar\""
        );
    }

    #[tokio::test]
    async fn test_retirement_impact_rejects_unparseable_rate() {
        let app = create_test_router(ContributionType::Percentage, 5.0);

        let (status, json) = get_json(app, "/api/retirement-impact?currentRate=abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_retirement_impact_overflow_is_500() {
        let app = create_test_router(ContributionType::Percentage, 5.0);

        let (status, json) = get_json(
            app,
            "/api/retirement-impact?contributionType=dollar&newRate=1e308",
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Failed to calculate retirement impact");
    }

    #[tokio::test]
    async fn test_current_contribution_impact_uses_stored_settings() {
        let app = create_test_router(ContributionType::Dollar, 200.0);

        let (status, json) = get_json(app, "/api/current-contribution-impact?age=30").await;

        assert_eq!(status, StatusCode::OK);
        let data = &json["data"];
        assert_eq!(data["contributionType"], "dollar");
        assert_eq!(data["contributionRate"], 200.0);
        assert_eq!(data["contributionPerPaycheck"], 200.0);
        assert_eq!(data["annualContribution"], 5200.0);
        assert_eq!(data["yearsToRetirement"], 35);
    }

    #[tokio::test]
    async fn test_current_contribution_impact_clamps_age() {
        let app = create_test_router(ContributionType::Percentage, 5.0);

        let (status, json) = get_json(app, "/api/current-contribution-impact?age=80").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["yearsToRetirement"], 1);
    }

    #[tokio::test]
    async fn test_current_contribution_impact_rejects_bad_age() {
        let app = create_test_router(ContributionType::Percentage, 5.0);

        let (status, json) = get_json(app, "/api/current-contribution-impact?age=-3").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
    }
}
