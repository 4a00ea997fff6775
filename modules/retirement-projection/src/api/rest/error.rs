use nestegg_api::ApiError;

use crate::domain::error::DomainError;

pub const YTD_FAILED: &str = "Failed to retrieve YTD data";
pub const RETIREMENT_IMPACT_FAILED: &str = "Failed to calculate retirement impact";
pub const CURRENT_IMPACT_FAILED: &str = "Failed to calculate current contribution impact";

/// Validation errors keep their message; anything else is logged and
/// answered with the endpoint's fixed `failure` message.
pub fn to_api_error(e: &DomainError, failure: &'static str) -> ApiError {
    if e.is_validation() {
        return ApiError::bad_request(e.to_string());
    }
    tracing::error!(error = %e, "{failure}");
    ApiError::internal(failure)
}
