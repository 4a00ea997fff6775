use nestegg_api::ApiError;

use crate::domain::error::DomainError;

pub const UPDATE_FAILED: &str = "Failed to update contribution settings";

/// Map a domain error on the update path to an API error.
///
/// Validation failures keep their message; storage failures are logged and
/// replaced with a fixed message.
impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        if e.is_validation() {
            return ApiError::bad_request(e.to_string());
        }
        tracing::error!(error = ?e, "Failed to persist contribution settings");
        ApiError::internal(UPDATE_FAILED)
    }
}
