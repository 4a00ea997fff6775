use std::sync::Arc;

use axum::{
    Extension,
    extract::{Query, rejection::QueryRejection},
};
use nestegg_api::{ApiResult, ok};

use crate::domain::service::{Service, parse_contribution_type};

use super::dto::{
    AgeQuery, CurrentContributionImpactDto, RetirementImpactDto, RetirementImpactQuery,
    YtdDataDto,
};
use super::error::{
    CURRENT_IMPACT_FAILED, RETIREMENT_IMPACT_FAILED, YTD_FAILED, to_api_error,
};

pub async fn get_ytd_data(Extension(svc): Extension<Arc<Service>>) -> ApiResult<YtdDataDto> {
    let ytd = svc
        .ytd_data()
        .await
        .map_err(|e| to_api_error(&e, YTD_FAILED))?;
    ok(ytd.into())
}

pub async fn get_retirement_impact(
    Extension(svc): Extension<Arc<Service>>,
    query: Result<Query<RetirementImpactQuery>, QueryRejection>,
) -> ApiResult<RetirementImpactDto> {
    let Query(q) = query?;
    let delta = parse_contribution_type(q.contribution_type.as_deref())
        .and_then(|kind| svc.retirement_impact(kind, q.current_rate, q.new_rate, q.age))
        .map_err(|e| to_api_error(&e, RETIREMENT_IMPACT_FAILED))?;
    ok(delta.into())
}

pub async fn get_current_contribution_impact(
    Extension(svc): Extension<Arc<Service>>,
    query: Result<Query<AgeQuery>, QueryRejection>,
) -> ApiResult<CurrentContributionImpactDto> {
    let Query(q) = query?;
    let impact = svc
        .current_contribution_impact(q.age)
        .await
        .map_err(|e| to_api_error(&e, CURRENT_IMPACT_FAILED))?;
    ok(impact.into())
}
