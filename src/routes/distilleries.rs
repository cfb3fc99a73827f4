use axum::extract::rejection::JsonRejection;
use axum::Json;
use garde::Validate;

use crate::error::ApiResult;
use crate::models::distillery::{DistilleriesRequest, DistilleriesView};
use crate::services::distilleries;

/// POST /api/v1/distilleries: Bottles grouped by distillery.
pub async fn distilleries_view(
    payload: Result<Json<DistilleriesRequest>, JsonRejection>,
) -> ApiResult<Json<DistilleriesView>> {
    let Json(request) = payload?;
    for whiskey in &request.whiskeys {
        whiskey.validate()?;
    }

    let view = distilleries::distilleries_view(
        &request.whiskeys,
        request.search.as_deref(),
        request.country.as_deref(),
        request.sort,
    );
    tracing::info!(
        bottles = request.whiskeys.len(),
        distilleries = view.stats.total_distilleries,
        shown = view.distilleries.len(),
        sort = %request.sort,
        "Grouped collection by distillery"
    );
    Ok(Json(view))
}
