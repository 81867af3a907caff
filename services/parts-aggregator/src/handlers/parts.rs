//! Parts Handler
//!
//! GET /v1/parts?partNumber=<part number>

use axum::{
    extract::{Query, State},
    response::Json,
};
use breadboard_models::{AggregatedPart, PartQuery};
use breadboard_utils::{validate_part_query, BreadboardResult};

use crate::AppState;

/// Aggregate supplier data for one part number.
pub async fn aggregate_part(
    State(state): State<AppState>,
    Query(query): Query<PartQuery>,
) -> BreadboardResult<Json<AggregatedPart>> {
    let part_number = validate_part_query(&query)?;
    let part = state.service.aggregate(&part_number).await?;
    Ok(Json(part))
}
