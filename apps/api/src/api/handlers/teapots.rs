use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::api::errors::ApiError;
use crate::api::middleware::{NewTeapot, TeapotPatch};
use crate::api::state::AppState;
use crate::domain::teapot::{mapper, Teapot};

/// Collects the `ids` query parameter
///
/// Accepts both `?ids=a&ids=b` and `?ids=a,b`; empty entries are dropped.
/// Returns `None` when the parameter is absent.
fn requested_ids(params: &[(String, String)]) -> Option<Vec<String>> {
    let mut values = params.iter().filter(|(key, _)| key == "ids").peekable();
    values.peek()?;

    Some(
        values
            .flat_map(|(_, value)| value.split(','))
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// List all teapots, or the ones named by `ids`
///
/// GET /teapots/
pub async fn list_teapots(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Teapot>>, ApiError> {
    let teapots = match requested_ids(&params) {
        Some(ids) => state.teapots.find_all_by_ids(&ids).await?,
        None => state.teapots.find_all().await?,
    };

    Ok(Json(teapots))
}

/// Get a teapot by id
///
/// GET /teapots/:id
pub async fn get_teapot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Teapot>, ApiError> {
    let teapot = state.teapots.find(&id).await?;
    Ok(Json(teapot))
}

/// Count teapots
///
/// GET /teapots/count
pub async fn count_teapots(State(state): State<AppState>) -> Result<Json<u64>, ApiError> {
    Ok(Json(state.teapots.count().await?))
}

/// Delete a teapot
///
/// DELETE /teapots/:id
pub async fn delete_teapot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.teapots.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a teapot
///
/// POST /teapots/
pub async fn create_teapot(
    State(state): State<AppState>,
    NewTeapot(teapot): NewTeapot,
) -> Result<StatusCode, ApiError> {
    state.teapots.add(&teapot).await?;
    Ok(StatusCode::CREATED)
}

/// Update a teapot with the fields present in the body
///
/// PUT /teapots/:id
pub async fn update_teapot(
    State(state): State<AppState>,
    Path(id): Path<String>,
    TeapotPatch(mapping): TeapotPatch,
) -> Result<StatusCode, ApiError> {
    let mut teapot = state.teapots.find(&id).await?;
    mapper::from_mapping(&mapping, &mut teapot);
    state.teapots.update(&id, &teapot).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Reset the store to its seed teapots
///
/// POST /teapots/reset
pub async fn reset_teapots(State(state): State<AppState>) -> StatusCode {
    state.teapots.reset(&state.seeds).await;
    StatusCode::NO_CONTENT
}
