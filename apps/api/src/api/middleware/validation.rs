use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};

use crate::api::errors::ApiError;
use crate::domain::teapot::validator::{validate_new, validate_patch};
use crate::domain::teapot::{Teapot, TeapotMapping, ValidationErrors};

/// Validated body of a create request
///
/// Rejects the request with 400 before the handler runs when the body is not
/// JSON or describes an incomplete or invalid teapot.
///
/// Usage:
/// ```rust,ignore
/// async fn create(NewTeapot(teapot): NewTeapot) -> StatusCode {
///     // `teapot` has every field set and a manufactured capacity
/// }
/// ```
pub struct NewTeapot(pub Teapot);

/// Validated body of an update request
///
/// Only the fields the client sent are checked.
pub struct TeapotPatch(pub TeapotMapping);

#[async_trait]
impl<S> FromRequest<S> for NewTeapot
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mapping = read_mapping(req, state).await?;
        let teapot = validate_new(&mapping)?;
        Ok(NewTeapot(teapot))
    }
}

#[async_trait]
impl<S> FromRequest<S> for TeapotPatch
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mapping = read_mapping(req, state).await?;
        validate_patch(&mapping)?;
        Ok(TeapotPatch(mapping))
    }
}

async fn read_mapping<S>(req: Request, state: &S) -> Result<TeapotMapping, ApiError>
where
    S: Send + Sync,
{
    let Json(mapping) = Json::<TeapotMapping>::from_request(req, state)
        .await
        .map_err(|rejection| ValidationErrors::single(rejection.body_text()))?;

    Ok(mapping)
}
