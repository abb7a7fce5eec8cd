use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Serialize;
use serde_json::{Map, Value};
use service::ad_service;

use models::ad::{self, NewAd};
use crate::{errors::ApiError, session::Session, state::ServerState};

#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: i32,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

type AdId = WithRejection<Path<i32>, ApiError>;

#[utoipa::path(
    get, path = "/ads/{id}/", tag = "ads",
    params(("id" = i32, Path, description = "Ad id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::AdDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_ad(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): AdId,
) -> Result<Json<ad::Model>, ApiError> {
    let session = Session::begin(&state).await?;
    let found = ad_service::get_ad(session.conn(), id).await?;
    session.commit().await?;
    Ok(Json(found))
}

#[utoipa::path(
    post, path = "/ads/", tag = "ads",
    request_body = crate::openapi::NewAdDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::IdDoc),
        (status = 400, description = "Invalid Body", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Title Already Used", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_ad(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): WithRejection<Json<NewAd>, ApiError>,
) -> Result<Json<IdResponse>, ApiError> {
    let session = Session::begin(&state).await?;
    let created = ad_service::create_ad(session.conn(), input).await?;
    session.commit().await?;
    Ok(Json(IdResponse { id: created.id }))
}

#[utoipa::path(
    patch, path = "/ads/{id}/", tag = "ads",
    params(("id" = i32, Path, description = "Ad id")),
    request_body = crate::openapi::AdPatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::IdDoc),
        (status = 400, description = "Unknown Field Or Bad Value", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Title Already Used", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn patch_ad(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): AdId,
    WithRejection(Json(fields), _): WithRejection<Json<Map<String, Value>>, ApiError>,
) -> Result<Json<IdResponse>, ApiError> {
    let session = Session::begin(&state).await?;
    let updated = ad_service::update_ad(session.conn(), id, fields).await?;
    session.commit().await?;
    Ok(Json(IdResponse { id: updated.id }))
}

#[utoipa::path(
    delete, path = "/ads/{id}/", tag = "ads",
    params(("id" = i32, Path, description = "Ad id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::StatusDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_ad(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): AdId,
) -> Result<Json<StatusResponse>, ApiError> {
    let session = Session::begin(&state).await?;
    ad_service::delete_ad(session.conn(), id).await?;
    session.commit().await?;
    Ok(Json(StatusResponse { status: "deleted" }))
}
