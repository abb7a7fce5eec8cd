pub mod ads;

use axum::{routing::{get, post}, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: the ads resource plus its OpenAPI document.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let ad_routes: Router<ServerState> = Router::new()
        .route("/ads/", post(ads::create_ad))
        .route(
            "/ads/:id/",
            get(ads::get_ad).patch(ads::patch_ad).delete(ads::delete_ad),
        );

    Router::new()
        .merge(ad_routes)
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
