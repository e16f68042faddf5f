use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    adapters::{
        controllers::{
            converter_controller::ConverterController, object_controller::ObjectController,
        },
        state::AppState,
    },
    domain::models::preview::OBJECT_ROUTE_PREFIX,
};

pub fn build_router(app_state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(ConverterController::index))
        .route("/select", post(ConverterController::select_file))
        .route("/convert", post(ConverterController::convert))
        .route(
            "/preview-text",
            post(ConverterController::update_preview_text),
        )
        .route(
            &format!("{}/{{id}}", OBJECT_ROUTE_PREFIX),
            get(ObjectController::get_object),
        )
        .route("/download", get(ObjectController::download_converted))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
