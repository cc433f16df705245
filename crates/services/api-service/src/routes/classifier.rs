//! Read-only classifier registry surface (spec §6.1); the registry itself is
//! mutated only at startup (spec §9).

use crate::error::Result;
use crate::state::AppState;
use axum::extract::{Extension, Path};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;

pub fn serve_classifier() -> Router {
    Router::new()
        .route("/classifier", get(list_classifiers))
        .route("/classifier/{id}", get(get_classifier))
}

#[utoipa::path(get, tag = "Classifier", path = "/classifier", responses((status = 200, description = "Registered classifiers, sorted")))]
async fn list_classifiers(Extension(state): Extension<AppState>) -> Response {
    Json(state.classifiers.list_infos()).into_response()
}

#[utoipa::path(get, tag = "Classifier", path = "/classifier/{id}", responses(
    (status = 200, description = "Classifier info"),
    (status = 404, description = "Classifier not found"),
))]
async fn get_classifier(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    state.classifiers.get(&id)?;
    Ok(Json(lib_classifier::classifier::ClassifierInfo { name: id }).into_response())
}
