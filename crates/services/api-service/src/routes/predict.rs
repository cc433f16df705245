//! Synchronous prediction (spec §4.6 "predict runs inline on the request
//! handler thread", §6.1).

use crate::error::Result;
use crate::state::AppState;
use axum::extract::{Extension, Path};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::post;
use axum::Router;
use lib_core::identifier::validate_identifier;
use lib_core::model::Document;

pub fn serve_predict() -> Router {
    Router::new().route(
        "/classifier/{classifier_id}/{model_id}/predict",
        post(predict),
    )
}

#[utoipa::path(post, tag = "Predict", path = "/classifier/{classifier_id}/{model_id}/predict", responses(
    (status = 200, description = "Document extended with produced annotations"),
    (status = 404, description = "Classifier or model not found"),
))]
async fn predict(
    Extension(state): Extension<AppState>,
    Path((classifier_id, model_id)): Path<(String, String)>,
    Json(document): Json<Document>,
) -> Result<Response> {
    validate_identifier(&classifier_id)?;
    validate_identifier(&model_id)?;
    let classifier = state.classifiers.get(&classifier_id)?;
    let predicted = classifier.predict(&model_id, &document).await?;
    Ok(Json(predicted).into_response())
}
