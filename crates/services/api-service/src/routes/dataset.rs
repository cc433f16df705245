//! Dataset and document CRUD (spec §6.1), backed by
//! `lib_storage::dataset::DocumentRepository`.

use crate::error::Result;
use crate::state::AppState;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, put};
use axum::Router;
use lib_core::model::Document;
use serde_json::json;

pub fn serve_dataset() -> Router {
    Router::new()
        .route("/dataset", get(list_datasets))
        .route("/dataset/{id}", put(create_dataset).delete(delete_dataset).get(get_dataset))
        .route(
            "/dataset/{dataset_id}/{document_id}",
            put(put_document).delete(delete_document),
        )
}

#[utoipa::path(get, tag = "Dataset", path = "/dataset", responses((status = 200, description = "Dataset names, sorted")))]
async fn list_datasets(Extension(state): Extension<AppState>) -> Result<Response> {
    let names = state.documents.list_datasets().await?;
    Ok(Json(json!({ "names": names })).into_response())
}

#[utoipa::path(put, tag = "Dataset", path = "/dataset/{id}", responses(
    (status = 204, description = "Dataset created"),
    (status = 409, description = "Dataset already exists"),
    (status = 422, description = "Invalid identifier"),
))]
async fn create_dataset(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.documents.create_dataset(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(delete, tag = "Dataset", path = "/dataset/{id}", responses(
    (status = 204, description = "Dataset deleted"),
    (status = 404, description = "Dataset not found"),
))]
async fn delete_dataset(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.documents.delete_dataset(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(get, tag = "Dataset", path = "/dataset/{id}", responses(
    (status = 200, description = "Document names and versions"),
    (status = 404, description = "Dataset not found"),
))]
async fn get_dataset(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let listed = state.documents.list_documents(&id).await?;
    let names: Vec<&str> = listed.iter().map(|(name, _)| name.as_str()).collect();
    let versions: Vec<u64> = listed.iter().map(|(_, version)| *version).collect();
    Ok(Json(json!({ "names": names, "versions": versions })).into_response())
}

#[utoipa::path(put, tag = "Dataset", path = "/dataset/{dataset_id}/{document_id}", responses(
    (status = 204, description = "Document written"),
    (status = 404, description = "Dataset not found"),
))]
async fn put_document(
    Extension(state): Extension<AppState>,
    Path((dataset_id, document_id)): Path<(String, String)>,
    Json(document): Json<Document>,
) -> Result<StatusCode> {
    state
        .documents
        .put_document(&dataset_id, &document_id, &document)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(delete, tag = "Dataset", path = "/dataset/{dataset_id}/{document_id}", responses(
    (status = 204, description = "Document deleted"),
    (status = 404, description = "Dataset not found"),
))]
async fn delete_document(
    Extension(state): Extension<AppState>,
    Path((dataset_id, document_id)): Path<(String, String)>,
) -> Result<StatusCode> {
    state.documents.delete_document(&dataset_id, &document_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
