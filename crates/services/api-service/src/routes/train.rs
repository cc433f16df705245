//! Training dispatch (spec §4.6, §6.1): the handler validates the
//! classifier and dataset exist, loads the corpus, and hands the work to
//! `TrainingScheduler`, returning 202 without waiting for completion.

use crate::error::Result;
use crate::state::AppState;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use lib_core::identifier::validate_identifier;
use lib_scheduler::scheduler::TrainJob;
use tracing::info;

pub fn serve_train() -> Router {
    Router::new().route(
        "/classifier/{classifier_id}/{model_id}/train/{dataset_id}",
        post(train),
    )
}

#[utoipa::path(post, tag = "Train", path = "/classifier/{classifier_id}/{model_id}/train/{dataset_id}", responses(
    (status = 202, description = "Training enqueued"),
    (status = 404, description = "Classifier or dataset not found"),
))]
async fn train(
    Extension(state): Extension<AppState>,
    Path((classifier_id, model_id, dataset_id)): Path<(String, String, String)>,
) -> Result<StatusCode> {
    validate_identifier(&classifier_id)?;
    validate_identifier(&model_id)?;
    let classifier = state.classifiers.get(&classifier_id)?;

    let listed = state.documents.list_documents(&dataset_id).await?;
    let mut documents = Vec::with_capacity(listed.len());
    for (document_id, _version) in listed {
        documents.push(state.documents.get_document(&dataset_id, &document_id).await?);
    }

    info!(
        "enqueuing training for ({classifier_id}, {model_id}) over {} documents",
        documents.len()
    );
    state
        .scheduler
        .submit(TrainJob {
            classifier_name: classifier_id,
            model_id,
            classifier,
            documents,
        })
        .await;

    Ok(StatusCode::ACCEPTED)
}
