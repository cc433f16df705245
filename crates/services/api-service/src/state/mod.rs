//! Process-wide application state (spec §9 "process-wide registries": global
//! state with startup init, read-only thereafter, injected into handlers
//! rather than reached for as a singleton).

use lib_classifier::classifier::ClassifierRegistry;
use lib_scheduler::scheduler::TrainingScheduler;
use lib_storage::dataset::DocumentRepository;
use lib_storage::model::ModelStore;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub documents: Arc<DocumentRepository>,
    pub models: Arc<ModelStore>,
    pub classifiers: Arc<ClassifierRegistry>,
    pub scheduler: Arc<TrainingScheduler>,
}

impl AppState {
    pub fn new(
        data_root: PathBuf,
        classifiers: ClassifierRegistry,
        scheduler: TrainingScheduler,
    ) -> Self {
        AppState {
            documents: Arc::new(DocumentRepository::new(data_root.clone())),
            models: Arc::new(ModelStore::new(data_root)),
            classifiers: Arc::new(classifiers),
            scheduler: Arc::new(scheduler),
        }
    }
}
