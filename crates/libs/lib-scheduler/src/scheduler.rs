//! Training scheduler (spec §4.6): decouples long-running training from the
//! HTTP request thread and enforces at-most-one concurrent build per
//! `(classifier, model_id)` via the exclusion lock in [`crate::lock`].
//!
//! Grounded in `galahad/server/server.py`'s `ProcessPoolExecutor` +
//! `BackgroundTasks.add_task` dispatch, restructured as a bounded Tokio
//! worker pool fed by `async-channel` (already a teacher dependency in
//! `api-service`), since this system runs classifiers as plain in-process
//! trait objects rather than forked OS processes.

use crate::lock::{lock_path, ExclusionLock};
use lib_classifier::classifier::Classifier;
use lib_core::model::Document;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

const LOCK_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(1);

pub struct TrainJob {
    pub classifier_name: String,
    pub model_id: String,
    pub classifier: Arc<dyn Classifier>,
    pub documents: Vec<Document>,
}

#[derive(Clone)]
pub struct TrainingScheduler {
    sender: async_channel::Sender<TrainJob>,
}

impl TrainingScheduler {
    /// Spawns `worker_count` Tokio tasks draining a shared channel.
    pub fn new(data_root: PathBuf, worker_count: usize) -> Self {
        let (sender, receiver) = async_channel::unbounded::<TrainJob>();
        let worker_count = worker_count.max(1);
        for worker_id in 0..worker_count {
            let receiver = receiver.clone();
            let data_root = data_root.clone();
            tokio::spawn(async move {
                debug!("training worker {worker_id} started");
                while let Ok(job) = receiver.recv().await {
                    run_job(job, &data_root).await;
                }
            });
        }
        TrainingScheduler { sender }
    }

    /// Sized by available cores, mirroring the spec's "OS threads or
    /// processes sized by available cores" recommendation.
    pub fn with_default_worker_count(data_root: PathBuf) -> Self {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::new(data_root, cores)
    }

    /// Enqueues the job and returns immediately; the HTTP handler responds
    /// 202 Accepted without waiting for this to resolve.
    pub async fn submit(&self, job: TrainJob) {
        if self.sender.send(job).await.is_err() {
            error!("training scheduler channel closed, dropping submitted job");
        }
    }
}

async fn run_job(job: TrainJob, data_root: &std::path::Path) {
    let path = lock_path(data_root, &job.classifier_name, &job.model_id);
    let acquired = tokio::task::spawn_blocking(move || {
        ExclusionLock::try_acquire(&path, LOCK_ACQUIRE_TIMEOUT)
    })
    .await;

    let lock = match acquired {
        Ok(Ok(lock)) => lock,
        Ok(Err(e)) => {
            error!(
                "failed to acquire training lock for ({}, {}): {e}",
                job.classifier_name, job.model_id
            );
            return;
        }
        Err(e) => {
            error!("lock-acquisition task panicked: {e}");
            return;
        }
    };

    let Some(_guard) = lock else {
        debug!(
            "training for ({}, {}) already in progress, suppressing duplicate",
            job.classifier_name, job.model_id
        );
        return;
    };

    if let Err(e) = job.classifier.train(&job.model_id, &job.documents).await {
        warn!(
            "training failed for ({}, {}): {e}",
            job.classifier_name, job.model_id
        );
    }
}

// region: Unit Test
#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lib_classifier::error::Result as ClassifierResult;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::sleep;

    struct CountingClassifier {
        calls: Arc<AtomicUsize>,
        delay: Duration,
    }

    #[async_trait]
    impl Classifier for CountingClassifier {
        async fn train(&self, _model_id: &str, _documents: &[Document]) -> ClassifierResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            sleep(self.delay).await;
            Ok(())
        }

        async fn predict(&self, _model_id: &str, document: &Document) -> ClassifierResult<Document> {
            Ok(document.clone())
        }

        fn consumes(&self) -> Vec<String> {
            Vec::new()
        }

        fn produces(&self) -> Vec<String> {
            Vec::new()
        }
    }

    #[tokio::test]
    async fn test_duplicate_training_is_suppressed() {
        let dir = tempfile::tempdir().unwrap();
        let scheduler = TrainingScheduler::new(dir.path().to_path_buf(), 4);
        let calls = Arc::new(AtomicUsize::new(0));
        let classifier: Arc<dyn Classifier> = Arc::new(CountingClassifier {
            calls: calls.clone(),
            delay: Duration::from_millis(200),
        });

        for _ in 0..3 {
            scheduler
                .submit(TrainJob {
                    classifier_name: "clf".to_string(),
                    model_id: "m1".to_string(),
                    classifier: classifier.clone(),
                    documents: Vec::new(),
                })
                .await;
        }

        sleep(Duration::from_millis(500)).await;
        // One job wins the lock; the other two time out waiting and are
        // suppressed, so `train` runs far fewer than 3 times.
        assert!(calls.load(Ordering::SeqCst) < 3);
        assert!(calls.load(Ordering::SeqCst) >= 1);
    }

    #[tokio::test]
    async fn test_distinct_model_ids_train_independently() {
        let dir = tempfile::tempdir().unwrap();
        let scheduler = TrainingScheduler::new(dir.path().to_path_buf(), 4);
        let calls = Arc::new(AtomicUsize::new(0));
        let classifier: Arc<dyn Classifier> = Arc::new(CountingClassifier {
            calls: calls.clone(),
            delay: Duration::from_millis(10),
        });

        for model_id in ["m1", "m2", "m3"] {
            scheduler
                .submit(TrainJob {
                    classifier_name: "clf".to_string(),
                    model_id: model_id.to_string(),
                    classifier: classifier.clone(),
                    documents: Vec::new(),
                })
                .await;
        }

        sleep(Duration::from_millis(200)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}

// endregion: Unit Test
