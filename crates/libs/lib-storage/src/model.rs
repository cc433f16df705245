//! Filesystem-backed model artifact store (spec §4.5).
//!
//! ```text
//! <data_root>/models/<classifier_name>/model_<model_id>.<ext>
//! ```

use crate::error::{Error, Result};
use crate::fsutil::write_atomic;
use lib_core::identifier::validate_identifier;
use std::path::PathBuf;
use tokio::fs;

#[derive(Debug, Clone)]
pub struct ModelStore {
    data_root: PathBuf,
}

impl ModelStore {
    pub fn new(data_root: impl Into<PathBuf>) -> Self {
        ModelStore {
            data_root: data_root.into(),
        }
    }

    pub fn artifact_path(&self, classifier_name: &str, model_id: &str, ext: &str) -> PathBuf {
        self.data_root
            .join("models")
            .join(classifier_name)
            .join(format!("model_{model_id}.{ext}"))
    }

    pub async fn exists(&self, classifier_name: &str, model_id: &str, ext: &str) -> bool {
        self.artifact_path(classifier_name, model_id, ext).exists()
    }

    /// Atomic write-then-rename publication (spec §4.5). A concurrent
    /// `load` either observes the prior artifact or the new one.
    pub async fn publish(
        &self,
        classifier_name: &str,
        model_id: &str,
        ext: &str,
        bytes: &[u8],
    ) -> Result<()> {
        validate_identifier(classifier_name)?;
        validate_identifier(model_id)?;
        let path = self.artifact_path(classifier_name, model_id, ext);
        write_atomic(&path, bytes).await?;
        Ok(())
    }

    /// Absence means "not trained yet": `NotFound`, not an I/O error.
    pub async fn load(&self, classifier_name: &str, model_id: &str, ext: &str) -> Result<Vec<u8>> {
        validate_identifier(classifier_name)?;
        validate_identifier(model_id)?;
        let path = self.artifact_path(classifier_name, model_id, ext);
        fs::read(&path)
            .await
            .map_err(|_| Error::NotFound(format!("Model with id [{model_id}] not found.")))
    }
}


// endregion: Unit Test
