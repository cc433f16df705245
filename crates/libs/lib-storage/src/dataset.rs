//! Filesystem-backed dataset/document repository (spec §4.3).
//!
//! ```text
//! <data_root>/datasets/<dataset_id>/<document_id>   (a JSON Document)
//! ```

use crate::error::{Error, Result};
use crate::fsutil::write_atomic;
use lib_core::identifier::{is_subpath, validate_identifier};
use lib_core::model::Document;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone)]
pub struct DocumentRepository {
    data_root: PathBuf,
}

impl DocumentRepository {
    pub fn new(data_root: impl Into<PathBuf>) -> Self {
        DocumentRepository {
            data_root: data_root.into(),
        }
    }

    fn datasets_dir(&self) -> PathBuf {
        self.data_root.join("datasets")
    }

    fn dataset_dir(&self, dataset_id: &str) -> Result<PathBuf> {
        validate_identifier(dataset_id)?;
        let dir = self.datasets_dir().join(dataset_id);
        Ok(dir)
    }

    fn document_path(&self, dataset_id: &str, document_id: &str) -> Result<PathBuf> {
        validate_identifier(document_id)?;
        let dataset_dir = self.dataset_dir(dataset_id)?;
        Ok(dataset_dir.join(document_id))
    }

    fn guard(&self, path: &Path) -> Result<()> {
        is_subpath(&self.data_root, path)?;
        Ok(())
    }

    /// Directory listing of `datasets/`, names sorted ascending.
    pub async fn list_datasets(&self) -> Result<Vec<String>> {
        let dir = self.datasets_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        let mut entries = fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    pub async fn create_dataset(&self, dataset_id: &str) -> Result<()> {
        let dir = self.dataset_dir(dataset_id)?;
        if dir.exists() {
            return Err(Error::AlreadyExists(format!(
                "Dataset [{dataset_id}] already exists."
            )));
        }
        fs::create_dir_all(&dir).await?;
        self.guard(&dir)?;
        Ok(())
    }

    pub async fn delete_dataset(&self, dataset_id: &str) -> Result<()> {
        let dir = self.dataset_dir(dataset_id)?;
        if !dir.exists() {
            return Err(Error::NotFound(format!(
                "Dataset [{dataset_id}] not found."
            )));
        }
        self.guard(&dir)?;
        fs::remove_dir_all(&dir).await?;
        Ok(())
    }

    /// `(name, version)` pairs for every document, sorted by document name.
    pub async fn list_documents(&self, dataset_id: &str) -> Result<Vec<(String, u64)>> {
        let dir = self.dataset_dir(dataset_id)?;
        if !dir.exists() {
            return Err(Error::NotFound(format!(
                "Dataset [{dataset_id}] not found."
            )));
        }
        let mut names = Vec::new();
        let mut entries = fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                if let Some(name) = entry.file_name().to_str() {
                    if !name.ends_with(".tmp") {
                        names.push(name.to_string());
                    }
                }
            }
        }
        names.sort();

        let mut out = Vec::with_capacity(names.len());
        for name in names {
            let bytes = fs::read(dir.join(&name)).await?;
            let doc: Document = serde_json::from_slice(&bytes)?;
            out.push((name, doc.version));
        }
        Ok(out)
    }

    pub async fn get_document(&self, dataset_id: &str, document_id: &str) -> Result<Document> {
        let path = self.document_path(dataset_id, document_id)?;
        if !self.dataset_dir(dataset_id)?.exists() {
            return Err(Error::NotFound(format!(
                "Dataset [{dataset_id}] not found."
            )));
        }
        let bytes = fs::read(&path)
            .await
            .map_err(|_| Error::NotFound(format!("Document [{document_id}] not found.")))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn put_document(
        &self,
        dataset_id: &str,
        document_id: &str,
        document: &Document,
    ) -> Result<()> {
        let dataset_dir = self.dataset_dir(dataset_id)?;
        if !dataset_dir.exists() {
            return Err(Error::NotFound(format!(
                "Dataset [{dataset_id}] not found."
            )));
        }
        let path = self.document_path(dataset_id, document_id)?;
        self.guard(&dataset_dir)?;
        let bytes = serde_json::to_vec(document)?;
        write_atomic(&path, &bytes).await?;
        Ok(())
    }

    pub async fn delete_document(&self, dataset_id: &str, document_id: &str) -> Result<()> {
        let dataset_dir = self.dataset_dir(dataset_id)?;
        if !dataset_dir.exists() {
            return Err(Error::NotFound(format!(
                "Dataset [{dataset_id}] not found."
            )));
        }
        let path = self.document_path(dataset_id, document_id)?;
        if path.exists() {
            fs::remove_file(&path).await?;
        }
        Ok(())
    }
}

// region: Unit Test
#[cfg(test)]
mod tests {
    use super::*;
    use lib_core::model::Document;

    fn repo() -> (tempfile::TempDir, DocumentRepository) {
        let dir = tempfile::tempdir().unwrap();
        let repo = DocumentRepository::new(dir.path());
        (dir, repo)
    }

    #[tokio::test]
    async fn test_dataset_lifecycle() {
        let (_dir, repo) = repo();
        repo.create_dataset("ds1").await.unwrap();
        let err = repo.create_dataset("ds1").await.unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(_)));
        assert_eq!(repo.list_datasets().await.unwrap(), vec!["ds1"]);
        repo.delete_dataset("ds1").await.unwrap();
        assert!(repo.list_datasets().await.unwrap().is_empty());
        let err = repo.delete_dataset("ds1").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_document_crud_and_sorted_versions() {
        let (_dir, repo) = repo();
        repo.create_dataset("ds1").await.unwrap();

        let mut d3 = Document::new("three");
        d3.version = 7;
        let mut d1 = Document::new("one");
        d1.version = 2;
        let mut d2 = Document::new("two");
        d2.version = 8;

        repo.put_document("ds1", "d3", &d3).await.unwrap();
        repo.put_document("ds1", "d1", &d1).await.unwrap();
        repo.put_document("ds1", "d2", &d2).await.unwrap();

        let listed = repo.list_documents("ds1").await.unwrap();
        assert_eq!(
            listed,
            vec![
                ("d1".to_string(), 2),
                ("d2".to_string(), 8),
                ("d3".to_string(), 7),
            ]
        );

        repo.delete_document("ds1", "d2").await.unwrap();
        let listed = repo.list_documents("ds1").await.unwrap();
        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn test_put_document_requires_existing_dataset() {
        let (_dir, repo) = repo();
        let doc = Document::new("x");
        let err = repo.put_document("nope", "d1", &doc).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_invalid_identifier_never_touches_filesystem() {
        let (dir, repo) = repo();
        let err = repo.create_dataset("..").await.unwrap_err();
        assert!(matches!(err, Error::InvalidName(_)));
        assert!(!dir.path().join("..").join("marker").exists());
    }
}

// endregion: Unit Test
