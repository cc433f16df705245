//! A trivial echo classifier, bundled for testing (spec §4.4: "a trivial
//! pass-through (for testing)").

use crate::classifier::Classifier;
use crate::error::Result;
use async_trait::async_trait;
use lib_core::model::Document;
use lib_storage::model::ModelStore;
use std::sync::Arc;

const EXT: &str = "json";

pub struct PassThroughClassifier {
    name: String,
    store: Option<Arc<ModelStore>>,
}

impl PassThroughClassifier {
    pub fn new(name: impl Into<String>) -> Self {
        PassThroughClassifier {
            name: name.into(),
            store: None,
        }
    }

    pub fn with_store(name: impl Into<String>, store: Arc<ModelStore>) -> Self {
        PassThroughClassifier {
            name: name.into(),
            store: Some(store),
        }
    }
}

#[async_trait]
impl Classifier for PassThroughClassifier {
    async fn train(&self, model_id: &str, _documents: &[Document]) -> Result<()> {
        if let Some(store) = &self.store {
            store.publish(&self.name, model_id, EXT, b"{}").await?;
        }
        Ok(())
    }

    async fn predict(&self, model_id: &str, document: &Document) -> Result<Document> {
        if let Some(store) = &self.store {
            store.load(&self.name, model_id, EXT).await?;
        }
        Ok(document.clone())
    }

    fn consumes(&self) -> Vec<String> {
        Vec::new()
    }

    fn produces(&self) -> Vec<String> {
        Vec::new()
    }
}


// endregion: Unit Test
