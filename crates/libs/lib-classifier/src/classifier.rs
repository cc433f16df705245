//! The `Classifier` capability and process-wide registry (spec §4.4).

use crate::error::{Error, Result};
use async_trait::async_trait;
use lib_core::identifier::validate_identifier;
use lib_core::model::Document;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Wire shape for `GET /classifier` and `GET /classifier/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifierInfo {
    pub name: String,
}

/// A named, in-process component implementing `train` and `predict`.
/// Bundled variants (`contrib::sentence`, `contrib::token`,
/// `contrib::passthrough`) all implement this same capability so the
/// registry never needs to know which concrete classifier it holds.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Consumes the full corpus; MUST produce a model artifact on success.
    /// MAY log and return normally when the corpus is empty.
    async fn train(&self, model_id: &str, documents: &[Document]) -> Result<()>;

    /// Returns `Error::NotTrained` if the named model is absent. Otherwise
    /// returns a new Document whose `text` equals the input and whose
    /// `annotations` extend the input with produced layers; no existing
    /// annotation may be silently dropped.
    async fn predict(&self, model_id: &str, document: &Document) -> Result<Document>;

    /// Advisory metadata; not enforced by the server.
    fn consumes(&self) -> Vec<String>;

    /// Advisory metadata; not enforced by the server.
    fn produces(&self) -> Vec<String>;
}

/// Maps classifier-name to instance. Mutated only at startup via `add`;
/// read-only once serving begins (spec §9, "process-wide registries").
#[derive(Default, Clone)]
pub struct ClassifierRegistry {
    classifiers: BTreeMap<String, Arc<dyn Classifier>>,
}

impl ClassifierRegistry {
    pub fn new() -> Self {
        ClassifierRegistry {
            classifiers: BTreeMap::new(),
        }
    }

    /// `name` must match the identifier regex; duplicate names fail with
    /// `AlreadyRegistered`, which is a startup-time programmer error.
    pub fn add(&mut self, name: &str, classifier: Arc<dyn Classifier>) -> Result<()> {
        validate_identifier(name).map_err(|_| Error::InvalidName(name.to_string()))?;
        if self.classifiers.contains_key(name) {
            return Err(Error::AlreadyRegistered(name.to_string()));
        }
        self.classifiers.insert(name.to_string(), classifier);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn Classifier>> {
        self.classifiers
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Classifier [{name}] not found.")))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classifiers.contains_key(name)
    }

    /// Classifier descriptors sorted by name (`BTreeMap` keeps them so).
    pub fn list_infos(&self) -> Vec<ClassifierInfo> {
        self.classifiers
            .keys()
            .map(|name| ClassifierInfo { name: name.clone() })
            .collect()
    }
}

// region: Unit Test
#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrib::passthrough::PassThroughClassifier;

    #[test]
    fn test_add_rejects_duplicate_name() {
        let mut registry = ClassifierRegistry::new();
        registry
            .add("echo", Arc::new(PassThroughClassifier::new("echo")))
            .unwrap();
        let err = registry
            .add("echo", Arc::new(PassThroughClassifier::new("echo")))
            .unwrap_err();
        assert!(matches!(err, Error::AlreadyRegistered(_)));
    }

    #[test]
    fn test_add_rejects_invalid_name() {
        let mut registry = ClassifierRegistry::new();
        let err = registry
            .add("bad name!", Arc::new(PassThroughClassifier::new("bad name!")))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidName(_)));
    }

    #[test]
    fn test_list_infos_sorted_by_name() {
        let mut registry = ClassifierRegistry::new();
        registry
            .add("zeta", Arc::new(PassThroughClassifier::new("zeta")))
            .unwrap();
        registry
            .add("alpha", Arc::new(PassThroughClassifier::new("alpha")))
            .unwrap();
        let infos = registry.list_infos();
        assert_eq!(infos[0].name, "alpha");
        assert_eq!(infos[1].name, "zeta");
    }

    #[test]
    fn test_get_unknown_classifier() {
        let registry = ClassifierRegistry::new();
        assert!(registry.get("nope").is_err());
    }
}

// endregion: Unit Test
