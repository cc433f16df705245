//! A majority-vote per-token-surface-form tagger. The from-scratch
//! structural analogue of `spacy_pos.py`/`spacy_ner.py` (which load a
//! trained spaCy pipeline): the "model" here is the most frequent label
//! observed per token surface form during training, with an `<UNK>`
//! fallback for unseen tokens.

use crate::classifier::Classifier;
use crate::error::{Error, Result};
use crate::formats::{extend_with_labels, extract_labeled_texts, extract_texts, TYPE_ANNOTATION, TYPE_TOKEN};
use async_trait::async_trait;
use lib_core::model::Document;
use lib_storage::model::ModelStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

const EXT: &str = "json";
const UNKNOWN_LABEL: &str = "<UNK>";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TokenLabelModel {
    /// surface form (case-sensitive) -> (label -> count)
    votes: HashMap<String, HashMap<String, u64>>,
}

impl TokenLabelModel {
    fn fit(pairs: &[(String, String)]) -> Self {
        let mut model = TokenLabelModel::default();
        for (token, label) in pairs {
            *model
                .votes
                .entry(token.clone())
                .or_default()
                .entry(label.clone())
                .or_insert(0) += 1;
        }
        model
    }

    fn predict_one(&self, token: &str) -> String {
        self.votes
            .get(token)
            .and_then(|counts| counts.iter().max_by_key(|(_, count)| **count))
            .map(|(label, _)| label.clone())
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
    }
}

pub struct TokenLabeler {
    name: String,
    store: Arc<ModelStore>,
}

impl TokenLabeler {
    pub fn new(name: impl Into<String>, store: Arc<ModelStore>) -> Self {
        TokenLabeler {
            name: name.into(),
            store,
        }
    }
}

#[async_trait]
impl Classifier for TokenLabeler {
    async fn train(&self, model_id: &str, documents: &[Document]) -> Result<()> {
        let mut pairs = Vec::new();
        for document in documents {
            pairs.extend(extract_labeled_texts(document, TYPE_TOKEN, TYPE_ANNOTATION));
        }
        if pairs.is_empty() {
            return Ok(());
        }
        let model = TokenLabelModel::fit(&pairs);
        let bytes = serde_json::to_vec(&model)?;
        self.store.publish(&self.name, model_id, EXT, &bytes).await?;
        Ok(())
    }

    async fn predict(&self, model_id: &str, document: &Document) -> Result<Document> {
        let bytes = self.store.load(&self.name, model_id, EXT).await?;
        let model: TokenLabelModel = serde_json::from_slice(&bytes)?;

        let tokens = extract_texts(document, TYPE_TOKEN);
        let labels: Vec<String> = tokens.iter().map(|t| model.predict_one(t)).collect();
        Ok(extend_with_labels(document, TYPE_TOKEN, TYPE_ANNOTATION, &labels))
    }

    fn consumes(&self) -> Vec<String> {
        vec![TYPE_TOKEN.to_string(), TYPE_ANNOTATION.to_string()]
    }

    fn produces(&self) -> Vec<String> {
        vec![TYPE_ANNOTATION.to_string()]
    }
}

// region: Unit Test
#[cfg(test)]
mod tests {
    use super::*;
    use lib_core::model::{FeatureValue, Span};

    fn token_doc(tokens: &[(&str, &str)]) -> Document {
        let text = tokens.iter().map(|(t, _)| *t).collect::<Vec<_>>().join(" ");
        let mut doc = Document::new(text);
        let mut token_spans = Vec::new();
        let mut annotation_spans = Vec::new();
        let mut begin = 0u64;
        for (token, label) in tokens {
            let end = begin + token.chars().count() as u64;
            token_spans.push(Span::new(begin, end));
            let mut labeled = Span::new(begin, end);
            labeled
                .features
                .insert("f.value".to_string(), FeatureValue::String(label.to_string()));
            annotation_spans.push(labeled);
            begin = end + 1;
        }
        doc.annotations.insert(TYPE_TOKEN.to_string(), token_spans);
        doc.annotations
            .insert(TYPE_ANNOTATION.to_string(), annotation_spans);
        doc
    }

    #[tokio::test]
    async fn test_majority_vote_wins() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(ModelStore::new(dir.path()));
        let clf = TokenLabeler::new("pos", store);

        let d1 = token_doc(&[("run", "VERB"), ("fast", "ADV")]);
        let d2 = token_doc(&[("run", "NOUN")]);
        let d3 = token_doc(&[("run", "VERB")]);
        clf.train("m1", &[d1, d2, d3]).await.unwrap();

        let mut query = Document::new("run zzz");
        query
            .annotations
            .insert(TYPE_TOKEN.to_string(), vec![Span::new(0, 3), Span::new(4, 7)]);
        let predicted = clf.predict("m1", &query).await.unwrap();
        let labels = predicted.annotations.get(TYPE_ANNOTATION).unwrap();
        assert_eq!(
            labels[0].features.get("f.value"),
            Some(&FeatureValue::String("VERB".to_string()))
        );
        assert_eq!(
            labels[1].features.get("f.value"),
            Some(&FeatureValue::String(UNKNOWN_LABEL.to_string()))
        );
    }

    #[tokio::test]
    async fn test_predict_before_training() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(ModelStore::new(dir.path()));
        let clf = TokenLabeler::new("pos", store);
        let doc = token_doc(&[("run", "?")]);
        let err = clf.predict("m1", &doc).await.unwrap_err();
        assert!(matches!(err, Error::NotTrained(_)));
    }

    #[tokio::test]
    async fn test_predict_with_no_token_layer_extends_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(ModelStore::new(dir.path()));
        let clf = TokenLabeler::new("pos", store);
        let d1 = token_doc(&[("run", "VERB")]);
        clf.train("m1", &[d1]).await.unwrap();

        let query = Document::new("no tokens here");
        let predicted = clf.predict("m1", &query).await.unwrap();
        assert_eq!(predicted.text, query.text);
        let layer = predicted.annotations.get(TYPE_ANNOTATION);
        assert!(layer.map(|l| l.is_empty()).unwrap_or(true));
    }
}

// endregion: Unit Test
