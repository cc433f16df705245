//! A bag-of-words, Laplace-smoothed multinomial Naive Bayes sentence
//! classifier. The structural analogue of
//! `sklearn_sentence_classifier.py::SklearnSentenceClassifier` (count
//! vectorizer + `MultinomialNB`), reimplemented from scratch since no
//! scikit-learn-equivalent crate is available; the statistics (token
//! counts, smoothed log-likelihoods) are hand-rolled.

use crate::classifier::Classifier;
use crate::error::{Error, Result};
use crate::formats::{extend_with_labels, extract_labeled_texts, extract_texts, TYPE_ANNOTATION, TYPE_SENTENCE};
use async_trait::async_trait;
use lib_core::model::Document;
use lib_storage::model::ModelStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

const EXT: &str = "json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct NaiveBayesModel {
    /// class -> (token -> count)
    token_counts: HashMap<String, HashMap<String, u64>>,
    /// class -> total tokens observed
    class_totals: HashMap<String, u64>,
    /// class -> number of training examples, for the prior
    class_examples: HashMap<String, u64>,
    vocabulary: usize,
}

impl NaiveBayesModel {
    fn fit(pairs: &[(String, String)]) -> Self {
        let mut model = NaiveBayesModel::default();
        let mut vocab = std::collections::HashSet::new();
        for (text, label) in pairs {
            *model.class_examples.entry(label.clone()).or_insert(0) += 1;
            let counts = model.token_counts.entry(label.clone()).or_default();
            for token in tokenize(text) {
                vocab.insert(token.clone());
                *counts.entry(token).or_insert(0) += 1;
            }
        }
        for (label, counts) in &model.token_counts {
            let total: u64 = counts.values().sum();
            model.class_totals.insert(label.clone(), total);
        }
        model.vocabulary = vocab.len();
        model
    }

    fn predict_one(&self, text: &str) -> Option<String> {
        if self.class_examples.is_empty() {
            return None;
        }
        let total_examples: u64 = self.class_examples.values().sum();
        let tokens: Vec<String> = tokenize(text);

        self.class_examples
            .keys()
            .map(|class| {
                let prior = (*self.class_examples.get(class).unwrap() as f64
                    / total_examples as f64)
                    .ln();
                let empty = HashMap::new();
                let counts = self.token_counts.get(class).unwrap_or(&empty);
                let total = *self.class_totals.get(class).unwrap_or(&0) as f64;
                let denom = total + self.vocabulary.max(1) as f64;
                let log_likelihood: f64 = tokens
                    .iter()
                    .map(|t| {
                        let count = *counts.get(t).unwrap_or(&0) as f64;
                        ((count + 1.0) / denom).ln()
                    })
                    .sum();
                (class.clone(), prior + log_likelihood)
            })
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(class, _)| class)
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

pub struct SentenceClassifier {
    name: String,
    store: Arc<ModelStore>,
}

impl SentenceClassifier {
    pub fn new(name: impl Into<String>, store: Arc<ModelStore>) -> Self {
        SentenceClassifier {
            name: name.into(),
            store,
        }
    }
}

#[async_trait]
impl Classifier for SentenceClassifier {
    async fn train(&self, model_id: &str, documents: &[Document]) -> Result<()> {
        let mut pairs = Vec::new();
        for document in documents {
            pairs.extend(extract_labeled_texts(document, TYPE_SENTENCE, TYPE_ANNOTATION));
        }
        if pairs.is_empty() {
            debug!("empty training set for model [{model_id}], skipping artifact publication");
            return Ok(());
        }
        let model = NaiveBayesModel::fit(&pairs);
        let bytes = serde_json::to_vec(&model)?;
        self.store.publish(&self.name, model_id, EXT, &bytes).await?;
        Ok(())
    }

    async fn predict(&self, model_id: &str, document: &Document) -> Result<Document> {
        let bytes = self.store.load(&self.name, model_id, EXT).await?;
        let model: NaiveBayesModel = serde_json::from_slice(&bytes)?;

        let texts = extract_texts(document, TYPE_SENTENCE);
        let mut labels = Vec::with_capacity(texts.len());
        for text in &texts {
            let label = model
                .predict_one(text)
                .ok_or_else(|| {
                    Error::NotTrained(format!("Model with id [{model_id}] not found."))
                })?;
            labels.push(label);
        }
        Ok(extend_with_labels(document, TYPE_SENTENCE, TYPE_ANNOTATION, &labels))
    }

    fn consumes(&self) -> Vec<String> {
        vec![TYPE_SENTENCE.to_string(), TYPE_ANNOTATION.to_string()]
    }

    fn produces(&self) -> Vec<String> {
        vec![TYPE_ANNOTATION.to_string()]
    }
}


// endregion: Unit Test
