//! The annotation document model (spec §3).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A scalar feature value. String/number/boolean, per spec §3.1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    String(String),
    Number(f64),
    Bool(bool),
}

/// A `[begin, end)` range into a Document's text with an optional feature
/// map. Zero-length spans (`begin == end`) are legal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub begin: u64,
    pub end: u64,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub features: BTreeMap<String, FeatureValue>,
}

impl Span {
    pub fn new(begin: u64, end: u64) -> Self {
        Span {
            begin,
            end,
            features: BTreeMap::new(),
        }
    }

    /// Sort key used throughout the annotation store: `(begin, end)`.
    pub fn key(&self) -> (u64, u64) {
        (self.begin, self.end)
    }
}

/// An ordered collection of Spans, sorted by `(begin, end)` ascending.
pub type Layer = Vec<Span>;

/// `text` plus typed annotation layers, keyed by type-name (spec §3.3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub text: String,
    #[serde(default)]
    pub version: u64,
    #[serde(default)]
    pub annotations: BTreeMap<String, Layer>,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Document {
            text: text.into(),
            version: 0,
            annotations: BTreeMap::new(),
        }
    }
}

// region: Unit Test
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_roundtrip_json() {
        let mut doc = Document::new("Joe waited for the train.");
        doc.annotations
            .insert("t.token".to_string(), vec![Span::new(0, 3)]);
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back.text, doc.text);
        assert_eq!(back.annotations, doc.annotations);
    }

    #[test]
    fn test_document_missing_version_defaults_to_zero() {
        let json = r#"{"text":"hi","annotations":{}}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.version, 0);
    }

    #[test]
    fn test_span_missing_features_is_empty_map() {
        let json = r#"{"begin":0,"end":3}"#;
        let span: Span = serde_json::from_str(json).unwrap();
        assert!(span.features.is_empty());
    }
}

// endregion: Unit Test
