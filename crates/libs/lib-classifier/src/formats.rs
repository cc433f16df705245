//! Format helpers (spec §2 "Format helpers", §4.8): pure functions that pull
//! (text, label) training pairs out of a Document and that translate
//! classifier output back into a Document, grounded in
//! `galahad/client/formats.py` and `galahad/server/contrib/**`.

use lib_core::model::{Document, FeatureValue, Span};
use lib_core::store::AnnotationStore;

pub const TYPE_TOKEN: &str = "t.token";
pub const TYPE_SENTENCE: &str = "t.sentence";
pub const TYPE_ANNOTATION: &str = "t.annotation";
pub const FEATURE_VALUE: &str = "f.value";

/// For each Span of `container_type` (e.g. `t.sentence`), finds the Spans of
/// `label_type` it covers (e.g. `t.annotation`) and pairs the container's
/// covered text with the label's `f.value` feature. Mirrors the training
/// loop of `sklearn_sentence_classifier.py::train`.
pub fn extract_labeled_texts(
    document: &Document,
    container_type: &str,
    label_type: &str,
) -> Vec<(String, String)> {
    let store = AnnotationStore::from_serialized(document.clone());
    let mut pairs = Vec::new();
    for container in store.select(container_type) {
        for label_span in store.select_covered(label_type, container) {
            let Some(FeatureValue::String(label)) = label_span.features.get(FEATURE_VALUE) else {
                continue;
            };
            pairs.push((store.covered_text(container), label.clone()));
        }
    }
    pairs
}

/// Pairs each Span of `source_type` with its surface text, in document
/// order. Used by token-level classifiers to build the feature vector for
/// `predict`.
pub fn extract_texts(document: &Document, source_type: &str) -> Vec<String> {
    let store = AnnotationStore::from_serialized(document.clone());
    store
        .select(source_type)
        .iter()
        .map(|span| store.covered_text(span))
        .collect()
}

/// Clones `document` and adds a new `output_type` Span over each Span of
/// `source_type`, in order, carrying `f.value = labels[i]`. Any existing
/// annotation is preserved (predict must extend, never replace — spec
/// §4.4). Panics if `labels.len() != ` the number of `source_type` Spans;
/// callers control both lengths so this is a programmer-error invariant,
/// not a user-facing one.
pub fn extend_with_labels(
    document: &Document,
    source_type: &str,
    output_type: &str,
    labels: &[String],
) -> Document {
    let version = document.version;
    let mut store = AnnotationStore::from_serialized(document.clone());
    let source_spans: Vec<(u64, u64)> = store
        .select(source_type)
        .iter()
        .map(Span::key)
        .collect();
    assert_eq!(
        source_spans.len(),
        labels.len(),
        "label count must match the number of {source_type} spans"
    );
    for ((begin, end), label) in source_spans.into_iter().zip(labels.iter()) {
        let mut span = Span::new(begin, end);
        span.features
            .insert(FEATURE_VALUE.to_string(), FeatureValue::String(label.clone()));
        store.create(output_type, span);
    }
    store.into_document(version)
}


// endregion: Unit Test
