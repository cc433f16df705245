//! The annotation store (spec §4.2): a per-document in-memory index over
//! typed Spans offering ordered insertion and sub-linear range queries.

use crate::model::{Document, Layer, Span};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct AnnotationStore {
    text: String,
    layers: BTreeMap<String, Layer>,
}

impl AnnotationStore {
    /// Builds an index over `document`, preserving all provided Spans.
    pub fn from_serialized(document: Document) -> Self {
        let mut store = AnnotationStore {
            text: document.text,
            layers: document.annotations,
        };
        for layer in store.layers.values_mut() {
            layer.sort_by_key(Span::key);
        }
        store
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Appends a Span into the Layer for `type_name`, keeping sort order.
    pub fn create(&mut self, type_name: &str, span: Span) -> &Span {
        let layer = self.layers.entry(type_name.to_string()).or_default();
        let idx = layer.partition_point(|s| s.key() < span.key());
        layer.insert(idx, span);
        &layer[idx]
    }

    /// Returns the Layer in canonical order; an empty Layer for unknown types.
    pub fn select(&self, type_name: &str) -> &[Span] {
        self.layers
            .get(type_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Spans `s` with `cover.begin <= s.begin && s.end <= cover.end`, in
    /// canonical order. Overlap-only Spans are excluded.
    ///
    /// Two binary searches isolate the candidate window `[cover.begin,
    /// cover.end]` on the `(begin, end)`-sorted Layer; a linear containment
    /// filter then runs only across that window. The window bounds are
    /// chosen inclusively so Spans with `begin == cover.begin` or
    /// `end == cover.end` are never excluded by the binary search itself.
    pub fn select_covered(&self, type_name: &str, cover: &Span) -> Vec<&Span> {
        let layer = self.select(type_name);
        // Every candidate has begin >= cover.begin, so the lower bound is the
        // first index whose key is >= (cover.begin, 0).
        let lo = layer.partition_point(|s| s.key() < (cover.begin, 0));
        // Every candidate has begin <= cover.end (a stronger bound than
        // end <= cover.end, but cheap to binary-search and strictly
        // widens the window rather than narrowing past a true match), so the
        // upper bound is the first index whose begin exceeds cover.end.
        let hi = layer.partition_point(|s| s.begin <= cover.end);
        layer[lo..hi]
            .iter()
            .filter(|s| cover.begin <= s.begin && s.end <= cover.end)
            .collect()
    }

    /// `text[span.begin : span.end]`, by Unicode scalar (code point) index.
    pub fn covered_text(&self, span: &Span) -> String {
        self.text
            .chars()
            .skip(span.begin as usize)
            .take((span.end - span.begin) as usize)
            .collect()
    }

    /// Inverse of `from_serialized`, preserving order.
    pub fn to_serialized(&self, version: u64) -> Document {
        Document {
            text: self.text.clone(),
            version,
            annotations: self.layers.clone(),
        }
    }

    pub fn into_document(self, version: u64) -> Document {
        Document {
            text: self.text,
            version,
            annotations: self.layers,
        }
    }
}

// region: Unit Test
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> AnnotationStore {
        let text = "Joe waited for the train . The train was late .";
        let mut doc = Document::new(text);
        let tokens = vec![
            Span::new(0, 3),
            Span::new(4, 10),
            Span::new(11, 14),
            Span::new(15, 18),
            Span::new(19, 24),
            Span::new(25, 26),
            Span::new(27, 30),
            Span::new(31, 36),
            Span::new(37, 40),
            Span::new(41, 45),
            Span::new(46, 47),
        ];
        doc.annotations.insert("t.token".to_string(), tokens);
        doc.annotations
            .insert("t.sentence".to_string(), vec![Span::new(0, 26), Span::new(27, 47)]);
        AnnotationStore::from_serialized(doc)
    }

    #[test]
    fn test_select_covered_first_sentence() {
        let store = sample_store();
        let cover = Span::new(0, 26);
        let covered = store.select_covered("t.token", &cover);
        assert_eq!(covered.len(), 6);
        assert_eq!(covered[0].begin, 0);
        assert_eq!(covered.last().unwrap().end, 26);
    }

    #[test]
    fn test_select_covered_inclusive_boundaries() {
        let mut doc = Document::new("0123456789");
        doc.annotations.insert(
            "t.token".to_string(),
            vec![Span::new(0, 2), Span::new(2, 5), Span::new(5, 8), Span::new(8, 10)],
        );
        let store = AnnotationStore::from_serialized(doc);
        let cover = Span::new(2, 8);
        let covered = store.select_covered("t.token", &cover);
        // Spans with begin == cover.begin and end == cover.end must be
        // included, not treated as exclusive boundaries.
        assert_eq!(covered, vec![&Span::new(2, 5), &Span::new(5, 8)]);
    }

    #[test]
    fn test_select_covered_excludes_overlap_only() {
        let mut doc = Document::new("0123456789");
        doc.annotations
            .insert("t.token".to_string(), vec![Span::new(1, 5), Span::new(4, 9)]);
        let store = AnnotationStore::from_serialized(doc);
        let cover = Span::new(3, 6);
        let covered = store.select_covered("t.token", &cover);
        assert!(covered.is_empty());
    }

    #[test]
    fn test_select_unknown_type_is_empty() {
        let store = sample_store();
        assert!(store.select("t.nope").is_empty());
    }

    #[test]
    fn test_create_keeps_sort_order() {
        let mut store = AnnotationStore::from_serialized(Document::new("abcdef"));
        store.create("t.x", Span::new(4, 6));
        store.create("t.x", Span::new(0, 2));
        store.create("t.x", Span::new(2, 4));
        let got: Vec<(u64, u64)> = store.select("t.x").iter().map(Span::key).collect();
        assert_eq!(got, vec![(0, 2), (2, 4), (4, 6)]);
    }

    #[test]
    fn test_covered_text() {
        let store = sample_store();
        assert_eq!(store.covered_text(&Span::new(0, 3)), "Joe");
    }

    #[test]
    fn test_roundtrip_identity() {
        let store = sample_store();
        let doc = store.to_serialized(5);
        let store2 = AnnotationStore::from_serialized(doc.clone());
        let doc2 = store2.to_serialized(5);
        assert_eq!(doc.annotations, doc2.annotations);
        assert_eq!(doc.text, doc2.text);
    }
}

// endregion: Unit Test
