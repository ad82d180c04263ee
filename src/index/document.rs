// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! JSON-backed in-memory index.
//!
//! Loads `{"documents": [{"ref": "/a/", "title": "...", "body": "..."}]}` and
//! answers queries the way the widget expects from its index: stemmed prefix
//! matching per term, AND/OR combination across terms, per-field boosts.
//!
//! # Scoring
//!
//! ```text
//! score(doc) = Σ_terms Σ_{vocab word w starting with term} boost(field) × tf(w, field, doc)
//! ```
//!
//! Ties are broken by document order so results are deterministic.

use super::{SearchHit, SearchIndex};
use crate::config::{BoolMode, QueryOptions};
use crate::error::Result;
use crate::stem::{PorterStemmer, Stemmer};
use crate::utils::{fold, parse_query};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// A document as it appears in the serialized payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Deserialize)]
struct Payload {
    documents: Vec<Document>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Body,
}

/// Occurrences of one vocabulary word in one field of one document.
#[derive(Debug, Clone, Copy)]
struct Posting {
    doc: usize,
    field: Field,
    count: u32,
}

/// In-memory index with a sorted vocabulary for prefix lookups.
pub struct DocumentIndex {
    documents: Vec<Document>,
    /// INVARIANT: keys are stemmed, folded words; postings sorted by (doc, field).
    vocabulary: BTreeMap<String, Vec<Posting>>,
    stemmer: Arc<dyn Stemmer>,
}

impl std::fmt::Debug for DocumentIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentIndex")
            .field("documents", &self.documents.len())
            .field("vocabulary", &self.vocabulary.len())
            .finish()
    }
}

/// Split text into words on anything that is not alphanumeric.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
}

impl DocumentIndex {
    /// Index `documents` with the default English stemmer.
    pub fn new(documents: Vec<Document>) -> Self {
        Self::with_stemmer(documents, Arc::new(PorterStemmer::new()))
    }

    pub fn with_stemmer(documents: Vec<Document>, stemmer: Arc<dyn Stemmer>) -> Self {
        let mut vocabulary: BTreeMap<String, Vec<Posting>> = BTreeMap::new();

        for (doc, document) in documents.iter().enumerate() {
            for (field, text) in [(Field::Title, &document.title), (Field::Body, &document.body)] {
                let mut counts: HashMap<String, u32> = HashMap::new();
                for word in tokenize(text) {
                    *counts.entry(stemmer.stem(&fold(word))).or_default() += 1;
                }
                for (word, count) in counts {
                    vocabulary
                        .entry(word)
                        .or_default()
                        .push(Posting { doc, field, count });
                }
            }
        }

        Self {
            documents,
            vocabulary,
            stemmer,
        }
    }

    /// Parse a serialized payload.
    pub fn from_json(payload: &[u8]) -> Result<Self> {
        Self::from_json_with_stemmer(payload, Arc::new(PorterStemmer::new()))
    }

    pub fn from_json_with_stemmer(payload: &[u8], stemmer: Arc<dyn Stemmer>) -> Result<Self> {
        let payload: Payload = serde_json::from_slice(payload)?;
        Ok(Self::with_stemmer(payload.documents, stemmer))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Scores of every document containing a word that starts with `term`.
    fn term_scores(&self, term: &str, options: &QueryOptions) -> HashMap<usize, f64> {
        let mut scores: HashMap<usize, f64> = HashMap::new();
        let matching = self
            .vocabulary
            .range::<str, _>((std::ops::Bound::Included(term), std::ops::Bound::Unbounded))
            .take_while(|(word, _)| word.starts_with(term));

        for (_, postings) in matching {
            for posting in postings {
                let boost = match posting.field {
                    Field::Title => options.fields.title.boost,
                    Field::Body => options.fields.body.boost,
                };
                *scores.entry(posting.doc).or_default() += boost * f64::from(posting.count);
            }
        }
        scores
    }
}

/// Combine per-term score maps.
///
/// AND keeps documents present in every map, OR keeps any document. Scores
/// are summed across terms either way.
fn merge_term_scores(score_sets: Vec<HashMap<usize, f64>>, mode: BoolMode) -> HashMap<usize, f64> {
    let mut sets = score_sets.into_iter();
    let Some(mut merged) = sets.next() else {
        return HashMap::new();
    };

    for set in sets {
        match mode {
            BoolMode::And => {
                merged.retain(|doc, score| match set.get(doc) {
                    Some(additional) => {
                        *score += additional;
                        true
                    }
                    None => false,
                });
                if merged.is_empty() {
                    break;
                }
            }
            BoolMode::Or => {
                for (doc, score) in set {
                    *merged.entry(doc).or_default() += score;
                }
            }
        }
    }
    merged
}

impl SearchIndex for DocumentIndex {
    fn search(&self, query: &str, options: &QueryOptions) -> Vec<SearchHit> {
        let mut terms: Vec<String> = Vec::new();
        for term in parse_query(query) {
            let stemmed = self.stemmer.stem(&fold(&term));
            if !stemmed.is_empty() && !terms.contains(&stemmed) {
                terms.push(stemmed);
            }
        }
        if terms.is_empty() {
            return Vec::new();
        }

        let score_sets = terms
            .iter()
            .map(|term| self.term_scores(term, options))
            .collect();
        let mut ranked: Vec<(usize, f64)> =
            merge_term_scores(score_sets, options.combine).into_iter().collect();

        // score descending, then document order
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        ranked
            .into_iter()
            .map(|(doc, score)| {
                let document = &self.documents[doc];
                SearchHit {
                    reference: document.reference.clone(),
                    title: document.title.clone(),
                    body: document.body.clone(),
                    score,
                }
            })
            .collect()
    }
}
