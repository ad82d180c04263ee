// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relevance-weighted teaser extraction.
//!
//! Given a document body and the query terms, carve out the `max_words`-word
//! window that best shows why the document matched and bold the matching
//! words.
//!
//! # Algorithm
//!
//! 1. Weigh every word: query terms (stem-aware prefix match) get 40, the
//!    first word of a sentence gets 8, everything else 2.
//! 2. Slide a fixed-size window over the weighted words, keeping a running sum.
//! 3. Pick the heaviest window. Among equal maxima the *last* one wins. If no
//!    term occurs at all, the leading window is used.
//! 4. Rebuild the window from the original body using recorded byte offsets,
//!    so punctuation, casing and spacing survive untouched, and append `…`.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## OFFSETS_ARE_RAW
//! Word offsets index the *original* body. Lowercasing happens per word for
//! matching only, never on the string the offsets point into. Diacritics are
//! significant: `cafe` does not match `Café`.
//!
//! ## WINDOW_BOUND
//! The teaser covers exactly `min(word_count, max_words)` words.
//!
//! ## LAST_MAXIMUM
//! The backward scan replaces the best window only on a strictly greater sum,
//! so ties resolve to the window with the greatest start offset.

use crate::config::TeaserConfig;
use crate::stem::{PorterStemmer, Stemmer};
use crate::utils::push_escaped;
use std::sync::Arc;

/// Opening highlight marker around matched words.
pub const HIGHLIGHT_OPEN: &str = "<b>";
/// Closing highlight marker around matched words.
pub const HIGHLIGHT_CLOSE: &str = "</b>";
/// Appended to every non-degenerate teaser.
pub const ELLIPSIS: &str = "…";

const SENTENCE_DELIMITER: &str = ". ";
const WORD_DELIMITER: char = ' ';

/// A word of the body with its relevance weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedWord<'a> {
    /// Raw slice of the original body.
    pub surface: &'a str,
    pub weight: u32,
    /// Byte offset of `surface` in the original body.
    pub offset: usize,
    /// Whether the word matched a query term.
    pub is_term: bool,
}

impl WeightedWord<'_> {
    /// Byte offset one past the end of the word.
    pub fn end(&self) -> usize {
        self.offset + self.surface.len()
    }
}

/// Weighted words of one body, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis<'a> {
    pub words: Vec<WeightedWord<'a>>,
    pub term_found: bool,
}

impl Analysis<'_> {
    /// Sum of weights for every window of `size` consecutive words.
    ///
    /// The first window is summed directly, every later one is derived from
    /// its predecessor by dropping the outgoing word and adding the incoming.
    /// Sums are widened to `u64`, so any `u32` weights fit.
    pub fn window_sums(&self, size: usize) -> Vec<u64> {
        let words = &self.words;
        if size == 0 || words.len() < size {
            return Vec::new();
        }

        let mut sums = Vec::with_capacity(words.len() - size + 1);
        let mut current: u64 = words[..size].iter().map(|w| u64::from(w.weight)).sum();
        sums.push(current);

        for i in 0..words.len() - size {
            current -= u64::from(words[i].weight);
            current += u64::from(words[i + size].weight);
            sums.push(current);
        }
        sums
    }
}

/// Pick the window to display.
///
/// Without any matched term the leading window is used. Otherwise the scan
/// runs from the last window to the first and only moves on a strictly
/// greater sum.
pub fn select_window(sums: &[u64], term_found: bool) -> usize {
    if !term_found {
        return 0;
    }

    let mut best = 0;
    let mut max_found = 0;
    for (i, &sum) in sums.iter().enumerate().rev() {
        if sum > max_found {
            max_found = sum;
            best = i;
        }
    }
    best
}

/// The slice of the body a teaser covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Index of the first word of the window.
    pub first_word: usize,
    /// Number of words in the window.
    pub len: usize,
    /// Byte offset of the first word.
    pub start: usize,
    /// Byte offset one past the last word.
    pub end: usize,
}

/// Builds teasers with a fixed stemmer and configuration.
#[derive(Clone)]
pub struct TeaserBuilder {
    stemmer: Arc<dyn Stemmer>,
    config: TeaserConfig,
}

impl std::fmt::Debug for TeaserBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeaserBuilder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for TeaserBuilder {
    fn default() -> Self {
        Self::new(Arc::new(PorterStemmer::new()), TeaserConfig::default())
    }
}

impl TeaserBuilder {
    pub fn new(stemmer: Arc<dyn Stemmer>, config: TeaserConfig) -> Self {
        Self { stemmer, config }
    }

    pub fn config(&self) -> &TeaserConfig {
        &self.config
    }

    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.stemmer
    }

    fn stem_terms<S: AsRef<str>>(&self, terms: &[S]) -> Vec<String> {
        terms
            .iter()
            .map(|t| t.as_ref().trim())
            .filter(|t| !t.is_empty())
            .map(|t| self.stemmer.stem(&t.to_lowercase()))
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Split the body into weighted words.
    ///
    /// Sentences are separated by the literal `". "`, words by a single space.
    /// Empty words (runs of delimiters) are skipped but their delimiters still
    /// advance the offset.
    pub fn analyze<'a>(&self, body: &'a str, stemmed_terms: &[String]) -> Analysis<'a> {
        let mut words = Vec::new();
        let mut term_found = false;
        let mut offset = 0;

        for sentence in body.split(SENTENCE_DELIMITER) {
            let mut weight = self.config.first_word_weight;

            for word in sentence.split(WORD_DELIMITER) {
                if !word.is_empty() {
                    let stemmed = self.stemmer.stem(&word.to_lowercase());
                    let is_term = stemmed_terms.iter().any(|t| stemmed.starts_with(t.as_str()));
                    if is_term {
                        term_found = true;
                    }
                    words.push(WeightedWord {
                        surface: word,
                        weight: if is_term { self.config.term_weight } else { weight },
                        offset,
                        is_term,
                    });
                    weight = self.config.normal_word_weight;
                }
                // the word plus the space after it, or the '.' of the sentence delimiter
                offset += word.len() + 1;
            }
            // the space of the two-byte sentence delimiter
            offset += 1;
        }

        Analysis { words, term_found }
    }

    fn window_size(&self, word_count: usize) -> usize {
        word_count.min(self.config.max_words.max(1))
    }

    /// Locate the window a teaser for `body` would show.
    ///
    /// Returns `None` for degenerate input (no words or no non-empty terms).
    pub fn select<S: AsRef<str>>(&self, body: &str, terms: &[S]) -> Option<Selection> {
        let stemmed = self.stem_terms(terms);
        if stemmed.is_empty() {
            return None;
        }
        let analysis = self.analyze(body, &stemmed);
        selection_of(&analysis, self.window_size(analysis.words.len()))
    }

    /// Build the HTML teaser for `body`.
    ///
    /// Degenerate input (empty body, no non-empty terms, no words) returns the
    /// body itself, escaped if escaping is enabled.
    pub fn build<S: AsRef<str>>(&self, body: &str, terms: &[S]) -> String {
        let stemmed = self.stem_terms(terms);
        if stemmed.is_empty() {
            return self.verbatim(body);
        }

        let analysis = self.analyze(body, &stemmed);
        let Some(selection) = selection_of(&analysis, self.window_size(analysis.words.len()))
        else {
            return self.verbatim(body);
        };

        let window = &analysis.words[selection.first_word..selection.first_word + selection.len];
        let mut teaser = String::with_capacity(selection.end - selection.start + 32);
        let mut cursor = selection.start;

        for word in window {
            if cursor < word.offset {
                self.push_text(&mut teaser, &body[cursor..word.offset]);
            }
            if word.is_term {
                teaser.push_str(HIGHLIGHT_OPEN);
            }
            self.push_text(&mut teaser, word.surface);
            if word.is_term {
                teaser.push_str(HIGHLIGHT_CLOSE);
            }
            cursor = word.end();
        }

        teaser.push_str(ELLIPSIS);
        teaser
    }

    fn verbatim(&self, body: &str) -> String {
        let mut out = String::with_capacity(body.len());
        self.push_text(&mut out, body);
        out
    }

    fn push_text(&self, out: &mut String, text: &str) {
        if self.config.escape_html {
            push_escaped(out, text);
        } else {
            out.push_str(text);
        }
    }
}

fn selection_of(analysis: &Analysis<'_>, size: usize) -> Option<Selection> {
    if analysis.words.is_empty() {
        return None;
    }
    let sums = analysis.window_sums(size);
    let first_word = select_window(&sums, analysis.term_found);
    let last = &analysis.words[first_word + size - 1];
    Some(Selection {
        first_word,
        len: size,
        start: analysis.words[first_word].offset,
        end: last.end(),
    })
}

/// Build a teaser with the default stemmer and configuration.
///
/// ```
/// let teaser = snipsearch::build_teaser("The quick brown fox. The fox runs.", &["fox"]);
/// assert_eq!(teaser, "The quick brown <b>fox</b>. The <b>fox</b> runs.…");
/// ```
pub fn build_teaser<S: AsRef<str>>(body: &str, terms: &[S]) -> String {
    TeaserBuilder::default().build(body, terms)
}
