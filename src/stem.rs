// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stemming collaborator.
//!
//! The teaser builder and the reference index only need `stem(word) -> root`.
//! Anything deterministic works; the default is the Snowball English (Porter2)
//! stemmer.

use rust_stemmers::{Algorithm, Stemmer as Snowball};

/// Reduce a word to its root form. Must be deterministic and pure.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

/// Snowball English stemmer.
pub struct PorterStemmer {
    inner: Snowball,
}

impl PorterStemmer {
    pub fn new() -> Self {
        Self {
            inner: Snowball::create(Algorithm::English),
        }
    }
}

impl Default for PorterStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PorterStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PorterStemmer")
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}

/// Leaves words untouched. Matching degrades to plain prefix matching.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStemmer;

impl Stemmer for NoStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }
}
