// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search index collaborator.
//!
//! The widget never looks inside an index: it hands a query string and
//! [`QueryOptions`] to [`SearchIndex::search`] and renders whatever ranked
//! hits come back. [`DocumentIndex`] is a small JSON-backed implementation
//! used by the CLI and the tests; [`LazyIndex`] memoizes loading any index
//! from an [`IndexSource`].

mod document;
mod lazy;

pub use document::{Document, DocumentIndex};
pub use lazy::{IndexSource, LazyIndex, LoadResult};
#[cfg(not(target_arch = "wasm32"))]
pub use lazy::JsonFileSource;

use crate::config::QueryOptions;
use serde::{Deserialize, Serialize};

/// One ranked result. Consumed read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Stable document reference, usually its URL.
    #[serde(rename = "ref")]
    pub reference: String,
    pub title: String,
    pub body: String,
    pub score: f64,
}

/// A queryable full-text index.
pub trait SearchIndex {
    /// Return hits in rank order, best first.
    fn search(&self, query: &str, options: &QueryOptions) -> Vec<SearchHit>;
}

impl<T: SearchIndex + ?Sized> SearchIndex for std::sync::Arc<T> {
    fn search(&self, query: &str, options: &QueryOptions) -> Vec<SearchHit> {
        (**self).search(query, options)
    }
}
