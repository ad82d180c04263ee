// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::config::QueryOptions;
use crate::error::{Error, Result};
use crate::index::{Document, DocumentIndex, IndexSource, SearchHit, SearchIndex};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Create a test document whose body mentions `word`.
pub fn make_doc(id: usize, word: &str) -> Document {
    Document {
        reference: format!("/doc/{}/", id),
        title: format!("Doc {}", id),
        body: format!("Document number {} talks about {}.", id, word),
    }
}

/// Create `n` documents that all mention `word`.
pub fn make_docs(n: usize, word: &str) -> Vec<Document> {
    (0..n).map(|id| make_doc(id, word)).collect()
}

/// Load and search counters shared between a [`StaticSource`] and its index.
#[derive(Debug, Clone, Default)]
pub struct Counters {
    loads: Arc<AtomicUsize>,
    searches: Arc<AtomicUsize>,
}

impl Counters {
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn searches(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }
}

/// [`DocumentIndex`] that counts its queries.
#[derive(Debug)]
pub struct CountingIndex {
    inner: DocumentIndex,
    searches: Arc<AtomicUsize>,
}

impl SearchIndex for CountingIndex {
    fn search(&self, query: &str, options: &QueryOptions) -> Vec<SearchHit> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        self.inner.search(query, options)
    }
}

/// In-memory index source with optional latency and failure.
#[derive(Debug, Clone)]
pub struct StaticSource {
    documents: Vec<Document>,
    delay: Option<Duration>,
    fail: bool,
    counters: Counters,
}

impl StaticSource {
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            documents,
            delay: None,
            fail: false,
            counters: Counters::default(),
        }
    }

    /// A source whose every load fails with a malformed-payload error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new())
        }
    }

    /// Delay the load, simulating a slow fetch.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn counters(&self) -> Counters {
        self.counters.clone()
    }
}

impl IndexSource for StaticSource {
    type Index = CountingIndex;

    async fn load(&self) -> Result<CountingIndex> {
        self.counters.loads.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            let err = std::io::Error::other("simulated fetch failure");
            return Err(Error::IndexFormat(serde_json::Error::io(err)));
        }
        Ok(CountingIndex {
            inner: DocumentIndex::new(self.documents.clone()),
            searches: Arc::clone(&self.counters.searches),
        })
    }
}
