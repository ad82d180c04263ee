// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lazy, memoized index loading.
//!
//! The index is fetched on the first non-empty query, never at mount. All
//! callers, including ones that arrive while the first load is still in
//! flight, share that single load.
//!
//! # INVARIANTS
//!
//! - `IndexSource::load` runs at most once per `LazyIndex`.
//! - A failed load is memoized like a successful one: later calls get the
//!   same error and no retry is attempted.

use super::{DocumentIndex, SearchIndex};
use crate::error::{Error, Result};
use crate::stem::{PorterStemmer, Stemmer};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

/// Outcome of a load, shared between every caller.
pub type LoadResult<I> = std::result::Result<Arc<I>, Arc<Error>>;

/// Produces a queryable index, typically by fetching and parsing a payload.
pub trait IndexSource: Send + Sync + 'static {
    type Index: SearchIndex + Send + Sync + 'static;

    fn load(&self) -> impl Future<Output = Result<Self::Index>> + Send;
}

/// Reads a JSON [`DocumentIndex`] payload from disk.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    stemmer: Arc<dyn Stemmer>,
}

#[cfg(not(target_arch = "wasm32"))]
impl std::fmt::Debug for JsonFileSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileSource")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_stemmer(path, Arc::new(PorterStemmer::new()))
    }

    pub fn with_stemmer(path: impl Into<PathBuf>, stemmer: Arc<dyn Stemmer>) -> Self {
        Self {
            path: path.into(),
            stemmer,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl IndexSource for JsonFileSource {
    type Index = DocumentIndex;

    async fn load(&self) -> Result<DocumentIndex> {
        let payload = tokio::fs::read(&self.path)
            .await
            .map_err(|e| Error::io(&self.path, e))?;
        DocumentIndex::from_json_with_stemmer(&payload, Arc::clone(&self.stemmer))
    }
}

/// Memoizes the in-flight and completed load of an [`IndexSource`].
pub struct LazyIndex<S: IndexSource> {
    source: S,
    cell: OnceCell<LoadResult<S::Index>>,
}

impl<S: IndexSource> LazyIndex<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cell: OnceCell::new(),
        }
    }

    /// Get the index, starting the load on first use.
    pub async fn get(&self) -> LoadResult<S::Index> {
        self.cell
            .get_or_init(|| async {
                debug!("loading search index");
                match self.source.load().await {
                    Ok(index) => {
                        debug!("search index ready");
                        Ok(Arc::new(index))
                    }
                    Err(err) => {
                        warn!(error = %err, "search index failed to load");
                        Err(Arc::new(err))
                    }
                }
            })
            .await
            .clone()
    }

    /// Whether a load has completed, successfully or not.
    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
