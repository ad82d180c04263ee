// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search-as-you-type for static documentation sites.
//!
//! Two pieces do the real work:
//!
//! - **Teasers** ([`teaser`]): carve the most relevant 30-word window out of a
//!   document body and bold the query terms, stem-aware.
//! - **Orchestration** ([`widget`]): debounce keystrokes, lazily load and
//!   memoize the index, suppress duplicate queries, cap and render results.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐     ┌───────────────┐     ┌──────────────┐
//! │  SearchWidget │────▶│   LazyIndex   │────▶│ IndexSource  │
//! │  (debounce,   │     │ (load once,   │     │ (file, fetch)│
//! │   state)      │     │  share result)│     └──────────────┘
//! └───────────────┘     └───────────────┘
//!        │                      │ SearchIndex::search
//!        ▼                      ▼
//! ┌───────────────┐     ┌───────────────┐
//! │ TeaserBuilder │────▶│    Stemmer    │
//! └───────────────┘     └───────────────┘
//!        │
//!        ▼
//! ┌───────────────┐
//! │  ResultsView  │  (replace items, toggle panel, count header)
//! └───────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use snipsearch::{JsonFileSource, MemoryView, SearchWidget, WidgetConfig};
//!
//! # async fn demo() {
//! let widget = SearchWidget::new(
//!     WidgetConfig::default(),
//!     JsonFileSource::new("public/search_index.en.json"),
//!     MemoryView::new(),
//! );
//! widget.on_input("rust");
//! widget.flush().await;
//! for item in widget.view().snapshot().items {
//!     println!("{}", item.html);
//! }
//! # }
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod stem;
pub mod teaser;
pub mod testing;
mod utils;
pub mod widget;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{BoolMode, FieldBoost, FieldBoosts, QueryOptions, TeaserConfig, WidgetConfig};
pub use error::{Error, Result};
#[cfg(not(target_arch = "wasm32"))]
pub use index::JsonFileSource;
pub use index::{
    Document, DocumentIndex, IndexSource, LazyIndex, LoadResult, SearchHit, SearchIndex,
};
pub use stem::{NoStemmer, PorterStemmer, Stemmer};
pub use teaser::{build_teaser, Selection, TeaserBuilder, WeightedWord};
pub use utils::{escape_html, fold, parse_query};
pub use widget::{
    MemoryView, Phase, RenderedItem, ResultsView, Scheduler, SearchWidget, TokioScheduler,
    ViewSnapshot,
};
