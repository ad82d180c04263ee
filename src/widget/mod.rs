// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query orchestration: the search-as-you-type state machine.
//!
//! ```text
//!            keystroke                 delay elapsed, term changed
//!   Idle ─────────────▶ Debouncing ─────────────────────────────▶ Querying
//!    ▲                    │   ▲ keystroke (restart delay)            │
//!    │  same term         │   └──────┘                               │ hits
//!    └────────────────────┘                                          ▼
//!    ▲              empty term / no hits / index failure          Rendered
//!    └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Suspension points are the debounce delay and the await on the memoized
//! index. Only the last keystroke of a burst settles. A query already in
//! flight is not cancelled by later keystrokes; whichever query completes
//! last owns the final view.
//!
//! Nothing here returns an error to the host. Index failures are logged and
//! leave the panel hidden.

pub mod debounce;
pub mod view;

pub use debounce::{DelayHandle, Scheduler, TokioScheduler};
pub use view::{count_label, format_result_item, MemoryView, RenderedItem, ResultsView, ViewSnapshot};

use crate::config::WidgetConfig;
use crate::index::{IndexSource, LazyIndex, SearchIndex};
use crate::stem::{PorterStemmer, Stemmer};
use crate::teaser::TeaserBuilder;
use crate::utils::parse_query;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Where the widget is in its query cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Debouncing,
    Querying,
    Rendered,
}

/// Mutable per-widget state.
#[derive(Debug, Default)]
struct WidgetState {
    last_query: String,
    phase: Phase,
}

/// Shared between the widget handle and its settle tasks.
struct Inner<S: IndexSource, V: ResultsView> {
    config: WidgetConfig,
    index: LazyIndex<S>,
    view: V,
    teaser: TeaserBuilder,
    state: Mutex<WidgetState>,
    evaluations: AtomicUsize,
    /// Highest input generation whose settle has finished.
    settled: watch::Sender<u64>,
}

/// One mounted search widget.
///
/// Input events must be delivered from within a tokio runtime when using the
/// default [`TokioScheduler`].
pub struct SearchWidget<S: IndexSource, V: ResultsView, T: Scheduler = TokioScheduler> {
    inner: Arc<Inner<S, V>>,
    scheduler: T,
    pending: Mutex<Option<T::Handle>>,
    generation: AtomicU64,
}

impl<S: IndexSource, V: ResultsView> SearchWidget<S, V, TokioScheduler> {
    /// Mount a widget with the default scheduler and English stemmer.
    pub fn new(config: WidgetConfig, source: S, view: V) -> Self {
        Self::with_parts(
            config,
            source,
            view,
            TokioScheduler,
            Arc::new(PorterStemmer::new()),
        )
    }
}

impl<S: IndexSource, V: ResultsView, T: Scheduler> SearchWidget<S, V, T> {
    pub fn with_parts(
        config: WidgetConfig,
        source: S,
        view: V,
        scheduler: T,
        stemmer: Arc<dyn Stemmer>,
    ) -> Self {
        let teaser = TeaserBuilder::new(stemmer, config.teaser.clone());
        let (settled, _) = watch::channel(0);
        Self {
            inner: Arc::new(Inner {
                config,
                index: LazyIndex::new(source),
                view,
                teaser,
                state: Mutex::new(WidgetState::default()),
                evaluations: AtomicUsize::new(0),
                settled,
            }),
            scheduler,
            pending: Mutex::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// Handle an input-change event carrying the field's current value.
    ///
    /// Cancels the pending debounce (if any) and schedules a new one.
    pub fn on_input(&self, value: impl Into<String>) {
        let value = value.into();
        let mut pending = self.pending.lock();
        if let Some(handle) = pending.take() {
            self.scheduler.cancel(handle);
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.state.lock().phase = Phase::Debouncing;

        let inner = Arc::clone(&self.inner);
        let delay = self.inner.config.debounce();
        *pending = Some(self.scheduler.schedule(delay, async move {
            inner.settle(generation, value).await;
        }));
    }

    /// Handle a click outside the results panel: hide it.
    ///
    /// The last query and the loaded index are kept, so retyping the same
    /// term does not re-query.
    pub fn on_outside_click(&self) {
        if self.inner.view.is_visible() {
            self.inner.view.set_visible(false);
        }
        let mut state = self.inner.state.lock();
        if state.phase != Phase::Debouncing {
            state.phase = Phase::Idle;
        }
    }

    /// Wait until the most recent input has settled.
    pub async fn flush(&self) {
        let target = self.generation.load(Ordering::SeqCst);
        let mut settled = self.inner.settled.subscribe();
        // the sender lives as long as `self`
        let _ = settled.wait_for(|done| *done >= target).await;
    }

    pub fn phase(&self) -> Phase {
        self.inner.state.lock().phase
    }

    /// The last settled query term.
    pub fn last_query(&self) -> String {
        self.inner.state.lock().last_query.clone()
    }

    /// Number of debounce cycles that reached evaluation.
    pub fn evaluations(&self) -> usize {
        self.inner.evaluations.load(Ordering::SeqCst)
    }

    pub fn view(&self) -> &V {
        &self.inner.view
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.inner.config
    }

    pub fn index(&self) -> &LazyIndex<S> {
        &self.inner.index
    }
}

impl<S: IndexSource, V: ResultsView> Inner<S, V> {
    async fn settle(&self, generation: u64, raw: String) {
        self.evaluations.fetch_add(1, Ordering::SeqCst);
        self.evaluate(raw.trim()).await;
        self.settled.send_modify(|done| *done = (*done).max(generation));
    }

    fn set_phase(&self, phase: Phase) {
        self.state.lock().phase = phase;
    }

    async fn evaluate(&self, term: &str) {
        {
            let mut state = self.state.lock();
            if state.last_query == term {
                debug!(query = term, "query unchanged, skipping");
                state.phase = Phase::Idle;
                return;
            }
            state.last_query = term.to_string();
            state.phase = if term.is_empty() {
                Phase::Idle
            } else {
                Phase::Querying
            };
        }

        self.view.set_visible(!term.is_empty());
        self.view.replace_items(Vec::new());
        if term.is_empty() {
            self.view.set_count("");
            return;
        }

        let index = match self.index.get().await {
            Ok(index) => index,
            Err(err) => {
                warn!(query = term, error = %err, "search unavailable");
                self.view.set_visible(false);
                self.view.set_count("");
                self.set_phase(Phase::Idle);
                return;
            }
        };

        let hits = index.search(term, &self.config.query);
        if hits.is_empty() {
            debug!(query = term, "no hits");
            self.view.set_visible(false);
            self.view.set_count("");
            self.set_phase(Phase::Idle);
            return;
        }

        let terms = parse_query(term);
        let items: Vec<RenderedItem> = hits
            .iter()
            .take(self.config.max_items)
            .map(|hit| RenderedItem::from_hit(hit, &terms, &self.teaser))
            .collect();
        debug!(query = term, hits = hits.len(), shown = items.len(), "rendering results");

        self.view.replace_items(items);
        self.view.set_count(&count_label(hits.len()));
        self.set_phase(Phase::Rendered);
    }
}
