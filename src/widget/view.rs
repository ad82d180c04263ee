// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The rendering boundary.
//!
//! In a browser this is the results panel: a container whose children get
//! replaced, a visibility toggle and a count header. [`MemoryView`] records the
//! same effects for tests and the CLI.

use crate::index::SearchHit;
use crate::teaser::TeaserBuilder;
use crate::utils::escape_html;
use parking_lot::Mutex;

/// One rendered entry of the results list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    pub reference: String,
    pub title: String,
    /// Teaser fragment on its own.
    pub teaser: String,
    /// Full item markup.
    pub html: String,
}

impl RenderedItem {
    /// Render a hit with a teaser for `terms`.
    pub fn from_hit<S: AsRef<str>>(hit: &SearchHit, terms: &[S], teaser: &TeaserBuilder) -> Self {
        let teaser = teaser.build(&hit.body, terms);
        Self {
            reference: hit.reference.clone(),
            title: hit.title.clone(),
            html: item_markup(hit, &teaser),
            teaser,
        }
    }
}

fn item_markup(hit: &SearchHit, teaser: &str) -> String {
    format!(
        r#"<div class="search-results__item"><a href="{}">{}</a><div>{}</div></div>"#,
        escape_html(&hit.reference),
        escape_html(&hit.title),
        teaser
    )
}

/// Markup of a single result: title link followed by the teaser.
///
/// ```text
/// <div class="search-results__item"><a href="REF">TITLE</a><div>TEASER</div></div>
/// ```
pub fn format_result_item<S: AsRef<str>>(
    hit: &SearchHit,
    terms: &[S],
    teaser: &TeaserBuilder,
) -> String {
    item_markup(hit, &teaser.build(&hit.body, terms))
}

/// Header text for `total` hits.
pub fn count_label(total: usize) -> String {
    match total {
        1 => "1 result".to_string(),
        n => format!("{} results", n),
    }
}

/// Where the widget's effects land.
///
/// Implementations use interior mutability; the widget calls these from
/// whichever task finishes a query.
pub trait ResultsView: Send + Sync + 'static {
    /// Replace every rendered item with `items`, in order.
    fn replace_items(&self, items: Vec<RenderedItem>);

    fn set_visible(&self, visible: bool);

    fn is_visible(&self) -> bool;

    /// Set the results-count header text.
    fn set_count(&self, text: &str);
}

/// Everything a [`MemoryView`] currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub items: Vec<RenderedItem>,
    pub visible: bool,
    pub count: String,
    /// Number of `replace_items` calls so far.
    pub renders: usize,
}

/// In-memory [`ResultsView`].
#[derive(Debug, Default)]
pub struct MemoryView {
    state: Mutex<ViewSnapshot>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.state.lock().clone()
    }
}

impl ResultsView for MemoryView {
    fn replace_items(&self, items: Vec<RenderedItem>) {
        let mut state = self.state.lock();
        state.items = items;
        state.renders += 1;
    }

    fn set_visible(&self, visible: bool) {
        self.state.lock().visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.state.lock().visible
    }

    fn set_count(&self, text: &str) {
        self.state.lock().count = text.to_string();
    }
}
