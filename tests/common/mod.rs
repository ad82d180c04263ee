//! Shared test utilities and fixtures.

#![allow(dead_code)]

use snipsearch::{Document, MemoryView, SearchWidget, WidgetConfig};
use std::path::{Path, PathBuf};
use std::time::Duration;

// Re-export canonical test utilities from snipsearch::testing
pub use snipsearch::testing::{make_doc, make_docs, Counters, StaticSource};

/// Widget over an in-memory source.
pub type TestWidget = SearchWidget<StaticSource, MemoryView>;

/// Longer than the default debounce delay.
pub const SETTLE: Duration = Duration::from_millis(200);

/// Shorter than the default debounce delay.
pub const KEYSTROKE: Duration = Duration::from_millis(50);

/// Mount a widget over `source` with the default configuration.
pub fn mount(source: StaticSource) -> TestWidget {
    mount_with(WidgetConfig::default(), source)
}

pub fn mount_with(config: WidgetConfig, source: StaticSource) -> TestWidget {
    SearchWidget::new(config, source, MemoryView::new())
}

/// Type each value, waiting `gap` after each keystroke.
pub async fn type_burst(widget: &TestWidget, values: &[&str], gap: Duration) {
    for value in values {
        widget.on_input(*value);
        tokio::time::sleep(gap).await;
    }
}

/// Type one value and wait for it to settle.
pub async fn type_and_settle(widget: &TestWidget, value: &str) {
    widget.on_input(value);
    widget.flush().await;
}

/// References of the rendered items, in order.
pub fn rendered_refs(widget: &TestWidget) -> Vec<String> {
    widget
        .view()
        .snapshot()
        .items
        .into_iter()
        .map(|item| item.reference)
        .collect()
}

/// Write a JSON index payload for `documents` under `dir`.
pub fn write_index(dir: &Path, documents: &[Document]) -> PathBuf {
    let path = dir.join("search_index.en.json");
    let payload = serde_json::json!({ "documents": documents });
    std::fs::write(&path, serde_json::to_vec(&payload).unwrap()).unwrap();
    path
}

/// A small documentation corpus.
pub fn docs_corpus() -> Vec<Document> {
    [
        (
            "/docs/install/",
            "Installation",
            "Download the binary for your platform. Unpack the archive and put the \
             binary on your PATH. Run the version command to confirm the installation worked.",
        ),
        (
            "/docs/config/",
            "Configuration",
            "Settings live in a TOML file. Every key has a default. The debounce delay \
             controls how long the search box waits after the last keystroke.",
        ),
        (
            "/docs/search/",
            "Search",
            "The search box queries a prebuilt index. Results show a teaser: the most \
             relevant thirty words of the page with every query term in bold.",
        ),
        (
            "/blog/release/",
            "Release notes",
            "This release makes search faster. The index now loads lazily on the first \
             query instead of at page load.",
        ),
    ]
    .into_iter()
    .map(|(reference, title, body)| Document {
        reference: reference.to_string(),
        title: title.to_string(),
        body: body.to_string(),
    })
    .collect()
}
