//! What ends up in the results panel.

use crate::common::*;
use snipsearch::{Phase, WidgetConfig};

#[tokio::test(start_paused = true)]
async fn caps_rendered_items_and_counts_all_hits() {
    let widget = mount(StaticSource::new(make_docs(15, "fox")));
    type_and_settle(&widget, "fox").await;

    let snapshot = widget.view().snapshot();
    assert!(snapshot.visible);
    assert_eq!(snapshot.items.len(), 10);
    assert_eq!(snapshot.count, "15 results");

    let expected: Vec<String> = (0..10).map(|id| format!("/doc/{}/", id)).collect();
    assert_eq!(rendered_refs(&widget), expected);
}

#[tokio::test(start_paused = true)]
async fn fewer_hits_than_cap_render_all() {
    let widget = mount(StaticSource::new(make_docs(1, "fox")));
    type_and_settle(&widget, "fox").await;

    let snapshot = widget.view().snapshot();
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.count, "1 result");
}

#[tokio::test(start_paused = true)]
async fn max_items_is_configurable() {
    let config = WidgetConfig {
        max_items: 3,
        ..WidgetConfig::default()
    };
    let widget = mount_with(config, StaticSource::new(make_docs(5, "fox")));
    type_and_settle(&widget, "fox").await;

    assert_eq!(rendered_refs(&widget), vec!["/doc/0/", "/doc/1/", "/doc/2/"]);
    assert_eq!(widget.view().snapshot().count, "5 results");
}

#[tokio::test(start_paused = true)]
async fn items_carry_link_and_highlighted_teaser() {
    let widget = mount(StaticSource::new(make_docs(1, "foxes")));
    type_and_settle(&widget, "fox").await;

    let item = &widget.view().snapshot().items[0];
    assert_eq!(item.title, "Doc 0");
    assert_eq!(item.teaser, "Document number 0 talks about <b>foxes.</b>…");
    assert_eq!(
        item.html,
        r#"<div class="search-results__item"><a href="/doc/0/">Doc 0</a><div>Document number 0 talks about <b>foxes.</b>…</div></div>"#
    );
}

#[tokio::test(start_paused = true)]
async fn zero_hits_hide_the_panel() {
    let widget = mount(StaticSource::new(make_docs(3, "fox")));
    type_and_settle(&widget, "fox").await;
    type_and_settle(&widget, "zebra").await;

    let snapshot = widget.view().snapshot();
    assert!(!snapshot.visible);
    assert!(snapshot.items.is_empty());
    assert_eq!(snapshot.count, "");
    assert_eq!(widget.phase(), Phase::Idle);
}

#[tokio::test(start_paused = true)]
async fn clearing_the_input_hides_and_empties_the_panel() {
    let source = StaticSource::new(make_docs(3, "fox"));
    let counters = source.counters();
    let widget = mount(source);

    type_and_settle(&widget, "fox").await;
    assert_eq!(widget.view().snapshot().count, "3 results");
    type_and_settle(&widget, "   ").await;

    let snapshot = widget.view().snapshot();
    assert!(!snapshot.visible);
    assert!(snapshot.items.is_empty());
    assert_eq!(snapshot.count, "");
    assert_eq!(widget.last_query(), "");
    assert_eq!(widget.phase(), Phase::Idle);
    assert_eq!(counters.searches(), 1);
}

#[tokio::test(start_paused = true)]
async fn outside_click_hides_until_the_query_changes() {
    let source = StaticSource::new(make_docs(3, "fox"));
    let counters = source.counters();
    let widget = mount(source);

    type_and_settle(&widget, "fox").await;
    widget.on_outside_click();
    assert!(!widget.view().snapshot().visible);

    // same term again: suppressed, panel stays hidden
    type_and_settle(&widget, "fox").await;
    assert!(!widget.view().snapshot().visible);
    assert_eq!(counters.searches(), 1);

    type_and_settle(&widget, "talks").await;
    assert!(widget.view().snapshot().visible);
    assert_eq!(counters.searches(), 2);
}

#[tokio::test(start_paused = true)]
async fn outside_click_while_debouncing_keeps_pending_query() {
    let widget = mount(StaticSource::new(make_docs(2, "fox")));

    widget.on_input("fox");
    widget.on_outside_click();
    assert_eq!(widget.phase(), Phase::Debouncing);

    widget.flush().await;
    assert_eq!(widget.phase(), Phase::Rendered);
    assert!(widget.view().snapshot().visible);
}

#[tokio::test(start_paused = true)]
async fn realistic_corpus_ranks_title_matches_first() {
    let widget = mount(StaticSource::new(docs_corpus()));
    type_and_settle(&widget, "search").await;

    let refs = rendered_refs(&widget);
    assert_eq!(refs[0], "/docs/search/");
    assert!(refs.contains(&"/blog/release/".to_string()));

    let teaser = &widget.view().snapshot().items[0].teaser;
    assert!(teaser.contains("<b>search</b>"));
    assert!(teaser.ends_with('…'));
}
