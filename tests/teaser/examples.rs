//! Teasers for bodies that look like documentation pages.

use snipsearch::{build_teaser, parse_query, TeaserBuilder};

const LONG_PAGE: &str = "Snipsearch ships as a single binary. It has no runtime \
    dependencies and runs on Linux, macOS and Windows. The configuration file is \
    optional. When present it is read once at startup. The debounce delay decides \
    how long the widget waits after the last keystroke before it queries the index. \
    A shorter delay feels snappier but sends more queries. A longer delay saves work \
    on slow devices. The default of one hundred and fifty milliseconds suits most sites.";

#[test]
fn window_moves_to_the_matching_region() {
    let teaser = build_teaser(LONG_PAGE, &["debounce"]);
    assert!(teaser.contains("The <b>debounce</b> delay"));
    assert!(!teaser.starts_with("Snipsearch"));
    assert!(teaser.ends_with('…'));
}

#[test]
fn every_term_is_highlighted() {
    let teaser = build_teaser(LONG_PAGE, &parse_query("delay keystroke"));
    assert!(teaser.contains("<b>delay</b>"));
    assert!(teaser.contains("<b>keystroke</b>"));
}

#[test]
fn dense_term_region_beats_sentence_starts() {
    // "delay" appears three times in the second half; the window goes there
    let teaser = build_teaser(LONG_PAGE, &["delay"]);
    assert_eq!(teaser.matches("<b>delay</b>").count(), 3);
}

#[test]
fn stemming_matches_inflected_forms() {
    let body = "The widget queries the index. Each query is debounced.";
    let teaser = build_teaser(body, &["queries"]);
    assert_eq!(
        teaser,
        "The widget <b>queries</b> the index. Each <b>query</b> is debounced.…"
    );
}

#[test]
fn matching_ignores_case_and_keeps_original_text() {
    let teaser = build_teaser("Rust and RUST and rust", &["RuSt"]);
    assert_eq!(teaser, "<b>Rust</b> and <b>RUST</b> and <b>rust</b>…");
}

#[test]
fn matching_keeps_diacritics_significant() {
    let body = "Meet me at the Café tomorrow";
    assert_eq!(build_teaser(body, &["cafe"]), "Meet me at the Café tomorrow…");
    assert_eq!(build_teaser(body, &["CAFÉ"]), "Meet me at the <b>Café</b> tomorrow…");
}

#[test]
fn terms_match_word_prefixes() {
    let teaser = build_teaser("Configuration and configurable settings", &["config"]);
    assert_eq!(
        teaser,
        "<b>Configuration</b> and <b>configurable</b> settings…"
    );
}

#[test]
fn markup_in_the_body_is_escaped() {
    let teaser = build_teaser("Use <code>snip</code> & friends for search", &["search"]);
    assert_eq!(
        teaser,
        "Use &lt;code&gt;snip&lt;/code&gt; &amp; friends for <b>search</b>…"
    );
}

#[test]
fn default_builder_matches_free_function() {
    let builder = TeaserBuilder::default();
    assert_eq!(
        builder.build(LONG_PAGE, &["index"]),
        build_teaser(LONG_PAGE, &["index"])
    );
}
