//! Window size, weights and selection under non-default configurations.

use snipsearch::{NoStemmer, PorterStemmer, TeaserBuilder, TeaserConfig, WidgetConfig};
use std::sync::Arc;

fn builder(config: TeaserConfig) -> TeaserBuilder {
    TeaserBuilder::new(
        Arc::new(NoStemmer),
        TeaserConfig {
            escape_html: false,
            ..config
        },
    )
}

fn numbered(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("w{}", i)).collect()
}

#[test]
fn small_window_slides_onto_the_term() {
    let teaser = builder(TeaserConfig {
        max_words: 3,
        ..TeaserConfig::default()
    })
    .build("a b c d e f", &["f"]);
    assert_eq!(teaser, "d e <b>f</b>…");
}

#[test]
fn heavy_sentence_starts_can_outweigh_terms() {
    let teaser = builder(TeaserConfig {
        max_words: 2,
        first_word_weight: 100,
        ..TeaserConfig::default()
    })
    .build("Intro words here. more text fox", &["fox"]);
    // windows: 102, 4, 102, 102, 42; the last maximum starts at "more"
    assert_eq!(teaser, "more text…");
}

#[test]
fn window_never_exceeds_word_count() {
    let body = numbered(12).join(" ");
    let builder = builder(TeaserConfig::default());
    let selection = builder.select(&body, &["w5"]).unwrap();
    assert_eq!(selection.first_word, 0);
    assert_eq!(selection.len, 12);
    assert_eq!(selection.start, 0);
    assert_eq!(selection.end, body.len());
}

#[test]
fn selection_offsets_point_into_the_body() {
    let mut tokens = numbered(60);
    tokens[45] = "target".to_string();
    let body = tokens.join(" ");

    let builder = builder(TeaserConfig::default());
    let selection = builder.select(&body, &["target"]).unwrap();
    let teaser = builder.build(&body, &["target"]);

    let plain = teaser.replace("<b>", "").replace("</b>", "");
    assert_eq!(plain.trim_end_matches('…'), &body[selection.start..selection.end]);
    // 60 words, window of 30: the last window is also the last holding the term
    assert_eq!(selection.first_word, 30);
}

#[test]
fn no_stemmer_requires_literal_prefix() {
    let body = "She was running yesterday";
    let literal = builder(TeaserConfig::default()).build(body, &["runs"]);
    assert_eq!(literal, "She was running yesterday…");

    let stemmed = TeaserBuilder::new(Arc::new(PorterStemmer::new()), TeaserConfig::default())
        .build(body, &["runs"]);
    assert_eq!(stemmed, "She was <b>running</b> yesterday…");
}

#[test]
fn sentence_delimiter_needs_a_following_space() {
    // "v1.2" and the final period do not start sentences
    let analysis = builder(TeaserConfig::default()).analyze("Use v1.2 now. Then stop.", &[]);
    let weights: Vec<u32> = analysis.words.iter().map(|w| w.weight).collect();
    assert_eq!(weights, vec![8, 2, 2, 8, 2]);
}

#[test]
fn configured_maximal_term_weight_builds_a_teaser() {
    let config = WidgetConfig::from_toml_str("[teaser]\nterm_weight = 4294967295\n").unwrap();
    let teaser = TeaserBuilder::new(Arc::new(NoStemmer), config.teaser).build("fox fox", &["fox"]);
    assert_eq!(teaser, "<b>fox</b> <b>fox</b>…");
}
