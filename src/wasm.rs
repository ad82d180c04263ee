// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings.
//!
//! The browser owns timers and the DOM, so only the pure pieces cross the
//! boundary: teaser building and querying a loaded [`DocumentIndex`].
//!
//! ```js
//! const index = new SnipsearchIndex(new Uint8Array(await res.arrayBuffer()));
//! for (const item of index.search(input.value.trim(), 10)) {
//!     list.insertAdjacentHTML("beforeend", item.html);
//! }
//! ```

use crate::config::{QueryOptions, TeaserConfig, DEFAULT_MAX_ITEMS};
use crate::index::{DocumentIndex, SearchIndex};
use crate::teaser::TeaserBuilder;
use crate::utils::parse_query;
use crate::widget::format_result_item;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Result item for JavaScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsResultItem {
    reference: String,
    title: String,
    score: f64,
    html: String,
}

/// Build a teaser for `body`. `terms` is an array of strings.
#[wasm_bindgen(js_name = "makeTeaser")]
pub fn make_teaser(body: &str, terms: JsValue) -> Result<String, JsValue> {
    let terms: Vec<String> = from_value(terms).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(TeaserBuilder::default().build(body, &terms))
}

/// A loaded document index.
#[wasm_bindgen]
pub struct SnipsearchIndex {
    index: DocumentIndex,
    teaser: TeaserBuilder,
}

#[wasm_bindgen]
impl SnipsearchIndex {
    /// Parse a JSON index payload.
    #[wasm_bindgen(constructor)]
    pub fn new(bytes: &[u8]) -> Result<SnipsearchIndex, JsValue> {
        let index = DocumentIndex::from_json(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(SnipsearchIndex {
            index,
            teaser: TeaserBuilder::default(),
        })
    }

    #[wasm_bindgen(js_name = "docCount")]
    pub fn doc_count(&self) -> usize {
        self.index.len()
    }

    /// Ranked, rendered results for `query`, at most `limit` (default 10).
    ///
    /// `options` follows the `{ bool, fields: { title: { boost }, body: { boost } } }` shape.
    pub fn search(
        &self,
        query: &str,
        limit: Option<usize>,
        options: JsValue,
    ) -> Result<JsValue, JsValue> {
        let options: QueryOptions = if options.is_undefined() || options.is_null() {
            QueryOptions::default()
        } else {
            from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))?
        };

        let terms = parse_query(query);
        let items: Vec<JsResultItem> = self
            .index
            .search(query, &options)
            .iter()
            .take(limit.unwrap_or(DEFAULT_MAX_ITEMS))
            .map(|hit| JsResultItem {
                reference: hit.reference.clone(),
                title: hit.title.clone(),
                score: hit.score,
                html: format_result_item(hit, &terms, &self.teaser),
            })
            .collect();

        to_value(&items).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Replace the teaser settings, e.g. `{ max_words: 20 }`.
    #[wasm_bindgen(js_name = "setTeaserConfig")]
    pub fn set_teaser_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config: TeaserConfig = from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        config.validate().map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.teaser = TeaserBuilder::new(self.teaser.stemmer().clone(), config);
        Ok(())
    }
}
