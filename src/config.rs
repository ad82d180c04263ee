// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Widget configuration.
//!
//! Every field has a default, so an empty TOML document (or no file at all)
//! yields the stock widget: 150 ms debounce, 10 results, AND queries with the
//! title boosted 2x over the body, 30-word teasers.
//!
//! ```toml
//! index_url = "/search_index.en.json"
//! debounce_ms = 150
//! max_items = 10
//!
//! [query]
//! bool = "AND"
//! fields = { title = { boost = 2.0 }, body = { boost = 1.0 } }
//!
//! [teaser]
//! max_words = 30
//! escape_html = true
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Where the serialized index lives unless configured otherwise.
pub const DEFAULT_INDEX_URL: &str = "/search_index.en.json";
/// Quiet period after the last keystroke before a query runs.
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;
/// Cap on rendered result items.
pub const DEFAULT_MAX_ITEMS: usize = 10;

/// Top-level configuration of one mounted widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Location of the serialized index. Passed to the index source as-is.
    pub index_url: String,
    /// Debounce delay in milliseconds.
    pub debounce_ms: u64,
    /// Maximum number of rendered result items.
    pub max_items: usize,
    pub query: QueryOptions,
    pub teaser: TeaserConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_items: DEFAULT_MAX_ITEMS,
            query: QueryOptions::default(),
            teaser: TeaserConfig::default(),
        }
    }
}

impl WidgetConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Parse a TOML document. Missing keys fall back to defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.teaser.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&raw)
    }
}

/// How query terms are combined by the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BoolMode {
    /// Every term must match.
    #[default]
    And,
    /// Any term may match.
    Or,
}

/// Per-field score multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBoost {
    pub boost: f64,
}

/// Boosts for the two indexed fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldBoosts {
    pub title: FieldBoost,
    pub body: FieldBoost,
}

impl Default for FieldBoosts {
    fn default() -> Self {
        Self {
            title: FieldBoost { boost: 2.0 },
            body: FieldBoost { boost: 1.0 },
        }
    }
}

/// Options handed to [`SearchIndex::search`](crate::SearchIndex::search).
///
/// Serializes to the same shape as the JavaScript options object:
/// `{ "bool": "AND", "fields": { "title": { "boost": 2 }, "body": { "boost": 1 } } }`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    #[serde(rename = "bool")]
    pub combine: BoolMode,
    pub fields: FieldBoosts,
}

/// Tuning for the teaser builder.
///
/// # INVARIANTS
///
/// All weights must be non-zero: window selection only accepts sums strictly
/// greater than zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeaserConfig {
    /// Window length in words.
    pub max_words: usize,
    pub term_weight: u32,
    pub first_word_weight: u32,
    pub normal_word_weight: u32,
    /// HTML-escape copied body text. Offsets are computed on the raw body either way.
    pub escape_html: bool,
}

impl TeaserConfig {
    /// Reject zero weights.
    pub fn validate(&self) -> Result<()> {
        for (key, weight) in [
            ("term_weight", self.term_weight),
            ("first_word_weight", self.first_word_weight),
            ("normal_word_weight", self.normal_word_weight),
        ] {
            if weight == 0 {
                return Err(Error::InvalidConfig(format!("teaser.{} must be non-zero", key)));
            }
        }
        Ok(())
    }
}

impl Default for TeaserConfig {
    fn default() -> Self {
        Self {
            max_words: 30,
            term_weight: 40,
            first_word_weight: 8,
            normal_word_weight: 2,
            escape_html: true,
        }
    }
}
