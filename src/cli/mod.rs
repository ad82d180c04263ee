// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the snipsearch command-line interface.
//!
//! Three subcommands: `teaser` to build a single teaser, `search` to run one
//! query against a JSON index, and `replay` to type a sequence of inputs into
//! a live widget and watch debouncing and duplicate suppression at work.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "snipsearch",
    about = "Search-as-you-type teasers for static documentation sites",
    version
)]
pub struct Cli {
    /// Log more (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a teaser for a document body
    Teaser {
        /// Query term (repeatable)
        #[arg(short, long = "term", required = true)]
        terms: Vec<String>,

        /// Body text (reads stdin when neither --body nor --file is given)
        #[arg(long, conflicts_with = "file")]
        body: Option<String>,

        /// Read the body from a file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Window size in words
        #[arg(long)]
        max_words: Option<usize>,

        /// Print the HTML fragment instead of terminal-formatted text
        #[arg(long)]
        html: bool,
    },

    /// Run one query against a JSON index and print the rendered results
    Search {
        /// Path to the JSON index payload
        index: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Widget configuration (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print item HTML instead of terminal-formatted text
        #[arg(long)]
        html: bool,
    },

    /// Feed successive input values through the widget and print the final view
    Replay {
        /// Path to the JSON index payload
        index: PathBuf,

        /// Input values, in typing order (e.g. "r" "ru" "rus" "rust")
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Milliseconds between inputs
        #[arg(long, default_value = "50")]
        gap_ms: u64,

        /// Widget configuration (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
