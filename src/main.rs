// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use snipsearch::{
    JsonFileSource, MemoryView, PorterStemmer, SearchWidget, TeaserBuilder, WidgetConfig,
};

mod cli;
use cli::{display, Cli, Commands};

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "snipsearch=debug",
        _ => "snipsearch=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<WidgetConfig> {
    match path {
        Some(path) => WidgetConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(WidgetConfig::default()),
    }
}

fn read_body(body: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(body) = body {
        return Ok(body);
    }
    if let Some(file) = file {
        return std::fs::read_to_string(&file)
            .with_context(|| format!("failed to read {}", file.display()));
    }
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read stdin")?;
    Ok(raw)
}

fn run_teaser(
    terms: Vec<String>,
    body: Option<String>,
    file: Option<PathBuf>,
    max_words: Option<usize>,
    html: bool,
) -> Result<()> {
    let body = read_body(body, file)?;
    let mut config = WidgetConfig::default().teaser;
    if let Some(max_words) = max_words {
        config.max_words = max_words;
    }
    let builder = TeaserBuilder::new(Arc::new(PorterStemmer::new()), config);
    let teaser = builder.build(body.trim_end_matches('\n'), &terms);
    if html {
        println!("{}", teaser);
    } else {
        println!("{}", display::teaser_text(&teaser));
    }
    Ok(())
}

async fn run_search(
    index: PathBuf,
    query: String,
    limit: Option<usize>,
    config: Option<PathBuf>,
    html: bool,
) -> Result<()> {
    let mut config = load_config(config.as_deref())?;
    config.debounce_ms = 0;
    if let Some(limit) = limit {
        config.max_items = limit;
    }

    let widget = SearchWidget::new(config, JsonFileSource::new(&index), MemoryView::new());
    widget.on_input(query);
    widget.flush().await;

    // the widget swallows load failures; surface them here
    if widget.index().is_loaded() {
        if let Err(err) = widget.index().get().await {
            anyhow::bail!("search index unavailable: {}", err);
        }
    }
    display::print_view(&widget.view().snapshot(), html);
    Ok(())
}

async fn run_replay(
    index: PathBuf,
    inputs: Vec<String>,
    gap_ms: u64,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config.as_deref())?;
    let widget = SearchWidget::new(config, JsonFileSource::new(&index), MemoryView::new());

    for input in inputs {
        widget.on_input(input);
        tokio::time::sleep(Duration::from_millis(gap_ms)).await;
    }
    widget.flush().await;

    println!("evaluations: {}", widget.evaluations());
    println!("last query:  {:?}", widget.last_query());
    println!("phase:       {:?}", widget.phase());
    display::print_view(&widget.view().snapshot(), false);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Teaser {
            terms,
            body,
            file,
            max_words,
            html,
        } => run_teaser(terms, body, file, max_words, html),
        Commands::Search {
            index,
            query,
            limit,
            config,
            html,
        } => run_search(index, query, limit, config, html).await,
        Commands::Replay {
            index,
            inputs,
            gap_ms,
            config,
        } => run_replay(index, inputs, gap_ms, config).await,
    }
}
