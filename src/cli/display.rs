// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the snipsearch CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Highlighted teaser
//! words become bold and colored instead of `<b>` tags. Respects `NO_COLOR`
//! and falls back to plain text when stdout is not a TTY.
//!
//! # Theme detection order
//!
//! 1. `SNIPSEARCH_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use snipsearch::teaser::{HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
use snipsearch::{RenderedItem, ViewSnapshot};
use std::sync::OnceLock;

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SNIPSEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// (OneDark, One Light)
const YELLOW: ((u8, u8, u8), (u8, u8, u8)) = ((229, 192, 123), (193, 132, 1));
const CYAN: ((u8, u8, u8), (u8, u8, u8)) = ((86, 182, 194), (1, 132, 188));
const GRAY: ((u8, u8, u8), (u8, u8, u8)) = ((92, 99, 112), (160, 161, 167));

fn themed_color(pair: ((u8, u8, u8), (u8, u8, u8))) -> String {
    match theme() {
        Theme::Dark => rgb(pair.0),
        Theme::Light => rgb(pair.1),
    }
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn paint(pair: ((u8, u8, u8), (u8, u8, u8)), bold: bool, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let weight = if bold { BOLD } else { "" };
    format!("{}{}{}{}", weight, themed_color(pair), text, RESET)
}

/// Undo the five entities produced by `escape_html`.
fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Render a teaser fragment for the terminal.
pub fn teaser_text(teaser: &str) -> String {
    let mut out = String::with_capacity(teaser.len());
    let mut rest = teaser;
    while let Some(open) = rest.find(HIGHLIGHT_OPEN) {
        out.push_str(&unescape(&rest[..open]));
        let after = &rest[open + HIGHLIGHT_OPEN.len()..];
        let close = after.find(HIGHLIGHT_CLOSE).unwrap_or(after.len());
        out.push_str(&paint(YELLOW, true, &unescape(&after[..close])));
        rest = after.get(close + HIGHLIGHT_CLOSE.len()..).unwrap_or("");
    }
    out.push_str(&unescape(rest));
    out
}

fn print_item(rank: usize, item: &RenderedItem) {
    println!(
        "{} {}  {}",
        paint(GRAY, false, &format!("{:>2}.", rank)),
        paint(CYAN, true, &item.title),
        paint(GRAY, false, &item.reference)
    );
    println!("    {}", teaser_text(&item.teaser));
}

/// Print the results panel, or a note when it is hidden.
pub fn print_view(snapshot: &ViewSnapshot, html: bool) {
    if !snapshot.visible {
        println!("{}", paint(GRAY, false, "(no results)"));
        return;
    }
    println!("{}", paint(GRAY, true, &snapshot.count));
    for (i, item) in snapshot.items.iter().enumerate() {
        if html {
            println!("{}", item.html);
        } else {
            print_item(i + 1, item);
        }
    }
}
