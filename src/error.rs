// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by the index loader and the configuration layer.
//!
//! The teaser builder never fails and the widget never propagates errors to
//! its host: a broken index degrades to "no visible results". Errors only
//! surface from the places a caller can actually act on them.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading an index or a configuration file.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the serialized index or config from disk failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The index payload is not a valid document index.
    #[error("malformed index payload: {0}")]
    IndexFormat(#[from] serde_json::Error),

    /// The configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The configuration parsed but holds an unusable value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
