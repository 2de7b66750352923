// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Process-wide `tracing` subscriber setup.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// No subscriber is installed (the TUI owns the terminal).
    Off,
}

#[derive(Debug, thiserror::Error)]
pub enum LogInitError {
    #[error("failed to open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled,
}

/// Default directive for a verbosity count: `lectern=warn`, `-v` info, `-vv` and up debug.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "lectern=warn",
        1 => "lectern=info",
        _ => "lectern=debug",
    }
}

/// Builds the filter: `RUST_LOG` when set, otherwise the verbosity default.
pub fn build_filter(rust_log: Option<&str>, verbosity: u8) -> Result<EnvFilter, LogInitError> {
    match rust_log.map(str::trim).filter(|value| !value.is_empty()) {
        Some(directives) => Ok(EnvFilter::try_new(directives)?),
        None => Ok(EnvFilter::try_new(default_directive(verbosity))?),
    }
}

/// Installs the global subscriber.
pub fn init(target: &LogTarget, verbosity: u8) -> Result<(), LogInitError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(rust_log.as_deref(), verbosity)?;

    match target {
        LogTarget::Off => Ok(()),
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()
            .map_err(|_| LogInitError::AlreadyInstalled),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LogInitError::OpenFile {
                    path: path.clone(),
                    source,
                })?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false),
                )
                .try_init()
                .map_err(|_| LogInitError::AlreadyInstalled)
        }
    }
}
