// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lectern: topic content renderer and viewer for the course platform (TUI + MCP + CLI).
//!
//! Content trees are decoded from the platform's JSON, rendered to an element tree, and laid out
//! as Unicode text or HTML.

pub mod client;
pub mod config;
pub mod format;
pub mod logging;
pub mod mcp;
pub mod model;
pub mod query;
pub mod render;
pub mod tree;
pub mod tui;
