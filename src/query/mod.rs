// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over content trees.
//!
//! Queries provide derived views (outline, paths, statistics, validation) that power the CLI,
//! the TUI sidebar and the MCP tools.

pub mod tree;
pub mod validate;

pub use tree::{find_node, node_path, outline, tree_stats, OutlineEntry, TreeStats};
pub use validate::{validate_tree, Severity, ValidationIssue, ValidationReport};
