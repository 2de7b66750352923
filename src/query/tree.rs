// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{ContentNode, NodeId, NodeKind};
use crate::render::text::truncate_with_ellipsis;
use crate::tree::walk_pre_order;

const OUTLINE_LABEL_MAX: usize = 48;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    pub id: NodeId,
    /// Node discriminant as found in the document (unknown tags included).
    pub tag: String,
    pub depth: usize,
    pub label: String,
}

/// Flattens a tree into a document-order outline.
pub fn outline(root: &ContentNode) -> Vec<OutlineEntry> {
    let mut entries = Vec::new();
    walk_pre_order(root, |node: &ContentNode, depth| {
        entries.push(OutlineEntry {
            id: node.id().clone(),
            tag: node.tag_str().to_owned(),
            depth,
            label: outline_label(node),
        });
    });
    entries
}

fn outline_label(node: &ContentNode) -> String {
    let label = match node.kind() {
        NodeKind::Text { value } | NodeKind::IconText { value, .. } => {
            value.lines().next().unwrap_or_default().to_owned()
        }
        NodeKind::TitledContainer { title, .. } => title.clone(),
        NodeKind::Stack { axis, children } => {
            format!("{} stack ({})", axis.as_str(), children.len())
        }
        NodeKind::CenteredContainer { children } => format!("centered ({})", children.len()),
        NodeKind::Unknown { tag, .. } => format!("unknown: {tag}"),
    };
    truncate_with_ellipsis(&label, OUTLINE_LABEL_MAX)
}

/// Finds the first node (document order) with the given id.
pub fn find_node<'a>(root: &'a ContentNode, id: &str) -> Option<&'a ContentNode> {
    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        if node.id().as_str() == id {
            return Some(node);
        }
        pending.extend(node.children().iter().rev());
    }
    None
}

/// Ids from the root down to (and including) the first node with the given id.
pub fn node_path(root: &ContentNode, id: &str) -> Option<Vec<NodeId>> {
    let mut path: Vec<&ContentNode> = Vec::new();
    let mut pending = vec![(root, 0usize)];

    while let Some((node, depth)) = pending.pop() {
        path.truncate(depth);
        path.push(node);
        if node.id().as_str() == id {
            return Some(path.iter().map(|node| node.id().clone()).collect());
        }
        pending.extend(node.children().iter().rev().map(|child| (child, depth + 1)));
    }
    None
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TreeStats {
    pub nodes: usize,
    /// Depth of the deepest node; the root has depth 0.
    pub max_depth: usize,
    pub per_kind: BTreeMap<String, usize>,
    pub unknown: usize,
    pub links: usize,
}

pub fn tree_stats(root: &ContentNode) -> TreeStats {
    let mut stats = TreeStats::default();
    walk_pre_order(root, |node: &ContentNode, depth| {
        stats.nodes += 1;
        stats.max_depth = stats.max_depth.max(depth);
        *stats.per_kind.entry(node.tag_str().to_owned()).or_default() += 1;
        if node.tag().is_none() {
            stats.unknown += 1;
        }
        stats.links += node.links().len();
    });
    stats
}
