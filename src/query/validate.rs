// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::model::{ContentNode, NodeId};
use crate::tree::walk_pre_order;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// The id is used by more than one node; `count` is the total number of uses.
    DuplicateId { id: NodeId, count: usize },
    DanglingLink { from: NodeId, target: NodeId },
    SelfLink { id: NodeId },
    UnknownKind { id: NodeId, tag: String },
}

impl ValidationIssue {
    pub fn severity(&self) -> Severity {
        match self {
            Self::DuplicateId { .. } | Self::DanglingLink { .. } => Severity::Error,
            Self::SelfLink { .. } | Self::UnknownKind { .. } => Severity::Warning,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { id, count } => write!(f, "duplicate id `{id}` ({count} nodes)"),
            Self::DanglingLink { from, target } => {
                write!(f, "link from `{from}` targets missing node `{target}`")
            }
            Self::SelfLink { id } => write!(f, "node `{id}` links to itself"),
            Self::UnknownKind { id, tag } => {
                write!(f, "node `{id}` has unknown kind `{tag}` and renders as a placeholder")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// `true` when no issue is an error. Warnings do not fail validation.
    pub fn is_ok(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity() == Severity::Warning)
    }
}

/// Checks id uniqueness and link targets, and flags nodes that will render as placeholders.
///
/// Issues come out grouped by kind: duplicates (by id), then link issues and unknown kinds in
/// document order.
pub fn validate_tree(root: &ContentNode) -> ValidationReport {
    let mut id_counts: BTreeMap<&NodeId, usize> = BTreeMap::new();
    walk_pre_order(root, |node, _| {
        *id_counts.entry(node.id()).or_default() += 1;
    });
    let known: BTreeSet<&NodeId> = id_counts.keys().copied().collect();

    let mut issues = id_counts
        .iter()
        .filter(|(_, count)| **count > 1)
        .map(|(id, count)| ValidationIssue::DuplicateId {
            id: (*id).clone(),
            count: *count,
        })
        .collect::<Vec<_>>();

    walk_pre_order(root, |node: &ContentNode, _| {
        for link in node.links() {
            if link.target() == node.id() {
                issues.push(ValidationIssue::SelfLink {
                    id: node.id().clone(),
                });
            } else if !known.contains(link.target()) {
                issues.push(ValidationIssue::DanglingLink {
                    from: node.id().clone(),
                    target: link.target().clone(),
                });
            }
        }
        if node.tag().is_none() {
            issues.push(ValidationIssue::UnknownKind {
                id: node.id().clone(),
                tag: node.tag_str().to_owned(),
            });
        }
    });

    ValidationReport { issues }
}
