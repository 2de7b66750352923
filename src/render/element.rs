// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::model::{ContentNode, NodeId, NodeKind, NodeLink, StackAxis};
use crate::tree::fold_post_order;

use super::icons::icon_glyph;

/// Visible text of the fallback placeholder.
pub const PLACEHOLDER_LABEL: &str = "Unknown Node Type";

/// The kind attribute every rendered element carries (styling/tooling hook).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    Stack,
    Text,
    IconText,
    TitledContainer,
    CenteredContainer,
    Placeholder,
}

impl ElementKind {
    pub fn attr(self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Text => "text",
            Self::IconText => "icon-text",
            Self::TitledContainer => "titled-container",
            Self::CenteredContainer => "centered-container",
            Self::Placeholder => "unknown",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attr())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementContent {
    Stack { axis: StackAxis },
    Text { value: String },
    IconText { icon: String, glyph: char, value: String },
    TitledContainer { title: String },
    CenteredContainer,
    Placeholder { unknown_kind: String },
}

/// One node of the visual element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: NodeId,
    content: ElementContent,
    links: Vec<NodeLink>,
    children: Vec<Element>,
}

impl Element {
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn content(&self) -> &ElementContent {
        &self.content
    }

    pub fn kind(&self) -> ElementKind {
        match self.content {
            ElementContent::Stack { .. } => ElementKind::Stack,
            ElementContent::Text { .. } => ElementKind::Text,
            ElementContent::IconText { .. } => ElementKind::IconText,
            ElementContent::TitledContainer { .. } => ElementKind::TitledContainer,
            ElementContent::CenteredContainer => ElementKind::CenteredContainer,
            ElementContent::Placeholder { .. } => ElementKind::Placeholder,
        }
    }

    pub fn links(&self) -> &[NodeLink] {
        &self.links
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind() == ElementKind::Placeholder
    }
}

impl Drop for Element {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut element) = pending.pop() {
            pending.append(&mut element.children);
        }
    }
}

/// A node whose discriminant is not one of the recognized kinds.
///
/// Never returned as an `Err`: the node renders as a placeholder and this value is only reported
/// alongside the output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown node kind `{tag}` at node `{id}`")]
pub struct UnknownNodeKind {
    pub id: NodeId,
    pub tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub element: Element,
    /// Placeholders emitted, in document order.
    pub unknown: Vec<UnknownNodeKind>,
}

impl RenderReport {
    /// Emits one `warn` event per placeholder.
    pub fn log_unknown(&self) {
        for unknown in &self.unknown {
            tracing::warn!(node = %unknown.id, tag = %unknown.tag, "rendering placeholder for unknown node kind");
        }
    }
}

/// Renders a content tree into an isomorphic element tree.
pub fn render_content(node: &ContentNode) -> Element {
    fold_post_order(node, render_node)
}

/// Like [`render_content`], additionally reporting every placeholder that was emitted.
pub fn render_content_reported(node: &ContentNode) -> RenderReport {
    let mut unknown = Vec::new();
    let element = fold_post_order(node, |node: &ContentNode, children: Vec<Element>| {
        if let NodeKind::Unknown { tag, .. } = node.kind() {
            unknown.push(UnknownNodeKind {
                id: node.id().clone(),
                tag: tag.clone(),
            });
        }
        render_node(node, children)
    });
    RenderReport { element, unknown }
}

fn render_node(node: &ContentNode, children: Vec<Element>) -> Element {
    let content = match node.kind() {
        NodeKind::Stack { axis, .. } => ElementContent::Stack { axis: *axis },
        NodeKind::Text { value } => ElementContent::Text {
            value: value.clone(),
        },
        NodeKind::IconText { icon, value } => ElementContent::IconText {
            icon: icon.clone(),
            glyph: icon_glyph(icon),
            value: value.clone(),
        },
        NodeKind::TitledContainer { title, .. } => ElementContent::TitledContainer {
            title: title.clone(),
        },
        NodeKind::CenteredContainer { .. } => ElementContent::CenteredContainer,
        NodeKind::Unknown { tag, .. } => ElementContent::Placeholder {
            unknown_kind: tag.clone(),
        },
    };

    Element {
        id: node.id().clone(),
        content,
        links: node.links().to_vec(),
        children,
    }
}
