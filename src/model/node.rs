// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use super::ids::NodeId;

/// The recognized node discriminants of a content tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeTag {
    Stack,
    Text,
    IconText,
    TitledContainer,
    CenteredContainer,
}

impl NodeTag {
    pub const ALL: [Self; 5] = [
        Self::Stack,
        Self::Text,
        Self::IconText,
        Self::TitledContainer,
        Self::CenteredContainer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Text => "text",
            Self::IconText => "icon-text",
            Self::TitledContainer => "titled-container",
            Self::CenteredContainer => "centered-container",
        }
    }
}

impl fmt::Display for NodeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized node tag `{0}`")]
pub struct ParseNodeTagError(pub String);

impl FromStr for NodeTag {
    type Err = ParseNodeTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ParseNodeTagError(s.to_owned()))
    }
}

/// Axis along which a stack lays out its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StackAxis {
    #[default]
    Vertical,
    Horizontal,
}

impl StackAxis {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }

    /// Lenient parse: anything unrecognized falls back to vertical.
    pub fn from_direction(direction: &str) -> Self {
        match direction {
            "horizontal" | "row" => Self::Horizontal,
            _ => Self::Vertical,
        }
    }
}

/// A directed cross-node reference (drawn as an arrow by graphical front ends).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLink {
    target: NodeId,
    label: Option<String>,
}

impl NodeLink {
    pub fn new(target: NodeId) -> Self {
        Self {
            target,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Text {
        value: String,
    },
    IconText {
        icon: String,
        value: String,
    },
    Stack {
        axis: StackAxis,
        children: Vec<ContentNode>,
    },
    TitledContainer {
        title: String,
        children: Vec<ContentNode>,
    },
    CenteredContainer {
        children: Vec<ContentNode>,
    },
    /// A node whose discriminant this build does not know.
    ///
    /// The raw tag and the remaining attributes are kept so the node survives an
    /// export round trip untouched.
    Unknown {
        tag: String,
        attributes: Map<String, Value>,
    },
}

/// One element of a content tree. Trees are immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentNode {
    id: NodeId,
    kind: NodeKind,
    links: Vec<NodeLink>,
}

impl ContentNode {
    pub fn new(id: NodeId, kind: NodeKind) -> Self {
        Self {
            id,
            kind,
            links: Vec::new(),
        }
    }

    pub fn text(id: NodeId, value: impl Into<String>) -> Self {
        Self::new(
            id,
            NodeKind::Text {
                value: value.into(),
            },
        )
    }

    pub fn icon_text(id: NodeId, icon: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(
            id,
            NodeKind::IconText {
                icon: icon.into(),
                value: value.into(),
            },
        )
    }

    pub fn stack(id: NodeId, axis: StackAxis, children: Vec<ContentNode>) -> Self {
        Self::new(id, NodeKind::Stack { axis, children })
    }

    pub fn titled(id: NodeId, title: impl Into<String>, children: Vec<ContentNode>) -> Self {
        Self::new(
            id,
            NodeKind::TitledContainer {
                title: title.into(),
                children,
            },
        )
    }

    pub fn centered(id: NodeId, children: Vec<ContentNode>) -> Self {
        Self::new(id, NodeKind::CenteredContainer { children })
    }

    pub fn unknown(id: NodeId, tag: impl Into<String>) -> Self {
        Self::new(
            id,
            NodeKind::Unknown {
                tag: tag.into(),
                attributes: Map::new(),
            },
        )
    }

    pub fn with_links(mut self, links: Vec<NodeLink>) -> Self {
        self.links = links;
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn links(&self) -> &[NodeLink] {
        &self.links
    }

    /// The recognized tag, or `None` for unknown kinds.
    pub fn tag(&self) -> Option<NodeTag> {
        match &self.kind {
            NodeKind::Text { .. } => Some(NodeTag::Text),
            NodeKind::IconText { .. } => Some(NodeTag::IconText),
            NodeKind::Stack { .. } => Some(NodeTag::Stack),
            NodeKind::TitledContainer { .. } => Some(NodeTag::TitledContainer),
            NodeKind::CenteredContainer { .. } => Some(NodeTag::CenteredContainer),
            NodeKind::Unknown { .. } => None,
        }
    }

    /// The discriminant as it appears on the wire (raw tag for unknown kinds).
    pub fn tag_str(&self) -> &str {
        match &self.kind {
            NodeKind::Unknown { tag, .. } => tag,
            _ => self.tag().map(NodeTag::as_str).unwrap_or_default(),
        }
    }

    pub fn children(&self) -> &[ContentNode] {
        match &self.kind {
            NodeKind::Stack { children, .. }
            | NodeKind::TitledContainer { children, .. }
            | NodeKind::CenteredContainer { children } => children,
            NodeKind::Text { .. } | NodeKind::IconText { .. } | NodeKind::Unknown { .. } => &[],
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Stack { .. }
                | NodeKind::TitledContainer { .. }
                | NodeKind::CenteredContainer { .. }
        )
    }

    fn take_children(&mut self) -> Vec<ContentNode> {
        match &mut self.kind {
            NodeKind::Stack { children, .. }
            | NodeKind::TitledContainer { children, .. }
            | NodeKind::CenteredContainer { children } => std::mem::take(children),
            NodeKind::Text { .. } | NodeKind::IconText { .. } | NodeKind::Unknown { .. } => {
                Vec::new()
            }
        }
    }
}

// Descendants are detached onto a heap stack, so dropping never recurses per level.
impl Drop for ContentNode {
    fn drop(&mut self) {
        let mut pending = self.take_children();
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.take_children());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ContentNode, NodeLink, NodeTag, StackAxis};
    use crate::model::NodeId;

    fn nid(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    #[test]
    fn node_tag_round_trips_through_str() {
        for tag in NodeTag::ALL {
            assert_eq!(tag.as_str().parse::<NodeTag>(), Ok(tag));
        }
        assert!("mystery".parse::<NodeTag>().is_err());
    }

    #[test]
    fn stack_axis_parses_css_style_aliases() {
        assert_eq!(StackAxis::from_direction("row"), StackAxis::Horizontal);
        assert_eq!(StackAxis::from_direction("horizontal"), StackAxis::Horizontal);
        assert_eq!(StackAxis::from_direction("column"), StackAxis::Vertical);
        assert_eq!(StackAxis::from_direction("diagonal"), StackAxis::Vertical);
    }

    #[test]
    fn leaf_and_unknown_nodes_have_no_children() {
        assert!(ContentNode::text(nid("t"), "x").children().is_empty());
        assert!(ContentNode::unknown(nid("u"), "mystery").children().is_empty());
        assert_eq!(ContentNode::unknown(nid("u"), "mystery").tag_str(), "mystery");
        assert_eq!(ContentNode::unknown(nid("u"), "mystery").tag(), None);
    }

    #[test]
    fn containers_expose_children_in_order() {
        let node = ContentNode::titled(
            nid("box"),
            "Intro",
            vec![ContentNode::text(nid("a"), "A"), ContentNode::text(nid("b"), "B")],
        );
        let ids = node.children().iter().map(|c| c.id().as_str()).collect::<Vec<_>>();
        assert_eq!(ids, ["a", "b"]);
        assert!(node.is_container());
        assert_eq!(node.tag_str(), "titled-container");
    }

    #[test]
    fn links_are_attached_verbatim() {
        let node = ContentNode::stack(nid("s"), StackAxis::Vertical, Vec::new())
            .with_links(vec![NodeLink::new(nid("t")).with_label("see also")]);
        assert_eq!(node.links().len(), 1);
        assert_eq!(node.links()[0].target().as_str(), "t");
        assert_eq!(node.links()[0].label(), Some("see also"));
    }
}
