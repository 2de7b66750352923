// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::NodeId;
use super::node::{ContentNode, NodeLink, StackAxis};

pub(crate) fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

/// A small lesson: a titled intro, a centered callout, a horizontal row and one unknown node.
pub(crate) fn lesson_tree() -> ContentNode {
    ContentNode::stack(
        nid("root"),
        StackAxis::Vertical,
        vec![
            ContentNode::titled(
                nid("intro"),
                "Dynamic connectivity",
                vec![
                    ContentNode::text(nid("intro-text"), "Is there a path from p to q?"),
                    ContentNode::icon_text(nid("intro-tip"), "info", "Union-find answers it"),
                ],
            )
            .with_links(vec![NodeLink::new(nid("callout")).with_label("motivates")]),
            ContentNode::centered(
                nid("callout"),
                vec![ContentNode::text(nid("callout-text"), "Quick-find vs quick-union")],
            ),
            ContentNode::stack(
                nid("row"),
                StackAxis::Horizontal,
                vec![
                    ContentNode::text(nid("left"), "find: O(1)"),
                    ContentNode::text(nid("right"), "union: O(N)"),
                ],
            ),
            ContentNode::unknown(nid("future"), "video"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::lesson_tree;

    #[test]
    fn lesson_tree_has_expected_top_level_order() {
        let tree = lesson_tree();
        let ids = tree.children().iter().map(|c| c.id().as_str()).collect::<Vec<_>>();
        assert_eq!(ids, ["intro", "callout", "row", "future"]);
    }
}
