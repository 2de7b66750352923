// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use lectern::model::{ContentNode, NodeId, NodeLink, StackAxis};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// One lesson section: a titled box, a row and a few leaves.
    Small,
    /// Many sections of mixed kinds with long labels and links.
    MediumMixed,
    /// Wide horizontal rows of boxes.
    WideRows,
    /// A single chain nested close to the decoder's depth cap.
    DeepNesting,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::MediumMixed => "medium_mixed",
            Self::WideRows => "wide_rows",
            Self::DeepNesting => "deep_nesting",
        }
    }

    pub const ALL: [Case; 4] = [
        Case::Small,
        Case::MediumMixed,
        Case::WideRows,
        Case::DeepNesting,
    ];
}

fn nid(value: String) -> NodeId {
    NodeId::new(value).expect("bench node id")
}

fn ascii_repeat_to_len(prefix: &str, fill: char, target_len: usize) -> String {
    let mut out = prefix.to_owned();
    while out.len() < target_len {
        out.push(fill);
    }
    out.truncate(target_len);
    out
}

fn section(prefix: &str, idx: usize, label_len: usize) -> ContentNode {
    let p = format!("{prefix}{idx}");
    let leaves = vec![
        ContentNode::text(
            nid(format!("{p}-text")),
            ascii_repeat_to_len(&format!("{p} explains "), 'x', label_len),
        ),
        ContentNode::icon_text(nid(format!("{p}-tip")), "info", format!("tip for {p}")),
        ContentNode::stack(
            nid(format!("{p}-row")),
            StackAxis::Horizontal,
            vec![
                ContentNode::text(nid(format!("{p}-left")), "find: O(1)"),
                ContentNode::text(nid(format!("{p}-right")), "union: O(N)\namortized"),
            ],
        ),
    ];
    let mut node = ContentNode::titled(nid(p.clone()), format!("Section {idx}"), leaves);
    if idx > 0 {
        node = node.with_links(vec![
            NodeLink::new(nid(format!("{prefix}{}", idx - 1))).with_label("follows")
        ]);
    }
    node
}

pub fn fixture(case: Case) -> ContentNode {
    match case {
        Case::Small => ContentNode::stack(
            nid("root".to_owned()),
            StackAxis::Vertical,
            vec![section("s", 0, 24)],
        ),
        Case::MediumMixed => {
            let mut children = Vec::new();
            for idx in 0..40 {
                if idx % 5 == 4 {
                    children.push(ContentNode::centered(
                        nid(format!("c{idx}")),
                        vec![section("cs", idx, 32)],
                    ));
                } else if idx % 7 == 6 {
                    children.push(ContentNode::unknown(nid(format!("u{idx}")), "video-embed"));
                } else {
                    children.push(section("s", idx, 64));
                }
            }
            ContentNode::stack(nid("root".to_owned()), StackAxis::Vertical, children)
        }
        Case::WideRows => {
            let rows = (0..12)
                .map(|row| {
                    ContentNode::stack(
                        nid(format!("row{row}")),
                        StackAxis::Horizontal,
                        (0..8).map(|col| section(&format!("r{row}c"), col, 16)).collect(),
                    )
                })
                .collect();
            ContentNode::stack(nid("root".to_owned()), StackAxis::Vertical, rows)
        }
        Case::DeepNesting => {
            let mut node = ContentNode::text(nid("leaf".to_owned()), "bottom");
            for depth in (0..60).rev() {
                node = if depth % 2 == 0 {
                    ContentNode::titled(nid(format!("d{depth}")), format!("level {depth}"), vec![node])
                } else {
                    ContentNode::stack(nid(format!("d{depth}")), StackAxis::Vertical, vec![node])
                };
            }
            node
        }
    }
}
