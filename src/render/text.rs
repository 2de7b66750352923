// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Unicode text layout for element trees.
//!
//! Layout is bottom-up: every element becomes a rectangular [`Block`] of lines, and containers
//! compose their children's blocks. Each block remembers where every descendant landed so the
//! final output comes with a per-node [`Region`] index.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::StackAxis;
use crate::tree::{fold_post_order, walk_pre_order};

use super::element::{Element, ElementContent, PLACEHOLDER_LABEL};
use super::{
    AnnotatedRender, Region, RegionIndex, UNICODE_BOX_BOTTOM_LEFT, UNICODE_BOX_BOTTOM_RIGHT,
    UNICODE_BOX_HORIZONTAL, UNICODE_BOX_TOP_LEFT, UNICODE_BOX_TOP_RIGHT, UNICODE_BOX_VERTICAL,
};

/// Columns between the children of a horizontal stack.
pub const HORIZONTAL_GAP: usize = 2;

/// Upper bound on the width a centered root is centered within. Wider content is never cut.
pub const MAX_TEXT_WIDTH: usize = 1024;

const TAB_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOptions {
    /// Width a centered root is centered within, capped at [`MAX_TEXT_WIDTH`].
    pub width: usize,
    /// Prefix visible labels with `[<id>] `.
    pub prefix_ids: bool,
    /// Append a footer listing cross-node links.
    pub show_links: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            width: 80,
            prefix_ids: false,
            show_links: false,
        }
    }
}

pub fn render_text(element: &Element, options: TextOptions) -> String {
    render_text_annotated(element, options).text
}

pub fn render_text_annotated(element: &Element, options: TextOptions) -> AnnotatedRender {
    let block = fold_post_order(element, |element: &Element, children: Vec<Block>| {
        layout_element(element, children, options)
    });
    let mut root = stack_vertical(vec![block], options.width.min(MAX_TEXT_WIDTH));

    if options.show_links {
        append_links_footer(&mut root.lines, element);
    }

    let mut regions = RegionIndex::new();
    for (id, region) in root.regions {
        regions.entry(id).or_insert(region);
    }

    AnnotatedRender {
        text: finish_lines(root.lines),
        regions,
    }
}

#[derive(Debug, Clone, Default)]
struct Block {
    lines: Vec<String>,
    width: usize,
    regions: Vec<(crate::model::NodeId, Region)>,
    centered: bool,
}

impl Block {
    fn from_text(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| expand_tabs(line.strip_suffix('\r').unwrap_or(line)))
            .collect::<Vec<_>>();
        let width = lines.iter().map(|line| text_len(line)).max().unwrap_or(0);
        Self {
            lines,
            width,
            ..Self::default()
        }
    }

    fn height(&self) -> usize {
        self.lines.len()
    }

    fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    fn shift_right(&mut self, dx: usize) {
        if dx == 0 {
            return;
        }
        let pad = " ".repeat(dx);
        for line in &mut self.lines {
            line.insert_str(0, &pad);
        }
        for (_, region) in &mut self.regions {
            region.x += dx;
        }
        self.width += dx;
    }
}

fn layout_element(element: &Element, children: Vec<Block>, options: TextOptions) -> Block {
    let label = |text: &str| {
        if options.prefix_ids {
            format!("[{}] {text}", element.id())
        } else {
            text.to_owned()
        }
    };

    let mut block = match element.content() {
        ElementContent::Text { value } => Block::from_text(&label(value)),
        ElementContent::IconText { glyph, value, .. } => {
            Block::from_text(&label(&format!("{glyph} {value}")))
        }
        ElementContent::Placeholder { unknown_kind } => {
            Block::from_text(&label(&format!("[{PLACEHOLDER_LABEL}: {unknown_kind}]")))
        }
        ElementContent::Stack {
            axis: StackAxis::Vertical,
        } => stack_vertical(children, 0),
        ElementContent::Stack {
            axis: StackAxis::Horizontal,
        } => stack_horizontal(children, HORIZONTAL_GAP),
        ElementContent::TitledContainer { title } => boxed(&label(title), children),
        ElementContent::CenteredContainer => {
            stack_vertical(children.into_iter().map(Block::centered).collect(), 0).centered()
        }
    };

    let region = Region {
        x: 0,
        y: 0,
        width: block.width,
        height: block.height(),
    };
    block.regions.push((element.id().clone(), region));
    block
}

/// Stacks blocks top to bottom; centered blocks are centered within the resulting width.
fn stack_vertical(children: Vec<Block>, min_width: usize) -> Block {
    let width = children
        .iter()
        .map(|child| child.width)
        .max()
        .unwrap_or(0)
        .max(min_width);

    let mut out = Block {
        width,
        ..Block::default()
    };
    for mut child in children {
        if child.centered {
            child.shift_right((width - child.width) / 2);
        }
        let dy = out.lines.len();
        out.regions
            .extend(child.regions.into_iter().map(|(id, region)| {
                (
                    id,
                    Region {
                        y: region.y + dy,
                        ..region
                    },
                )
            }));
        out.lines.extend(child.lines);
    }
    out
}

/// Places blocks side by side, top-aligned, `gap` columns apart.
fn stack_horizontal(children: Vec<Block>, gap: usize) -> Block {
    let height = children.iter().map(Block::height).max().unwrap_or(0);
    let mut lines = vec![String::new(); height];
    let mut regions = Vec::new();
    let mut x = 0usize;

    for (idx, child) in children.into_iter().enumerate() {
        if idx > 0 {
            x += gap;
        }
        for (y, line) in lines.iter_mut().enumerate() {
            if let Some(child_line) = child.lines.get(y) {
                pad_to(line, x);
                line.push_str(child_line);
            }
        }
        regions.extend(child.regions.into_iter().map(|(id, region)| {
            (
                id,
                Region {
                    x: region.x + x,
                    ..region
                },
            )
        }));
        x += child.width;
    }

    Block {
        lines,
        width: x,
        regions,
        centered: false,
    }
}

/// Draws a single-line box around the vertically stacked children, title in the top border.
fn boxed(title: &str, children: Vec<Block>) -> Block {
    let title_len = text_len(title);
    let min_inner = if title.is_empty() { 0 } else { title_len + 2 };
    let inner = stack_vertical(children, min_inner);
    let inner_width = inner.width.max(min_inner);
    let span = inner_width + 2;

    let horizontal = |count: usize| UNICODE_BOX_HORIZONTAL.to_string().repeat(count);
    let mut lines = Vec::with_capacity(inner.height() + 2);
    if title.is_empty() {
        lines.push(format!(
            "{UNICODE_BOX_TOP_LEFT}{}{UNICODE_BOX_TOP_RIGHT}",
            horizontal(span)
        ));
    } else {
        lines.push(format!(
            "{UNICODE_BOX_TOP_LEFT}{UNICODE_BOX_HORIZONTAL} {title} {}{UNICODE_BOX_TOP_RIGHT}",
            horizontal(span - (title_len + 3))
        ));
    }
    for line in &inner.lines {
        let mut padded = line.clone();
        pad_to(&mut padded, inner_width);
        lines.push(format!("{UNICODE_BOX_VERTICAL} {padded} {UNICODE_BOX_VERTICAL}"));
    }
    lines.push(format!(
        "{UNICODE_BOX_BOTTOM_LEFT}{}{UNICODE_BOX_BOTTOM_RIGHT}",
        horizontal(span)
    ));

    let regions = inner
        .regions
        .into_iter()
        .map(|(id, region)| {
            (
                id,
                Region {
                    x: region.x + 2,
                    y: region.y + 1,
                    ..region
                },
            )
        })
        .collect();

    Block {
        lines,
        width: inner_width + 4,
        regions,
        centered: false,
    }
}

fn append_links_footer(lines: &mut Vec<String>, root: &Element) {
    let mut footer = Vec::new();
    walk_pre_order(root, |element: &Element, _| {
        for link in element.links() {
            let mut line = format!("  {} → {}", element.id(), link.target());
            if let Some(label) = link.label() {
                line.push_str(&format!(" ({label})"));
            }
            footer.push(line);
        }
    });

    if footer.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push("Links:".to_owned());
    lines.extend(footer);
}

/// Display width in terminal columns (wide CJK and emoji count as two).
pub(crate) fn text_len(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

pub(crate) fn char_len(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    let len = text_len(text);
    if len <= max_len {
        return text.to_owned();
    }

    if max_len == 1 {
        return "…".to_owned();
    }

    let budget = max_len - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        used += char_len(ch);
        if used > budget {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}

fn pad_to(line: &mut String, width: usize) {
    let len = text_len(line);
    if len < width {
        line.extend(std::iter::repeat(' ').take(width - len));
    }
}

fn expand_tabs(line: &str) -> String {
    if line.contains('\t') {
        line.replace('\t', &" ".repeat(TAB_WIDTH))
    } else {
        line.to_owned()
    }
}

fn finish_lines(lines: Vec<String>) -> String {
    let mut lines = lines
        .into_iter()
        .map(|line| line.trim_end_matches(' ').to_owned())
        .collect::<Vec<_>>();

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::{
        render_text, render_text_annotated, text_len, truncate_with_ellipsis, TextOptions,
        MAX_TEXT_WIDTH,
    };
    use crate::model::fixtures::{lesson_tree, nid};
    use crate::model::{ContentNode, StackAxis};
    use crate::render::{render_content, Region};

    #[test]
    fn truncate_with_ellipsis_handles_small_widths() {
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
        assert_eq!(truncate_with_ellipsis("hello", 1), "…");
        assert_eq!(truncate_with_ellipsis("h", 1), "h");
        assert_eq!(truncate_with_ellipsis("hello", 2), "h…");
    }

    #[test]
    fn text_len_counts_columns_not_bytes() {
        assert_eq!(text_len("αβγ"), 3);
        assert_eq!(text_len("学习"), 4);
        assert_eq!(truncate_with_ellipsis("αβγ", 2), "α…");
        assert_eq!(truncate_with_ellipsis("学习学习", 4), "学…");
    }

    #[test]
    fn wide_characters_keep_box_borders_aligned() {
        let tree = ContentNode::titled(
            nid("box"),
            "T",
            vec![
                ContentNode::text(nid("wide"), "学习"),
                ContentNode::text(nid("narrow"), "abcd"),
            ],
        );
        let annotated = render_text_annotated(&render_content(&tree), TextOptions::default());
        assert_eq!(
            annotated.text,
            "┌─ T ──┐\n│ 学习 │\n│ abcd │\n└──────┘"
        );
        let widths = annotated.text.lines().map(text_len).collect::<Vec<_>>();
        assert_eq!(widths, [8, 8, 8, 8]);
        assert_eq!(
            annotated.regions.get("wide").copied(),
            Some(Region { x: 2, y: 1, width: 4, height: 1 })
        );
    }

    #[test]
    fn horizontal_stack_places_columns_by_display_width() {
        let tree = ContentNode::stack(
            nid("row"),
            StackAxis::Horizontal,
            vec![
                ContentNode::text(nid("a"), "日本\nx"),
                ContentNode::text(nid("b"), "y\nz"),
            ],
        );
        let annotated = render_text_annotated(&render_content(&tree), TextOptions::default());
        assert_eq!(annotated.text, "日本  y\nx     z");
        assert_eq!(annotated.regions.get("b").map(|region| region.x), Some(6));
    }

    #[test]
    fn huge_centering_width_is_capped() {
        let tree = ContentNode::centered(nid("c"), vec![ContentNode::text(nid("t"), "abcd")]);
        let element = render_content(&tree);
        let options = TextOptions {
            width: usize::MAX,
            ..TextOptions::default()
        };
        let rendered = render_text(&element, options);
        assert_eq!(rendered.trim_start(), "abcd");
        assert_eq!(rendered.len(), (MAX_TEXT_WIDTH - 4) / 2 + 4);
    }

    #[test]
    fn snapshot_lesson_tree() {
        let element = render_content(&lesson_tree());
        let rendered = render_text(&element, TextOptions::default());
        assert_eq!(
            rendered,
            "┌─ Dynamic connectivity ───────┐\n│ Is there a path from p to q? │\n│ ℹ Union-find answers it      │\n└──────────────────────────────┘\n   Quick-find vs quick-union\nfind: O(1)  union: O(N)\n[Unknown Node Type: video]"
        );
    }

    #[test]
    fn regions_locate_every_node() {
        let element = render_content(&lesson_tree());
        let annotated = render_text_annotated(&element, TextOptions::default());
        let region = |id: &str| annotated.regions.get(id).copied().expect("region");

        assert_eq!(annotated.regions.len(), 10);
        assert_eq!(region("root"), Region { x: 0, y: 0, width: 32, height: 7 });
        assert_eq!(region("intro"), Region { x: 0, y: 0, width: 32, height: 4 });
        assert_eq!(region("intro-text"), Region { x: 2, y: 1, width: 28, height: 1 });
        assert_eq!(region("callout-text"), Region { x: 3, y: 4, width: 25, height: 1 });
        assert_eq!(region("right"), Region { x: 12, y: 5, width: 11, height: 1 });
        assert_eq!(region("future"), Region { x: 0, y: 6, width: 26, height: 1 });
    }

    #[test]
    fn centered_root_is_centered_within_requested_width() {
        let tree = ContentNode::centered(nid("c"), vec![ContentNode::text(nid("t"), "abcd")]);
        let element = render_content(&tree);
        let options = TextOptions {
            width: 10,
            ..TextOptions::default()
        };
        assert_eq!(render_text(&element, options), "   abcd");
    }

    #[test]
    fn horizontal_stack_aligns_multiline_columns() {
        let tree = ContentNode::stack(
            nid("row"),
            StackAxis::Horizontal,
            vec![
                ContentNode::text(nid("a"), "one\ntwo\nthree"),
                ContentNode::text(nid("b"), "x"),
            ],
        );
        let rendered = render_text(&render_content(&tree), TextOptions::default());
        assert_eq!(rendered, "one    x\ntwo\nthree");
    }

    #[test]
    fn empty_titled_container_draws_closed_box() {
        let tree = ContentNode::titled(nid("box"), "Empty", Vec::new());
        let rendered = render_text(&render_content(&tree), TextOptions::default());
        assert_eq!(rendered, "┌─ Empty ─┐\n└─────────┘");
    }

    #[test]
    fn prefix_ids_and_links_footer() {
        let element = render_content(&lesson_tree());
        let options = TextOptions {
            prefix_ids: true,
            show_links: true,
            ..TextOptions::default()
        };
        let rendered = render_text(&element, options);
        assert!(rendered.contains("[intro-text] Is there a path from p to q?"));
        assert!(rendered.contains("[future] [Unknown Node Type: video]"));
        assert!(rendered.ends_with("Links:\n  intro → callout (motivates)"));
    }

    #[test]
    fn tabs_and_carriage_returns_are_normalized() {
        let tree = ContentNode::text(nid("t"), "a\tb\r\nc");
        let rendered = render_text(&render_content(&tree), TextOptions::default());
        assert_eq!(rendered, "a    b\nc");
    }
}
