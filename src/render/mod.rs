// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering for content trees.
//!
//! A content tree first becomes an isomorphic element tree; element trees are then laid out as
//! Unicode text (with a per-node region index the TUI uses for highlighting) or as HTML markup.

use std::collections::BTreeMap;

use crate::model::NodeId;

pub mod element;
pub mod html;
pub mod icons;
pub mod text;

pub use element::{
    render_content, render_content_reported, Element, ElementContent, ElementKind, RenderReport,
    UnknownNodeKind, PLACEHOLDER_LABEL,
};
pub use html::{render_html, render_html_document};
pub use text::{render_text, render_text_annotated, TextOptions};

/// A rectangle of character cells, relative to the rendered text lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Region {
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Last line covered by the region, or `None` for an empty region.
    pub fn bottom(&self) -> Option<usize> {
        (self.height > 0).then(|| self.y + self.height - 1)
    }
}

/// Where every node landed in a text render. Duplicate ids keep their first occurrence.
pub type RegionIndex = BTreeMap<NodeId, Region>;

/// Text render output plus the region index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedRender {
    pub text: String,
    pub regions: RegionIndex,
}

pub const UNICODE_BOX_HORIZONTAL: char = '─';
pub const UNICODE_BOX_VERTICAL: char = '│';
pub const UNICODE_BOX_TOP_LEFT: char = '┌';
pub const UNICODE_BOX_TOP_RIGHT: char = '┐';
pub const UNICODE_BOX_BOTTOM_LEFT: char = '└';
pub const UNICODE_BOX_BOTTOM_RIGHT: char = '┘';

#[cfg(test)]
mod tests {
    use super::Region;

    #[test]
    fn region_contains_is_half_open() {
        let region = Region {
            x: 2,
            y: 1,
            width: 3,
            height: 2,
        };
        assert!(region.contains(2, 1));
        assert!(region.contains(4, 2));
        assert!(!region.contains(5, 1));
        assert!(!region.contains(2, 3));
        assert_eq!(region.bottom(), Some(2));
        assert_eq!(Region { height: 0, ..region }.bottom(), None);
    }
}
