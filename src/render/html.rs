// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! HTML markup for element trees.
//!
//! Every element becomes a positioned `<div>` carrying its node id and kind attribute, so the
//! markup can be targeted by id for link overlays and styled by kind.

use v_htmlescape::escape;

use crate::model::{StackAxis, TopicDocument};
use crate::tree::fold_post_order;

use super::element::{Element, ElementContent, PLACEHOLDER_LABEL};

/// Renders an element tree as an HTML fragment.
pub fn render_html(element: &Element) -> String {
    fold_post_order(element, |element: &Element, children: Vec<String>| {
        render_element(element, &children.concat())
    })
}

/// Renders a standalone HTML page for a topic: its title as a heading followed by the content
/// fragment, or an empty-state notice when the topic has no content.
pub fn render_html_document(topic: &TopicDocument, element: Option<&Element>) -> String {
    let title = esc(&topic.display_title());
    let body = match element {
        Some(element) => render_html(element),
        None => "<p class=\"lectern-empty\">This topic has no content yet.</p>".to_owned(),
    };

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<main class=\"lectern-topic\">\n<h1>{title}</h1>\n{body}\n</main>\n</body>\n</html>\n"
    )
}

fn render_element(element: &Element, children: &str) -> String {
    let inner = match element.content() {
        ElementContent::Text { value } => {
            format!("<p class=\"lectern-text\">{}</p>", esc(value))
        }
        ElementContent::IconText { icon, glyph, value } => format!(
            "<span class=\"lectern-icon\" data-icon=\"{}\">{}</span><span class=\"lectern-text\">{}</span>",
            esc(icon),
            esc(&glyph.to_string()),
            esc(value)
        ),
        ElementContent::Stack { axis } => {
            let direction = match axis {
                StackAxis::Vertical => "lectern-stack-vertical",
                StackAxis::Horizontal => "lectern-stack-horizontal",
            };
            format!("<div class=\"lectern-stack {direction}\">{children}</div>")
        }
        ElementContent::TitledContainer { title } => format!(
            "<section class=\"lectern-titled\"><h2 class=\"lectern-title\">{}</h2>{children}</section>",
            esc(title)
        ),
        ElementContent::CenteredContainer => {
            format!("<div class=\"lectern-centered\">{children}</div>")
        }
        ElementContent::Placeholder { .. } => {
            format!("<p class=\"lectern-placeholder\">{PLACEHOLDER_LABEL}</p>")
        }
    };

    let mut attrs = format!(
        "id=\"{}\" data-node-type=\"{}\"",
        esc(element.id().as_str()),
        element.kind().attr()
    );
    if let ElementContent::Placeholder { unknown_kind } = element.content() {
        attrs.push_str(&format!(" data-unknown-kind=\"{}\"", esc(unknown_kind)));
    }
    if !element.links().is_empty() {
        let targets = element
            .links()
            .iter()
            .map(|link| link.target().as_str())
            .collect::<Vec<_>>()
            .join(" ");
        attrs.push_str(&format!(" data-links=\"{}\"", esc(&targets)));
    }

    format!("<div {attrs} class=\"relative\">{inner}</div>")
}

fn esc(text: &str) -> String {
    escape(text).to_string()
}
