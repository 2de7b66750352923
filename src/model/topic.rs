// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::TopicId;
use super::node::ContentNode;

/// A topic as served by the content endpoint.
///
/// `content` is `None` when the backend has nothing to show for the topic yet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TopicDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TopicId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<ContentNode>,
}

impl TopicDocument {
    pub fn from_content(content: ContentNode) -> Self {
        Self {
            id: None,
            title: None,
            content: Some(content),
        }
    }

    /// Title to display: explicit title, then topic id, then a generic label.
    pub fn display_title(&self) -> String {
        if let Some(title) = self.title.as_deref().filter(|t| !t.trim().is_empty()) {
            return title.to_owned();
        }
        match &self.id {
            Some(id) => format!("Topic {id}"),
            None => "Topic".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TopicDocument;
    use crate::model::TopicId;

    #[test]
    fn display_title_prefers_title_then_id() {
        let mut doc = TopicDocument::default();
        assert_eq!(doc.display_title(), "Topic");

        doc.id = Some(TopicId::new("12").expect("topic id"));
        assert_eq!(doc.display_title(), "Topic 12");

        doc.title = Some("  ".to_owned());
        assert_eq!(doc.display_title(), "Topic 12");

        doc.title = Some("Union-Find".to_owned());
        assert_eq!(doc.display_title(), "Union-Find");
    }

    #[test]
    fn topic_response_with_null_content_decodes() {
        let doc: TopicDocument =
            serde_json::from_str(r#"{"id": 3, "title": "Sorting", "content": null}"#)
                .expect("decode");
        assert_eq!(doc.id.as_ref().map(|id| id.as_str()), Some("3"));
        assert!(doc.content.is_none());
    }
}
