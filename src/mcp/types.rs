// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ContentParams {
    /// A content node (`{"id", "nodeType", ...}`) or a topic response (`{"title", "content"}`).
    pub content: serde_json::Value,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct TextRenderOptions {
    /// Width a centered root is centered within (default 80, capped at 1024).
    pub width: Option<usize>,
    /// Prefix visible labels with `[<id>]`.
    pub prefix_ids: Option<bool>,
    /// Append a footer listing cross-node links.
    pub show_links: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ContentRenderTextParams {
    pub content: serde_json::Value,
    #[serde(flatten)]
    pub options: TextRenderOptions,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ContentRenderHtmlParams {
    pub content: serde_json::Value,
    /// Wrap the fragment in a complete HTML page.
    pub document: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TopicRenderTextParams {
    pub topic_id: String,
    #[serde(flatten)]
    pub options: TextRenderOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct McpUnknownNode {
    pub node_id: String,
    pub tag: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpRegion {
    pub node_id: String,
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ContentRenderTextResponse {
    pub title: Option<String>,
    pub text: String,
    pub regions: Vec<McpRegion>,
    pub unknown: Vec<McpUnknownNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ContentRenderHtmlResponse {
    pub html: String,
    pub unknown: Vec<McpUnknownNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpValidationIssue {
    /// `error` or `warning`.
    pub severity: String,
    /// `duplicate_id`, `dangling_link`, `self_link` or `unknown_kind`.
    pub issue: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpTreeStats {
    pub nodes: usize,
    pub max_depth: usize,
    pub unknown: usize,
    pub links: usize,
    pub per_kind: std::collections::BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ContentValidateResponse {
    pub ok: bool,
    pub issues: Vec<McpValidationIssue>,
    pub stats: McpTreeStats,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpOutlineEntry {
    pub node_id: String,
    pub tag: String,
    pub depth: usize,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ContentOutlineResponse {
    pub entries: Vec<McpOutlineEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TopicRenderTextResponse {
    pub topic_id: String,
    pub title: String,
    /// `false` when the topic exists but has no content yet; `text` is then empty.
    pub has_content: bool,
    pub text: String,
    pub unknown: Vec<McpUnknownNode>,
}
