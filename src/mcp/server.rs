// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::{Json, Parameters};
use rmcp::model::{ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData, ServerHandler, ServiceExt};
use tracing::debug;

use crate::client::{ApiClient, ClientError};
use crate::config::ApiConfig;
use crate::format::parse_topic_document_value;
use crate::model::{ContentNode, TopicDocument, TopicId};
use crate::query::{outline, tree_stats, validate_tree};
use crate::render::{
    render_content_reported, render_html, render_html_document, render_text_annotated,
    RenderReport, TextOptions,
};

use super::types::*;

#[derive(Clone)]
pub struct LecternMcp {
    config: ApiConfig,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl LecternMcp {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            tool_router: Self::tool_router(),
        }
    }

    pub async fn serve_stdio(self) -> Result<(), rmcp::RmcpError> {
        let service = self.serve((tokio::io::stdin(), tokio::io::stdout())).await?;
        service.waiting().await?;
        Ok(())
    }

    /// Render a content tree (or topic response) as Unicode text, with per-node regions and any
    /// unknown node kinds that rendered as placeholders.
    #[tool(name = "content.render_text")]
    async fn content_render_text(
        &self,
        params: Parameters<ContentRenderTextParams>,
    ) -> Result<Json<ContentRenderTextResponse>, ErrorData> {
        let ContentRenderTextParams { content, options } = params.0;
        let (doc, root) = decode_document(&content)?;
        let report = render_content_reported(&root);
        report.log_unknown();

        let annotated = render_text_annotated(&report.element, text_options(&options));
        let regions = annotated
            .regions
            .iter()
            .map(|(node_id, region)| McpRegion {
                node_id: node_id.as_str().to_owned(),
                x: region.x,
                y: region.y,
                width: region.width,
                height: region.height,
            })
            .collect();

        Ok(Json(ContentRenderTextResponse {
            title: doc.title,
            text: annotated.text,
            regions,
            unknown: unknown_nodes(&report),
        }))
    }

    /// Render a content tree as HTML; `document: true` wraps it in a full page.
    #[tool(name = "content.render_html")]
    async fn content_render_html(
        &self,
        params: Parameters<ContentRenderHtmlParams>,
    ) -> Result<Json<ContentRenderHtmlResponse>, ErrorData> {
        let (doc, root) = decode_document(&params.0.content)?;
        let report = render_content_reported(&root);
        report.log_unknown();

        let html = if params.0.document.unwrap_or(false) {
            render_html_document(&doc, Some(&report.element))
        } else {
            render_html(&report.element)
        };

        Ok(Json(ContentRenderHtmlResponse {
            html,
            unknown: unknown_nodes(&report),
        }))
    }

    /// Validate a content tree: duplicate ids and dangling links are errors; self links and
    /// unknown kinds are warnings.
    #[tool(name = "content.validate")]
    async fn content_validate(
        &self,
        params: Parameters<ContentParams>,
    ) -> Result<Json<ContentValidateResponse>, ErrorData> {
        let (_, root) = decode_document(&params.0.content)?;
        let report = validate_tree(&root);
        let stats = tree_stats(&root);

        let issues = report
            .issues
            .iter()
            .map(|issue| McpValidationIssue {
                severity: match issue.severity() {
                    crate::query::Severity::Error => "error".to_owned(),
                    crate::query::Severity::Warning => "warning".to_owned(),
                },
                issue: issue_label(issue).to_owned(),
                message: issue.to_string(),
            })
            .collect();

        Ok(Json(ContentValidateResponse {
            ok: report.is_ok(),
            issues,
            stats: McpTreeStats {
                nodes: stats.nodes,
                max_depth: stats.max_depth,
                unknown: stats.unknown,
                links: stats.links,
                per_kind: stats.per_kind,
            },
        }))
    }

    /// Document-order outline of a content tree (id, tag, depth, short label).
    #[tool(name = "content.outline")]
    async fn content_outline(
        &self,
        params: Parameters<ContentParams>,
    ) -> Result<Json<ContentOutlineResponse>, ErrorData> {
        let (_, root) = decode_document(&params.0.content)?;
        let entries = outline(&root)
            .into_iter()
            .map(|entry| McpOutlineEntry {
                node_id: entry.id.into_string(),
                tag: entry.tag,
                depth: entry.depth,
                label: entry.label,
            })
            .collect();
        Ok(Json(ContentOutlineResponse { entries }))
    }

    /// Fetch a topic from the platform API and render its content as Unicode text.
    #[tool(name = "topic.render_text")]
    async fn topic_render_text(
        &self,
        params: Parameters<TopicRenderTextParams>,
    ) -> Result<Json<TopicRenderTextResponse>, ErrorData> {
        let TopicRenderTextParams { topic_id, options } = params.0;
        let id = TopicId::new(topic_id.trim()).map_err(|err| {
            ErrorData::invalid_params(format!("invalid topic_id: {err}"), None)
        })?;

        let doc = self.fetch_topic(id.clone()).await?;
        let title = doc.display_title();
        let (has_content, text, unknown) = match doc.content.as_ref() {
            Some(root) => {
                let report = render_content_reported(root);
                report.log_unknown();
                let text = render_text_annotated(&report.element, text_options(&options)).text;
                (true, text, unknown_nodes(&report))
            }
            None => (false, String::new(), Vec::new()),
        };

        Ok(Json(TopicRenderTextResponse {
            topic_id: id.into_string(),
            title,
            has_content,
            text,
            unknown,
        }))
    }

    async fn fetch_topic(&self, id: TopicId) -> Result<TopicDocument, ErrorData> {
        let config = self.config.clone();
        debug!(topic = %id, "fetching topic for mcp");
        let result = tokio::task::spawn_blocking(move || {
            ApiClient::new(config).and_then(|client| client.fetch_topic(&id))
        })
        .await
        .map_err(|err| ErrorData::internal_error(format!("fetch task failed: {err}"), None))?;
        result.map_err(client_error)
    }
}

#[tool_handler]
impl ServerHandler for LecternMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Lectern topic content server (tools: content.render_text, content.render_html, content.validate, content.outline, topic.render_text)"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn decode_document(
    value: &serde_json::Value,
) -> Result<(TopicDocument, ContentNode), ErrorData> {
    let mut doc = parse_topic_document_value(value).map_err(|err| {
        let data = err.path().map(|path| serde_json::json!({ "path": path }));
        ErrorData::invalid_params(format!("invalid content: {err}"), data)
    })?;
    let root = doc
        .content
        .take()
        .ok_or_else(|| ErrorData::invalid_params("document has no content", None))?;
    Ok((doc, root))
}

fn text_options(options: &TextRenderOptions) -> TextOptions {
    let defaults = TextOptions::default();
    TextOptions {
        width: options.width.unwrap_or(defaults.width),
        prefix_ids: options.prefix_ids.unwrap_or(defaults.prefix_ids),
        show_links: options.show_links.unwrap_or(defaults.show_links),
    }
}

fn unknown_nodes(report: &RenderReport) -> Vec<McpUnknownNode> {
    report
        .unknown
        .iter()
        .map(|unknown| McpUnknownNode {
            node_id: unknown.id.as_str().to_owned(),
            tag: unknown.tag.clone(),
        })
        .collect()
}

fn issue_label(issue: &crate::query::ValidationIssue) -> &'static str {
    use crate::query::ValidationIssue;
    match issue {
        ValidationIssue::DuplicateId { .. } => "duplicate_id",
        ValidationIssue::DanglingLink { .. } => "dangling_link",
        ValidationIssue::SelfLink { .. } => "self_link",
        ValidationIssue::UnknownKind { .. } => "unknown_kind",
    }
}

fn client_error(err: ClientError) -> ErrorData {
    let data = err.status().map(|status| serde_json::json!({ "status": status }));
    ErrorData::internal_error(format!("topic fetch failed: {err}"), data)
}

#[cfg(test)]
mod tests;
