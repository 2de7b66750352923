// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rmcp::model::ErrorCode;
use serde_json::json;

use super::*;

fn server() -> LecternMcp {
    let config = ApiConfig::from_lookup(|_| None)
        .expect("config")
        .with_base_url("http://127.0.0.1:9/api")
        .expect("base url");
    LecternMcp::new(config)
}

fn expect_err<T>(result: Result<T, ErrorData>) -> ErrorData {
    match result {
        Ok(_) => panic!("expected tool error"),
        Err(err) => err,
    }
}

fn lesson_json() -> serde_json::Value {
    json!({
        "id": "root",
        "nodeType": "stack",
        "children": [
            {"id": "intro", "nodeType": "titled-container", "title": "Union-Find", "children": [
                {"id": "t1", "nodeType": "text", "value": "Connect p and q"}
            ], "links": [{"target": "tip"}]},
            {"id": "tip", "nodeType": "icon-text", "icon": "check", "value": "Done"},
            {"id": "later", "nodeType": "quiz-widget"}
        ]
    })
}

#[tokio::test]
async fn render_text_returns_text_regions_and_unknowns() {
    let Json(result) = server()
        .content_render_text(Parameters(ContentRenderTextParams {
            content: lesson_json(),
            options: TextRenderOptions::default(),
        }))
        .await
        .expect("content.render_text");

    assert!(result.text.starts_with("┌─ Union-Find ────┐"));
    assert!(result.text.contains("✓ Done"));
    assert!(result.text.contains("[Unknown Node Type: quiz-widget]"));
    assert_eq!(
        result.unknown,
        [McpUnknownNode {
            node_id: "later".to_owned(),
            tag: "quiz-widget".to_owned()
        }]
    );
    let tip = result
        .regions
        .iter()
        .find(|region| region.node_id == "tip")
        .expect("tip region");
    assert_eq!((tip.x, tip.y, tip.width, tip.height), (0, 3, 6, 1));
}

#[tokio::test]
async fn render_text_accepts_topic_documents_and_options() {
    let Json(result) = server()
        .content_render_text(Parameters(ContentRenderTextParams {
            content: json!({"title": "Basics", "content": lesson_json()}),
            options: TextRenderOptions {
                width: None,
                prefix_ids: Some(true),
                show_links: Some(true),
            },
        }))
        .await
        .expect("content.render_text");

    assert_eq!(result.title.as_deref(), Some("Basics"));
    assert!(result.text.contains("[t1] Connect p and q"));
    assert!(result.text.ends_with("Links:\n  intro → tip"));
}

#[tokio::test]
async fn invalid_content_is_invalid_params_with_path() {
    let err = expect_err(
        server()
            .content_render_text(Parameters(ContentRenderTextParams {
                content: json!({"id": "root", "nodeType": "stack", "children": [{"id": "x", "nodeType": "text"}]}),
                options: TextRenderOptions::default(),
            }))
            .await,
    );
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert_eq!(err.data, Some(json!({"path": "$.children[0]"})));

    let err = expect_err(
        server()
            .content_outline(Parameters(ContentParams {
                content: json!({"title": "Empty", "content": null}),
            }))
            .await,
    );
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}

#[tokio::test]
async fn render_html_fragment_and_document() {
    let Json(fragment) = server()
        .content_render_html(Parameters(ContentRenderHtmlParams {
            content: lesson_json(),
            document: None,
        }))
        .await
        .expect("content.render_html");
    assert!(fragment.html.starts_with("<div id=\"root\" data-node-type=\"stack\""));
    assert!(fragment.html.contains("data-unknown-kind=\"quiz-widget\""));
    assert_eq!(fragment.unknown.len(), 1);

    let Json(page) = server()
        .content_render_html(Parameters(ContentRenderHtmlParams {
            content: lesson_json(),
            document: Some(true),
        }))
        .await
        .expect("content.render_html");
    assert!(page.html.starts_with("<!DOCTYPE html>"));
}

#[tokio::test]
async fn validate_reports_errors_and_stats() {
    let Json(result) = server()
        .content_validate(Parameters(ContentParams {
            content: json!({
                "id": "root",
                "nodeType": "stack",
                "children": [
                    {"id": "a", "nodeType": "text", "value": "A", "links": [{"targetId": "ghost"}]},
                    {"id": "a", "nodeType": "text", "value": "B"}
                ]
            }),
        }))
        .await
        .expect("content.validate");

    assert!(!result.ok);
    let labels = result.issues.iter().map(|i| i.issue.as_str()).collect::<Vec<_>>();
    assert_eq!(labels, ["duplicate_id", "dangling_link"]);
    assert!(result.issues.iter().all(|i| i.severity == "error"));
    assert_eq!(result.stats.nodes, 3);
    assert_eq!(result.stats.max_depth, 1);
}

#[tokio::test]
async fn outline_lists_nodes_in_document_order() {
    let Json(result) = server()
        .content_outline(Parameters(ContentParams {
            content: lesson_json(),
        }))
        .await
        .expect("content.outline");
    let ids = result
        .entries
        .iter()
        .map(|entry| (entry.node_id.as_str(), entry.depth))
        .collect::<Vec<_>>();
    assert_eq!(
        ids,
        [("root", 0), ("intro", 1), ("t1", 2), ("tip", 1), ("later", 1)]
    );
    assert_eq!(result.entries[4].tag, "quiz-widget");
}

#[tokio::test]
async fn topic_render_rejects_bad_ids_and_reports_fetch_failures() {
    let err = expect_err(
        server()
            .topic_render_text(Parameters(TopicRenderTextParams {
                topic_id: "  ".to_owned(),
                options: TextRenderOptions::default(),
            }))
            .await,
    );
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);

    let err = expect_err(
        server()
            .topic_render_text(Parameters(TopicRenderTextParams {
                topic_id: "12".to_owned(),
                options: TextRenderOptions::default(),
            }))
            .await,
    );
    assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    assert!(err.message.contains("modules/topics/12"));
}
