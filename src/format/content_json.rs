// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::model::{
    ContentNode, IdError, NodeId, NodeKind, NodeLink, NodeTag, StackAxis, TopicDocument, TopicId,
};
use crate::tree::fold_post_order;

/// Deepest node nesting accepted by the decoder (the root is level 1).
pub const MAX_CONTENT_DEPTH: usize = 64;

const TAG_KEYS: [&str; 2] = ["nodeType", "kind"];
const TEXT_KEYS: [&str; 2] = ["value", "text"];
const LINK_TARGET_KEYS: [&str; 2] = ["target", "targetId"];

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{path}: expected a JSON object")]
    NotAnObject { path: String },
    #[error("{path}: missing required field `{field}`")]
    MissingField { path: String, field: &'static str },
    #[error("{path}: field `{field}` must be {expected}")]
    InvalidField {
        path: String,
        field: &'static str,
        expected: &'static str,
    },
    #[error("{path}: invalid id: {source}")]
    InvalidId {
        path: String,
        #[source]
        source: IdError,
    },
    #[error("{path}: content nested deeper than {max} levels")]
    TooDeep { path: String, max: usize },
}

impl DecodeError {
    /// JSON path of the offending value, when the error is structural.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::NotAnObject { path }
            | Self::MissingField { path, .. }
            | Self::InvalidField { path, .. }
            | Self::InvalidId { path, .. }
            | Self::TooDeep { path, .. } => Some(path),
        }
    }
}

pub fn parse_content(json: &str) -> Result<ContentNode, DecodeError> {
    let value: Value = serde_json::from_str(json)?;
    parse_content_value(&value)
}

/// Decodes a content tree from an already parsed JSON value.
///
/// Unrecognized discriminants decode to [`NodeKind::Unknown`]; a missing discriminant, a missing
/// id, or a known kind lacking its required payload is an error.
pub fn parse_content_value(value: &Value) -> Result<ContentNode, DecodeError> {
    decode_node(value, "$".to_owned(), 1)
}

/// Decodes either a topic response (`{"id", "title", "content"}`) or a bare content node.
pub fn parse_topic_document(json: &str) -> Result<TopicDocument, DecodeError> {
    let value: Value = serde_json::from_str(json)?;
    parse_topic_document_value(&value)
}

pub fn parse_topic_document_value(value: &Value) -> Result<TopicDocument, DecodeError> {
    let object = value.as_object().ok_or_else(|| DecodeError::NotAnObject {
        path: "$".to_owned(),
    })?;

    let is_bare_node = TAG_KEYS.iter().any(|key| object.contains_key(*key));
    if is_bare_node || !object.contains_key("content") {
        return parse_content_value(value).map(TopicDocument::from_content);
    }

    let id = match object.get("id") {
        None | Some(Value::Null) => None,
        Some(raw) => Some(decode_id_value::<TopicId>(raw, "$", "id")?),
    };
    let title = optional_string(object, &["title"], "$", "title")?.map(str::to_owned);
    let content = match object.get("content") {
        None | Some(Value::Null) => None,
        Some(content) => Some(decode_node(content, "$.content".to_owned(), 1)?),
    };

    Ok(TopicDocument { id, title, content })
}

/// Serializes a content tree in canonical form (`nodeType` discriminant, `value` payload).
pub fn export_content(node: &ContentNode) -> Value {
    fold_post_order(node, |node: &ContentNode, children: Vec<Value>| {
        let mut object = match node.kind() {
            NodeKind::Unknown { attributes, .. } => attributes.clone(),
            _ => Map::new(),
        };
        object.insert("id".to_owned(), Value::from(node.id().as_str()));
        object.insert("nodeType".to_owned(), Value::from(node.tag_str()));

        match node.kind() {
            NodeKind::Text { value } => {
                object.insert("value".to_owned(), Value::from(value.as_str()));
            }
            NodeKind::IconText { icon, value } => {
                object.insert("icon".to_owned(), Value::from(icon.as_str()));
                object.insert("value".to_owned(), Value::from(value.as_str()));
            }
            NodeKind::Stack { axis, .. } => {
                object.insert("direction".to_owned(), Value::from(axis.as_str()));
                object.insert("children".to_owned(), Value::Array(children));
            }
            NodeKind::TitledContainer { title, .. } => {
                object.insert("title".to_owned(), Value::from(title.as_str()));
                object.insert("children".to_owned(), Value::Array(children));
            }
            NodeKind::CenteredContainer { .. } => {
                object.insert("children".to_owned(), Value::Array(children));
            }
            NodeKind::Unknown { .. } => {}
        }

        if !node.links().is_empty() {
            let links = node
                .links()
                .iter()
                .map(|link| {
                    let mut entry = Map::new();
                    entry.insert("target".to_owned(), Value::from(link.target().as_str()));
                    if let Some(label) = link.label() {
                        entry.insert("label".to_owned(), Value::from(label));
                    }
                    Value::Object(entry)
                })
                .collect();
            object.insert("links".to_owned(), Value::Array(links));
        }

        Value::Object(object)
    })
}

impl Serialize for ContentNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        export_content(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContentNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        parse_content_value(&value).map_err(serde::de::Error::custom)
    }
}

fn decode_node(value: &Value, path: String, depth: usize) -> Result<ContentNode, DecodeError> {
    if depth > MAX_CONTENT_DEPTH {
        return Err(DecodeError::TooDeep {
            path,
            max: MAX_CONTENT_DEPTH,
        });
    }

    let object = value
        .as_object()
        .ok_or_else(|| DecodeError::NotAnObject { path: path.clone() })?;

    let id = match object.get("id") {
        None | Some(Value::Null) => {
            return Err(DecodeError::MissingField {
                path,
                field: "id",
            })
        }
        Some(raw) => decode_id_value::<NodeId>(raw, &path, "id")?,
    };

    let Some(tag) = optional_string(object, &TAG_KEYS, &path, "nodeType")? else {
        return Err(DecodeError::MissingField {
            path,
            field: "nodeType",
        });
    };

    let kind = match tag.parse::<NodeTag>() {
        Ok(NodeTag::Text) => NodeKind::Text {
            value: required_string(object, &TEXT_KEYS, &path, "value")?,
        },
        Ok(NodeTag::IconText) => NodeKind::IconText {
            icon: required_string(object, &["icon"], &path, "icon")?,
            value: required_string(object, &TEXT_KEYS, &path, "value")?,
        },
        Ok(NodeTag::Stack) => NodeKind::Stack {
            axis: optional_string(object, &["direction"], &path, "direction")?
                .map(StackAxis::from_direction)
                .unwrap_or_default(),
            children: decode_children(object, &path, depth)?,
        },
        Ok(NodeTag::TitledContainer) => NodeKind::TitledContainer {
            title: required_string(object, &["title"], &path, "title")?,
            children: decode_children(object, &path, depth)?,
        },
        Ok(NodeTag::CenteredContainer) => NodeKind::CenteredContainer {
            children: decode_children(object, &path, depth)?,
        },
        Err(_) => NodeKind::Unknown {
            tag: tag.to_owned(),
            attributes: object
                .iter()
                .filter(|(key, _)| key.as_str() != "id" && !TAG_KEYS.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        },
    };

    // Unknown kinds keep `links` verbatim among their attributes, whatever its shape.
    let links = match &kind {
        NodeKind::Unknown { .. } => Vec::new(),
        _ => decode_links(object, &path)?,
    };

    Ok(ContentNode::new(id, kind).with_links(links))
}

fn decode_children(
    object: &Map<String, Value>,
    path: &str,
    depth: usize,
) -> Result<Vec<ContentNode>, DecodeError> {
    let items = match object.get("children") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(DecodeError::InvalidField {
                path: path.to_owned(),
                field: "children",
                expected: "an array",
            })
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| decode_node(item, format!("{path}.children[{idx}]"), depth + 1))
        .collect()
}

fn decode_links(object: &Map<String, Value>, path: &str) -> Result<Vec<NodeLink>, DecodeError> {
    let items = match object.get("links") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(DecodeError::InvalidField {
                path: path.to_owned(),
                field: "links",
                expected: "an array",
            })
        }
    };

    let mut links = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let link_path = format!("{path}.links[{idx}]");
        let Some(entry) = item.as_object() else {
            return Err(DecodeError::NotAnObject { path: link_path });
        };

        let raw_target = LINK_TARGET_KEYS
            .iter()
            .find_map(|key| entry.get(*key).filter(|value| !value.is_null()));
        let Some(raw_target) = raw_target else {
            return Err(DecodeError::MissingField {
                path: link_path,
                field: "target",
            });
        };
        let target = decode_id_value::<NodeId>(raw_target, &link_path, "target")?;

        let mut link = NodeLink::new(target);
        if let Some(label) = optional_string(entry, &["label"], &link_path, "label")? {
            link = link.with_label(label);
        }
        links.push(link);
    }

    Ok(links)
}

fn decode_id_value<I>(raw: &Value, path: &str, field: &'static str) -> Result<I, DecodeError>
where
    I: TryFrom<String, Error = IdError>,
{
    let text = match raw {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        _ => {
            return Err(DecodeError::InvalidField {
                path: path.to_owned(),
                field,
                expected: "a string or number",
            })
        }
    };

    I::try_from(text).map_err(|source| DecodeError::InvalidId {
        path: path.to_owned(),
        source,
    })
}

/// Returns the first present, non-null value among `keys`, which must be a string.
fn optional_string<'a>(
    object: &'a Map<String, Value>,
    keys: &[&str],
    path: &str,
    field: &'static str,
) -> Result<Option<&'a str>, DecodeError> {
    let Some(value) = keys
        .iter()
        .find_map(|key| object.get(*key).filter(|value| !value.is_null()))
    else {
        return Ok(None);
    };

    value
        .as_str()
        .map(Some)
        .ok_or_else(|| DecodeError::InvalidField {
            path: path.to_owned(),
            field,
            expected: "a string",
        })
}

fn required_string(
    object: &Map<String, Value>,
    keys: &[&str],
    path: &str,
    field: &'static str,
) -> Result<String, DecodeError> {
    optional_string(object, keys, path, field)?
        .map(str::to_owned)
        .ok_or_else(|| DecodeError::MissingField {
            path: path.to_owned(),
            field,
        })
}
