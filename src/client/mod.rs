// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Blocking client for the course platform API.
//!
//! One request per call: no retries, no caching. Status and body interpretation is kept in pure
//! functions so it can be tested without a server.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ApiConfig;
use crate::format::{parse_topic_document, DecodeError};
use crate::model::{CourseModule, NewModule, Quiz, QuizQuestion, TopicDocument, TopicId, UserProfile};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{endpoint} requires an access token (set LECTERN_ACCESS_TOKEN or LECTERN_TOKENS_FILE)")]
    MissingToken { endpoint: String },
    #[error("{endpoint}: unauthorized, the access token was rejected")]
    Unauthorized { endpoint: String },
    #[error("{endpoint}: HTTP {status}{}", message_suffix(.message))]
    Status {
        endpoint: String,
        status: u16,
        message: Option<String>,
    },
    #[error("{endpoint}: malformed response body: {reason}")]
    Decode { endpoint: String, reason: String },
    #[error("{endpoint}: invalid topic content: {source}")]
    Content {
        endpoint: String,
        #[source]
        source: DecodeError,
    },
    #[error("{endpoint}: cannot build request url")]
    Url { endpoint: String },
    #[error("{endpoint}: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|message| format!(": {message}"))
        .unwrap_or_default()
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("lectern/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ClientError::Http {
                endpoint: config.base_url().to_string(),
                source,
            })?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET modules/topics/{id}`. Public; no token is sent.
    pub fn fetch_topic(&self, id: &TopicId) -> Result<TopicDocument, ClientError> {
        let endpoint = format!("modules/topics/{id}");
        let url = self.endpoint(&["modules", "topics", id.as_str()])?;
        let body = self.send(self.http.get(url), &endpoint)?;
        decode_topic(&endpoint, &body)
    }

    /// `GET modules/topics/{id}/generate-quiz`.
    pub fn generate_quiz(&self, id: &TopicId) -> Result<Quiz, ClientError> {
        let endpoint = format!("modules/topics/{id}/generate-quiz");
        let token = self.token(&endpoint)?;
        let url = self.endpoint(&["modules", "topics", id.as_str(), "generate-quiz"])?;
        let request = self
            .http
            .get(url)
            .bearer_auth(token)
            .header(ACCEPT_LANGUAGE, self.config.language());
        let body = self.send(request, &endpoint)?;
        decode_quiz(&endpoint, id, &body)
    }

    /// `POST modules/topics/{id}/pass`. Returns the server's acknowledgement verbatim.
    pub fn mark_topic_passed(&self, id: &TopicId) -> Result<Value, ClientError> {
        let endpoint = format!("modules/topics/{id}/pass");
        let token = self.token(&endpoint)?;
        let url = self.endpoint(&["modules", "topics", id.as_str(), "pass"])?;
        let body = self.send(self.http.post(url).bearer_auth(token), &endpoint)?;
        decode_json_or_null(&endpoint, &body)
    }

    /// `GET modules/my_linked`.
    pub fn linked_modules(&self) -> Result<Vec<CourseModule>, ClientError> {
        let endpoint = "modules/my_linked";
        let token = self.token(endpoint)?;
        let url = self.endpoint(&["modules", "my_linked"])?;
        let body = self.send(self.http.get(url).bearer_auth(token), endpoint)?;
        decode_json(endpoint, &body)
    }

    /// `POST modules`.
    pub fn create_module(&self, module: &NewModule) -> Result<Value, ClientError> {
        let endpoint = "modules";
        let token = self.token(endpoint)?;
        let url = self.endpoint(&["modules"])?;
        let body = self.send(self.http.post(url).bearer_auth(token).json(module), endpoint)?;
        decode_json_or_null(endpoint, &body)
    }

    /// `GET auth/me`.
    pub fn current_user(&self) -> Result<UserProfile, ClientError> {
        let endpoint = "auth/me";
        let token = self.token(endpoint)?;
        let url = self.endpoint(&["auth", "me"])?;
        let body = self.send(self.http.get(url).bearer_auth(token), endpoint)?;
        decode_json(endpoint, &body)
    }

    /// Resolves endpoint path segments against the configured base url. Segments are
    /// percent-encoded individually.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        endpoint_url(self.config.base_url(), segments)
    }

    fn token(&self, endpoint: &str) -> Result<&str, ClientError> {
        self.config
            .access_token()
            .ok_or_else(|| ClientError::MissingToken {
                endpoint: endpoint.to_owned(),
            })
    }

    fn send(&self, request: RequestBuilder, endpoint: &str) -> Result<String, ClientError> {
        let http_err = |source| ClientError::Http {
            endpoint: endpoint.to_owned(),
            source,
        };
        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .map_err(http_err)?;
        let status = response.status();
        debug!(endpoint, status = status.as_u16(), "api response");
        let body = response.text().map_err(http_err)?;
        check_status(endpoint, status, body)
    }
}

pub(crate) fn endpoint_url(base: &Url, segments: &[&str]) -> Result<Url, ClientError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| ClientError::Url {
            endpoint: segments.join("/"),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Maps a response status to the client's error vocabulary, passing successful bodies through.
pub(crate) fn check_status(
    endpoint: &str,
    status: StatusCode,
    body: String,
) -> Result<String, ClientError> {
    if status.is_success() {
        return Ok(body);
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(ClientError::Unauthorized {
            endpoint: endpoint.to_owned(),
        });
    }
    Err(ClientError::Status {
        endpoint: endpoint.to_owned(),
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Human-readable message from an error body: `message`, then `error`, then a short plain-text
/// body.
pub(crate) fn error_message(body: &str) -> Option<String> {
    const MAX_PLAIN: usize = 200;

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => ["message", "error", "detail"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::to_owned),
        Ok(_) => None,
        Err(_) if trimmed.chars().count() <= MAX_PLAIN && !trimmed.starts_with('<') => {
            Some(trimmed.to_owned())
        }
        Err(_) => None,
    }
}

pub(crate) fn decode_topic(endpoint: &str, body: &str) -> Result<TopicDocument, ClientError> {
    parse_topic_document(body).map_err(|source| ClientError::Content {
        endpoint: endpoint.to_owned(),
        source,
    })
}

#[derive(Deserialize)]
struct QuizEnvelope {
    processed_json: ProcessedQuiz,
}

#[derive(Deserialize)]
struct ProcessedQuiz {
    quiz: Vec<QuizQuestion>,
}

pub(crate) fn decode_quiz(endpoint: &str, id: &TopicId, body: &str) -> Result<Quiz, ClientError> {
    let envelope: QuizEnvelope = decode_json(endpoint, body)?;
    Ok(Quiz {
        topic_id: id.clone(),
        questions: envelope.processed_json.quiz,
    })
}

fn decode_json<T: DeserializeOwned>(endpoint: &str, body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|err| ClientError::Decode {
        endpoint: endpoint.to_owned(),
        reason: err.to_string(),
    })
}

fn decode_json_or_null(endpoint: &str, body: &str) -> Result<Value, ClientError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    decode_json(endpoint, body)
}
