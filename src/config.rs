// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! API client configuration.
//!
//! Configuration is resolved once at process startup and then passed into the client. Nothing
//! below the binary reads process environment variables.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;

use crate::model::AuthTokens;

pub const ENV_API_URL: &str = "LECTERN_API_URL";
pub const ENV_ACCESS_TOKEN: &str = "LECTERN_ACCESS_TOKEN";
pub const ENV_TOKENS_FILE: &str = "LECTERN_TOKENS_FILE";
pub const ENV_LANGUAGE: &str = "LECTERN_LANGUAGE";
pub const ENV_TIMEOUT_SECS: &str = "LECTERN_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080/api";
pub const DEFAULT_LANGUAGE: &str = "RU";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} `{value}`: {reason}")]
    InvalidUrl {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error("api url `{0}` cannot carry path segments")]
    UrlCannotBeBase(String),
    #[error("invalid {var} `{value}`: expected a positive whole number of seconds")]
    InvalidTimeout { var: &'static str, value: String },
    #[error("failed to read tokens file {path}: {source}")]
    TokensRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse tokens file {path}: {source}")]
    TokensParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything the API client needs, resolved up front.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
    access_token: Option<String>,
    language: String,
    timeout: Duration,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url.as_str())
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("language", &self.language)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ApiConfig {
    /// Resolves configuration from the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration from an arbitrary variable lookup.
    ///
    /// An explicit access token wins over a tokens file. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let base_url = var(ENV_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        let mut config = Self {
            base_url: parse_base_url(ENV_API_URL, base_url.trim())?,
            access_token: None,
            language: DEFAULT_LANGUAGE.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        config.access_token = match (var(ENV_ACCESS_TOKEN), var(ENV_TOKENS_FILE)) {
            (Some(token), _) => Some(token.trim().to_owned()),
            (None, Some(path)) => Some(load_tokens_file(Path::new(path.trim()))?.access_token),
            (None, None) => None,
        };

        if let Some(language) = var(ENV_LANGUAGE) {
            config.language = language.trim().to_owned();
        }

        if let Some(raw) = var(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout {
                    var: ENV_TIMEOUT_SECS,
                    value: raw.clone(),
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.base_url = parse_base_url(ENV_API_URL, url)?;
        Ok(self)
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Reads a stored token bundle (`{"access_token": ..., "refresh_token": ...}`).
pub fn load_tokens_file(path: &Path) -> Result<AuthTokens, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::TokensRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::TokensParse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_base_url(var: &'static str, value: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(value).map_err(|err| ConfigError::InvalidUrl {
        var,
        value: value.to_owned(),
        reason: err.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::UrlCannotBeBase(value.to_owned()));
    }
    // Endpoint paths are appended as segments; drop a trailing empty segment.
    if url.path().ends_with('/') && url.path() != "/" {
        let trimmed = url.path().trim_end_matches('/').to_owned();
        url.set_path(&trimmed);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::io::Write;
    use std::time::Duration;

    use rstest::rstest;

    use super::{
        ApiConfig, ConfigError, ENV_ACCESS_TOKEN, ENV_API_URL, ENV_LANGUAGE, ENV_TIMEOUT_SECS,
        ENV_TOKENS_FILE,
    };

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect::<BTreeMap<_, _>>();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = ApiConfig::from_lookup(lookup(&[])).expect("config");
        assert_eq!(config.base_url().as_str(), "http://127.0.0.1:8080/api");
        assert_eq!(config.access_token(), None);
        assert_eq!(config.language(), "RU");
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = ApiConfig::from_lookup(lookup(&[
            (ENV_API_URL, "https://learn.example.org/api/"),
            (ENV_ACCESS_TOKEN, " abc "),
            (ENV_LANGUAGE, "EN"),
            (ENV_TIMEOUT_SECS, "3"),
        ]))
        .expect("config");
        assert_eq!(config.base_url().as_str(), "https://learn.example.org/api");
        assert_eq!(config.access_token(), Some("abc"));
        assert_eq!(config.language(), "EN");
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[rstest]
    #[case::not_a_number("soon")]
    #[case::zero("0")]
    #[case::negative("-1")]
    fn invalid_timeout_is_rejected(#[case] value: &str) {
        let err = ApiConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, value)])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
    }

    #[test]
    fn invalid_url_is_rejected() {
        let err = ApiConfig::from_lookup(lookup(&[(ENV_API_URL, "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));

        let err = ApiConfig::from_lookup(lookup(&[(ENV_API_URL, "mailto:me@example.org")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UrlCannotBeBase(_)));
    }

    #[test]
    fn tokens_file_supplies_access_token() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(
            file,
            r#"{{"access_token": "from-file", "refresh_token": "r", "token_type": "bearer"}}"#
        )
        .expect("write");
        let path = file.path().to_string_lossy().into_owned();

        let config = ApiConfig::from_lookup(lookup(&[(ENV_TOKENS_FILE, &path)])).expect("config");
        assert_eq!(config.access_token(), Some("from-file"));

        let config = ApiConfig::from_lookup(lookup(&[
            (ENV_TOKENS_FILE, &path),
            (ENV_ACCESS_TOKEN, "explicit"),
        ]))
        .expect("config");
        assert_eq!(config.access_token(), Some("explicit"));
    }

    #[test]
    fn unreadable_or_malformed_tokens_file_is_an_error() {
        let err = ApiConfig::from_lookup(lookup(&[(ENV_TOKENS_FILE, "/nonexistent/tokens.json")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::TokensRead { .. }));

        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, "not json").expect("write");
        let path = file.path().to_string_lossy().into_owned();
        let err = ApiConfig::from_lookup(lookup(&[(ENV_TOKENS_FILE, &path)])).unwrap_err();
        assert!(matches!(err, ConfigError::TokensParse { .. }));
    }

    #[test]
    fn debug_output_redacts_token() {
        let config = ApiConfig::from_lookup(lookup(&[]))
            .expect("config")
            .with_access_token("secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }
}
