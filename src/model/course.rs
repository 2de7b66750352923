// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Course modules, user profiles and stored credentials as exchanged with the platform API.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ids::ModuleId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Unknown,
}

impl Difficulty {
    pub fn from_level(level: u8) -> Self {
        match level {
            1 => Self::Beginner,
            2 => Self::Intermediate,
            3 => Self::Advanced,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseModule {
    pub id: ModuleId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub hours: u32,
    /// Minutes.
    #[serde(default)]
    pub duration: u32,
}

impl CourseModule {
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_level(self.level)
    }
}

/// Payload for creating a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewModule {
    pub title: String,
    pub description: String,
    pub level: u8,
    pub hours: u32,
    pub duration: u32,
}

impl Default for NewModule {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            level: 1,
            hours: 1,
            duration: 60,
        }
    }
}

/// The `auth/me` payload. Unlisted fields are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl UserProfile {
    pub fn is_teacher(&self) -> bool {
        self.role
            .as_deref()
            .is_some_and(|role| role.eq_ignore_ascii_case("teacher"))
    }
}

/// The token bundle issued by the login endpoint and persisted by clients.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

impl fmt::Debug for AuthTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthTokens")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .field("token_type", &self.token_type)
            .finish()
    }
}
