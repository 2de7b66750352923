// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wire formats for content trees.

pub mod content_json;

pub use content_json::{
    export_content, parse_content, parse_content_value, parse_topic_document,
    parse_topic_document_value, DecodeError, MAX_CONTENT_DEPTH,
};
