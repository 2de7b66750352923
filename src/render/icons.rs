// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Glyph used for icon keys without a mapping.
pub const FALLBACK_ICON: char = '•';

/// Maps an icon key to a single-cell glyph. Keys are matched case-insensitively.
pub fn icon_glyph(key: &str) -> char {
    match key.trim().to_ascii_lowercase().as_str() {
        "check" | "done" | "success" | "ok" => '✓',
        "cross" | "close" | "error" | "fail" => '✗',
        "info" | "information" => 'ℹ',
        "warning" | "warn" | "alert" => '⚠',
        "star" | "favorite" => '★',
        "arrow" | "arrow-right" | "next" => '→',
        "arrow-left" | "back" | "prev" => '←',
        "question" | "help" => '?',
        "idea" | "tip" | "lightbulb" => '✦',
        "dot" | "bullet" => FALLBACK_ICON,
        "time" | "clock" => '◷',
        _ => FALLBACK_ICON,
    }
}
