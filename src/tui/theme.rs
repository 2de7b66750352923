// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TuiTheme;

impl TuiTheme {
    pub(crate) fn panel_border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub(crate) fn selection_style(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    /// Cells covered by the selected node's region.
    pub(crate) fn highlight_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn placeholder_style(&self) -> Style {
        Style::default().fg(Color::Red)
    }

    pub(crate) fn footer_key_style(&self) -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub(crate) fn footer_label_style(&self) -> Style {
        Style::default().fg(Color::Gray)
    }
}
