// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lectern-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lectern and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Provides the interactive topic viewer (ratatui + crossterm): the rendered text in a scrollable
//! pane next to a node outline. Selecting an outline entry highlights that node's region.

use std::{error::Error, io, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, warn};

use crate::format::parse_topic_document;
use crate::model::TopicDocument;
use crate::query::{outline, OutlineEntry};
use crate::render::text::{char_len, text_len, truncate_with_ellipsis};
use crate::render::{render_content_reported, render_text_annotated, Region, RegionIndex, TextOptions};

mod theme;

use theme::TuiTheme;

const DEMO_TOPIC_JSON: &str = include_str!("demo_topic.json");
const OUTLINE_WIDTH: u16 = 36;
const HORIZONTAL_STEP: usize = 4;
const EMPTY_TOPIC_TEXT: &str = "This topic has no content yet.";

pub fn run_with_topic(topic: TopicDocument) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(&topic, TextOptions::default());

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

/// The bundled sample topic.
pub fn demo_topic() -> TopicDocument {
    match parse_topic_document(DEMO_TOPIC_JSON) {
        Ok(topic) => topic,
        Err(err) => {
            warn!(error = %err, "bundled demo topic failed to decode");
            TopicDocument {
                title: Some("Demo".to_owned()),
                ..TopicDocument::default()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Content,
    Outline,
}

pub(crate) struct App {
    title: String,
    lines: Vec<String>,
    regions: RegionIndex,
    outline: Vec<OutlineEntry>,
    unknown_count: usize,
    focus: Focus,
    show_outline: bool,
    selected: Option<usize>,
    scroll_x: usize,
    scroll_y: usize,
    viewport_width: usize,
    viewport_height: usize,
    should_quit: bool,
    theme: TuiTheme,
}

impl App {
    pub(crate) fn new(topic: &TopicDocument, options: TextOptions) -> Self {
        let title = topic.display_title();
        let (lines, regions, outline, unknown_count) = match topic.content.as_ref() {
            Some(root) => {
                let report = render_content_reported(root);
                report.log_unknown();
                let annotated = render_text_annotated(&report.element, options);
                let lines = annotated.text.split('\n').map(str::to_owned).collect();
                (lines, annotated.regions, outline(root), report.unknown.len())
            }
            None => (
                vec![EMPTY_TOPIC_TEXT.to_owned()],
                RegionIndex::new(),
                Vec::new(),
                0,
            ),
        };
        debug!(lines = lines.len(), nodes = outline.len(), "viewer content ready");

        let show_outline = !outline.is_empty();
        Self {
            title,
            lines,
            regions,
            outline,
            unknown_count,
            focus: Focus::Content,
            show_outline,
            selected: None,
            scroll_x: 0,
            scroll_y: 0,
            viewport_width: 80,
            viewport_height: 20,
            should_quit: false,
            theme: TuiTheme,
        }
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let outline_focused = self.focus == Focus::Outline && self.show_outline;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down if outline_focused => self.select_relative(1),
            KeyCode::Char('k') | KeyCode::Up if outline_focused => self.select_relative(-1),
            KeyCode::Char('g') | KeyCode::Home if outline_focused => self.select_index(0),
            KeyCode::Char('G') | KeyCode::End if outline_focused => {
                self.select_index(self.outline.len().saturating_sub(1));
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(1),
            KeyCode::Char('g') | KeyCode::Home => self.scroll_y = 0,
            KeyCode::Char('G') | KeyCode::End => self.scroll_y = self.max_scroll_y(),
            KeyCode::PageDown => self.scroll_down(self.page()),
            KeyCode::PageUp => self.scroll_up(self.page()),
            KeyCode::Char('h') | KeyCode::Left => {
                self.scroll_x = self.scroll_x.saturating_sub(HORIZONTAL_STEP);
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.scroll_x = (self.scroll_x + HORIZONTAL_STEP).min(self.max_scroll_x());
            }
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char('o') => self.toggle_outline(),
            _ => {}
        }
    }

    pub(crate) fn set_viewport(&mut self, width: usize, height: usize) {
        self.viewport_width = width.max(1);
        self.viewport_height = height.max(1);
        self.scroll_y = self.scroll_y.min(self.max_scroll_y());
        self.scroll_x = self.scroll_x.min(self.max_scroll_x());
    }

    pub(crate) fn selected_entry(&self) -> Option<&OutlineEntry> {
        self.selected.and_then(|idx| self.outline.get(idx))
    }

    pub(crate) fn selected_region(&self) -> Option<Region> {
        let entry = self.selected_entry()?;
        self.regions.get(&entry.id).copied()
    }

    fn page(&self) -> usize {
        self.viewport_height.saturating_sub(1).max(1)
    }

    fn max_scroll_y(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport_height)
    }

    fn max_scroll_x(&self) -> usize {
        let widest = self
            .lines
            .iter()
            .map(|line| text_len(line))
            .max()
            .unwrap_or(0);
        widest.saturating_sub(self.viewport_width)
    }

    fn scroll_down(&mut self, by: usize) {
        self.scroll_y = (self.scroll_y + by).min(self.max_scroll_y());
    }

    fn scroll_up(&mut self, by: usize) {
        self.scroll_y = self.scroll_y.saturating_sub(by);
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Content if self.show_outline => {
                if self.selected.is_none() && !self.outline.is_empty() {
                    self.select_index(0);
                }
                Focus::Outline
            }
            _ => Focus::Content,
        };
    }

    fn toggle_outline(&mut self) {
        self.show_outline = !self.show_outline && !self.outline.is_empty();
        if !self.show_outline {
            self.focus = Focus::Content;
        }
    }

    fn select_relative(&mut self, delta: isize) {
        if self.outline.is_empty() {
            return;
        }
        let next = match self.selected {
            None => 0,
            Some(idx) => idx.saturating_add_signed(delta).min(self.outline.len() - 1),
        };
        self.select_index(next);
    }

    fn select_index(&mut self, idx: usize) {
        if idx >= self.outline.len() {
            return;
        }
        self.selected = Some(idx);
        self.reveal_selected();
    }

    /// Scrolls the minimum amount needed to bring the selected region into view.
    fn reveal_selected(&mut self) {
        let Some(region) = self.selected_region() else {
            return;
        };
        let bottom = region.bottom().unwrap_or(region.y);
        if region.y < self.scroll_y {
            self.scroll_y = region.y;
        } else if bottom >= self.scroll_y + self.viewport_height {
            let fit = bottom + 1 - self.viewport_height;
            self.scroll_y = fit.min(region.y);
        }
        self.scroll_y = self.scroll_y.min(self.max_scroll_y());

        if region.x < self.scroll_x || region.x >= self.scroll_x + self.viewport_width {
            self.scroll_x = region.x.min(self.max_scroll_x());
        }
    }

    /// Text for the content pane with the selected region highlighted.
    fn content_text(&self) -> Text<'static> {
        let region = self.selected_region();
        let lines = self
            .lines
            .iter()
            .enumerate()
            .map(|(y, line)| match region {
                Some(region) if region.contains(region.x, y) => {
                    highlight_line(line, region.x, region.width, &self.theme)
                }
                _ => Line::from(line.clone()),
            })
            .collect::<Vec<_>>();
        Text::from(lines)
    }

    fn outline_items(&self, width: usize) -> Vec<ListItem<'static>> {
        self.outline
            .iter()
            .map(|entry| {
                let indent = "  ".repeat(entry.depth);
                let label = format!("{indent}{}", entry.label);
                let label = truncate_with_ellipsis(&label, width);
                let is_known = crate::model::NodeTag::ALL
                    .iter()
                    .any(|tag| tag.as_str() == entry.tag);
                let style = if is_known {
                    Style::default()
                } else {
                    self.theme.placeholder_style()
                };
                ListItem::new(Line::from(Span::styled(label, style)))
            })
            .collect()
    }

    fn footer_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (key, label) in [
            ("q", "quit"),
            ("j/k", "move"),
            ("PgUp/PgDn", "page"),
            ("h/l", "pan"),
            ("Tab", "focus"),
            ("o", "outline"),
        ] {
            spans.push(Span::styled(format!(" {key} "), self.theme.footer_key_style()));
            spans.push(Span::styled(format!("{label} "), self.theme.footer_label_style()));
        }
        if self.unknown_count > 0 {
            spans.push(Span::styled(
                format!(" {} unknown node(s) ", self.unknown_count),
                self.theme.placeholder_style(),
            ));
        }
        if let Some(entry) = self.selected_entry() {
            spans.push(Span::raw(format!(" {} ", entry.id)));
        }
        Line::from(spans)
    }
}

/// Splits `line` at display columns `x` and `x + width` and styles the middle part.
fn highlight_line(line: &str, x: usize, width: usize, theme: &TuiTheme) -> Line<'static> {
    let end = x.saturating_add(width);
    let (mut before, mut marked, mut after) = (String::new(), String::new(), String::new());
    let mut column = 0;
    for ch in line.chars() {
        let part = if column < x {
            &mut before
        } else if column < end {
            &mut marked
        } else {
            &mut after
        };
        part.push(ch);
        column += char_len(ch);
    }
    Line::from(vec![
        Span::raw(before),
        Span::styled(marked, theme.highlight_style()),
        Span::raw(after),
    ])
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = layout[0];
    let footer_area = layout[1];

    let (content_area, outline_area) = if app.show_outline {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(OUTLINE_WIDTH)])
            .split(main_area);
        (columns[0], Some(columns[1]))
    } else {
        (main_area, None)
    };

    app.set_viewport(
        usize::from(content_area.width.saturating_sub(2)),
        usize::from(content_area.height.saturating_sub(2)),
    );

    let content = Paragraph::new(app.content_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.title))
                .border_style(app.theme.panel_border_style(app.focus == Focus::Content)),
        )
        .scroll((
            u16::try_from(app.scroll_y).unwrap_or(u16::MAX),
            u16::try_from(app.scroll_x).unwrap_or(u16::MAX),
        ));
    frame.render_widget(content, content_area);

    if let Some(outline_area) = outline_area {
        let items = app.outline_items(usize::from(outline_area.width.saturating_sub(2)));
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Outline ")
                    .border_style(app.theme.panel_border_style(app.focus == Focus::Outline)),
            )
            .highlight_style(app.theme.selection_style());
        let mut state = ListState::default().with_selected(app.selected);
        frame.render_stateful_widget(list, outline_area, &mut state);
    }

    frame.render_widget(Paragraph::new(app.footer_line()), footer_area);
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
