//! UI rendering for the chat interface.

use crate::app::{App, Focus, SUGGESTIONS};
use crate::fence::{Segment, split_fences};
use palaver_core::Role;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App) {
    let columns = if app.sidebar_visible {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(32), Constraint::Min(0)])
            .split(f.area())
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0)])
            .split(f.area())
    };

    if app.sidebar_visible {
        draw_sidebar(f, app, columns[0]);
    }
    let main = columns[columns.len() - 1];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Thread or suggestions
            Constraint::Length(3), // Input
            Constraint::Length(3), // Status bar
        ])
        .split(main);

    if app.showing_suggestions() {
        draw_suggestions(f, rows[0]);
    } else {
        draw_thread(f, app, rows[0]);
    }
    draw_input(f, app, rows[1]);
    draw_status_bar(f, app, rows[2]);
}

/// Draw the chat list sidebar.
#[tracing::instrument(skip_all)]
fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .chats
        .iter()
        .enumerate()
        .map(|(i, chat)| {
            let date = chat.created.format("%Y-%m-%d").to_string();
            let style = if i == app.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(vec![
                Line::styled(chat.title.clone(), style),
                Line::styled(date, Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let border_style = if app.focus == Focus::Sidebar {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Chats"),
    );
    f.render_widget(list, area);
}

/// Draw the message thread, splitting assistant text on code fences.
#[tracing::instrument(skip_all)]
fn draw_thread(f: &mut Frame, app: &App, area: Rect) {
    let Some(chat) = app.current_chat() else {
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    for entry in &chat.entries {
        let (label, label_style) = match entry.role {
            Role::User => ("You", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Role::Assistant => (
                "Assistant",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Role::System => ("System", Style::default().fg(Color::DarkGray)),
        };
        lines.push(Line::styled(label, label_style));

        for segment in split_fences(&entry.content) {
            match segment {
                Segment::Text(text) => {
                    for text_line in text.lines() {
                        lines.push(Line::raw(text_line.to_string()));
                    }
                }
                Segment::Code { lang, body } => {
                    let tag = lang.unwrap_or_default();
                    lines.push(Line::styled(
                        format!("--- {} ---", if tag.is_empty() { "code" } else { tag.as_str() }),
                        Style::default().fg(Color::DarkGray),
                    ));
                    for code_line in body.lines() {
                        lines.push(Line::styled(
                            code_line.to_string(),
                            Style::default().fg(Color::Yellow).bg(Color::Black),
                        ));
                    }
                }
            }
        }
        lines.push(Line::raw(""));
    }

    // Stick to the bottom unless the user scrolled up
    let inner_height = area.height.saturating_sub(2);
    let bottom = (lines.len() as u16).saturating_sub(inner_height);
    let scroll = bottom.saturating_sub(app.scroll_up);

    let thread = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(chat.title.clone()),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(thread, area);
}

/// Draw the suggestion panel shown for empty chats.
#[tracing::instrument(skip_all)]
fn draw_suggestions(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::styled(
            "Start a conversation, or press a number:",
            Style::default().fg(Color::Gray),
        ),
        Line::raw(""),
    ];
    for (i, suggestion) in SUGGESTIONS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}. ", i + 1),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(*suggestion),
        ]));
    }

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Suggestions"))
        .wrap(Wrap { trim: false });
    f.render_widget(panel, area);
}

/// Draw the input box.
#[tracing::instrument(skip_all)]
fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, style) = if app.can_submit() {
        ("Message", Style::default())
    } else {
        ("thinking...", Style::default().fg(Color::DarkGray))
    };

    let border_style = if app.focus == Focus::Input && app.can_submit() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let input = Paragraph::new(app.input.as_str()).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );
    f.render_widget(input, area);
}

/// Draw the status bar with the transient notice and key help.
#[tracing::instrument(skip_all)]
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.focus {
        Focus::Input => "Enter: Send | Tab: Chats | Ctrl+N: New | PgUp/PgDn: Scroll | Esc: Quit",
        Focus::Sidebar => "↑↓: Navigate | Enter: Open | Ctrl+D: Delete | Tab: Message | Esc: Quit",
    };

    let status_text = if app.status_message.is_empty() {
        help_text.to_string()
    } else {
        format!("{} | {}", app.status_message, help_text)
    };
    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}
