use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::App;
use super::keymap::Focus;
use crate::catalog::CatalogState;
use crate::compose::{ComposePhase, SubmitMode, format_post_at};
use crate::model::StatusNotice;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    if !app.shell.session().is_connected() {
        draw_connect(frame);
        return;
    }

    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(if app.shell.notice().is_some() { 1 } else { 0 }),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let workspace = app
        .shell
        .session()
        .workspace()
        .map(|w| w.to_string())
        .unwrap_or_default();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Slack Connect",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  workspace="),
        Span::styled(workspace, Style::default().fg(Color::Green)),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    if let Some(notice) = app.shell.notice() {
        frame.render_widget(Paragraph::new(notice_line(notice)), chunks[1]);
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    draw_form(frame, body[0], app);
    draw_scheduled(frame, body[1], app);

    frame.render_widget(
        Paragraph::new(
            "Tab focus  ←/→ channel  Ctrl+S send  Ctrl+T schedule  d cancel  Ctrl+R refresh  Esc quit",
        )
        .style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );

    super::modal::draw_gate(frame, app.shell.scheduled().gate());
}

fn draw_connect(frame: &mut ratatui::Frame) {
    let area = frame.area();
    let w = area.width.saturating_sub(4).clamp(20, 60);
    let h = 6.min(area.height);
    let box_area = Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    };
    let lines = vec![
        Line::from("Please connect to your Slack workspace to continue."),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Connect to Slack   [q] Quit",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Slack Connect")),
        box_area,
    );
}

fn notice_line(notice: &StatusNotice) -> Line<'_> {
    let color = if notice.is_error() {
        Color::Red
    } else {
        Color::Green
    };
    Line::from(Span::styled(
        notice.message.as_str(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title)
}

fn draw_form(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title("Send or Schedule a Message");
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let notice = app.shell.compose().notice();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if notice.is_some() { 2 } else { 0 }),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    if let Some(notice) = notice {
        frame.render_widget(
            Paragraph::new(notice_line(notice)).wrap(Wrap { trim: true }),
            rows[0],
        );
    }

    let compose = app.shell.compose();
    let catalog = app.shell.catalog();
    let channel_text = match catalog.state() {
        CatalogState::Idle | CatalogState::Loading => "Loading channels...".to_string(),
        CatalogState::Failed(_) => "(no channels)".to_string(),
        CatalogState::Ready(channels) if channels.is_empty() => "(no channels)".to_string(),
        CatalogState::Ready(_) => {
            let id = compose.draft().channel_id.as_str();
            match catalog.channel_name(id) {
                Some(name) => format!("◀ #{} ▶", name),
                None if id.is_empty() => "◀ select ▶".to_string(),
                None => format!("◀ {} ▶", id),
            }
        }
    };
    let channel_style = if catalog.channels().is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    frame.render_widget(
        Paragraph::new(channel_text)
            .style(channel_style)
            .block(field_block("Select Channel", app.focus == Focus::Channel)),
        rows[1],
    );

    frame.render_widget(
        Paragraph::new(app.message.buf.as_str())
            .block(field_block("Message", app.focus == Focus::Message)),
        rows[2],
    );
    frame.render_widget(
        Paragraph::new(app.schedule.buf.as_str()).block(field_block(
            "Schedule Time (YYYY-MM-DDTHH:MM, optional)",
            app.focus == Focus::Schedule,
        )),
        rows[3],
    );

    let (send_label, schedule_label) = match compose.phase() {
        ComposePhase::Idle => ("[Send Now]", "[Schedule]"),
        ComposePhase::Submitting(SubmitMode::SendNow) => ("[Sending...]", "[Schedule]"),
        ComposePhase::Submitting(SubmitMode::Schedule) => ("[Send Now]", "[Scheduling...]"),
    };
    let button_style = if compose.is_submitting() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan)
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(send_label, button_style),
            Span::raw("  "),
            Span::styled(schedule_label, button_style),
        ])),
        rows[4],
    );

    let cursor = match app.focus {
        Focus::Message => Some((rows[2], app.message.cursor_width())),
        Focus::Schedule => Some((rows[3], app.schedule.cursor_width())),
        Focus::Channel | Focus::Scheduled => None,
    };
    if let Some((r, col)) = cursor {
        if !app.shell.scheduled().gate().is_open() {
            frame.set_cursor_position((cursor_x(r, col), r.y + 1));
        }
    }
}

/// Column for a cursor `col` cells into a bordered field, kept inside it.
fn cursor_x(field: Rect, col: usize) -> u16 {
    let inner = field.width.saturating_sub(2);
    let col = u16::try_from(col).unwrap_or(u16::MAX);
    field.x + 1 + col.min(inner.saturating_sub(1))
}

fn draw_scheduled(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let scheduled = app.shell.scheduled();
    let title = if scheduled.is_refreshing() {
        "Scheduled Messages (refreshing)"
    } else {
        "Scheduled Messages"
    };
    let block = field_block(title, app.focus == Focus::Scheduled);

    if scheduled.messages().is_empty() {
        frame.render_widget(
            Paragraph::new("No scheduled messages found.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let offset = app.shell.compose().offset();
    let catalog = app.shell.catalog();
    let items: Vec<ListItem> = scheduled
        .messages()
        .iter()
        .map(|m| {
            let channel = catalog
                .channel_name(&m.channel_id)
                .map(|n| format!("#{}", n))
                .unwrap_or_else(|| m.channel_id.clone());
            ListItem::new(vec![
                Line::from(Span::styled(
                    m.text.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("{} at {}", channel, format_post_at(m.post_at, offset)),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    let mut state = ListState::default();
    if app.focus == Focus::Scheduled {
        state.select(Some(scheduled.selected_index()));
    }
    frame.render_stateful_widget(
        List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray)),
        area,
        &mut state,
    );
}

#[cfg(test)]
#[path = "../tests/tui/render_tests.rs"]
mod tests;
