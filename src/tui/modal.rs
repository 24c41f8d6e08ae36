use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::gate::ConfirmationGate;

/// Draws the gate as a centered dialog; closed gates draw nothing.
pub(super) fn draw_gate(frame: &mut ratatui::Frame, gate: &ConfirmationGate<String>) {
    let Some(prompt) = gate.prompt() else {
        return;
    };

    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 60);
    let h = 7.min(area.height);
    let box_area = Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    };

    frame.render_widget(Clear, box_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Cancel Message");
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(prompt.to_string()).wrap(Wrap { trim: false }),
        parts[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[Esc/n] Cancel", Style::default().fg(Color::Gray)),
            Span::raw("   "),
            Span::styled(
                "[Enter/y] Confirm",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ])),
        parts[1],
    );
}
