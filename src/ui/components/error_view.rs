use crate::ui::theme::{ACCENT, ERROR, TEXT};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

pub const RETRY_HINT: &str = "Press r to retry";

/// Centered error message, with a retry hint when the owning screen can retry.
pub fn render_error_view(frame: &mut Frame, area: Rect, message: &str, can_retry: bool) {
    let [_, body, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(4),
        Constraint::Fill(1),
    ])
    .areas(area);

    let mut lines = vec![
        Line::styled("⚠", Style::default().fg(ERROR).add_modifier(Modifier::BOLD)),
        Line::styled(message.to_string(), Style::default().fg(TEXT)),
    ];
    if can_retry {
        lines.push(Line::default());
        lines.push(Line::styled(RETRY_HINT, Style::default().fg(ACCENT)));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body,
    );
}

/// One-line banner shown above a stale list when a reload failed.
pub fn error_banner(message: &str, can_retry: bool) -> Paragraph<'static> {
    let mut spans = vec![Span::styled(
        format!(" ⚠ {}", message),
        Style::default().fg(ERROR),
    )];
    if can_retry {
        spans.push(Span::styled(
            format!("  ({})", RETRY_HINT),
            Style::default().fg(ACCENT),
        ));
    }
    Paragraph::new(Line::from(spans))
}
