use crate::ui::animation::interpolate;
use crate::ui::theme::{blend, ACCENT, BORDER, SHADOW, TEXT, TEXT_MUTED};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Scroll distance, in list units, over which the header settles.
const SCROLL_RANGE: (f32, f32) = (0.0, 100.0);
const MAX_ELEVATION: f32 = 5.0;
const MIN_OPACITY: f32 = 0.9;
/// Elevation from which the header casts a shadow border.
const SHADOW_THRESHOLD: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderStyle {
    pub elevation: f32,
    pub opacity: f32,
}

impl HeaderStyle {
    pub fn from_scroll(scroll: f32) -> Self {
        Self {
            elevation: interpolate(scroll, SCROLL_RANGE, (0.0, MAX_ELEVATION)),
            opacity: interpolate(scroll, SCROLL_RANGE, (1.0, MIN_OPACITY)),
        }
    }

    pub fn has_shadow(&self) -> bool {
        self.elevation >= SHADOW_THRESHOLD
    }

    fn text_color(&self) -> ratatui::style::Color {
        // Map the opacity range onto the full blend so the fade is visible.
        let t = interpolate(self.opacity, (1.0, MIN_OPACITY), (0.0, 1.0));
        blend(TEXT, TEXT_MUTED, t)
    }
}

pub struct Header<'a> {
    title: &'a str,
    style: HeaderStyle,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, style: HeaderStyle) -> Self {
        Self { title, style }
    }

    /// Title bar; `search` is the query line rendered beneath it, if any.
    pub fn widget(&self, search: Option<(&str, bool)>) -> Paragraph<'static> {
        let text_style = Style::default().fg(self.style.text_color());
        let mut lines = vec![Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(self.title.to_string(), text_style.add_modifier(Modifier::BOLD)),
        ])];

        if let Some((query, focused)) = search {
            let (content, content_style) = if query.is_empty() && !focused {
                ("Search products...".to_string(), Style::default().fg(TEXT_MUTED))
            } else {
                (query.to_string(), Style::default().fg(TEXT))
            };
            let mut spans = vec![
                Span::styled("  🔍 ", Style::default().fg(ACCENT)),
                Span::styled(content, content_style),
            ];
            if focused {
                spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
            }
            lines.push(Line::from(spans));
        }

        let border_color = if self.style.has_shadow() { SHADOW } else { BORDER };
        let borders = if self.style.has_shadow() {
            Borders::BOTTOM
        } else {
            Borders::NONE
        };
        Paragraph::new(lines).block(
            Block::default()
                .borders(borders)
                .border_style(Style::default().fg(border_color)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_elevates_with_scroll() {
        let top = HeaderStyle::from_scroll(0.0);
        assert_eq!(top.elevation, 0.0);
        assert_eq!(top.opacity, 1.0);
        assert!(!top.has_shadow());

        let scrolled = HeaderStyle::from_scroll(250.0);
        assert_eq!(scrolled.elevation, MAX_ELEVATION);
        assert!((scrolled.opacity - MIN_OPACITY).abs() < 1e-6);
        assert!(scrolled.has_shadow());
    }
}
