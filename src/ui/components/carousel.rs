use crate::ui::theme::{ACCENT, DOT_INACTIVE, TEXT_MUTED};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Which image of a product gallery is centred. Purely local to the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselState {
    len: usize,
    active: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn next(&mut self) {
        if self.active + 1 < self.len {
            self.active += 1;
        }
    }

    pub fn prev(&mut self) {
        self.active = self.active.saturating_sub(1);
    }
}

pub fn render_carousel(frame: &mut Frame, area: Rect, images: &[String], state: &CarouselState) {
    if area.height == 0 {
        return;
    }
    let mut lines = Vec::with_capacity(2);
    match images.get(state.active()) {
        Some(url) => lines.push(Line::from(vec![
            Span::styled("🖼  ", Style::default()),
            Span::styled(url.clone(), Style::default().fg(TEXT_MUTED)),
        ])),
        None => lines.push(Line::styled("No images", Style::default().fg(TEXT_MUTED))),
    }
    lines.push(pagination_dots(state));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn pagination_dots(state: &CarouselState) -> Line<'static> {
    let spans: Vec<Span> = (0..state.len())
        .map(|index| {
            let color = if index == state.active() {
                ACCENT
            } else {
                DOT_INACTIVE
            };
            Span::styled("● ", Style::default().fg(color))
        })
        .collect();
    Line::from(spans)
}
