use crate::ui::animation::{Animation, Loop};
use crate::ui::theme::{blend, ACCENT, BORDER, TEXT, TEXT_FADED};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FADE_TICKS: u64 = 5;

/// Rotating loading indicator. Owned by a screen; started when a fetch
/// begins and stopped when it settles or the screen is torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spinner {
    spin: Loop,
    fade: Animation,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            spin: Loop::default(),
            fade: Animation::new(FADE_TICKS),
        }
    }
}

impl Spinner {
    pub fn start(&mut self, now: u64) {
        if !self.spin.is_running() {
            self.spin.start(now);
            self.fade.start(now);
        }
    }

    pub fn stop(&mut self) {
        self.spin.stop();
        self.fade.stop();
    }

    pub fn is_running(&self) -> bool {
        self.spin.is_running()
    }

    pub fn glyph(&self, now: u64) -> &'static str {
        let elapsed = self.spin.elapsed(now).unwrap_or(0);
        FRAMES[(elapsed as usize) % FRAMES.len()]
    }

    pub fn opacity(&self, now: u64) -> f32 {
        self.fade.progress(now)
    }
}

/// Full-area loading view: spinner glyph above a message.
pub fn render_loading(frame: &mut Frame, area: Rect, spinner: &Spinner, message: &str, now: u64) {
    let opacity = spinner.opacity(now);
    let [_, glyph_area, text_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled(
            spinner.glyph(now),
            Style::default()
                .fg(blend(BORDER, ACCENT, opacity))
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        glyph_area,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(
            message.to_string(),
            Style::default().fg(blend(TEXT_FADED, TEXT, opacity)),
        ))
        .alignment(Alignment::Center),
        text_area,
    );
}
