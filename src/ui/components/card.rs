use crate::model::Product;
use crate::output::{discount_badge, format_price};
use crate::ui::animation::Animation;
use crate::ui::theme::{blend, ACCENT, DISCOUNT, TEXT, TEXT_FADED, TEXT_MUTED};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::ListItem;

pub const CARD_HEIGHT: u16 = 5;
const ENTRANCE_TICKS: u64 = 5;
const STAGGER_TICKS: u64 = 1;
/// Cards past this index enter together with the last staggered one.
const MAX_STAGGER: u64 = 12;

/// Entrance animation for the card at `index`, delayed by its mount order.
pub fn entrance(index: usize) -> Animation {
    let slot = (index as u64).min(MAX_STAGGER);
    Animation::new(ENTRANCE_TICKS).with_delay(slot * STAGGER_TICKS)
}

pub struct ProductCard<'a> {
    product: &'a Product,
    /// Entrance progress, `0.0` invisible to `1.0` settled.
    reveal: f32,
    width: usize,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a Product, reveal: f32, width: u16) -> Self {
        Self {
            product,
            reveal,
            width: width.saturating_sub(4).max(8) as usize,
        }
    }

    pub fn item(&self) -> ListItem<'static> {
        let fade = |color| Style::default().fg(blend(TEXT_FADED, color, self.reveal));
        let mut lines = Vec::with_capacity(CARD_HEIGHT as usize);

        lines.push(Line::from(Span::styled(
            truncate(&self.product.title, self.width),
            fade(TEXT).add_modifier(Modifier::BOLD),
        )));
        for chunk in wrap(&self.product.description, self.width, 2) {
            lines.push(Line::from(Span::styled(chunk, fade(TEXT_MUTED))));
        }
        while lines.len() < 3 {
            lines.push(Line::default());
        }

        let mut footer = vec![Span::styled(
            format_price(self.product.price),
            fade(ACCENT).add_modifier(Modifier::BOLD),
        )];
        if self.product.has_discount() {
            footer.push(Span::raw("  "));
            footer.push(Span::styled(
                format!(" {} ", discount_badge(self.product.discount_percentage)),
                fade(DISCOUNT).add_modifier(Modifier::REVERSED),
            ));
        }
        lines.push(Line::from(footer));
        lines.push(Line::default());

        ListItem::new(Text::from(lines))
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Greedy word wrap capped at `max_lines`; the last line is ellipsised if text remains.
fn wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            if lines.len() == max_lines {
                if let Some(last) = lines.last_mut() {
                    *last = truncate(&format!("{} {}", last, word), width);
                    if !last.ends_with('…') {
                        last.push('…');
                    }
                }
                return lines;
            }
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() && lines.len() < max_lines {
        lines.push(truncate(&current, width));
    }
    lines
}
