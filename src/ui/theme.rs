use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x00, 0x7b, 0xff);
pub const ACCENT_FAINT: Color = Color::Rgb(0x1a, 0x3a, 0x5c);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const TEXT_MUTED: Color = Color::Rgb(0x99, 0x99, 0x99);
pub const TEXT_FADED: Color = Color::Rgb(0x4b, 0x4b, 0x4b);
pub const BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const SHADOW: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const RATING: Color = Color::Rgb(0xff, 0xc1, 0x07);
pub const DISCOUNT: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const SELECTED_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const DOT_INACTIVE: Color = Color::Rgb(0x66, 0x66, 0x66);

/// Mixes two RGB colours; `t` is clamped to `0.0..=1.0`. Non-RGB inputs snap
/// to whichever end is closer.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}
