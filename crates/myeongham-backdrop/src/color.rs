//! Color helpers for painting the backdrop.

use ratatui::style::Color;

/// Dim an RGB color toward the terminal background by an opacity in [0, 1].
///
/// Terminal cells have no alpha channel, so opacity becomes brightness.
/// Non-RGB colors pass through unchanged.
pub fn fade_color(color: Color, opacity: f64) -> Color {
    let opacity = opacity.clamp(0.0, 1.0) as f32;
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (f32::from(r) * opacity) as u8,
            (f32::from(g) * opacity) as u8,
            (f32::from(b) * opacity) as u8,
        ),
        other => other,
    }
}
