//! Terminal glue for the particle backdrop.
//!
//! Adapts the field's drawing port to a ratatui braille canvas and paints
//! the floating shape glyphs as one-cell widgets over it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::canvas::{Context, Line as CanvasLine, Points};

use myeongham_backdrop::{LinkKind, PlacedShape, Surface, fade_color};

/// [`Surface`] painting onto a braille canvas.
///
/// The field's y axis grows downward while the canvas's grows upward, so
/// every y flips on the way through.
pub struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    height: f64,
    dot_color: Color,
    mesh_color: Color,
    pointer_color: Color,
}

impl<'a, 'b> CanvasSurface<'a, 'b> {
    pub fn new(ctx: &'a mut Context<'b>, height: f64, accent: Color, highlight: Color) -> Self {
        Self {
            ctx,
            height,
            dot_color: accent,
            mesh_color: accent,
            pointer_color: highlight,
        }
    }

    fn flip(&self, y: f64) -> f64 {
        self.height - y
    }
}

impl Surface for CanvasSurface<'_, '_> {
    fn dot(&mut self, x: f64, y: f64, radius: f64, opacity: f64) {
        let coords = dot_coords(x, self.flip(y), radius);
        self.ctx.draw(&Points {
            coords: &coords,
            color: fade_color(self.dot_color, opacity),
        });
    }

    fn link(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, opacity: f64, kind: LinkKind) {
        let color = match kind {
            LinkKind::Mesh => self.mesh_color,
            LinkKind::Pointer => self.pointer_color,
        };
        self.ctx.draw(&CanvasLine {
            x1: x0,
            y1: self.flip(y0),
            x2: x1,
            y2: self.flip(y1),
            color: fade_color(color, opacity),
        });
    }
}

/// Braille dots filling a disc around a center point.
fn dot_coords(x: f64, y: f64, radius: f64) -> Vec<(f64, f64)> {
    let reach = (radius.round() as i32 - 1).max(0);
    let mut coords = Vec::new();
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            if dx * dx + dy * dy <= reach * reach {
                coords.push((x + f64::from(dx), y + f64::from(dy)));
            }
        }
    }
    coords
}

/// Paint the floating shape glyphs over the canvas, one cell each.
pub fn render_shapes(frame: &mut Frame, body: Rect, shapes: &[PlacedShape], color: Color) {
    for shape in shapes {
        let col = body.x.saturating_add(shape.col);
        let row = body.y.saturating_add(shape.row);
        if col >= body.right() || row >= body.bottom() {
            continue;
        }
        let glyph = Span::styled(shape.glyph.to_string(), Style::default().fg(color));
        frame.render_widget(glyph, Rect::new(col, row, 1, 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_radius_is_a_single_dot() {
        assert_eq!(dot_coords(10.0, 20.0, 1.0), vec![(10.0, 20.0)]);
        assert_eq!(dot_coords(10.0, 20.0, 1.4), vec![(10.0, 20.0)]);
    }

    #[test]
    fn test_larger_radius_fills_a_disc() {
        // reach 2: center, four at distance 1, four diagonals, four at 2.
        let coords = dot_coords(0.0, 0.0, 3.0);
        assert_eq!(coords.len(), 13);
        assert!(coords.contains(&(0.0, 0.0)));
        assert!(coords.contains(&(2.0, 0.0)));
        assert!(!coords.contains(&(2.0, 2.0)));
    }
}
