//! Floating geometric glyph layer with scroll parallax.
//!
//! Six shapes hang behind the hero, drifting upward at per-shape depths as
//! the page scrolls and stepping through a small rotation wheel.

use crate::rng;

/// Glyph wheels a shape steps through as it "rotates".
const WHEELS: [&[char]; 4] = [
    &['◆', '■'],
    &['●'],
    &['■', '◆'],
    &['▲', '▶', '▼', '◀'],
];

/// Shapes in the layer.
const SHAPE_COUNT: usize = 6;

/// One floating shape.
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    /// Horizontal anchor as a fraction of the area width.
    pub fx: f64,
    /// Vertical anchor as a fraction of the area height.
    pub fy: f64,
    /// Parallax depth: fraction of the scroll offset this shape moves by.
    pub depth: f64,
    /// Wheel steps per scrolled row.
    pub rotation_rate: f64,
    wheel: &'static [char],
}

impl Shape {
    /// Row the shape occupies at a scroll offset, or `None` once it has
    /// drifted off the area.
    pub fn row_at(&self, height: u16, scroll_rows: f64) -> Option<u16> {
        if height == 0 {
            return None;
        }
        let anchor = self.fy * f64::from(height - 1);
        let row = anchor - scroll_rows * self.depth;
        if row < 0.0 || row > f64::from(height - 1) {
            None
        } else {
            Some(row.round() as u16)
        }
    }

    /// Glyph for the current scroll offset.
    pub fn glyph_at(&self, scroll_rows: f64) -> char {
        let steps = (scroll_rows.max(0.0) * self.rotation_rate) as usize;
        self.wheel[steps % self.wheel.len()]
    }
}

/// A shape resolved to a cell position for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedShape {
    pub col: u16,
    pub row: u16,
    pub glyph: char,
}

/// The floating shapes behind the hero.
#[derive(Debug, Clone)]
pub struct ShapeLayer {
    shapes: Vec<Shape>,
}

impl ShapeLayer {
    /// Seed the layer's shape anchors.
    pub fn new(seed: u64) -> Self {
        let shapes = (0..SHAPE_COUNT)
            .map(|i| Shape {
                fx: rng::unit(seed, i as u64, 32),
                fy: rng::unit(seed, i as u64, 33),
                depth: 0.5 + i as f64 * 0.1,
                rotation_rate: 0.05 + i as f64 * 0.02,
                wheel: WHEELS[i % WHEELS.len()],
            })
            .collect();
        Self { shapes }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Place the shapes for one frame. Shapes that have drifted off the
    /// area are omitted.
    pub fn place(&self, width: u16, height: u16, scroll_rows: f64) -> Vec<PlacedShape> {
        if width == 0 || height == 0 {
            return Vec::new();
        }
        self.shapes
            .iter()
            .filter_map(|shape| {
                let row = shape.row_at(height, scroll_rows)?;
                let col = (shape.fx * f64::from(width - 1)).round() as u16;
                Some(PlacedShape {
                    col,
                    row,
                    glyph: shape.glyph_at(scroll_rows),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(fy: f64, depth: f64, rate: f64) -> Shape {
        Shape {
            fx: 0.5,
            fy,
            depth,
            rotation_rate: rate,
            wheel: &['▲', '▶', '▼', '◀'],
        }
    }

    #[test]
    fn test_all_shapes_visible_before_scrolling() {
        let layer = ShapeLayer::new(9);
        assert_eq!(layer.place(80, 40, 0.0).len(), SHAPE_COUNT);
    }

    #[test]
    fn test_deeper_shapes_move_further() {
        let shallow = shape(1.0, 0.5, 0.0);
        let deep = shape(1.0, 1.0, 0.0);
        let start = shallow.row_at(100, 0.0).unwrap();
        assert_eq!(start, deep.row_at(100, 0.0).unwrap());

        let after_shallow = shallow.row_at(100, 20.0).unwrap();
        let after_deep = deep.row_at(100, 20.0).unwrap();
        assert!(after_deep < after_shallow);
        assert_eq!(start - after_shallow, 10);
        assert_eq!(start - after_deep, 20);
    }

    #[test]
    fn test_shapes_drift_off_the_top() {
        let s = shape(0.1, 1.0, 0.0);
        assert!(s.row_at(40, 0.0).is_some());
        assert_eq!(s.row_at(40, 200.0), None);
    }

    #[test]
    fn test_rotation_steps_through_wheel() {
        let s = shape(0.5, 0.5, 0.1);
        assert_eq!(s.glyph_at(0.0), '▲');
        assert_eq!(s.glyph_at(10.0), '▶');
        assert_eq!(s.glyph_at(35.0), '◀');
        // The wheel wraps.
        assert_eq!(s.glyph_at(40.0), '▲');
    }

    #[test]
    fn test_empty_area_places_nothing() {
        let layer = ShapeLayer::new(3);
        assert!(layer.place(0, 40, 0.0).is_empty());
        assert!(layer.place(80, 0, 0.0).is_empty());
    }
}
