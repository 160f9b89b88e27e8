//! Drawing port the field paints through.

/// What a link segment connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Particle-to-particle mesh line.
    Mesh,
    /// Particle-to-pointer line.
    Pointer,
}

/// Receiver for the field's draw calls.
///
/// Coordinates are canvas units with y growing downward; opacity is in
/// [0, 1] and maps to color dimming on surfaces without an alpha channel.
pub trait Surface {
    /// Paint one particle dot.
    fn dot(&mut self, x: f64, y: f64, radius: f64, opacity: f64);
    /// Paint one link segment.
    fn link(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, opacity: f64, kind: LinkKind);
}

/// A recorded [`Surface::dot`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedDot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub opacity: f64,
}

/// A recorded [`Surface::link`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedLink {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub opacity: f64,
    pub kind: LinkKind,
}

/// Surface that records draw calls instead of painting them.
///
/// Lets tests assert on exactly what a tick produced without a terminal.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub dots: Vec<RecordedDot>,
    pub links: Vec<RecordedLink>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.dots.clear();
        self.links.clear();
    }

    /// True when nothing has been painted.
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty() && self.links.is_empty()
    }

    /// Recorded links of one kind.
    pub fn links_of(&self, kind: LinkKind) -> Vec<&RecordedLink> {
        self.links.iter().filter(|l| l.kind == kind).collect()
    }
}

impl Surface for RecordingSurface {
    fn dot(&mut self, x: f64, y: f64, radius: f64, opacity: f64) {
        self.dots.push(RecordedDot {
            x,
            y,
            radius,
            opacity,
        });
    }

    fn link(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, opacity: f64, kind: LinkKind) {
        self.links.push(RecordedLink {
            x0,
            y0,
            x1,
            y1,
            opacity,
            kind,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_captures_calls() {
        let mut surface = RecordingSurface::new();
        assert!(surface.is_empty());

        surface.dot(1.0, 2.0, 1.5, 0.4);
        surface.link(0.0, 0.0, 3.0, 4.0, 0.2, LinkKind::Pointer);

        assert_eq!(surface.dots.len(), 1);
        assert_eq!(surface.links_of(LinkKind::Pointer).len(), 1);
        assert!(surface.links_of(LinkKind::Mesh).is_empty());

        surface.clear();
        assert!(surface.is_empty());
    }
}
