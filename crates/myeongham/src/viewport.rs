//! Scroll viewport state and the scroll-derived page rules.
//!
//! The page is a virtual column of rows. Everything scroll-driven (the
//! field's progress scalar, the progress line, the floating nav, section
//! reveal, the hero fade) derives from the one `offset` kept here.

use myeongham_core::SectionId;

/// Share of the remaining distance a smooth jump covers per frame.
const EASE_STEP: f64 = 0.2;
/// Remaining distance below which a jump snaps to its target (rows).
const SNAP_DISTANCE: f64 = 0.4;
/// Rows before the hero's end at which the floating nav appears.
const NAV_LEAD: f64 = 3.0;
/// A section counts as entered this many rows before the viewport bottom.
const REVEAL_MARGIN: f64 = 2.0;
/// Delay before a revealed section's first card shows (ms).
const REVEAL_BASE_MS: u64 = 100;
/// Additional entrance delay per card index (ms).
const REVEAL_STEP_MS: u64 = 100;

/// Row range of one section inside the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub start: usize,
    pub len: usize,
}

impl SectionSpan {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Scroll state of the document viewport.
#[derive(Debug, Default)]
pub struct Viewport {
    /// Current offset in rows; fractional while a jump is easing.
    offset: f64,
    /// Smooth-scroll destination, if a jump is in flight.
    target: Option<f64>,
    max_scroll: f64,
    body_height: f64,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the document and viewport extent for this frame, clamping
    /// scroll state into the new range.
    pub fn set_extent(&mut self, doc_rows: usize, body_rows: u16) {
        self.body_height = f64::from(body_rows);
        self.max_scroll = (doc_rows as f64 - self.body_height).max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_scroll);
        if let Some(target) = self.target {
            self.target = Some(target.clamp(0.0, self.max_scroll));
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Top document row of the rendered window.
    pub fn top_row(&self) -> u16 {
        self.offset.round() as u16
    }

    /// Immediate scroll by a row delta; cancels any jump in flight.
    pub fn scroll_by(&mut self, rows: f64) {
        self.target = None;
        self.offset = (self.offset + rows).clamp(0.0, self.max_scroll);
    }

    /// Start a smooth jump to an absolute row.
    pub fn jump_to(&mut self, row: f64) {
        self.target = Some(row.clamp(0.0, self.max_scroll));
    }

    /// Smooth jump to the end of the document.
    pub fn jump_to_bottom(&mut self) {
        self.target = Some(self.max_scroll);
    }

    /// Smooth jump that puts the section's heading at the top of the view.
    pub fn jump_to_section(&mut self, span: &SectionSpan) {
        self.jump_to(span.start as f64);
    }

    /// Advance the smooth-scroll easing by one frame: the remaining
    /// distance shrinks by a fixed share, and close targets snap.
    pub fn ease(&mut self) {
        let Some(target) = self.target else {
            return;
        };
        let remaining = target - self.offset;
        if remaining.abs() < SNAP_DISTANCE {
            self.offset = target;
            self.target = None;
        } else {
            self.offset += remaining * EASE_STEP;
        }
    }

    pub fn is_easing(&self) -> bool {
        self.target.is_some()
    }

    /// Scroll progress driving the particle field: one full viewport of
    /// scrolling saturates it at 1.
    pub fn field_progress(&self) -> f64 {
        if self.body_height <= 0.0 {
            return 0.0;
        }
        (self.offset / self.body_height).min(1.0)
    }

    /// Fraction of the scrollable range used, for the progress line.
    pub fn gauge_ratio(&self) -> f64 {
        if self.max_scroll <= 0.0 {
            0.0
        } else {
            (self.offset / self.max_scroll).clamp(0.0, 1.0)
        }
    }

    pub fn at_bottom(&self) -> bool {
        self.max_scroll > 0.0 && self.offset >= self.max_scroll - 0.5
    }

    /// Whether the floating nav is shown. It appears once the view has
    /// scrolled near the hero's end.
    pub fn nav_visible(&self, hero_rows: usize) -> bool {
        self.offset > (hero_rows as f64 - NAV_LEAD).max(0.0)
    }

    /// The nav-highlighted section: the one containing the point 30% down
    /// the viewport, forced to the last section at the document's bottom.
    pub fn active_section(&self, spans: &[SectionSpan]) -> SectionId {
        if self.at_bottom() {
            if let Some(last) = spans.last() {
                return last.id;
            }
        }
        let point = self.offset + self.body_height * 0.3;
        let mut active = spans.first().map(|s| s.id).unwrap_or_default();
        for span in spans {
            if point >= span.start as f64 {
                active = span.id;
            }
        }
        active
    }

    /// Whether the section's top has entered the view, with a small margin
    /// before the viewport bottom.
    pub fn section_entered(&self, span: &SectionSpan) -> bool {
        (span.start as f64) < self.offset + self.body_height - REVEAL_MARGIN
    }
}

/// Hero dimming factor: 1 at the top of the page, fading linearly to 0 as
/// the hero scrolls past.
pub fn hero_fade(offset: f64, hero_rows: usize) -> f64 {
    if hero_rows == 0 {
        return 0.0;
    }
    (1.0 - offset / hero_rows as f64).clamp(0.0, 1.0)
}

/// First-entry reveal state per section.
///
/// Reveal is monotonic: once a section has entered the view it stays
/// revealed, and its cards finish a staggered entrance shortly after.
#[derive(Debug)]
pub struct RevealTracker {
    revealed_at: [Option<u64>; SectionId::ALL.len()],
    reduced_motion: bool,
}

impl RevealTracker {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            revealed_at: [None; SectionId::ALL.len()],
            reduced_motion,
        }
    }

    fn slot(id: SectionId) -> usize {
        SectionId::ALL.iter().position(|s| *s == id).unwrap_or(0)
    }

    /// Record whether a section is in view right now.
    pub fn observe(&mut self, id: SectionId, in_view: bool, now_ms: u64) {
        let slot = Self::slot(id);
        if in_view && self.revealed_at[slot].is_none() {
            self.revealed_at[slot] = Some(now_ms);
        }
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.reduced_motion || self.revealed_at[Self::slot(id)].is_some()
    }

    /// Whether the section's card at `index` has finished its entrance.
    pub fn card_visible(&self, id: SectionId, index: usize, now_ms: u64) -> bool {
        if self.reduced_motion {
            return true;
        }
        match self.revealed_at[Self::slot(id)] {
            Some(at) => now_ms >= at + REVEAL_BASE_MS + REVEAL_STEP_MS * index as u64,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans() -> Vec<SectionSpan> {
        vec![
            SectionSpan {
                id: SectionId::Hero,
                start: 0,
                len: 20,
            },
            SectionSpan {
                id: SectionId::About,
                start: 20,
                len: 20,
            },
            SectionSpan {
                id: SectionId::Skills,
                start: 40,
                len: 20,
            },
        ]
    }

    #[test]
    fn test_scroll_clamps_to_range() {
        let mut vp = Viewport::new();
        vp.set_extent(60, 30);
        vp.scroll_by(100.0);
        assert_eq!(vp.offset(), 30.0);
        vp.scroll_by(-100.0);
        assert_eq!(vp.offset(), 0.0);
    }

    #[test]
    fn test_smooth_jump_eases_and_snaps() {
        let mut vp = Viewport::new();
        vp.set_extent(200, 40);
        vp.jump_to(100.0);
        assert!(vp.is_easing());

        let mut last = vp.offset();
        let mut frames = 0;
        while vp.is_easing() {
            vp.ease();
            assert!(vp.offset() >= last);
            last = vp.offset();
            frames += 1;
            assert!(frames < 100, "jump never settled");
        }
        assert_eq!(vp.offset(), 100.0);
    }

    #[test]
    fn test_instant_scroll_cancels_jump() {
        let mut vp = Viewport::new();
        vp.set_extent(200, 40);
        vp.jump_to(100.0);
        vp.scroll_by(1.0);
        assert!(!vp.is_easing());
        assert_eq!(vp.offset(), 1.0);
    }

    #[test]
    fn test_field_progress_saturates_after_one_viewport() {
        let mut vp = Viewport::new();
        vp.set_extent(200, 40);
        assert_eq!(vp.field_progress(), 0.0);
        vp.scroll_by(20.0);
        assert!((vp.field_progress() - 0.5).abs() < 1e-9);
        vp.scroll_by(60.0);
        assert_eq!(vp.field_progress(), 1.0);
    }

    #[test]
    fn test_gauge_ratio_spans_the_scrollable_range() {
        let mut vp = Viewport::new();
        vp.set_extent(200, 40);
        assert_eq!(vp.gauge_ratio(), 0.0);
        vp.scroll_by(80.0);
        assert!((vp.gauge_ratio() - 0.5).abs() < 1e-9);
        vp.scroll_by(80.0);
        assert_eq!(vp.gauge_ratio(), 1.0);

        // A document that fits the viewport has nothing to report.
        let mut short = Viewport::new();
        short.set_extent(20, 40);
        assert_eq!(short.gauge_ratio(), 0.0);
    }

    #[test]
    fn test_active_section_follows_scroll() {
        let spans = spans();
        let mut vp = Viewport::new();
        vp.set_extent(60, 30);

        assert_eq!(vp.active_section(&spans), SectionId::Hero);
        vp.scroll_by(15.0);
        assert_eq!(vp.active_section(&spans), SectionId::About);
        vp.scroll_by(20.0);
        // point 35 + 9 = 44 lands in the skills span.
        assert_eq!(vp.active_section(&spans), SectionId::Skills);
    }

    #[test]
    fn test_bottom_forces_last_section() {
        let spans = spans();
        let mut vp = Viewport::new();
        vp.set_extent(60, 30);
        vp.scroll_by(30.0);
        assert!(vp.at_bottom());
        assert_eq!(vp.active_section(&spans), SectionId::Skills);
    }

    #[test]
    fn test_nav_appears_past_the_hero() {
        let mut vp = Viewport::new();
        vp.set_extent(100, 30);
        assert!(!vp.nav_visible(20));
        vp.scroll_by(18.0);
        assert!(vp.nav_visible(20));
    }

    #[test]
    fn test_hero_fade_clamps() {
        assert_eq!(hero_fade(0.0, 20), 1.0);
        assert!((hero_fade(10.0, 20) - 0.5).abs() < 1e-9);
        assert_eq!(hero_fade(25.0, 20), 0.0);
        assert_eq!(hero_fade(5.0, 0), 0.0);
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let mut reveal = RevealTracker::new(false);
        assert!(!reveal.is_revealed(SectionId::About));

        reveal.observe(SectionId::About, true, 1_000);
        assert!(reveal.is_revealed(SectionId::About));

        // Scrolling back out never un-reveals.
        reveal.observe(SectionId::About, false, 2_000);
        assert!(reveal.is_revealed(SectionId::About));
    }

    #[test]
    fn test_cards_stagger_in() {
        let mut reveal = RevealTracker::new(false);
        reveal.observe(SectionId::About, true, 1_000);

        assert!(!reveal.card_visible(SectionId::About, 0, 1_099));
        assert!(reveal.card_visible(SectionId::About, 0, 1_100));
        assert!(!reveal.card_visible(SectionId::About, 2, 1_299));
        assert!(reveal.card_visible(SectionId::About, 2, 1_300));
    }

    #[test]
    fn test_reduced_motion_shows_everything() {
        let reveal = RevealTracker::new(true);
        assert!(reveal.is_revealed(SectionId::Contact));
        assert!(reveal.card_visible(SectionId::Contact, 3, 0));
    }
}
