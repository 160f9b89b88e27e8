//! Skill detail modal.
//!
//! Opening a chip passes through a short loading state with a spinner
//! before the detail card appears, like the page it mimics. While the
//! modal is up it owns the keyboard; closing hands the chip selection
//! back to the grid.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use myeongham_content::Skill;

use crate::page::{FAINT, MUTED, TEXT, wrap_text};

/// How long the loading state lasts before the detail card appears.
const LOADING_MS: u64 = 200;

/// Braille spinner frames shown while loading.
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Time per spinner frame.
const SPINNER_STEP_MS: u64 = 80;

/// Modal state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Loading {
        skill: usize,
        since_ms: u64,
    },
    Open {
        skill: usize,
        scroll: u16,
    },
}

impl Modal {
    /// Open the detail view for a skill, starting in the loading state.
    pub fn open(&mut self, skill: usize, now_ms: u64) {
        *self = Modal::Loading {
            skill,
            since_ms: now_ms,
        };
    }

    /// Close the modal, returning the skill it was showing so the chip
    /// selection can be restored.
    pub fn close(&mut self) -> Option<usize> {
        let skill = self.skill();
        *self = Modal::Closed;
        skill
    }

    /// Promote loading to open once the delay has elapsed.
    pub fn tick(&mut self, now_ms: u64) {
        if let Modal::Loading { skill, since_ms } = *self
            && now_ms.saturating_sub(since_ms) >= LOADING_MS
        {
            *self = Modal::Open { skill, scroll: 0 };
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    /// Which skill the modal is showing, if any.
    pub fn skill(&self) -> Option<usize> {
        match self {
            Modal::Closed => None,
            Modal::Loading { skill, .. } | Modal::Open { skill, .. } => Some(*skill),
        }
    }

    /// Scroll the detail body. Only meaningful while open.
    pub fn scroll_body(&mut self, delta: i16) {
        if let Modal::Open { scroll, .. } = self {
            *scroll = scroll.saturating_add_signed(delta);
        }
    }
}

/// Current spinner frame for the loading state.
pub fn spinner(now_ms: u64) -> char {
    SPINNER[(now_ms / SPINNER_STEP_MS) as usize % SPINNER.len()]
}

/// Centered popup rect covering the given percentages of the area.
pub fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Body lines for the detail card.
pub fn detail_lines(skill: &Skill, accent: Color, width: u16) -> Vec<Line<'static>> {
    let text_width = usize::from(width).saturating_sub(4).max(16);
    let mut lines = Vec::new();

    lines.push(Line::default());
    for row in wrap_text(skill.intro, text_width) {
        lines.push(Line::from(Span::styled(
            format!("  {row}"),
            Style::default().fg(TEXT),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("  {}", skill.heading),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    for bullet in skill.bullets {
        let mut first = true;
        for row in wrap_text(bullet, text_width.saturating_sub(4).max(12)) {
            let marker = if first { "  • " } else { "    " };
            first = false;
            lines.push(Line::from(Span::styled(
                format!("{marker}{row}"),
                Style::default().fg(MUTED),
            )));
        }
    }

    if let Some((label, value)) = skill.outro {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(format!("  {label} "), Style::default().fg(FAINT)),
            Span::styled(value, Style::default().fg(accent)),
        ]));
    }

    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            "esc closes · ↑↓ scroll",
            Style::default().fg(FAINT),
        ))
        .centered(),
    );
    lines
}
