//! The portfolio document.
//!
//! Builds the whole page as one column of styled lines plus a registry of
//! section spans and clickable rows, so scrolling, nav jumps, and mouse
//! hits all share the same geometry. Hidden blocks keep their height:
//! reveal and fade only restyle lines, they never move anything. Lines
//! paint only the cells their text covers, which is what lets the particle
//! canvas underneath show through margins and blanks.

use chrono::{Datelike, Local};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use myeongham_backdrop::fade_color;
use myeongham_content::{
    ABOUT_CARDS, CONTACT, EXPERIENCE, HERO_HINT, MOGULS, NAME, SKILLS, TAGLINE, banner_width,
    build_name_banner,
};
use myeongham_core::{ColorTheme, SectionId};

use crate::viewport::{RevealTracker, SectionSpan};

/// Primary body text.
pub(crate) const TEXT: Color = Color::Rgb(226, 232, 240);
/// Secondary text.
pub(crate) const MUTED: Color = Color::Rgb(160, 174, 192);
/// Tertiary text for hints and rules.
pub(crate) const FAINT: Color = Color::Rgb(113, 128, 150);
/// Chip background.
const CARD_BG: Color = Color::Rgb(45, 55, 72);
/// Terminal background tone, used as text color on selected chips.
const PAGE_BG: Color = Color::Rgb(26, 32, 44);

/// Widest measure body text wraps to.
const CONTENT_WIDTH: usize = 64;

/// Everything the document needs to style itself for one frame.
pub struct PageContext<'a> {
    pub width: u16,
    pub theme: ColorTheme,
    pub selected_skill: usize,
    pub selected_mogul: usize,
    /// Pre-formatted accrued total for the meter.
    pub accrued: String,
    /// Rate shown on the selected mogul's row.
    pub rate: f64,
    pub live_rate: bool,
    pub hero_fade: f64,
    pub reveal: &'a RevealTracker,
    pub now_ms: u64,
}

/// A built document and its click/jump geometry.
pub struct Page {
    pub lines: Vec<Line<'static>>,
    pub sections: Vec<SectionSpan>,
    /// Document rows holding skill chip pairs, in grid order.
    pub skill_rows: Vec<usize>,
    /// Document rows holding mogul entries, in table order.
    pub mogul_rows: Vec<usize>,
}

impl Page {
    pub fn section(&self, id: SectionId) -> Option<&SectionSpan> {
        self.sections.iter().find(|s| s.id == id)
    }
}

struct DocBuilder {
    lines: Vec<Line<'static>>,
    sections: Vec<SectionSpan>,
    skill_rows: Vec<usize>,
    mogul_rows: Vec<usize>,
}

impl DocBuilder {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            sections: Vec::new(),
            skill_rows: Vec::new(),
            mogul_rows: Vec::new(),
        }
    }

    /// Row the next pushed line will land on.
    fn row(&self) -> usize {
        self.lines.len()
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Push a block of lines, or the same number of blanks when hidden.
    fn block(&mut self, lines: Vec<Line<'static>>, visible: bool) {
        if visible {
            self.lines.extend(lines);
        } else {
            for _ in 0..lines.len() {
                self.blank();
            }
        }
    }

    fn section(&mut self, id: SectionId, build: impl FnOnce(&mut Self)) {
        let start = self.row();
        build(self);
        self.sections.push(SectionSpan {
            id,
            start,
            len: self.row() - start,
        });
    }

    fn finish(self) -> Page {
        Page {
            lines: self.lines,
            sections: self.sections,
            skill_rows: self.skill_rows,
            mogul_rows: self.mogul_rows,
        }
    }
}

/// Build the document for one frame.
pub fn build(ctx: &PageContext) -> Page {
    let accent = ctx.theme.accent();
    let highlight = ctx.theme.highlight();

    let mut doc = DocBuilder::new();
    doc.section(SectionId::Hero, |doc| hero(doc, ctx, accent));
    doc.section(SectionId::About, |doc| about(doc, ctx, accent));
    doc.section(SectionId::Skills, |doc| skills(doc, ctx, accent));
    doc.section(SectionId::Experience, |doc| experience(doc, ctx, accent));
    doc.section(SectionId::Moguls, |doc| moguls(doc, ctx, accent, highlight));
    doc.section(SectionId::Contact, |doc| contact(doc, ctx, accent));
    doc.finish()
}

fn hero(doc: &mut DocBuilder, ctx: &PageContext, accent: Color) {
    let fade = ctx.hero_fade;
    let visible = fade > 0.0;

    doc.blank();
    doc.blank();

    let mut banner = Vec::new();
    if banner_width(NAME) <= usize::from(ctx.width) {
        for row in build_name_banner(NAME) {
            banner.push(styled(row, fade_color(accent, fade)).centered());
        }
    } else {
        // Too narrow for the block font. One bold row keeps the name.
        banner.push(
            Line::from(Span::styled(
                NAME,
                Style::default()
                    .fg(fade_color(accent, fade))
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
        );
    }
    doc.block(banner, visible);

    doc.blank();
    doc.block(
        vec![styled(TAGLINE, fade_color(TEXT, fade)).centered()],
        visible,
    );
    doc.blank();
    doc.blank();
    doc.block(
        vec![styled(HERO_HINT, fade_color(FAINT, fade)).centered()],
        visible,
    );
    doc.blank();
    doc.blank();
    doc.blank();
}

/// Section heading with an underline rule, gated on the section reveal.
fn heading(doc: &mut DocBuilder, id: SectionId, ctx: &PageContext, accent: Color) {
    let title = id.title().to_uppercase();
    let rule = "─".repeat(title.chars().count() + 4);
    doc.block(
        vec![
            Line::from(Span::styled(
                title,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ))
            .centered(),
            styled(rule, FAINT).centered(),
        ],
        ctx.reveal.is_revealed(id),
    );
    doc.blank();
}

fn about(doc: &mut DocBuilder, ctx: &PageContext, accent: Color) {
    heading(doc, SectionId::About, ctx, accent);
    let width = text_width(ctx.width);
    for (index, card) in ABOUT_CARDS.iter().enumerate() {
        let mut lines = vec![
            Line::from(Span::styled(
                card.title,
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            ))
            .centered(),
        ];
        for row in wrap_text(card.body, width) {
            lines.push(styled(row, MUTED).centered());
        }
        lines.push(Line::default());
        doc.block(lines, ctx.reveal.card_visible(SectionId::About, index, ctx.now_ms));
    }
}

fn skills(doc: &mut DocBuilder, ctx: &PageContext, accent: Color) {
    heading(doc, SectionId::Skills, ctx, accent);
    let visible = ctx.reveal.is_revealed(SectionId::Skills);

    for (row_index, pair) in SKILLS.chunks(2).enumerate() {
        doc.skill_rows.push(doc.row());
        let mut spans = Vec::new();
        for (col, skill) in pair.iter().enumerate() {
            if col > 0 {
                spans.push(Span::raw("    "));
            }
            let index = row_index * 2 + col;
            spans.push(chip(skill.name, index == ctx.selected_skill, accent));
        }
        doc.block(vec![Line::from(spans).centered(), Line::default()], visible);
    }

    doc.block(
        vec![styled("enter opens a card · tab moves the highlight", FAINT).centered()],
        visible,
    );
    doc.blank();
}

/// A skill chip. Selected chips invert onto the accent color.
fn chip(name: &str, selected: bool, accent: Color) -> Span<'static> {
    let label = format!("  {name}  ");
    if selected {
        Span::styled(
            label,
            Style::default()
                .fg(PAGE_BG)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(label, Style::default().fg(TEXT).bg(CARD_BG))
    }
}

fn experience(doc: &mut DocBuilder, ctx: &PageContext, accent: Color) {
    heading(doc, SectionId::Experience, ctx, accent);
    let width = text_width(ctx.width);
    for (index, item) in EXPERIENCE.iter().enumerate() {
        let mut lines = vec![
            Line::from(vec![
                Span::styled(item.period, Style::default().fg(FAINT)),
                Span::raw("  "),
                Span::styled(
                    item.role,
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
            ])
            .centered(),
            styled(item.org, TEXT).centered(),
        ];
        for row in wrap_text(item.summary, width) {
            lines.push(styled(row, MUTED).centered());
        }
        lines.push(Line::default());
        doc.block(
            lines,
            ctx.reveal.card_visible(SectionId::Experience, index, ctx.now_ms),
        );
    }
}

fn moguls(doc: &mut DocBuilder, ctx: &PageContext, accent: Color, highlight: Color) {
    heading(doc, SectionId::Moguls, ctx, accent);
    let width = text_width(ctx.width);
    let selected = &MOGULS[ctx.selected_mogul % MOGULS.len()];

    let mut intro: Vec<Line<'static>> = wrap_text(
        "How much has a business mogul earned while you were reading this page? \
         Pick one and watch the meter run.",
        width,
    )
    .into_iter()
    .map(|row| styled(row, MUTED).centered())
    .collect();
    intro.push(Line::default());
    doc.block(intro, ctx.reveal.card_visible(SectionId::Moguls, 0, ctx.now_ms));

    let list_visible = ctx.reveal.card_visible(SectionId::Moguls, 1, ctx.now_ms);
    for (index, mogul) in MOGULS.iter().enumerate() {
        doc.mogul_rows.push(doc.row());
        let is_selected = index == ctx.selected_mogul % MOGULS.len();
        let marker = if is_selected { "▸ " } else { "  " };
        let rate = if is_selected {
            ctx.rate
        } else {
            mogul.usd_per_second
        };
        let style = if is_selected {
            Style::default().fg(highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        let row = format!("{marker}{:<18} ${:>6.0}/s", mogul.name, rate);
        doc.block(vec![Line::from(Span::styled(row, style)).centered()], list_visible);
    }
    doc.blank();

    let source = if ctx.live_rate {
        format!("live feed · {}", selected.basis)
    } else {
        format!("estimate · {}", selected.basis)
    };
    doc.block(
        vec![
            Line::from(Span::styled(
                ctx.accrued.clone(),
                Style::default().fg(highlight).add_modifier(Modifier::BOLD),
            ))
            .centered(),
            styled(
                format!("earned by {} since you picked them", selected.name),
                MUTED,
            )
            .centered(),
            styled(source, FAINT).centered(),
        ],
        ctx.reveal.card_visible(SectionId::Moguls, 2, ctx.now_ms),
    );
    doc.blank();
}

fn contact(doc: &mut DocBuilder, ctx: &PageContext, accent: Color) {
    heading(doc, SectionId::Contact, ctx, accent);
    let width = text_width(ctx.width);

    let mut intro: Vec<Line<'static>> = wrap_text(
        "Always happy to talk shop, swap war stories, or take a look at a weird ticket.",
        width,
    )
    .into_iter()
    .map(|row| styled(row, MUTED).centered())
    .collect();
    intro.push(Line::default());
    doc.block(intro, ctx.reveal.card_visible(SectionId::Contact, 0, ctx.now_ms));

    for (index, (label, value)) in CONTACT.iter().enumerate() {
        doc.block(
            vec![
                Line::from(vec![
                    Span::styled(format!("{label:>9}  "), Style::default().fg(FAINT)),
                    Span::styled(*value, Style::default().fg(accent)),
                ])
                .centered(),
            ],
            ctx.reveal.card_visible(SectionId::Contact, index + 1, ctx.now_ms),
        );
    }

    doc.blank();
    let year = Local::now().year();
    doc.push(
        styled(
            format!("© {year} Dennis Heba · rendered entirely in your terminal"),
            FAINT,
        )
        .centered(),
    );
    doc.blank();
    doc.blank();
}

fn styled(text: impl Into<String>, color: Color) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(color)))
}

/// Greedy word wrap. Words longer than the width stay whole on their own
/// row; empty text yields one empty row.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            rows.push(current);
            current = word.to_string();
        }
    }
    rows.push(current);
    rows
}

/// Text measure for the current terminal width.
fn text_width(width: u16) -> usize {
    usize::from(width).saturating_sub(8).clamp(24, CONTENT_WIDTH)
}
