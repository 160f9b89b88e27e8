use std::io::stdout;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Block, Clear, LineGauge, Paragraph, canvas::Canvas},
};

use myeongham_backdrop::{
    Bounds, FieldTunables, IntervalScheduler, ParticleField, SetupError, ShapeLayer, fade_color,
};
use myeongham_config::Config;
use myeongham_content::SKILLS;
use myeongham_core::{ColorTheme, FieldPreset, SectionId};

mod backdrop;
mod earnings;
mod modal;
mod page;
mod rates;
mod viewport;

use backdrop::CanvasSurface;
use earnings::EarningsMeter;
use modal::Modal;
use page::PageContext;
use rates::RatesMonitor;
use viewport::{RevealTracker, SectionSpan, Viewport};

/// Ceiling on the event poll while anything animates.
const FRAME_WAIT: Duration = Duration::from_millis(33);

/// Poll timeout when the backdrop is paused and nothing is in flight.
const IDLE_WAIT: Duration = Duration::from_millis(100);

/// Rows scrolled per wheel step or j/k press.
const WHEEL_STEP: f64 = 3.0;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load();
    let terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture)
        .map_err(color_eyre::Report::from)
        .and_then(|()| App::new(config).run(terminal));
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
struct App {
    /// Is the application running?
    running: bool,
    /// Current color theme.
    theme: ColorTheme,
    /// Current particle preset.
    preset: FieldPreset,
    /// Config overrides applied on top of the preset.
    count_override: Option<usize>,
    zoom_override: Option<f64>,
    drift_override: Option<f64>,
    reduced_motion: bool,

    viewport: Viewport,
    reveal: RevealTracker,
    modal: Modal,
    meter: EarningsMeter,
    rates: Option<RatesMonitor>,

    field: Option<ParticleField>,
    scheduler: IntervalScheduler,
    shapes: ShapeLayer,
    field_seed: u64,
    /// Whether the backdrop should animate.
    backdrop_on: bool,
    /// Footer note when the one-time mount failed.
    backdrop_note: Option<&'static str>,
    mount_attempted: bool,

    selected_skill: usize,

    /// Geometry of the last rendered frame, for mouse mapping.
    body: Rect,
    hero_rows: usize,
    sections: Vec<SectionSpan>,
    skill_rows: Vec<usize>,
    mogul_rows: Vec<usize>,
    nav_hits: Vec<(Rect, SectionId)>,

    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`] from the loaded config.
    pub fn new(config: Config) -> Self {
        let reduced_motion = config.ui.reduced_motion;
        let rates = config.rates.live.then(|| {
            let monitor = RatesMonitor::new(config.rates.url.clone(), config.rates.refresh_minutes);
            monitor.start();
            monitor
        });
        let field_seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0x5EED);

        Self {
            running: false,
            theme: config.ui.color_theme(),
            preset: config.particles.field_preset(),
            count_override: config.particles.count,
            zoom_override: config.particles.zoom,
            drift_override: config.particles.drift,
            reduced_motion,
            viewport: Viewport::new(),
            reveal: RevealTracker::new(reduced_motion),
            modal: Modal::default(),
            meter: EarningsMeter::new(),
            rates,
            field: None,
            scheduler: IntervalScheduler::from_fps(config.ui.fps),
            shapes: ShapeLayer::new(field_seed),
            field_seed,
            backdrop_on: config.particles.enabled,
            backdrop_note: None,
            mount_attempted: false,
            selected_skill: 0,
            body: Rect::default(),
            hero_rows: 0,
            sections: Vec::new(),
            skill_rows: Vec::new(),
            mogul_rows: Vec::new(),
            nav_hits: Vec::new(),
            started: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Milliseconds since launch; the clock reveals and the modal run on.
    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let now_ms = self.now_ms();
        self.viewport.ease();
        self.modal.tick(now_ms);

        let area = frame.area();
        let [body, footer] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
        self.body = body;

        self.ensure_field(body);
        if let Some(field) = self.field.as_mut() {
            field.resize(Bounds::from_cells(body.width, body.height));
            field.set_scroll(self.viewport.field_progress());
            field.advance(&mut self.scheduler);
        }

        // Until the first frame has measured the hero, show it at full strength.
        let hero_fade = if self.hero_rows == 0 {
            1.0
        } else {
            viewport::hero_fade(self.viewport.offset(), self.hero_rows)
        };
        let (rate, live_rate) = self.effective_rate();
        let ctx = PageContext {
            width: body.width,
            theme: self.theme,
            selected_skill: self.selected_skill,
            selected_mogul: self.meter.selected_index(),
            accrued: earnings::format_usd(self.meter.accrued(rate)),
            rate,
            live_rate,
            hero_fade,
            reveal: &self.reveal,
            now_ms,
        };
        let page = page::build(&ctx);

        self.viewport.set_extent(page.lines.len(), body.height);
        for span in &page.sections {
            self.reveal
                .observe(span.id, self.viewport.section_entered(span), now_ms);
        }
        self.hero_rows = page
            .section(SectionId::Hero)
            .map(|span| span.end())
            .unwrap_or(0);
        self.sections = page.sections.clone();
        self.skill_rows = page.skill_rows.clone();
        self.mogul_rows = page.mogul_rows.clone();

        self.render_backdrop(frame, body);
        let paragraph = Paragraph::new(page.lines).scroll((self.viewport.top_row(), 0));
        frame.render_widget(paragraph, body);
        self.render_nav(frame, body);
        self.render_footer(frame, footer);
        self.render_modal(frame, area);
    }

    /// Paint the particle canvas and the floating shapes under the page.
    ///
    /// A paused field keeps painting its last-drawn state; only an unmounted
    /// one leaves the area empty.
    fn render_backdrop(&self, frame: &mut Frame, body: Rect) {
        let Some(field) = &self.field else {
            return;
        };
        let accent = self.theme.accent();
        let highlight = self.theme.highlight();
        let bounds = field.bounds();

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, bounds.width])
            .y_bounds([0.0, bounds.height])
            .paint(|ctx| {
                let mut surface = CanvasSurface::new(ctx, bounds.height, accent, highlight);
                field.draw(&mut surface);
            });
        frame.render_widget(canvas, body);

        if !self.reduced_motion {
            let shapes = self
                .shapes
                .place(body.width, body.height, self.viewport.offset());
            backdrop::render_shapes(frame, body, &shapes, fade_color(accent, 0.45));
        }
    }

    /// Floating section nav on the right edge, shown once the hero is gone.
    fn render_nav(&mut self, frame: &mut Frame, body: Rect) {
        self.nav_hits.clear();
        if !self.viewport.nav_visible(self.hero_rows) {
            return;
        }
        let width = SectionId::NAV
            .iter()
            .map(|id| id.title().chars().count() as u16)
            .max()
            .unwrap_or(0)
            + 4;
        let height = SectionId::NAV.len() as u16 + 2;
        if body.width < width + 4 || body.height < height + 4 {
            return;
        }

        let area = Rect::new(body.right() - width - 1, body.y + 2, width, height);
        frame.render_widget(Clear, area);
        let block = Block::bordered().border_style(Style::default().fg(page::FAINT));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let active = self.viewport.active_section(&self.sections);
        for (index, id) in SectionId::NAV.iter().enumerate() {
            let row = Rect::new(inner.x, inner.y + index as u16, inner.width, 1);
            let style = if *id == active {
                Style::default()
                    .fg(self.theme.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(page::MUTED)
            };
            let marker = if *id == active { "▸ " } else { "  " };
            frame.render_widget(
                Line::from(Span::styled(format!("{marker}{}", id.title()), style)),
                row,
            );
            self.nav_hits.push((row, *id));
        }
    }

    /// Scroll gauge and key hints on the bottom row.
    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let accent = self.theme.accent();
        let [gauge_area, hint_area] =
            Layout::horizontal([Constraint::Length(22), Constraint::Fill(1)]).areas(area);

        let gauge = LineGauge::default()
            .filled_style(Style::default().fg(accent))
            .unfilled_style(Style::default().fg(page::FAINT))
            .label("")
            .ratio(self.viewport.gauge_ratio());
        frame.render_widget(gauge, gauge_area);

        let mut help = vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "j/k".bold().fg(accent),
            " scroll  ".dark_gray(),
            "tab".bold().fg(accent),
            " skills  ".dark_gray(),
            "enter".bold().fg(accent),
            " open  ".dark_gray(),
            "m".bold().fg(accent),
            " mogul  ".dark_gray(),
            "b".bold().fg(accent),
            " backdrop  ".dark_gray(),
            "p".bold().fg(accent),
            " preset  ".dark_gray(),
            "c".bold().fg(accent),
            " color".dark_gray(),
        ];
        if let Some(note) = self.backdrop_note {
            help.push("  ·  ".dark_gray());
            help.push(note.dark_gray());
        }
        frame.render_widget(Line::from(help), hint_area);
    }

    /// Skill detail popup, over everything else.
    fn render_modal(&mut self, frame: &mut Frame, area: Rect) {
        let now_ms = self.now_ms();
        let accent = self.theme.accent();
        match &mut self.modal {
            Modal::Closed => {}
            Modal::Loading { skill, .. } => {
                let skill = &SKILLS[*skill % SKILLS.len()];
                let popup = modal::popup_area(area, 36, 20);
                frame.render_widget(Clear, popup);
                let block = Block::bordered().border_style(Style::default().fg(accent));
                let inner = block.inner(popup);
                frame.render_widget(block, popup);
                if inner.width == 0 || inner.height == 0 {
                    return;
                }
                let row = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
                frame.render_widget(
                    Line::from(vec![
                        Span::styled(modal::spinner(now_ms).to_string(), Style::default().fg(accent)),
                        Span::styled(
                            format!(" loading {}", skill.name),
                            Style::default().fg(page::MUTED),
                        ),
                    ])
                    .centered(),
                    row,
                );
            }
            Modal::Open { skill, scroll } => {
                let detail = &SKILLS[*skill % SKILLS.len()];
                let popup = modal::popup_area(area, 70, 70);
                frame.render_widget(Clear, popup);
                let block = Block::bordered()
                    .border_style(Style::default().fg(accent))
                    .title(Span::styled(
                        format!(" {} ", detail.name),
                        Style::default().fg(accent).add_modifier(Modifier::BOLD),
                    ));
                let inner = block.inner(popup);
                frame.render_widget(block, popup);

                let lines = modal::detail_lines(detail, accent, inner.width);
                let max_scroll = (lines.len() as u16).saturating_sub(inner.height);
                if *scroll > max_scroll {
                    *scroll = max_scroll;
                }
                frame.render_widget(Paragraph::new(lines).scroll((*scroll, 0)), inner);
            }
        }
    }

    /// Mount the particle field once a drawable area exists. Failure is a
    /// skipped backdrop, not an error.
    fn ensure_field(&mut self, body: Rect) {
        if self.mount_attempted || !self.backdrop_on {
            return;
        }
        self.mount_attempted = true;
        match ParticleField::mount(
            Bounds::from_cells(body.width, body.height),
            self.tunables(),
            self.field_seed,
            &mut self.scheduler,
        ) {
            Ok(mut field) => {
                field.set_reduced_motion(self.reduced_motion);
                self.field = Some(field);
                self.backdrop_note = None;
            }
            Err(SetupError::MissingMount) => {
                self.backdrop_note = Some("backdrop off · no drawable area");
            }
            Err(SetupError::UnsupportedEnvironment) => {
                self.backdrop_note = Some("backdrop off · no frame timer");
            }
        }
    }

    /// Tunables for the current preset with the config overrides applied.
    fn tunables(&self) -> FieldTunables {
        let mut tunables = FieldTunables::preset(self.preset);
        if let Some(count) = self.count_override {
            tunables.count_base = count;
        }
        if let Some(zoom) = self.zoom_override {
            tunables.zoom_coefficient = zoom;
        }
        if let Some(drift) = self.drift_override {
            tunables.drift_speed = drift;
        }
        tunables
    }

    /// Rate for the selected mogul, preferring the live feed when present.
    fn effective_rate(&self) -> (f64, bool) {
        let mogul = self.meter.selected();
        if let Some(monitor) = &self.rates
            && let Some(live) = monitor.rate_for(mogul.id)
        {
            (live, true)
        } else {
            (mogul.usd_per_second, false)
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// The poll timeout tracks the next scheduled particle tick and relaxes
    /// when nothing is animating.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let wait = match self.scheduler.until_due() {
            Some(due) => due.min(FRAME_WAIT),
            None if self.viewport.is_easing() || self.modal.is_active() => FRAME_WAIT,
            None => IDLE_WAIT,
        };
        if event::poll(wait)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if self.modal.is_active() {
            self.on_modal_key(key);
            return;
        }
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Down | KeyCode::Char('j')) => self.viewport.scroll_by(WHEEL_STEP),
            (_, KeyCode::Up | KeyCode::Char('k')) => self.viewport.scroll_by(-WHEEL_STEP),
            (_, KeyCode::PageDown | KeyCode::Char(' ')) => self.page_by(1.0),
            (_, KeyCode::PageUp) => self.page_by(-1.0),
            (_, KeyCode::Home | KeyCode::Char('g')) => self.viewport.jump_to(0.0),
            (_, KeyCode::End | KeyCode::Char('G')) => self.viewport.jump_to_bottom(),
            (_, KeyCode::Char('n')) => self.jump_section(1),
            (_, KeyCode::Char('N')) => self.jump_section(-1),
            (_, KeyCode::Tab) => self.select_skill(1),
            (_, KeyCode::BackTab) => self.select_skill(-1),
            (_, KeyCode::Enter) => self.open_modal(self.selected_skill),
            (_, KeyCode::Char('m')) => self.meter.cycle(),
            (_, KeyCode::Char('b')) => self.toggle_backdrop(),
            (_, KeyCode::Char('p')) => self.cycle_preset(),
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            _ => {}
        }
    }

    /// Key handling while the modal traps focus.
    fn on_modal_key(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter) => self.close_modal(),
            (_, KeyCode::Down | KeyCode::Char('j')) => self.modal.scroll_body(1),
            (_, KeyCode::Up | KeyCode::Char('k')) => self.modal.scroll_body(-1),
            (_, KeyCode::PageDown) => self.modal.scroll_body(5),
            (_, KeyCode::PageUp) => self.modal.scroll_body(-5),
            _ => {}
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved => self.track_pointer(mouse.column, mouse.row),
            MouseEventKind::ScrollDown => {
                if self.modal.is_active() {
                    self.modal.scroll_body(2);
                } else {
                    self.viewport.scroll_by(WHEEL_STEP);
                }
            }
            MouseEventKind::ScrollUp => {
                if self.modal.is_active() {
                    self.modal.scroll_body(-2);
                } else {
                    self.viewport.scroll_by(-WHEEL_STEP);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => self.on_click(mouse.column, mouse.row),
            _ => {}
        }
    }

    /// Feed the pointer to the field while it hovers the hero region;
    /// anywhere else clears it so pointer links drop.
    fn track_pointer(&mut self, column: u16, row: u16) {
        let Some(field) = self.field.as_mut() else {
            return;
        };
        let body = self.body;
        if !body.contains(Position::new(column, row)) {
            field.set_pointer(None);
            return;
        }
        let row_in_body = f64::from(row - body.y);
        let hero_visible = self.hero_rows as f64 - self.viewport.offset();
        if row_in_body < hero_visible {
            let x = (f64::from(column - body.x) + 0.5) * 2.0;
            let y = (row_in_body + 0.5) * 4.0;
            field.set_pointer(Some((x, y)));
        } else {
            field.set_pointer(None);
        }
    }

    fn on_click(&mut self, column: u16, row: u16) {
        if self.modal.is_active() {
            // Clicks inside the popup stay with it; anywhere else dismisses.
            if !self.modal_area().contains(Position::new(column, row)) {
                self.close_modal();
            }
            return;
        }
        let position = Position::new(column, row);

        // The floating nav sits on top of the page.
        let nav_target = self
            .nav_hits
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, id)| *id);
        if let Some(id) = nav_target {
            self.jump_to_nav(id);
            return;
        }

        if !self.body.contains(position) {
            return;
        }
        let doc_row = usize::from(row - self.body.y) + usize::from(self.viewport.top_row());

        if let Some(grid_row) = self.skill_rows.iter().position(|r| *r == doc_row) {
            if let Some(index) = self.skill_hit(grid_row, column) {
                self.open_modal(index);
            }
            return;
        }

        if let Some(index) = self.mogul_rows.iter().position(|r| *r == doc_row) {
            self.meter.select(index);
        }
    }

    /// Popup rect of the active modal, rebuilt from the last frame's area.
    fn modal_area(&self) -> Rect {
        let area = Rect::new(
            self.body.x,
            self.body.y,
            self.body.width,
            self.body.height.saturating_add(1),
        );
        match self.modal {
            Modal::Open { .. } => modal::popup_area(area, 70, 70),
            _ => modal::popup_area(area, 36, 20),
        }
    }

    /// Which chip in a grid row the column lands on, mirroring the centered
    /// layout the page builds.
    fn skill_hit(&self, grid_row: usize, column: u16) -> Option<usize> {
        let first = grid_row * 2;
        let left = SKILLS.get(first)?;
        let left_width = left.name.chars().count() as u16 + 4;
        let right = SKILLS.get(first + 1);
        let right_width = right.map(|s| s.name.chars().count() as u16 + 4);

        let total = left_width + right_width.map(|w| w + 4).unwrap_or(0);
        let start = self.body.x + self.body.width.saturating_sub(total) / 2;
        if column >= start && column < start + left_width {
            return Some(first);
        }
        if let Some(right_width) = right_width {
            let right_start = start + left_width + 4;
            if column >= right_start && column < right_start + right_width {
                return Some(first + 1);
            }
        }
        None
    }

    fn jump_section(&mut self, step: i32) {
        let active = self.viewport.active_section(&self.sections);
        let target = if step >= 0 { active.next() } else { active.prev() };
        self.jump_to_nav(target);
    }

    fn jump_to_nav(&mut self, id: SectionId) {
        if let Some(span) = self.sections.iter().find(|s| s.id == id).copied() {
            self.viewport.jump_to_section(&span);
        }
    }

    fn select_skill(&mut self, step: isize) {
        let len = SKILLS.len() as isize;
        self.selected_skill = (self.selected_skill as isize + step).rem_euclid(len) as usize;
    }

    fn open_modal(&mut self, skill: usize) {
        self.selected_skill = skill % SKILLS.len();
        self.modal.open(self.selected_skill, self.now_ms());
    }

    /// Close the detail popup and hand the selection back to its chip.
    fn close_modal(&mut self) {
        if let Some(skill) = self.modal.close() {
            self.selected_skill = skill % SKILLS.len();
        }
    }

    /// Pause or resume the particle backdrop.
    fn toggle_backdrop(&mut self) {
        self.backdrop_on = !self.backdrop_on;
        if let Some(field) = self.field.as_mut() {
            field.set_enabled(self.backdrop_on, &mut self.scheduler);
        } else if self.backdrop_on {
            // Never mounted (disabled in config). Try on the next frame.
            self.mount_attempted = false;
        }
    }

    /// Cycle through the particle presets.
    fn cycle_preset(&mut self) {
        self.preset = self.preset.next();
        let tunables = self.tunables();
        if let Some(field) = self.field.as_mut() {
            field.set_tunables(tunables);
        }
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.theme = self.theme.next();
    }

    /// Scroll by a whole view of rows.
    fn page_by(&mut self, direction: f64) {
        let rows = f64::from(self.body.height.saturating_sub(2).max(1));
        self.viewport.jump_to(self.viewport.offset() + direction * rows);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
