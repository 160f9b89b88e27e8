//! Particle field state and the per-tick update/draw cycle.

use std::fmt;

use crate::links;
use crate::particle::{self, Particle, UpdateContext};
use crate::scheduler::{TickHandle, TickScheduler};
use crate::surface::Surface;
use crate::tunables::FieldTunables;

/// Canvas extent in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Bounds for a cell area under the braille raster (2×4 dots per cell).
    pub fn from_cells(width: u16, height: u16) -> Self {
        Self::new(f64::from(width) * 2.0, f64::from(height) * 4.0)
    }

    /// True when there is nothing to draw on.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Why the field could not be set up.
///
/// Both cases are one-time mount checks; callers skip the backdrop and move
/// on rather than treating them as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// No drawable area to mount on.
    MissingMount,
    /// The host cannot schedule animation ticks.
    UnsupportedEnvironment,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::MissingMount => write!(f, "no drawable area to mount the backdrop on"),
            SetupError::UnsupportedEnvironment => {
                write!(f, "host cannot schedule animation ticks")
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// The particle field.
///
/// One explicit instance owned by the hosting app; all mutation happens
/// through its methods inside the host's event loop.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Bounds,
    tunables: FieldTunables,
    seed: u64,
    tick: u64,
    /// Normalized scroll progress in [0, 1].
    scroll: f64,
    /// Pointer in canvas units; None while outside the tracked region.
    pointer: Option<(f64, f64)>,
    enabled: bool,
    /// Pending tick handle. Some iff a tick is currently scheduled.
    pending: Option<TickHandle>,
    reduced_motion: bool,
}

impl ParticleField {
    /// Mount the field on a drawing area and schedule its first tick.
    pub fn mount(
        bounds: Bounds,
        tunables: FieldTunables,
        seed: u64,
        scheduler: &mut dyn TickScheduler,
    ) -> Result<Self, SetupError> {
        if bounds.is_empty() {
            return Err(SetupError::MissingMount);
        }
        let Some(handle) = scheduler.request_tick() else {
            return Err(SetupError::UnsupportedEnvironment);
        };

        let count = tunables.particle_count(bounds.width);
        Ok(Self {
            particles: particle::spawn(count, bounds.width, bounds.height, seed, &tunables),
            bounds,
            tunables,
            seed,
            tick: 0,
            scroll: 0.0,
            pointer: None,
            enabled: true,
            pending: Some(handle),
            reduced_motion: false,
        })
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn tunables(&self) -> &FieldTunables {
        &self.tunables
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// True while a tick is scheduled with the host.
    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    pub fn scroll(&self) -> f64 {
        self.scroll
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    /// Swap in new tunables (preset change) and respawn the batch.
    pub fn set_tunables(&mut self, tunables: FieldTunables) {
        self.tunables = tunables;
        self.respawn();
    }

    /// Toggle the animation.
    ///
    /// Disabling cancels the pending tick so no further update or draw
    /// cycle runs; the last-drawn state stays current. Re-enabling requests
    /// a fresh tick and the cycle resumes on the next frame.
    pub fn set_enabled(&mut self, enabled: bool, scheduler: &mut dyn TickScheduler) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if enabled {
            if self.pending.is_none() {
                self.pending = scheduler.request_tick();
            }
        } else if let Some(handle) = self.pending.take() {
            scheduler.cancel_tick(handle);
        }
    }

    /// Rebuild the batch for a new canvas size. Scroll, pointer, and the
    /// enabled state survive; the particles do not.
    pub fn resize(&mut self, bounds: Bounds) {
        if bounds.is_empty() || bounds == self.bounds {
            return;
        }
        self.bounds = bounds;
        self.respawn();
    }

    /// Update only the scroll scalar.
    pub fn set_scroll(&mut self, progress: f64) {
        self.scroll = progress.clamp(0.0, 1.0);
    }

    /// Update only the pointer position (canvas units). `None` marks the
    /// pointer as outside the tracked region, which disables pointer links.
    pub fn set_pointer(&mut self, pointer: Option<(f64, f64)>) {
        self.pointer = pointer;
    }

    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    /// Advance one tick if the scheduler reports one due, then chain the
    /// next tick request. Returns whether state advanced.
    pub fn advance(&mut self, scheduler: &mut dyn TickScheduler) -> bool {
        if !self.enabled || self.pending.is_none() {
            return false;
        }
        let Some(due) = scheduler.poll_due() else {
            return false;
        };
        debug_assert_eq!(Some(due), self.pending);

        self.tick = self.tick.wrapping_add(1);
        for (index, p) in self.particles.iter_mut().enumerate() {
            let ctx = UpdateContext {
                width: self.bounds.width,
                height: self.bounds.height,
                scroll: self.scroll,
                seed: self.seed,
                index,
                tick: self.tick,
                reduced_motion: self.reduced_motion,
                tunables: &self.tunables,
            };
            particle::update(p, &ctx);
        }

        self.pending = scheduler.request_tick();
        true
    }

    /// Paint the current state: dots first, the link pass on top.
    pub fn draw(&self, surface: &mut dyn Surface) {
        for p in &self.particles {
            if p.opacity > 0.0 {
                surface.dot(p.x, p.y, p.radius, p.opacity);
            }
        }
        links::draw(
            &self.particles,
            self.pointer,
            self.scroll,
            &self.tunables,
            surface,
        );
    }

    /// One host frame: advance if a tick is due, then paint. Disabled or
    /// idle frames paint nothing and return false.
    pub fn run_frame(
        &mut self,
        scheduler: &mut dyn TickScheduler,
        surface: &mut dyn Surface,
    ) -> bool {
        if self.advance(scheduler) {
            self.draw(surface);
            true
        } else {
            false
        }
    }

    fn respawn(&mut self) {
        let count = self.tunables.particle_count(self.bounds.width);
        self.particles = particle::spawn(
            count,
            self.bounds.width,
            self.bounds.height,
            self.seed,
            &self.tunables,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{ManualScheduler, NullScheduler};
    use crate::surface::{LinkKind, RecordingSurface};

    fn mounted() -> (ParticleField, ManualScheduler) {
        let mut scheduler = ManualScheduler::new();
        let field = ParticleField::mount(
            Bounds::new(200.0, 100.0),
            FieldTunables::default(),
            7,
            &mut scheduler,
        )
        .unwrap();
        (field, scheduler)
    }

    #[test]
    fn test_mount_on_empty_area_is_missing_mount() {
        let mut scheduler = ManualScheduler::new();
        let err = ParticleField::mount(
            Bounds::new(0.0, 40.0),
            FieldTunables::default(),
            1,
            &mut scheduler,
        )
        .unwrap_err();
        assert_eq!(err, SetupError::MissingMount);
    }

    #[test]
    fn test_mount_without_tick_support_is_unsupported() {
        let mut scheduler = NullScheduler;
        let err = ParticleField::mount(
            Bounds::new(200.0, 100.0),
            FieldTunables::default(),
            1,
            &mut scheduler,
        )
        .unwrap_err();
        assert_eq!(err, SetupError::UnsupportedEnvironment);
    }

    #[test]
    fn test_mount_schedules_first_tick() {
        let (field, scheduler) = mounted();
        assert!(field.is_scheduled());
        assert_eq!(scheduler.requests, 1);
        assert_eq!(
            field.particles().len(),
            field.tunables().particle_count(200.0)
        );
    }

    #[test]
    fn test_opacity_stays_in_unit_range() {
        let (mut field, mut scheduler) = mounted();
        for step in 0..30 {
            field.set_scroll(step as f64 / 29.0);
            scheduler.fire();
            assert!(field.advance(&mut scheduler));
            for p in field.particles() {
                assert!((0.0..=1.0).contains(&p.opacity));
            }
        }
    }

    #[test]
    fn test_advance_without_due_tick_is_noop() {
        let (mut field, mut scheduler) = mounted();
        let before = field.particles().to_vec();
        assert!(!field.advance(&mut scheduler));
        assert_eq!(field.particles(), &before[..]);
    }

    #[test]
    fn test_advance_chains_next_tick() {
        let (mut field, mut scheduler) = mounted();
        scheduler.fire();
        assert!(field.advance(&mut scheduler));
        assert!(field.is_scheduled());
        assert_eq!(scheduler.requests, 2);
    }

    #[test]
    fn test_disable_cancels_pending_tick() {
        let (mut field, mut scheduler) = mounted();
        field.set_enabled(false, &mut scheduler);
        assert!(!field.enabled());
        assert!(!field.is_scheduled());
        assert_eq!(scheduler.cancellations, 1);
        assert_eq!(scheduler.pending(), None);
    }

    #[test]
    fn test_no_draw_after_disable() {
        let (mut field, mut scheduler) = mounted();
        field.set_enabled(false, &mut scheduler);

        // Even a firing host frame produces no paint once disabled.
        scheduler.fire();
        let mut surface = RecordingSurface::new();
        assert!(!field.run_frame(&mut scheduler, &mut surface));
        assert!(surface.is_empty());
    }

    #[test]
    fn test_reenable_resumes_within_one_tick() {
        let (mut field, mut scheduler) = mounted();
        field.set_enabled(false, &mut scheduler);
        field.set_enabled(true, &mut scheduler);
        assert!(field.is_scheduled());

        scheduler.fire();
        let mut surface = RecordingSurface::new();
        assert!(field.run_frame(&mut scheduler, &mut surface));
        assert!(!surface.dots.is_empty());
    }

    #[test]
    fn test_scroll_updates_only_the_scalar() {
        let (mut field, _) = mounted();
        let before = field.particles().to_vec();
        field.set_scroll(0.7);
        assert_eq!(field.scroll(), 0.7);
        assert_eq!(field.particles(), &before[..]);

        field.set_scroll(4.0);
        assert_eq!(field.scroll(), 1.0);
        field.set_scroll(-1.0);
        assert_eq!(field.scroll(), 0.0);
    }

    #[test]
    fn test_resize_rebuilds_for_new_width() {
        let (mut field, _) = mounted();
        assert_eq!(field.particles().len(), 80);

        // Below the narrow breakpoint the count halves.
        field.set_scroll(0.4);
        field.resize(Bounds::new(150.0, 80.0));
        assert_eq!(field.particles().len(), 40);
        // Scroll state survives the rebuild.
        assert_eq!(field.scroll(), 0.4);

        for p in field.particles() {
            assert!((0.0..=150.0).contains(&p.base_x));
            assert!((0.0..=80.0).contains(&p.base_y));
        }
    }

    #[test]
    fn test_resize_to_same_bounds_keeps_batch() {
        let (mut field, _) = mounted();
        let before = field.particles().to_vec();
        field.resize(Bounds::new(200.0, 100.0));
        assert_eq!(field.particles(), &before[..]);
    }

    #[test]
    fn test_pointer_sentinel_disables_pointer_links() {
        let (mut field, _) = mounted();
        let anchor = (field.particles()[0].x, field.particles()[0].y);

        let mut surface = RecordingSurface::new();
        field.set_pointer(Some(anchor));
        field.draw(&mut surface);
        assert!(!surface.links_of(LinkKind::Pointer).is_empty());

        surface.clear();
        field.set_pointer(None);
        field.draw(&mut surface);
        assert!(surface.links_of(LinkKind::Pointer).is_empty());
    }

    #[test]
    fn test_preset_change_respawns_batch() {
        let (mut field, _) = mounted();
        let dense = FieldTunables {
            count_base: 120,
            ..FieldTunables::default()
        };
        field.set_tunables(dense);
        assert_eq!(field.particles().len(), 120);
    }
}
