//! Single particle record and its motion rules.

use crate::rng;
use crate::tunables::FieldTunables;

/// Margin beyond the canvas, in canvas units, past which a particle fades
/// out entirely.
pub(crate) const OFFSCREEN_MARGIN: f64 = 100.0;

/// Base of the per-tick randomized opacity.
const OPACITY_BASE: f64 = 0.3;
/// Spread of the per-tick randomized opacity above its base.
const OPACITY_SPAN: f64 = 0.3;
/// How strongly scroll progress fades particles.
const FADE_SLOPE: f64 = 0.5;
/// Lane offset separating the opacity shimmer from the spawn lanes.
const SHIMMER_LANE: u64 = 64;

/// One particle of the field.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Drifting position, before the scroll zoom is applied.
    pub base_x: f64,
    pub base_y: f64,
    /// On-screen position after the zoom transform.
    pub x: f64,
    pub y: f64,
    /// Drift velocity in canvas units per tick.
    pub vx: f64,
    pub vy: f64,
    /// Dot radius in canvas units.
    pub radius: f64,
    /// Current opacity in [0, 1].
    pub opacity: f64,
}

/// Everything one update step needs besides the particle itself.
#[derive(Debug, Clone, Copy)]
pub struct UpdateContext<'a> {
    /// Canvas extent in canvas units.
    pub width: f64,
    pub height: f64,
    /// Normalized scroll progress in [0, 1].
    pub scroll: f64,
    /// Field seed for the opacity shimmer.
    pub seed: u64,
    /// Index of the particle within the field.
    pub index: usize,
    /// Tick counter, advanced once per update pass.
    pub tick: u64,
    /// Freeze drift for motion-reduced hosts; zoom and fade still apply.
    pub reduced_motion: bool,
    pub tunables: &'a FieldTunables,
}

/// Spawn the particle batch for a canvas.
pub fn spawn(
    count: usize,
    width: f64,
    height: f64,
    seed: u64,
    tunables: &FieldTunables,
) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let i = i as u64;
            let base_x = rng::unit(seed, i, 0) * width;
            let base_y = rng::unit(seed, i, 1) * height;
            Particle {
                base_x,
                base_y,
                x: base_x,
                y: base_y,
                vx: (rng::unit(seed, i, 2) - 0.5) * tunables.drift_speed,
                vy: (rng::unit(seed, i, 3) - 0.5) * tunables.drift_speed,
                radius: tunables.radius_min + rng::unit(seed, i, 4) * tunables.radius_span,
                opacity: OPACITY_BASE + rng::unit(seed, i, 5) * OPACITY_SPAN,
            }
        })
        .collect()
}

/// Advance one particle by one tick: drift with edge bounce, scroll zoom,
/// opacity recompute.
pub fn update(p: &mut Particle, ctx: &UpdateContext) {
    if !ctx.reduced_motion {
        drift(p, ctx.width, ctx.height);
    }
    project(
        p,
        ctx.width,
        ctx.height,
        ctx.scroll,
        ctx.tunables.zoom_coefficient,
    );
    p.opacity = opacity_for(p, ctx);
}

/// Advance the base position and bounce off canvas edges.
///
/// The position clamps to the bound it crossed, so each velocity component
/// flips at most once per tick.
fn drift(p: &mut Particle, width: f64, height: f64) {
    p.base_x += p.vx;
    if p.base_x < 0.0 {
        p.base_x = 0.0;
        p.vx = -p.vx;
    } else if p.base_x > width {
        p.base_x = width;
        p.vx = -p.vx;
    }

    p.base_y += p.vy;
    if p.base_y < 0.0 {
        p.base_y = 0.0;
        p.vy = -p.vy;
    } else if p.base_y > height {
        p.base_y = height;
        p.vy = -p.vy;
    }
}

/// Scroll-coupled radial zoom: the offset from canvas center scales by
/// `1 + scroll · k`, so the field expands outward as the page scrolls.
fn project(p: &mut Particle, width: f64, height: f64, scroll: f64, k: f64) {
    let zoom = 1.0 + scroll * k;
    let cx = width / 2.0;
    let cy = height / 2.0;
    p.x = cx + (p.base_x - cx) * zoom;
    p.y = cy + (p.base_y - cy) * zoom;
}

/// Opacity for the current tick: zero once the rendered position leaves the
/// expanded bounds, otherwise a shimmering base dimmed by scroll but never
/// below the fade floor.
fn opacity_for(p: &Particle, ctx: &UpdateContext) -> f64 {
    let out = p.x < -OFFSCREEN_MARGIN
        || p.x > ctx.width + OFFSCREEN_MARGIN
        || p.y < -OFFSCREEN_MARGIN
        || p.y > ctx.height + OFFSCREEN_MARGIN;
    if out {
        return 0.0;
    }

    let fade = (1.0 - ctx.scroll * FADE_SLOPE).max(ctx.tunables.fade_floor);
    let shimmer = rng::unit(
        ctx.seed,
        ctx.index as u64,
        ctx.tick.wrapping_add(SHIMMER_LANE),
    );
    (OPACITY_BASE + shimmer * OPACITY_SPAN) * fade
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still_particle(base_x: f64, base_y: f64) -> Particle {
        Particle {
            base_x,
            base_y,
            x: base_x,
            y: base_y,
            vx: 0.0,
            vy: 0.0,
            radius: 1.5,
            opacity: 0.5,
        }
    }

    fn ctx<'a>(scroll: f64, tunables: &'a FieldTunables) -> UpdateContext<'a> {
        UpdateContext {
            width: 200.0,
            height: 100.0,
            scroll,
            seed: 11,
            index: 0,
            tick: 1,
            reduced_motion: false,
            tunables,
        }
    }

    #[test]
    fn test_bounce_flips_velocity_once() {
        let mut p = still_particle(0.3, 50.0);
        p.vx = -1.0;
        drift(&mut p, 200.0, 100.0);
        assert_eq!(p.base_x, 0.0);
        assert_eq!(p.vx, 1.0);

        let mut p = still_particle(199.8, 50.0);
        p.vx = 1.0;
        drift(&mut p, 200.0, 100.0);
        assert_eq!(p.base_x, 200.0);
        assert_eq!(p.vx, -1.0);
    }

    #[test]
    fn test_corner_bounce_flips_both_axes() {
        let mut p = still_particle(0.2, 0.2);
        p.vx = -1.0;
        p.vy = -1.0;
        drift(&mut p, 200.0, 100.0);
        assert_eq!((p.base_x, p.base_y), (0.0, 0.0));
        assert_eq!((p.vx, p.vy), (1.0, 1.0));
    }

    #[test]
    fn test_zoom_identity_at_scroll_zero() {
        let tunables = FieldTunables::default();
        let mut p = still_particle(37.5, 81.25);
        update(&mut p, &ctx(0.0, &tunables));
        assert!((p.x - p.base_x).abs() < 1e-9);
        assert!((p.y - p.base_y).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_scale_at_full_scroll() {
        let tunables = FieldTunables::default();
        let mut p = still_particle(150.0, 75.0);
        update(&mut p, &ctx(1.0, &tunables));
        // Offsets from (100, 50) scale by 1 + k.
        let expected = 1.0 + tunables.zoom_coefficient;
        assert!((p.x - 100.0 - (p.base_x - 100.0) * expected).abs() < 1e-9);
        assert!((p.y - 50.0 - (p.base_y - 50.0) * expected).abs() < 1e-9);
    }

    #[test]
    fn test_opacity_zero_outside_margin() {
        let tunables = FieldTunables::default();
        // At full zoom the edge particle lands far outside width + margin.
        let mut p = still_particle(200.0, 50.0);
        update(&mut p, &ctx(1.0, &tunables));
        assert!(p.x > 200.0 + OFFSCREEN_MARGIN);
        assert_eq!(p.opacity, 0.0);
    }

    #[test]
    fn test_opacity_positive_in_view() {
        let tunables = FieldTunables::default();
        for tick in 0..50 {
            let mut p = still_particle(110.0, 55.0);
            let mut c = ctx(1.0, &tunables);
            c.tick = tick;
            update(&mut p, &c);
            assert!(p.opacity > 0.0);
            assert!(p.opacity <= 1.0);
        }
    }

    #[test]
    fn test_reduced_motion_freezes_drift() {
        let tunables = FieldTunables::default();
        let mut p = still_particle(40.0, 40.0);
        p.vx = 2.0;
        let mut c = ctx(0.0, &tunables);
        c.reduced_motion = true;
        update(&mut p, &c);
        assert_eq!(p.base_x, 40.0);
    }

    #[test]
    fn test_spawn_inside_bounds() {
        let tunables = FieldTunables::default();
        let batch = spawn(80, 200.0, 100.0, 3, &tunables);
        assert_eq!(batch.len(), 80);
        for p in &batch {
            assert!((0.0..=200.0).contains(&p.base_x));
            assert!((0.0..=100.0).contains(&p.base_y));
            assert!(p.radius >= tunables.radius_min);
            assert!(p.radius <= tunables.radius_min + tunables.radius_span);
            assert!(p.vx.abs() <= tunables.drift_speed / 2.0);
            assert!(p.vy.abs() <= tunables.drift_speed / 2.0);
        }
    }
}
