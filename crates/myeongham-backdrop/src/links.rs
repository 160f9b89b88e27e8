//! Connective line pass between nearby particles.

use crate::particle::Particle;
use crate::surface::{LinkKind, Surface};
use crate::tunables::FieldTunables;

/// Particles dimmer than this take no part in linking.
pub(crate) const VISIBILITY_FLOOR: f64 = 0.1;
/// Lower bound of the scroll fade on link opacity.
const FADE_FLOOR: f64 = 0.3;
/// How strongly scroll dims links.
const FADE_SLOPE: f64 = 0.5;

/// Pair-link distance threshold at a scroll position.
pub(crate) fn link_threshold(scroll: f64, tunables: &FieldTunables) -> f64 {
    tunables.link_distance * (1.0 - scroll * tunables.link_attenuation).max(tunables.link_min_scale)
}

/// Draw the connection mesh and pointer links.
///
/// O(n²) pair scan. Dim particles are skipped outright and each particle
/// carries at most `link_cap` mesh links per tick; pointer links are not
/// capped.
pub(crate) fn draw(
    particles: &[Particle],
    pointer: Option<(f64, f64)>,
    scroll: f64,
    tunables: &FieldTunables,
    surface: &mut dyn Surface,
) {
    let max_dist = link_threshold(scroll, tunables);
    let fade = (1.0 - scroll * FADE_SLOPE).max(FADE_FLOOR);
    let mut links_left = vec![tunables.link_cap; particles.len()];

    for i in 0..particles.len() {
        let a = &particles[i];
        if a.opacity < VISIBILITY_FLOOR {
            continue;
        }

        for j in (i + 1)..particles.len() {
            if links_left[i] == 0 {
                break;
            }
            let b = &particles[j];
            if b.opacity < VISIBILITY_FLOOR || links_left[j] == 0 {
                continue;
            }
            let dist = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
            if dist < max_dist {
                let opacity = (1.0 - dist / max_dist) * tunables.link_max_opacity * fade;
                surface.link(a.x, a.y, b.x, b.y, opacity, LinkKind::Mesh);
                links_left[i] -= 1;
                links_left[j] -= 1;
            }
        }

        if let Some((px, py)) = pointer {
            let dist = ((a.x - px).powi(2) + (a.y - py).powi(2)).sqrt();
            if dist < tunables.pointer_distance {
                let opacity =
                    (1.0 - dist / tunables.pointer_distance) * tunables.pointer_max_opacity * fade;
                surface.link(a.x, a.y, px, py, opacity, LinkKind::Pointer);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    fn particle_at(x: f64, y: f64, opacity: f64) -> Particle {
        Particle {
            base_x: x,
            base_y: y,
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            radius: 1.0,
            opacity,
        }
    }

    #[test]
    fn test_link_requires_distance_below_threshold() {
        let tunables = FieldTunables::default();
        let max = link_threshold(0.0, &tunables);

        let near = [
            particle_at(0.0, 0.0, 0.5),
            particle_at(max - 1.0, 0.0, 0.5),
        ];
        let mut surface = RecordingSurface::new();
        draw(&near, None, 0.0, &tunables, &mut surface);
        assert_eq!(surface.links_of(LinkKind::Mesh).len(), 1);

        // Exactly at the threshold counts as out of reach.
        let boundary = [particle_at(0.0, 0.0, 0.5), particle_at(max, 0.0, 0.5)];
        surface.clear();
        draw(&boundary, None, 0.0, &tunables, &mut surface);
        assert!(surface.links.is_empty());
    }

    #[test]
    fn test_link_requires_visible_endpoints() {
        let tunables = FieldTunables::default();
        let pair = [particle_at(0.0, 0.0, 0.5), particle_at(5.0, 0.0, 0.05)];
        let mut surface = RecordingSurface::new();
        draw(&pair, None, 0.0, &tunables, &mut surface);
        assert!(surface.links.is_empty());
    }

    #[test]
    fn test_link_opacity_linear_falloff() {
        let tunables = FieldTunables::default();
        let max = link_threshold(0.0, &tunables);
        let pair = [
            particle_at(0.0, 0.0, 0.5),
            particle_at(max / 2.0, 0.0, 0.5),
        ];
        let mut surface = RecordingSurface::new();
        draw(&pair, None, 0.0, &tunables, &mut surface);

        // Halfway out means half the configured maximum (no scroll fade).
        let link = surface.links[0];
        assert!((link.opacity - tunables.link_max_opacity * 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_link_opacity_approaches_maximum_up_close() {
        let tunables = FieldTunables::default();
        let pair = [particle_at(0.0, 0.0, 0.5), particle_at(0.1, 0.0, 0.5)];
        let mut surface = RecordingSurface::new();
        draw(&pair, None, 0.0, &tunables, &mut surface);
        let link = surface.links[0];
        assert!(link.opacity > tunables.link_max_opacity * 0.99);
        assert!(link.opacity <= tunables.link_max_opacity);
    }

    #[test]
    fn test_link_cap_bounds_connections() {
        let tunables = FieldTunables {
            link_cap: 1,
            ..FieldTunables::default()
        };
        // Three mutually-close particles; the first pair exhausts both caps.
        let triangle = [
            particle_at(0.0, 0.0, 0.5),
            particle_at(2.0, 0.0, 0.5),
            particle_at(1.0, 1.0, 0.5),
        ];
        let mut surface = RecordingSurface::new();
        draw(&triangle, None, 0.0, &tunables, &mut surface);
        assert_eq!(surface.links_of(LinkKind::Mesh).len(), 1);
    }

    #[test]
    fn test_threshold_shrinks_with_scroll() {
        let tunables = FieldTunables::default();
        let full = link_threshold(0.0, &tunables);
        let scrolled = link_threshold(1.0, &tunables);
        assert!((full - tunables.link_distance).abs() < 1e-9);
        assert!(
            (scrolled - tunables.link_distance * (1.0 - tunables.link_attenuation)).abs() < 1e-9
        );
    }

    #[test]
    fn test_threshold_never_drops_below_min_scale() {
        let tunables = FieldTunables {
            link_attenuation: 0.8,
            ..FieldTunables::default()
        };
        // 1 - 0.8 would undercut the floor; the min scale wins.
        let scrolled = link_threshold(1.0, &tunables);
        assert!((scrolled - tunables.link_distance * tunables.link_min_scale).abs() < 1e-9);
    }

    #[test]
    fn test_pointer_link_within_threshold() {
        let tunables = FieldTunables::default();
        let field = [particle_at(50.0, 50.0, 0.5)];
        let mut surface = RecordingSurface::new();

        draw(&field, Some((55.0, 50.0)), 0.0, &tunables, &mut surface);
        assert_eq!(surface.links_of(LinkKind::Pointer).len(), 1);

        surface.clear();
        let far = (50.0 + tunables.pointer_distance + 1.0, 50.0);
        draw(&field, Some(far), 0.0, &tunables, &mut surface);
        assert!(surface.links.is_empty());

        surface.clear();
        draw(&field, None, 0.0, &tunables, &mut surface);
        assert!(surface.links.is_empty());
    }
}
