//! Tunable constants and presets for the particle field.

use myeongham_core::FieldPreset;

/// Everything that varies between field presets.
///
/// Distances and speeds are in canvas units (braille dots): a terminal cell
/// is 2 units wide and 4 tall.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldTunables {
    /// Particle count at full width.
    pub count_base: usize,
    /// Canvas width below which the count scales down.
    pub narrow_width: f64,
    /// Count multiplier applied below the narrow width.
    pub narrow_scale: f64,
    /// Drift velocity amplitude; components land in ±drift_speed/2 per tick.
    pub drift_speed: f64,
    /// Smallest dot radius.
    pub radius_min: f64,
    /// Radius spread above the minimum.
    pub radius_span: f64,
    /// Scroll zoom strength k: offsets scale by 1 + scroll · k.
    pub zoom_coefficient: f64,
    /// Lower bound of the scroll fade on particle opacity.
    pub fade_floor: f64,
    /// Pair-link distance threshold before scroll attenuation.
    pub link_distance: f64,
    /// How strongly scroll shrinks the link threshold.
    pub link_attenuation: f64,
    /// Lower bound of that shrink factor.
    pub link_min_scale: f64,
    /// Link opacity at zero distance.
    pub link_max_opacity: f64,
    /// Mesh links each particle may carry per tick.
    pub link_cap: usize,
    /// Pointer-link distance threshold.
    pub pointer_distance: f64,
    /// Pointer-link opacity at zero distance.
    pub pointer_max_opacity: f64,
}

impl FieldTunables {
    /// Tunables for a named preset.
    pub fn preset(preset: FieldPreset) -> Self {
        match preset {
            FieldPreset::Classic => Self {
                count_base: 80,
                narrow_width: 160.0,
                narrow_scale: 0.5,
                drift_speed: 0.5,
                radius_min: 1.0,
                radius_span: 2.0,
                zoom_coefficient: 3.0,
                fade_floor: 0.2,
                link_distance: 42.0,
                link_attenuation: 0.3,
                link_min_scale: 0.5,
                link_max_opacity: 0.3,
                link_cap: 6,
                pointer_distance: 28.0,
                pointer_max_opacity: 0.4,
            },
            FieldPreset::Calm => Self {
                count_base: 56,
                drift_speed: 0.3,
                zoom_coefficient: 2.0,
                link_distance: 46.0,
                link_cap: 4,
                ..Self::preset(FieldPreset::Classic)
            },
            FieldPreset::Dense => Self {
                count_base: 120,
                drift_speed: 0.65,
                zoom_coefficient: 4.0,
                link_distance: 36.0,
                link_cap: 8,
                ..Self::preset(FieldPreset::Classic)
            },
        }
    }

    /// Particle count for a canvas width, reduced on narrow canvases.
    pub fn particle_count(&self, width: f64) -> usize {
        if width < self.narrow_width {
            (self.count_base as f64 * self.narrow_scale) as usize
        } else {
            self.count_base
        }
    }
}

impl Default for FieldTunables {
    fn default() -> Self {
        Self::preset(FieldPreset::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_width_halves_count() {
        let t = FieldTunables::preset(FieldPreset::Classic);
        assert_eq!(t.particle_count(200.0), 80);
        assert_eq!(t.particle_count(159.9), 40);
    }

    #[test]
    fn test_default_is_classic() {
        assert_eq!(
            FieldTunables::default(),
            FieldTunables::preset(FieldPreset::Classic)
        );
    }

    #[test]
    fn test_presets_differ_where_it_counts() {
        let classic = FieldTunables::preset(FieldPreset::Classic);
        let calm = FieldTunables::preset(FieldPreset::Calm);
        let dense = FieldTunables::preset(FieldPreset::Dense);
        assert!(calm.count_base < classic.count_base);
        assert!(dense.count_base > classic.count_base);
        assert!(calm.drift_speed < classic.drift_speed);
        assert!(calm.zoom_coefficient < classic.zoom_coefficient);
        assert!(dense.zoom_coefficient > classic.zoom_coefficient);
    }
}
