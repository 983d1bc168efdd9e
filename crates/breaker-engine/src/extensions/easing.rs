// extensions/easing.rs
//
// Pure easing curves for tween interpolation.
// No dependencies on entities or the grid, just math.

use std::f32::consts::PI;

/// Easing curve applied to normalized tween progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    /// Slow start.
    CubicIn,
    /// Slow end.
    CubicOut,
    /// Overshoots and springs back into place.
    ElasticOut,
}

impl Easing {
    /// Apply the curve to a normalized time value `t` in [0, 1].
    /// Returns the eased value, also typically in [0, 1] (ElasticOut overshoots).
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::ElasticOut => {
                const C4: f32 = (2.0 * PI) / 3.0;
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else {
                    2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * C4).sin() + 1.0
                }
            }
        }
    }

    /// Short tag used in level and trigger data.
    pub fn tag(self) -> &'static str {
        match self {
            Easing::Linear => "lin",
            Easing::CubicIn => "ein",
            Easing::CubicOut => "eot",
            Easing::ElasticOut => "ela",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "lin" => Some(Easing::Linear),
            "ein" => Some(Easing::CubicIn),
            "eot" => Some(Easing::CubicOut),
            "ela" => Some(Easing::ElasticOut),
            _ => None,
        }
    }
}

// ── Interpolation helpers ────────────────────────────────────────────────

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolate with easing.
#[inline]
pub fn ease(a: f32, b: f32, t: f32, easing: Easing) -> f32 {
    lerp(a, b, easing.apply(t))
}
