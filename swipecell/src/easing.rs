/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Exponential ease-in-ease-out, used by the mount peek.
    ExpInOut,
    /// Damped-oscillator curve, used by the programmatic close.
    /// Overshoots the target before settling; the only non-monotonic variant.
    Spring,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    /// Every variant maps 0 to 0 and 1 to 1.
    pub fn apply(self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::ExpInOut => {
                if t < 0.5 {
                    2f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Easing::Spring => 1.0 - (-6.0 * t).exp() * (12.0 * t).cos(),
        }
    }
}
