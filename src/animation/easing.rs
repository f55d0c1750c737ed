use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Interpolation curve applied to linear timeline progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    #[default]
    Linear,
    /// Fast start, slow finish: `1 - (1 - t)^2`.
    Decelerate,
    /// Cosine ease in and out.
    EaseInOut,
}

impl Easing {
    /// Maps `t` in `[0, 1]` onto the curve. Input outside the range is clamped.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Decelerate => {
                let inv = 1.0 - t;
                1.0 - inv * inv
            }
            Self::EaseInOut => (1.0 - (PI * t).cos()) / 2.0,
        }
    }
}
