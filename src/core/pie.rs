use serde::{Deserialize, Serialize};

use crate::render::Color;

/// One pie slice. `value` is a percentage in `0..=100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub value: f64,
    pub color: Color,
    pub label: String,
}

/// Largest percentage a single slice can claim. One slice covers the full turn.
pub const MAX_SLICE_PERCENT: f64 = 100.0;

impl PieSlice {
    /// Out-of-range colors are replaced by [`Color::FALLBACK`].
    #[must_use]
    pub fn new(value: f64, color: Color, label: impl Into<String>) -> Self {
        Self {
            value,
            color: color.or_fallback(),
            label: label.into(),
        }
    }

    /// Copy with the color repaired and the value clamped to
    /// `0..=MAX_SLICE_PERCENT`, or `None` when the value is not finite.
    #[must_use]
    pub fn sanitized(&self) -> Option<Self> {
        if !self.value.is_finite() {
            return None;
        }
        Some(Self {
            value: self.value.clamp(0.0, MAX_SLICE_PERCENT),
            color: self.color.or_fallback(),
            label: self.label.clone(),
        })
    }

    /// Builds a slice from a `#RRGGBB` / `#AARRGGBB` color string.
    ///
    /// Unparsable colors fall back to [`Color::FALLBACK`].
    #[must_use]
    pub fn from_hex(value: f64, color: &str, label: impl Into<String>) -> Self {
        Self::new(value, Color::parse_hex_or_fallback(color), label)
    }
}

/// Angular placement of one slice, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceArc {
    pub start: f64,
    pub sweep: f64,
}

impl SliceArc {
    #[must_use]
    pub fn end(self) -> f64 {
        self.start + self.sweep
    }

    /// Whether `angle_deg` lies inside the arc, modulo 360.
    #[must_use]
    pub fn contains_angle(self, angle_deg: f64) -> bool {
        if self.sweep <= 0.0 {
            return false;
        }
        if self.sweep >= 360.0 {
            return true;
        }
        let offset = (angle_deg - self.start).rem_euclid(360.0);
        offset < self.sweep
    }
}

/// Lays slices out sequentially from `rotation_deg`.
///
/// Each sweep is `360 * value * progress / 100`; totals are not normalized, so
/// percentages that do not sum to 100 leave a gap or overlap.
#[must_use]
pub fn allocate_slices(slices: &[PieSlice], progress: f64, rotation_deg: f64) -> Vec<SliceArc> {
    let mut start = rotation_deg;
    slices
        .iter()
        .map(|slice| {
            let animated_value = slice.value * progress;
            let arc = SliceArc {
                start,
                sweep: 360.0 * animated_value / 100.0,
            };
            start = arc.end();
            arc
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{PieSlice, SliceArc};
    use crate::render::Color;

    #[test]
    fn sanitized_clamps_value_and_repairs_color() {
        let slice = PieSlice {
            value: 1e307,
            color: Color::rgb(255.0, 0.0, 0.0),
            label: "big".to_owned(),
        };
        let clean = slice.sanitized().expect("finite value");
        assert_eq!(clean.value, 100.0);
        assert_eq!(clean.color, Color::FALLBACK);
        let negative = PieSlice::new(-5.0, Color::WHITE, "neg");
        assert_eq!(negative.sanitized().map(|slice| slice.value), Some(0.0));
        assert!(
            PieSlice::new(f64::NAN, Color::WHITE, "nan")
                .sanitized()
                .is_none()
        );
    }

    #[test]
    fn contains_angle_wraps_past_full_turn() {
        let arc = SliceArc {
            start: 300.0,
            sweep: 90.0,
        };
        assert!(arc.contains_angle(10.0));
        assert!(arc.contains_angle(-50.0));
        assert!(!arc.contains_angle(45.0));
    }
}
