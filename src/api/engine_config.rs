use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::core::Viewport;

use super::{LineChartStyle, PieChartStyle};

/// Space reserved around the plot rectangle, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPadding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotPadding {
    #[must_use]
    pub const fn uniform(padding: f64) -> Self {
        Self {
            left: padding,
            top: padding,
            right: padding,
            bottom: padding,
        }
    }
}

impl Default for PlotPadding {
    fn default() -> Self {
        Self {
            left: 16.0,
            top: 16.0,
            right: 16.0,
            bottom: 28.0,
        }
    }
}

/// Bootstrap configuration of a [`super::LineChart`].
///
/// Serializable so hosts can keep chart setup next to their own settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub padding: PlotPadding,
    #[serde(default = "default_tolerance_radius_px")]
    pub tolerance_radius_px: f64,
    #[serde(default = "default_entry_duration_ms")]
    pub entry_duration_ms: f64,
    #[serde(default = "default_entry_easing")]
    pub entry_easing: Easing,
    #[serde(default = "default_primary_name")]
    pub primary_name: String,
    #[serde(default = "default_secondary_name")]
    pub secondary_name: String,
    #[serde(default)]
    pub style: LineChartStyle,
}

impl LineChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            padding: PlotPadding::default(),
            tolerance_radius_px: default_tolerance_radius_px(),
            entry_duration_ms: default_entry_duration_ms(),
            entry_easing: default_entry_easing(),
            primary_name: default_primary_name(),
            secondary_name: default_secondary_name(),
            style: LineChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: PlotPadding) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the maximum pointer-to-point distance counted as a hit.
    #[must_use]
    pub fn with_tolerance_radius(mut self, tolerance_radius_px: f64) -> Self {
        self.tolerance_radius_px = tolerance_radius_px;
        self
    }

    #[must_use]
    pub fn with_entry_animation(mut self, duration_ms: f64, easing: Easing) -> Self {
        self.entry_duration_ms = duration_ms;
        self.entry_easing = easing;
        self
    }

    #[must_use]
    pub fn with_series_names(
        mut self,
        primary: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Self {
        self.primary_name = primary.into();
        self.secondary_name = secondary.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: LineChartStyle) -> Self {
        self.style = style;
        self
    }
}

/// Bootstrap configuration of a [`super::PieChart`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartConfig {
    pub viewport: Viewport,
    #[serde(default = "default_pie_padding_px")]
    pub padding_px: f64,
    /// Donut hole radius relative to the outer radius. Zero draws a full pie.
    #[serde(default = "default_inner_radius_ratio")]
    pub inner_radius_ratio: f64,
    #[serde(default = "default_entry_duration_ms")]
    pub entry_duration_ms: f64,
    #[serde(default = "default_entry_easing")]
    pub entry_easing: Easing,
    #[serde(default = "default_rotation_enabled")]
    pub rotation_enabled: bool,
    /// Time for one full turn of the rotation animation.
    #[serde(default = "default_rotation_period_ms")]
    pub rotation_period_ms: f64,
    #[serde(default)]
    pub style: PieChartStyle,
}

impl PieChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            padding_px: default_pie_padding_px(),
            inner_radius_ratio: default_inner_radius_ratio(),
            entry_duration_ms: default_entry_duration_ms(),
            entry_easing: default_entry_easing(),
            rotation_enabled: default_rotation_enabled(),
            rotation_period_ms: default_rotation_period_ms(),
            style: PieChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_inner_radius_ratio(mut self, ratio: f64) -> Self {
        self.inner_radius_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_entry_animation(mut self, duration_ms: f64, easing: Easing) -> Self {
        self.entry_duration_ms = duration_ms;
        self.entry_easing = easing;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, enabled: bool, period_ms: f64) -> Self {
        self.rotation_enabled = enabled;
        self.rotation_period_ms = period_ms;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: PieChartStyle) -> Self {
        self.style = style;
        self
    }
}

fn default_tolerance_radius_px() -> f64 {
    40.0
}

fn default_entry_duration_ms() -> f64 {
    1000.0
}

fn default_entry_easing() -> Easing {
    Easing::Decelerate
}

fn default_primary_name() -> String {
    "Income".to_owned()
}

fn default_secondary_name() -> String {
    "Expense".to_owned()
}

fn default_pie_padding_px() -> f64 {
    16.0
}

fn default_inner_radius_ratio() -> f64 {
    0.55
}

fn default_rotation_enabled() -> bool {
    true
}

fn default_rotation_period_ms() -> f64 {
    20_000.0
}
