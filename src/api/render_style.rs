use serde::{Deserialize, Serialize};

use crate::core::SeriesId;
use crate::interaction::TooltipStyle;
use crate::render::{Color, Paint};

pub const EMPTY_STATE_TEXT: &str = "No data available";

/// Immutable look of the placeholder drawn when a chart has no data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmptyStateStyle {
    pub text: String,
    pub font_size_px: f64,
    pub color: Color,
}

impl Default for EmptyStateStyle {
    fn default() -> Self {
        Self {
            text: EMPTY_STATE_TEXT.to_owned(),
            font_size_px: 14.0,
            color: Color::rgb(0.55, 0.55, 0.55),
        }
    }
}

/// Stroke and fill of one line-chart series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub color: Color,
    pub line_width: f64,
    /// Alpha of the area fill at the top of the plot; it fades to
    /// `fill_bottom_alpha` at the baseline.
    pub fill_top_alpha: f64,
    pub fill_bottom_alpha: f64,
    pub point_radius: f64,
}

impl SeriesStyle {
    #[must_use]
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            line_width: 2.5,
            fill_top_alpha: 0.35,
            fill_bottom_alpha: 0.0,
            point_radius: 4.0,
        }
    }

    /// Vertical gradient spanning `top_y..bottom_y`.
    #[must_use]
    pub fn fill_paint(self, top_y: f64, bottom_y: f64) -> Paint {
        Paint::VerticalGradient {
            top_y,
            bottom_y,
            top: self.color.with_alpha(self.fill_top_alpha),
            bottom: self.color.with_alpha(self.fill_bottom_alpha),
        }
    }
}

/// Immutable style descriptor of the dual-series line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartStyle {
    pub background: Color,
    pub primary: SeriesStyle,
    pub secondary: SeriesStyle,
    pub point_fill: Color,
    pub selected_point_radius: f64,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    /// Number of horizontal grid lines, including top and bottom.
    pub grid_line_count: usize,
    pub axis_label_color: Color,
    pub axis_font_size_px: f64,
    pub show_legend: bool,
    pub legend_font_size_px: f64,
    pub legend_text_color: Color,
    #[serde(default)]
    pub tooltip: TooltipStyle,
    #[serde(default)]
    pub empty_state: EmptyStateStyle,
}

impl Default for LineChartStyle {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            primary: SeriesStyle::with_color(Color::from_rgb_hex(0x4CAF50)),
            secondary: SeriesStyle::with_color(Color::from_rgb_hex(0xF44336)),
            point_fill: Color::WHITE,
            selected_point_radius: 7.0,
            grid_line_color: Color::rgba(0.0, 0.0, 0.0, 0.08),
            grid_line_width: 1.0,
            grid_line_count: 5,
            axis_label_color: Color::rgb(0.45, 0.45, 0.45),
            axis_font_size_px: 11.0,
            show_legend: true,
            legend_font_size_px: 12.0,
            legend_text_color: Color::rgb(0.25, 0.25, 0.25),
            tooltip: TooltipStyle::default(),
            empty_state: EmptyStateStyle::default(),
        }
    }
}

impl LineChartStyle {
    #[must_use]
    pub fn series(&self, id: SeriesId) -> SeriesStyle {
        match id {
            SeriesId::Primary => self.primary,
            SeriesId::Secondary => self.secondary,
        }
    }
}

/// Immutable style descriptor of the pie/donut chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartStyle {
    pub background: Color,
    /// Optional text drawn in the donut hole.
    pub center_caption: Option<String>,
    pub center_font_size_px: f64,
    pub center_text_color: Color,
    pub show_legend: bool,
    pub legend_font_size_px: f64,
    pub legend_text_color: Color,
    #[serde(default)]
    pub empty_state: EmptyStateStyle,
}

impl Default for PieChartStyle {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            center_caption: None,
            center_font_size_px: 16.0,
            center_text_color: Color::rgb(0.2, 0.2, 0.2),
            show_legend: true,
            legend_font_size_px: 12.0,
            legend_text_color: Color::rgb(0.25, 0.25, 0.25),
            empty_state: EmptyStateStyle::default(),
        }
    }
}
