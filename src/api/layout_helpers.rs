use crate::core::{PlotRect, ScreenPoint, ValueDomain, Viewport};
use crate::render::{
    CanvasLayerKind, RenderFrame, TextHAlign, TextPrimitive, estimate_text_width_px,
};

use super::{EmptyStateStyle, LineChartStyle, PlotPadding};

/// Horizontal gap between value labels and the plot's left edge.
pub(super) const AXIS_LABEL_GAP_PX: f64 = 6.0;

/// Vertical room taken by the legend row above the plot.
pub(super) fn legend_row_height(font_size_px: f64) -> f64 {
    font_size_px + 10.0
}

/// Compact axis text: `950`, `1.5K`, `2.3M`.
pub(super) fn format_axis_value(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        trim_decimal(value / 1_000_000.0, "M")
    } else if abs >= 1_000.0 {
        trim_decimal(value / 1_000.0, "K")
    } else {
        format!("{value:.0}")
    }
}

fn trim_decimal(scaled: f64, suffix: &str) -> String {
    let text = format!("{scaled:.1}");
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{text}{suffix}")
}

/// Evenly spaced grid values from `domain.min()` to `domain.max()`.
pub(super) fn grid_values(domain: ValueDomain, count: usize) -> Vec<f64> {
    if count < 2 {
        return Vec::new();
    }
    let step = domain.span() / (count - 1) as f64;
    (0..count)
        .map(|i| domain.min() + step * i as f64)
        .collect()
}

/// Resolves the plot rectangle, widening the left padding so the widest
/// value label fits.
pub(super) fn resolve_plot_rect(
    viewport: Viewport,
    padding: PlotPadding,
    domain: ValueDomain,
    style: &LineChartStyle,
) -> PlotRect {
    let widest_label = grid_values(domain, style.grid_line_count)
        .into_iter()
        .map(|value| estimate_text_width_px(&format_axis_value(value), style.axis_font_size_px))
        .fold(0.0, f64::max);
    let left = padding.left.max(widest_label + 2.0 * AXIS_LABEL_GAP_PX);
    let legend = if style.show_legend {
        legend_row_height(style.legend_font_size_px)
    } else {
        0.0
    };
    let top = padding.top + legend;
    let width = (viewport.width_px() - left - padding.right).max(1.0);
    let height = (viewport.height_px() - top - padding.bottom).max(1.0);
    PlotRect::new(left, top, width, height)
}

/// Draws the centered placeholder shown when there is nothing to plot.
pub(super) fn append_empty_state(frame: &mut RenderFrame, style: &EmptyStateStyle) {
    if style.text.is_empty() {
        return;
    }
    let center = ScreenPoint::new(
        frame.viewport.width_px() / 2.0,
        frame.viewport.height_px() / 2.0,
    );
    frame
        .layer_mut(CanvasLayerKind::Overlay)
        .texts
        .push(TextPrimitive::new(
            style.text.clone(),
            center.x,
            center.y + style.font_size_px / 2.0,
            style.font_size_px,
            style.color,
            TextHAlign::Center,
        ));
}
