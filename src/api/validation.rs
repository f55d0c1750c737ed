use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipStyle;
use crate::render::Color;

use super::{EmptyStateStyle, LineChartConfig, PieChartConfig, PlotPadding, SeriesStyle};

pub(super) fn validate_viewport(viewport: Viewport) -> ChartResult<Viewport> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(viewport)
}

fn require_positive(value: f64, name: &str) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}

fn require_non_negative(value: f64, name: &str) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

fn require_color(color: Color, name: &str) -> ChartResult<()> {
    if !color.is_valid() {
        return Err(ChartError::InvalidConfig(format!(
            "{name} channels must be finite and in [0, 1]"
        )));
    }
    Ok(())
}

fn validate_empty_state(style: &EmptyStateStyle) -> ChartResult<()> {
    require_positive(style.font_size_px, "empty_state.font_size_px")?;
    require_color(style.color, "empty_state.color")
}

fn validate_padding(padding: PlotPadding) -> ChartResult<()> {
    require_non_negative(padding.left, "padding.left")?;
    require_non_negative(padding.top, "padding.top")?;
    require_non_negative(padding.right, "padding.right")?;
    require_non_negative(padding.bottom, "padding.bottom")
}

fn validate_series_style(style: SeriesStyle, name: &str) -> ChartResult<()> {
    require_color(style.color, &format!("{name}.color"))?;
    require_positive(style.line_width, &format!("{name}.line_width"))?;
    require_non_negative(style.point_radius, &format!("{name}.point_radius"))?;
    for (field, alpha) in [
        ("fill_top_alpha", style.fill_top_alpha),
        ("fill_bottom_alpha", style.fill_bottom_alpha),
    ] {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ChartError::InvalidConfig(format!(
                "{name}.{field} must be in [0, 1]"
            )));
        }
    }
    Ok(())
}

fn validate_tooltip_style(style: &TooltipStyle) -> ChartResult<()> {
    require_positive(style.font_size_px, "tooltip.font_size_px")?;
    require_positive(style.line_height_px, "tooltip.line_height_px")?;
    require_non_negative(style.padding_px, "tooltip.padding_px")?;
    require_non_negative(style.anchor_offset_px, "tooltip.anchor_offset_px")?;
    require_non_negative(style.edge_margin_px, "tooltip.edge_margin_px")?;
    require_non_negative(style.caret_half_width_px, "tooltip.caret_half_width_px")?;
    require_non_negative(style.corner_radius_px, "tooltip.corner_radius_px")?;
    require_color(style.background, "tooltip.background")?;
    require_color(style.text_color, "tooltip.text_color")
}

pub(super) fn validate_line_chart_config(config: &LineChartConfig) -> ChartResult<()> {
    validate_viewport(config.viewport)?;
    validate_padding(config.padding)?;
    require_positive(config.tolerance_radius_px, "tolerance_radius_px")?;
    require_non_negative(config.entry_duration_ms, "entry_duration_ms")?;

    let style = &config.style;
    validate_series_style(style.primary, "primary")?;
    validate_series_style(style.secondary, "secondary")?;
    require_positive(style.grid_line_width, "grid_line_width")?;
    require_positive(style.axis_font_size_px, "axis_font_size_px")?;
    require_positive(style.legend_font_size_px, "legend_font_size_px")?;
    require_non_negative(style.selected_point_radius, "selected_point_radius")?;
    for (name, color) in [
        ("background", style.background),
        ("point_fill", style.point_fill),
        ("grid_line_color", style.grid_line_color),
        ("axis_label_color", style.axis_label_color),
        ("legend_text_color", style.legend_text_color),
    ] {
        require_color(color, name)?;
    }
    validate_empty_state(&style.empty_state)?;
    if style.grid_line_count == 1 {
        return Err(ChartError::InvalidConfig(
            "grid_line_count must be 0 or >= 2".to_owned(),
        ));
    }
    validate_tooltip_style(&style.tooltip)
}

pub(super) fn validate_pie_chart_config(config: &PieChartConfig) -> ChartResult<()> {
    validate_viewport(config.viewport)?;
    require_non_negative(config.padding_px, "padding_px")?;
    if !(0.0..1.0).contains(&config.inner_radius_ratio) {
        return Err(ChartError::InvalidConfig(
            "inner_radius_ratio must be in [0, 1)".to_owned(),
        ));
    }
    require_non_negative(config.entry_duration_ms, "entry_duration_ms")?;
    require_positive(config.rotation_period_ms, "rotation_period_ms")?;

    let style = &config.style;
    require_positive(style.center_font_size_px, "center_font_size_px")?;
    require_positive(style.legend_font_size_px, "legend_font_size_px")?;
    for (name, color) in [
        ("background", style.background),
        ("center_text_color", style.center_text_color),
        ("legend_text_color", style.legend_text_color),
    ] {
        require_color(color, name)?;
    }
    validate_empty_state(&style.empty_state)
}
