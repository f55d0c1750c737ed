use crate::core::{ScreenPoint, SeriesId, select_label_indices};
use crate::interaction::layout_tooltip;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LinePrimitive, Paint, PathPrimitive, PolygonPrimitive,
    RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive, estimate_text_width_px,
};

use super::LineChart;
use super::layout_helpers::{
    AXIS_LABEL_GAP_PX, append_empty_state, format_axis_value, grid_values,
};

const LEGEND_SWATCH_GAP_PX: f64 = 6.0;
const LEGEND_ENTRY_GAP_PX: f64 = 16.0;

impl<R: Renderer> LineChart<R> {
    /// Materializes the current chart state into a layered frame.
    pub fn build_render_frame(&mut self) -> RenderFrame {
        let viewport = self.config.viewport;
        let mut frame = RenderFrame::new(viewport);
        let style = &self.config.style;

        if style.background.alpha > 0.0 {
            frame
                .layer_mut(CanvasLayerKind::Background)
                .rects
                .push(RectPrimitive::new(
                    0.0,
                    0.0,
                    viewport.width_px(),
                    viewport.height_px(),
                    Paint::Solid(style.background),
                ));
        }

        if !self.has_data() {
            append_empty_state(&mut frame, &style.empty_state);
            return frame;
        }

        self.append_grid(&mut frame);
        self.append_x_labels(&mut frame);
        self.append_series(&mut frame);
        self.append_legend(&mut frame);
        self.append_selection(&mut frame);
        frame
    }

    fn append_grid(&self, frame: &mut RenderFrame) {
        let style = &self.config.style;
        let mapper = self.mapper();
        for value in grid_values(self.domain, style.grid_line_count) {
            let y = mapper.y_for_value(value);
            frame
                .layer_mut(CanvasLayerKind::Grid)
                .lines
                .push(LinePrimitive::new(
                    self.plot.left,
                    y,
                    self.plot.right(),
                    y,
                    style.grid_line_width,
                    style.grid_line_color,
                ));
            frame
                .layer_mut(CanvasLayerKind::Axis)
                .texts
                .push(TextPrimitive::new(
                    format_axis_value(value),
                    self.plot.left - AXIS_LABEL_GAP_PX,
                    y + style.axis_font_size_px / 3.0,
                    style.axis_font_size_px,
                    style.axis_label_color,
                    TextHAlign::Right,
                ));
        }
    }

    fn append_x_labels(&self, frame: &mut RenderFrame) {
        let style = &self.config.style;
        let mapper = self.mapper();
        let baseline = self.plot.bottom() + style.axis_font_size_px + AXIS_LABEL_GAP_PX;
        for index in select_label_indices(self.index_count()) {
            let label = self
                .primary
                .points
                .get(index)
                .or_else(|| self.secondary.points.get(index))
                .map(|point| point.label.as_str())
                .unwrap_or_default();
            if label.is_empty() {
                continue;
            }
            frame
                .layer_mut(CanvasLayerKind::Axis)
                .texts
                .push(TextPrimitive::new(
                    label,
                    mapper.x_for_index(index),
                    baseline,
                    style.axis_font_size_px,
                    style.axis_label_color,
                    TextHAlign::Center,
                ));
        }
    }

    fn append_series(&mut self, frame: &mut RenderFrame) {
        let mapper = self.mapper();
        let style = &self.config.style;
        for (slot, series) in [&self.primary, &self.secondary].into_iter().enumerate() {
            let series_style = style.series(series.id);
            let Some(path) = self
                .path_builder
                .build(&series.points, self.entry_progress, mapper)
            else {
                continue;
            };

            let layer = frame.layer_mut(CanvasLayerKind::Series);
            layer
                .paths
                .push(PathPrimitive::filled(path.fill, self.series_fills[slot]));
            layer.paths.push(PathPrimitive::stroked(
                path.line,
                series_style.line_width,
                series_style.color,
            ));
            // Zero-valued samples still shape the line but get no marker.
            for (point, position) in series.points.iter().zip(path.points) {
                if point.value <= 0.0 {
                    continue;
                }
                layer.circles.push(
                    CirclePrimitive::filled(*position, series_style.point_radius, style.point_fill)
                        .with_stroke(series_style.line_width / 1.5, series_style.color),
                );
            }
        }
    }

    fn append_legend(&self, frame: &mut RenderFrame) {
        let style = &self.config.style;
        if !style.show_legend {
            return;
        }
        let font = style.legend_font_size_px;
        let center_y = self.config.padding.top + font / 2.0;
        let mut x = self.plot.left;
        for series in [&self.primary, &self.secondary] {
            if series.is_empty() || series.name.is_empty() {
                continue;
            }
            let swatch_radius = font / 3.0;
            let layer = frame.layer_mut(CanvasLayerKind::Axis);
            layer.circles.push(CirclePrimitive::filled(
                ScreenPoint::new(x + swatch_radius, center_y),
                swatch_radius,
                style.series(series.id).color,
            ));
            x += 2.0 * swatch_radius + LEGEND_SWATCH_GAP_PX;
            layer.texts.push(TextPrimitive::new(
                series.name.clone(),
                x,
                center_y + font / 3.0,
                font,
                style.legend_text_color,
                TextHAlign::Left,
            ));
            x += estimate_text_width_px(&series.name, font) + LEGEND_ENTRY_GAP_PX;
        }
    }

    fn append_selection(&self, frame: &mut RenderFrame) {
        let Some(selection) = self.interaction.selection() else {
            return;
        };
        let style = &self.config.style;
        let series_style = style.series(selection.series);
        let anchor = selection.position;

        frame
            .layer_mut(CanvasLayerKind::Overlay)
            .circles
            .push(
                CirclePrimitive::filled(anchor, style.selected_point_radius, series_style.color)
                    .with_stroke(2.0, style.point_fill),
            );

        let series_name = match selection.series {
            SeriesId::Primary => &self.primary.name,
            SeriesId::Secondary => &self.secondary.name,
        };
        let lines: Vec<String> = [
            series_name.clone(),
            (self.amount_formatter)(selection.point.value),
            selection.point.label.clone(),
        ]
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect();
        let Some(tooltip) = layout_tooltip(anchor, &lines, self.config.viewport, &style.tooltip)
        else {
            return;
        };

        let tooltip_style = &style.tooltip;
        let layer = frame.layer_mut(CanvasLayerKind::Tooltip);
        layer.rects.push(
            RectPrimitive::new(
                tooltip.rect.x,
                tooltip.rect.y,
                tooltip.rect.width,
                tooltip.rect.height,
                Paint::Solid(tooltip_style.background),
            )
            .with_corner_radius(tooltip_style.corner_radius_px),
        );
        layer
            .polygons
            .push(PolygonPrimitive::new(tooltip.caret, tooltip_style.background));
        for line in tooltip.lines {
            layer.texts.push(TextPrimitive::new(
                line.text,
                line.x,
                line.baseline_y,
                tooltip_style.font_size_px,
                tooltip_style.text_color,
                TextHAlign::Left,
            ));
        }
    }
}
