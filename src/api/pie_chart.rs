use tracing::{debug, warn};

use crate::animation::{AnimationClock, AnimationHandle, AnimationRole, Easing};
use crate::core::{PieSlice, ScreenPoint, SliceArc, Viewport, allocate_slices};
use crate::error::ChartResult;
use crate::render::{
    ArcPrimitive, CanvasLayerKind, Paint, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::PieChartConfig;
use super::layout_helpers::{append_empty_state, legend_row_height};
use super::validation::{validate_pie_chart_config, validate_viewport};

const LEGEND_SWATCH_GAP_PX: f64 = 6.0;

/// Resolved placement of the pie on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieGeometry {
    pub center: ScreenPoint,
    pub radius: f64,
    pub inner_radius: f64,
}

/// Animated, optionally rotating pie/donut chart.
pub struct PieChart<R: Renderer> {
    renderer: R,
    config: PieChartConfig,
    slices: Vec<PieSlice>,
    clock: AnimationClock,
    entry: Option<AnimationHandle>,
    rotation: Option<AnimationHandle>,
    entry_progress: f64,
    rotation_deg: f64,
}

impl<R: Renderer> PieChart<R> {
    pub fn new(renderer: R, config: PieChartConfig) -> ChartResult<Self> {
        validate_pie_chart_config(&config)?;
        Ok(Self {
            renderer,
            config,
            slices: Vec::new(),
            clock: AnimationClock::new(),
            entry: None,
            rotation: None,
            entry_progress: 1.0,
            rotation_deg: 0.0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &PieChartConfig {
        &self.config
    }

    #[must_use]
    pub fn slices(&self) -> &[PieSlice] {
        &self.slices
    }

    /// Replaces the slices and replays the entry animation.
    ///
    /// Slices with a non-finite value are dropped; the rest are clamped to
    /// `0..=100` with out-of-range colors replaced. Values are not normalized.
    pub fn set_slices(&mut self, slices: Vec<PieSlice>) {
        let original_count = slices.len();
        self.slices = slices.iter().filter_map(PieSlice::sanitized).collect();
        if self.slices.len() != original_count {
            warn!(
                dropped = original_count - self.slices.len(),
                "dropping pie slices with non-finite value"
            );
        }
        debug!(count = self.slices.len(), "set pie slices");

        if self.slices.is_empty() {
            self.stop_animations();
            return;
        }

        let entry = self.clock.start(
            AnimationRole::Entry,
            self.config.entry_duration_ms,
            false,
            self.config.entry_easing,
        );
        self.entry = Some(entry);
        self.entry_progress = self.clock.progress(entry).unwrap_or(1.0);
        if self.config.rotation_enabled {
            self.start_rotation();
        }
    }

    pub fn clear(&mut self) {
        self.slices.clear();
        self.stop_animations();
        debug!("clear pie slices");
    }

    fn stop_animations(&mut self) {
        self.clock.cancel_all();
        self.entry = None;
        self.rotation = None;
        self.entry_progress = 1.0;
        self.rotation_deg = 0.0;
    }

    fn start_rotation(&mut self) {
        let handle = self.clock.start(
            AnimationRole::Rotation,
            self.config.rotation_period_ms,
            true,
            Easing::Linear,
        );
        self.rotation = Some(handle);
        self.rotation_deg = 0.0;
    }

    /// Turns the continuous rotation on or off.
    ///
    /// The current angle is kept when rotation stops.
    pub fn set_rotation_enabled(&mut self, enabled: bool) {
        self.config.rotation_enabled = enabled;
        if enabled {
            if self.rotation.is_none() && !self.slices.is_empty() {
                self.start_rotation();
            }
        } else if let Some(handle) = self.rotation.take() {
            self.clock.cancel(handle);
        }
    }

    /// Advances animations by `delta_ms`. Returns whether a frame is still needed.
    pub fn tick(&mut self, delta_ms: f64) -> bool {
        let animating = self.clock.tick(delta_ms);
        if let Some(progress) = self.entry.and_then(|handle| self.clock.progress(handle)) {
            self.entry_progress = progress;
        }
        if let Some(progress) = self.rotation.and_then(|handle| self.clock.progress(handle)) {
            self.rotation_deg = progress * 360.0;
        }
        animating
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.entry.is_some_and(|handle| self.clock.is_running(handle))
    }

    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.rotation
            .is_some_and(|handle| self.clock.is_running(handle))
    }

    #[must_use]
    pub fn entry_progress(&self) -> f64 {
        self.entry_progress
    }

    #[must_use]
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    /// Current start/sweep of every slice, in list order.
    #[must_use]
    pub fn arcs(&self) -> Vec<SliceArc> {
        allocate_slices(&self.slices, self.entry_progress, self.rotation_deg)
    }

    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.config.viewport = validate_viewport(viewport)?;
        Ok(())
    }

    /// Cancels every running timeline. Safe to call repeatedly.
    pub fn detach(&mut self) {
        self.clock.cancel_all();
        self.entry = None;
        self.rotation = None;
        debug!("detach pie chart");
    }

    fn legend_height(&self) -> f64 {
        let style = &self.config.style;
        if style.show_legend {
            self.slices.len() as f64 * legend_row_height(style.legend_font_size_px)
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn geometry(&self) -> PieGeometry {
        let viewport = self.config.viewport;
        let padding = self.config.padding_px;
        let area_height = (viewport.height_px() - self.legend_height()).max(0.0);
        let radius = ((viewport.width_px().min(area_height) / 2.0) - padding).max(0.0);
        PieGeometry {
            center: ScreenPoint::new(viewport.width_px() / 2.0, area_height / 2.0),
            radius,
            inner_radius: radius * self.config.inner_radius_ratio,
        }
    }

    /// Index of the slice under `(x, y)`, preferring the last drawn on overlap.
    #[must_use]
    pub fn slice_at(&self, x: f64, y: f64) -> Option<usize> {
        let geometry = self.geometry();
        let (dx, dy) = (x - geometry.center.x, y - geometry.center.y);
        let distance = dx.hypot(dy);
        if !(distance >= geometry.inner_radius && distance <= geometry.radius) {
            return None;
        }
        let angle = dy.atan2(dx).to_degrees();
        self.arcs()
            .iter()
            .rposition(|arc| arc.contains_angle(angle))
    }

    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let viewport = self.config.viewport;
        let style = &self.config.style;
        let mut frame = RenderFrame::new(viewport);

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

        if self.slices.is_empty() {
            append_empty_state(&mut frame, &style.empty_state);
            return frame;
        }

        let geometry = self.geometry();
        let series = frame.layer_mut(CanvasLayerKind::Series);
        for (slice, arc) in self.slices.iter().zip(self.arcs()) {
            if arc.sweep <= 0.0 {
                continue;
            }
            series.arcs.push(ArcPrimitive {
                center: geometry.center,
                radius: geometry.radius,
                inner_radius: geometry.inner_radius,
                start_deg: arc.start,
                sweep_deg: arc.sweep,
                color: slice.color,
            });
        }

        if let Some(caption) = style
            .center_caption
            .as_deref()
            .filter(|caption| !caption.is_empty())
        {
            frame
                .layer_mut(CanvasLayerKind::Overlay)
                .texts
                .push(TextPrimitive::new(
                    caption,
                    geometry.center.x,
                    geometry.center.y + style.center_font_size_px / 3.0,
                    style.center_font_size_px,
                    style.center_text_color,
                    TextHAlign::Center,
                ));
        }

        if style.show_legend {
            let font = style.legend_font_size_px;
            let row_height = legend_row_height(font);
            let top = viewport.height_px() - self.legend_height();
            let left = self.config.padding_px;
            let legend = frame.layer_mut(CanvasLayerKind::Axis);
            for (row, slice) in self.slices.iter().enumerate() {
                let y = top + row as f64 * row_height;
                legend.rects.push(
                    RectPrimitive::new(left, y + 2.0, font, font, Paint::Solid(slice.color))
                        .with_corner_radius(2.0),
                );
                let text = if slice.label.is_empty() {
                    format!("{:.1}%", slice.value)
                } else {
                    format!("{} {:.1}%", slice.label, slice.value)
                };
                legend.texts.push(TextPrimitive::new(
                    text,
                    left + font + LEGEND_SWATCH_GAP_PX,
                    y + font,
                    font,
                    style.legend_text_color,
                    TextHAlign::Left,
                ));
            }
        }

        frame
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
