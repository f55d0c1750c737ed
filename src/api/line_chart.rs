use serde::Serialize;
use tracing::{debug, trace};

use crate::animation::{AnimationClock, AnimationHandle, AnimationRole};
use crate::core::{
    CoordinateMapper, DataPoint, PlotRect, ScreenPoint, Series, SeriesId, SeriesPathBuilder,
    ValueDomain, Viewport,
};
use crate::error::ChartResult;
use crate::interaction::{InteractionState, Selection, nearest_point};
use crate::render::{Color, Paint, Renderer};

use super::LineChartConfig;
use super::layout_helpers::resolve_plot_rect;
use super::validation::{validate_line_chart_config, validate_viewport};

/// Formats amounts for tooltips. Locale/currency handling belongs to the host.
pub type AmountFormatter = Box<dyn Fn(f64) -> String>;

fn default_amount_formatter(value: f64) -> String {
    format!("{value:.2}")
}

/// Series data handed to external renderers (for example a report exporter).
#[derive(Debug, Clone, Serialize)]
pub struct LineChartExport<'a> {
    pub domain: ValueDomain,
    pub primary: &'a Series,
    pub secondary: &'a Series,
}

/// Dual-series animated line/area chart with touch tooltips.
///
/// The host feeds data, pointer events and frame ticks; the chart answers with
/// a `RenderFrame` per draw and exposes the current selection.
pub struct LineChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: LineChartConfig,
    pub(super) primary: Series,
    pub(super) secondary: Series,
    pub(super) domain: ValueDomain,
    pub(super) plot: PlotRect,
    pub(super) series_fills: [Paint; 2],
    pub(super) clock: AnimationClock,
    pub(super) entry: Option<AnimationHandle>,
    pub(super) entry_progress: f64,
    pub(super) interaction: InteractionState,
    pub(super) amount_formatter: AmountFormatter,
    pub(super) path_builder: SeriesPathBuilder,
}

impl<R: Renderer> LineChart<R> {
    pub fn new(renderer: R, config: LineChartConfig) -> ChartResult<Self> {
        validate_line_chart_config(&config)?;

        let primary = Series::empty(SeriesId::Primary, config.primary_name.clone());
        let secondary = Series::empty(SeriesId::Secondary, config.secondary_name.clone());
        let domain = ValueDomain::default();
        let mut chart = Self {
            renderer,
            config,
            primary,
            secondary,
            domain,
            plot: PlotRect::new(0.0, 0.0, 1.0, 1.0),
            series_fills: [Paint::Solid(Color::TRANSPARENT); 2],
            clock: AnimationClock::new(),
            entry: None,
            entry_progress: 1.0,
            interaction: InteractionState::default(),
            amount_formatter: Box::new(default_amount_formatter),
            path_builder: SeriesPathBuilder::new(),
        };
        chart.relayout();
        Ok(chart)
    }

    #[must_use]
    pub fn config(&self) -> &LineChartConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn plot_rect(&self) -> PlotRect {
        self.plot
    }

    #[must_use]
    pub fn domain(&self) -> ValueDomain {
        self.domain
    }

    #[must_use]
    pub fn series(&self, id: SeriesId) -> &Series {
        match id {
            SeriesId::Primary => &self.primary,
            SeriesId::Secondary => &self.secondary,
        }
    }

    /// Raw values of one series, in index order.
    #[must_use]
    pub fn series_values(&self, id: SeriesId) -> Vec<f64> {
        self.series(id).values().collect()
    }

    /// Serializes both series and the shared domain as JSON.
    pub fn export_json(&self) -> ChartResult<String> {
        let export = LineChartExport {
            domain: self.domain,
            primary: &self.primary,
            secondary: &self.secondary,
        };
        Ok(serde_json::to_string(&export)?)
    }

    /// Number of x slots shared by both series.
    #[must_use]
    pub fn index_count(&self) -> usize {
        self.primary.len().max(self.secondary.len())
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.primary.is_empty() || !self.secondary.is_empty()
    }

    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.domain, self.plot, self.index_count())
    }

    pub fn set_amount_formatter(&mut self, formatter: impl Fn(f64) -> String + 'static) {
        self.amount_formatter = Box::new(formatter);
    }

    /// Replaces both series, resets the selection and replays the entry animation.
    ///
    /// Empty data shows the placeholder and starts no animation.
    pub fn set_data(&mut self, primary: Vec<DataPoint>, secondary: Vec<DataPoint>) {
        self.primary = Series::new(SeriesId::Primary, self.config.primary_name.clone(), primary);
        self.secondary = Series::new(
            SeriesId::Secondary,
            self.config.secondary_name.clone(),
            secondary,
        );
        self.domain = ValueDomain::from_series(&self.primary, &self.secondary);
        self.interaction.clear();
        self.relayout();
        debug!(
            primary_count = self.primary.len(),
            secondary_count = self.secondary.len(),
            domain_min = self.domain.min(),
            domain_max = self.domain.max(),
            "set line chart data"
        );

        if self.has_data() {
            let handle = self.clock.start(
                AnimationRole::Entry,
                self.config.entry_duration_ms,
                false,
                self.config.entry_easing,
            );
            self.entry = Some(handle);
            self.entry_progress = self.clock.progress(handle).unwrap_or(1.0);
        } else {
            self.cancel_entry();
        }
    }

    /// Empties both series, cancels animations and shows the placeholder.
    pub fn clear_data(&mut self) {
        self.primary = Series::empty(SeriesId::Primary, self.config.primary_name.clone());
        self.secondary = Series::empty(SeriesId::Secondary, self.config.secondary_name.clone());
        self.domain = ValueDomain::default();
        self.interaction.clear();
        self.clock.cancel_all();
        self.entry = None;
        self.entry_progress = 1.0;
        self.relayout();
        debug!("clear line chart data");
    }

    fn cancel_entry(&mut self) {
        if let Some(handle) = self.entry.take() {
            self.clock.cancel(handle);
        }
        self.entry_progress = 1.0;
    }

    /// Advances animations by `delta_ms`. Returns whether a frame is still needed.
    pub fn tick(&mut self, delta_ms: f64) -> bool {
        let animating = self.clock.tick(delta_ms);
        if let Some(progress) = self.entry.and_then(|handle| self.clock.progress(handle)) {
            self.entry_progress = progress;
        }
        animating
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.entry.is_some_and(|handle| self.clock.is_running(handle))
    }

    /// Eased reveal progress of the entry animation.
    #[must_use]
    pub fn entry_progress(&self) -> f64 {
        self.entry_progress
    }

    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.interaction.selection()
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> Option<&Selection> {
        self.interaction.on_pointer_down(x, y);
        self.update_selection(ScreenPoint::new(x, y))
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<&Selection> {
        self.interaction.on_pointer_move(x, y);
        self.update_selection(ScreenPoint::new(x, y))
    }

    /// Keeps the current selection so the tooltip stays visible.
    pub fn pointer_up(&mut self) {
        self.interaction.on_pointer_up();
    }

    fn update_selection(&mut self, pointer: ScreenPoint) -> Option<&Selection> {
        let selection = nearest_point(
            pointer,
            &[&self.primary, &self.secondary],
            self.mapper(),
            self.entry_progress,
            self.config.tolerance_radius_px,
        );
        match &selection {
            Some(hit) => trace!(series = ?hit.series, index = hit.point.index, "select point"),
            None => trace!(x = pointer.x, y = pointer.y, "no point within tolerance"),
        }
        self.interaction.set_selection(selection);
        self.interaction.selection()
    }

    /// Applies a new surface size, recomputing the plot rectangle and gradients.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.config.viewport = validate_viewport(viewport)?;
        self.relayout();
        let mapper = self.mapper();
        if let Some(selection) = self.interaction.selection() {
            let mut moved = selection.clone();
            moved.position = mapper.to_screen(moved.point.index, moved.point.value);
            self.interaction.set_selection(Some(moved));
        }
        trace!(width = viewport.width, height = viewport.height, "resize line chart");
        Ok(())
    }

    /// Cancels every running timeline. Safe to call repeatedly.
    pub fn detach(&mut self) {
        self.clock.cancel_all();
        self.entry = None;
        debug!("detach line chart");
    }

    fn relayout(&mut self) {
        self.plot = resolve_plot_rect(
            self.config.viewport,
            self.config.padding,
            self.domain,
            &self.config.style,
        );
        let (top, bottom) = (self.plot.top, self.plot.bottom());
        self.series_fills = [
            self.config.style.primary.fill_paint(top, bottom),
            self.config.style.secondary.fill_paint(top, bottom),
        ];
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
