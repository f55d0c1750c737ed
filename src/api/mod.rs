mod confetti_view;
mod engine_config;
mod layout_helpers;
mod line_chart;
mod line_chart_frame;
mod pie_chart;
mod render_style;
mod validation;

pub use confetti_view::ConfettiView;
pub use engine_config::{LineChartConfig, PieChartConfig, PlotPadding};
pub use line_chart::{AmountFormatter, LineChart, LineChartExport};
pub use pie_chart::{PieChart, PieGeometry};
pub use render_style::{
    EMPTY_STATE_TEXT, EmptyStateStyle, LineChartStyle, PieChartStyle, SeriesStyle,
};
