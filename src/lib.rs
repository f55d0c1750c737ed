//! chart-motion: animated chart rendering and interaction engine.
//!
//! The crate turns series data, pointer events and frame ticks into layered
//! `RenderFrame`s. Drawing is left to a `Renderer` backend supplied by the host.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod particles;
pub mod render;
pub mod telemetry;

pub use api::{
    ConfettiView, LineChart, LineChartConfig, PieChart, PieChartConfig, PlotPadding,
};
pub use error::{ChartError, ChartResult};
