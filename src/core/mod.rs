pub mod labels;
pub mod mapper;
pub mod pie;
pub mod primitives;
pub mod series_path;
pub mod types;

pub use labels::{LabelIndices, select_label_indices};
pub use mapper::{CoordinateMapper, to_screen};
pub use pie::{MAX_SLICE_PERCENT, PieSlice, SliceArc, allocate_slices};
pub use series_path::{PathCommand, SeriesPath, SeriesPathBuilder, displayed_count};
pub use types::{DataPoint, PlotRect, ScreenPoint, Series, SeriesId, ValueDomain, Viewport};
