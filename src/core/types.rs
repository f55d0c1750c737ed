use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::primitives::{datetime_to_unix_millis, decimal_to_f64};
use crate::core::series_path::displayed_count;
use crate::error::ChartResult;

/// Size of the host drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }
}

/// Position in surface-local pixel space. Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: ScreenPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Padded drawing region of a chart, excluding axis and legend margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}

/// One sample of a series.
///
/// `timestamp` is an opaque ordering key supplied by the host; charts never
/// interpret it beyond carrying it through selections and exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub index: usize,
    pub value: f64,
    pub label: String,
    pub timestamp: i64,
}

impl DataPoint {
    #[must_use]
    pub fn new(index: usize, value: f64, label: impl Into<String>) -> Self {
        Self {
            index,
            value,
            label: label.into(),
            timestamp: index as i64,
        }
    }

    /// Builds a point from an exact decimal amount.
    pub fn from_decimal(
        index: usize,
        amount: Decimal,
        label: impl Into<String>,
    ) -> ChartResult<Self> {
        Ok(Self::new(index, decimal_to_f64(amount, "amount")?, label))
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn with_time(self, time: DateTime<Utc>) -> Self {
        self.with_timestamp(datetime_to_unix_millis(time))
    }
}

/// Identity of the two concurrent series of a line chart.
///
/// Declaration order is evaluation order for hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeriesId {
    Primary,
    Secondary,
}

/// Ordered samples sharing the chart value domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: SeriesId,
    pub name: String,
    pub points: Vec<DataPoint>,
}

impl Series {
    /// Creates a series, dropping samples whose value is not finite.
    ///
    /// Indices are re-assigned from insertion order.
    #[must_use]
    pub fn new(id: SeriesId, name: impl Into<String>, points: Vec<DataPoint>) -> Self {
        let original_count = points.len();
        let points: Vec<DataPoint> = points
            .into_iter()
            .filter(|point| point.value.is_finite())
            .enumerate()
            .map(|(index, point)| DataPoint { index, ..point })
            .collect();
        if points.len() != original_count {
            warn!(
                series = ?id,
                dropped = original_count - points.len(),
                "dropping non-finite samples"
            );
        }
        Self {
            id,
            name: name.into(),
            points,
        }
    }

    #[must_use]
    pub fn empty(id: SeriesId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Leading points drawn at entry progress `progress`.
    ///
    /// Empty for series shorter than two points, which are never drawn.
    #[must_use]
    pub fn revealed_points(&self, progress: f64) -> &[DataPoint] {
        if self.points.len() < 2 {
            return &[];
        }
        &self.points[..displayed_count(self.points.len(), progress)]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|point| point.value)
    }
}

/// Shared value range of both series. `max > min` and `min >= 0` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueDomain {
    min: f64,
    max: f64,
}

impl Default for ValueDomain {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

impl ValueDomain {
    pub const DEFAULT_MIN: f64 = 0.0;
    pub const DEFAULT_MAX: f64 = 100.0;
    const PADDING_RATIO: f64 = 0.1;

    /// Derives the padded domain from every finite value yielded.
    ///
    /// Falls back to `[0, 100]` when no value is available.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values.into_iter().filter(|value| value.is_finite()) {
            min = min.min(value);
            max = max.max(value);
        }
        if !min.is_finite() || !max.is_finite() {
            return Self::default();
        }

        let range = max - min;
        let padding = if range > 0.0 {
            range * Self::PADDING_RATIO
        } else {
            (max.abs() * Self::PADDING_RATIO).max(1.0)
        };
        let padded_min = (min - padding).max(0.0);
        let mut padded_max = max + padding;
        if padded_max <= padded_min {
            padded_max = padded_min + 1.0;
        }
        Self {
            min: padded_min,
            max: padded_max,
        }
    }

    #[must_use]
    pub fn from_series(primary: &Series, secondary: &Series) -> Self {
        Self::from_values(primary.values().chain(secondary.values()))
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}
