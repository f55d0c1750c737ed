use crate::core::types::{PlotRect, ScreenPoint, ValueDomain};

/// Maps `(index, value)` into the plot rectangle.
///
/// The index divisor is clamped to at least 1 so single-point series land on
/// `plot.left` instead of dividing by zero.
#[must_use]
pub fn to_screen(
    index: usize,
    value: f64,
    series_len: usize,
    domain: ValueDomain,
    plot: PlotRect,
) -> ScreenPoint {
    CoordinateMapper::new(domain, plot, series_len).to_screen(index, value)
}

/// Reusable data-to-screen projection for one draw pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    domain: ValueDomain,
    plot: PlotRect,
    x_step: f64,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(domain: ValueDomain, plot: PlotRect, series_len: usize) -> Self {
        let divisor = series_len.saturating_sub(1).max(1) as f64;
        Self {
            domain,
            plot,
            x_step: plot.width / divisor,
        }
    }

    #[must_use]
    pub fn domain(self) -> ValueDomain {
        self.domain
    }

    #[must_use]
    pub fn plot(self) -> PlotRect {
        self.plot
    }

    #[must_use]
    pub fn x_for_index(self, index: usize) -> f64 {
        self.plot.left + index as f64 * self.x_step
    }

    #[must_use]
    pub fn y_for_value(self, value: f64) -> f64 {
        let normalized = (value - self.domain.min()) / self.domain.span();
        self.plot.bottom() - normalized * self.plot.height
    }

    /// Inverse of [`Self::y_for_value`].
    #[must_use]
    pub fn value_at_y(self, y: f64) -> f64 {
        let normalized = (self.plot.bottom() - y) / self.plot.height;
        self.domain.min() + normalized * self.domain.span()
    }

    #[must_use]
    pub fn to_screen(self, index: usize, value: f64) -> ScreenPoint {
        ScreenPoint::new(self.x_for_index(index), self.y_for_value(value))
    }
}
