use serde::{Deserialize, Serialize};

use crate::core::mapper::CoordinateMapper;
use crate::core::types::{DataPoint, ScreenPoint};

/// One segment of a vector path in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(ScreenPoint),
    LineTo(ScreenPoint),
    QuadTo { ctrl: ScreenPoint, to: ScreenPoint },
    Close,
}

impl PathCommand {
    #[must_use]
    pub fn is_finite(self) -> bool {
        match self {
            Self::MoveTo(point) | Self::LineTo(point) => point.is_finite(),
            Self::QuadTo { ctrl, to } => ctrl.is_finite() && to.is_finite(),
            Self::Close => true,
        }
    }
}

/// Number of leading points revealed at entry progress `progress`.
///
/// Never below 2 so a line is always drawable, never above `len`.
#[must_use]
pub fn displayed_count(len: usize, progress: f64) -> usize {
    let progress = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        1.0
    };
    let revealed = (len as f64 * progress).floor() as usize;
    revealed.max(2).min(len)
}

/// Borrowed view of the paths produced by [`SeriesPathBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPath<'a> {
    pub line: &'a [PathCommand],
    pub fill: &'a [PathCommand],
    /// Mapped positions of the displayed points, in series order.
    pub points: &'a [ScreenPoint],
}

/// Builds smoothed line and closed fill paths for a partially revealed series.
///
/// Buffers are owned by the builder and cleared in place on every build.
#[derive(Debug, Default)]
pub struct SeriesPathBuilder {
    mapped: Vec<ScreenPoint>,
    line: Vec<PathCommand>,
    fill: Vec<PathCommand>,
}

impl SeriesPathBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` for series shorter than two points.
    pub fn build(
        &mut self,
        points: &[DataPoint],
        progress: f64,
        mapper: CoordinateMapper,
    ) -> Option<SeriesPath<'_>> {
        self.mapped.clear();
        self.line.clear();
        self.fill.clear();
        if points.len() < 2 {
            return None;
        }

        let count = displayed_count(points.len(), progress);
        self.mapped.extend(
            points[..count]
                .iter()
                .map(|point| mapper.to_screen(point.index, point.value)),
        );

        let first = self.mapped[0];
        let last = self.mapped[count - 1];
        let baseline = mapper.plot().bottom();

        self.line.push(PathCommand::MoveTo(first));
        self.fill.push(PathCommand::MoveTo(ScreenPoint::new(first.x, baseline)));
        self.fill.push(PathCommand::LineTo(first));
        for pair in self.mapped.windows(2) {
            let (previous, current) = (pair[0], pair[1]);
            // Control point sits mid-way horizontally at the previous height.
            let segment = PathCommand::QuadTo {
                ctrl: ScreenPoint::new((previous.x + current.x) / 2.0, previous.y),
                to: current,
            };
            self.line.push(segment);
            self.fill.push(segment);
        }
        self.fill.push(PathCommand::LineTo(ScreenPoint::new(last.x, baseline)));
        self.fill.push(PathCommand::Close);

        Some(SeriesPath {
            line: &self.line,
            fill: &self.fill,
            points: &self.mapped,
        })
    }
}
