mod tooltip;

pub use hit_test::nearest_point;
pub use tooltip::{
    TooltipGeometry, TooltipPlacement, TooltipRect, TooltipStyle, TooltipTextLine, layout_tooltip,
};

use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, ScreenPoint, SeriesId};

/// Point currently highlighted by touch interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub series: SeriesId,
    pub point: DataPoint,
    /// Mapped position of `point` when the selection was made.
    pub position: ScreenPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Up,
    Down,
}

/// Pointer and selection state of one chart.
///
/// At most one selection exists; every hit-test result replaces it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    phase: PointerPhase,
    pointer: Option<ScreenPoint>,
    selection: Option<Selection>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            phase: PointerPhase::Up,
            pointer: None,
            selection: None,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn phase(&self) -> PointerPhase {
        self.phase
    }

    #[must_use]
    pub fn pointer(&self) -> Option<ScreenPoint> {
        self.pointer
    }

    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        self.phase = PointerPhase::Down;
        self.pointer = Some(ScreenPoint::new(x, y));
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer = Some(ScreenPoint::new(x, y));
    }

    /// Lifting the pointer keeps the current selection visible.
    pub fn on_pointer_up(&mut self) {
        self.phase = PointerPhase::Up;
    }

    pub fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection;
    }

    pub fn clear(&mut self) {
        self.selection = None;
        self.pointer = None;
        self.phase = PointerPhase::Up;
    }
}
