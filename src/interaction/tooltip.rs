use serde::{Deserialize, Serialize};

use crate::core::{ScreenPoint, Viewport};
use crate::render::{Color, estimate_text_width_px};

/// Visual constants of the selection tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipStyle {
    pub font_size_px: f64,
    /// Baseline-to-baseline distance between text lines.
    pub line_height_px: f64,
    pub padding_px: f64,
    /// Gap between the anchor point and the nearest box edge.
    pub anchor_offset_px: f64,
    /// Minimum distance kept from the surface edges.
    pub edge_margin_px: f64,
    pub caret_half_width_px: f64,
    pub corner_radius_px: f64,
    pub background: Color,
    pub text_color: Color,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            font_size_px: 12.0,
            line_height_px: 16.0,
            padding_px: 8.0,
            anchor_offset_px: 14.0,
            edge_margin_px: 8.0,
            caret_half_width_px: 6.0,
            corner_radius_px: 6.0,
            background: Color::rgba(0.13, 0.13, 0.13, 0.92),
            text_color: Color::WHITE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TooltipPlacement {
    Above,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl TooltipRect {
    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipTextLine {
    pub text: String,
    pub x: f64,
    pub baseline_y: f64,
}

/// Resolved tooltip box, caret triangle and text anchors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipGeometry {
    pub rect: TooltipRect,
    pub placement: TooltipPlacement,
    /// Two base vertices on the box edge, then the tip on the anchor point.
    pub caret: [ScreenPoint; 3],
    pub lines: Vec<TooltipTextLine>,
}

/// Places a tooltip for `lines` next to `anchor` without clipping the surface.
///
/// The box prefers to sit above the anchor, horizontally centered. It is
/// shifted inward at the left/right edges and flipped below the anchor when
/// the top edge would clip. Returns `None` when there is nothing to show.
#[must_use]
pub fn layout_tooltip(
    anchor: ScreenPoint,
    lines: &[String],
    surface: Viewport,
    style: &TooltipStyle,
) -> Option<TooltipGeometry> {
    if lines.is_empty() || !anchor.is_finite() {
        return None;
    }

    let widest = lines
        .iter()
        .map(|line| estimate_text_width_px(line, style.font_size_px))
        .fold(0.0, f64::max);
    let width = widest + 2.0 * style.padding_px;
    let height = 2.0 * style.padding_px
        + style.font_size_px
        + (lines.len() - 1) as f64 * style.line_height_px;

    let margin = style.edge_margin_px;
    let mut x = anchor.x - width / 2.0;
    let max_x = surface.width_px() - margin - width;
    if x > max_x {
        x = max_x;
    }
    // The left edge wins when the box is wider than the surface.
    if x < margin {
        x = margin;
    }

    let above_y = anchor.y - style.anchor_offset_px - height;
    let (y, placement) = if above_y < margin {
        (anchor.y + style.anchor_offset_px, TooltipPlacement::Below)
    } else {
        (above_y, TooltipPlacement::Above)
    };
    let rect = TooltipRect {
        x,
        y,
        width,
        height,
    };

    let half = style.caret_half_width_px;
    let inset = style.corner_radius_px + half;
    let caret_x = if rect.width > 2.0 * inset {
        anchor.x.clamp(rect.x + inset, rect.right() - inset)
    } else {
        rect.x + rect.width / 2.0
    };
    let base_y = match placement {
        TooltipPlacement::Above => rect.bottom(),
        TooltipPlacement::Below => rect.y,
    };
    let caret = [
        ScreenPoint::new(caret_x - half, base_y),
        ScreenPoint::new(caret_x + half, base_y),
        anchor,
    ];

    let lines = lines
        .iter()
        .enumerate()
        .map(|(i, text)| TooltipTextLine {
            text: text.clone(),
            x: rect.x + style.padding_px,
            baseline_y: rect.y
                + style.padding_px
                + style.font_size_px
                + i as f64 * style.line_height_px,
        })
        .collect();

    Some(TooltipGeometry {
        rect,
        placement,
        caret,
        lines,
    })
}
