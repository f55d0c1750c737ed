mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;

pub use frame::{LayerPrimitives, RenderFrame};
pub use layer_stack::CanvasLayerKind;
pub use null_renderer::NullRenderer;
pub use primitives::{
    ArcPrimitive, CirclePrimitive, Color, LinePrimitive, Paint, PathPrimitive, PolygonPrimitive,
    RectPrimitive, TextHAlign, TextPrimitive, estimate_text_width_px,
};

use crate::error::ChartResult;

/// Contract implemented by any rasterization backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from chart data, animation and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
