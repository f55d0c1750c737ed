use serde::{Deserialize, Serialize};

/// Z-ordered drawing layers of one frame, bottom first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Background,
    Grid,
    Series,
    Overlay,
    Axis,
    Tooltip,
}

impl CanvasLayerKind {
    pub const CANONICAL_ORDER: [CanvasLayerKind; 6] = [
        CanvasLayerKind::Background,
        CanvasLayerKind::Grid,
        CanvasLayerKind::Series,
        CanvasLayerKind::Overlay,
        CanvasLayerKind::Axis,
        CanvasLayerKind::Tooltip,
    ];
}

#[cfg(test)]
mod tests {
    use super::CanvasLayerKind;

    #[test]
    fn tooltip_is_drawn_last() {
        assert_eq!(
            CanvasLayerKind::CANONICAL_ORDER.last(),
            Some(&CanvasLayerKind::Tooltip)
        );
        assert_eq!(
            CanvasLayerKind::CANONICAL_ORDER.first(),
            Some(&CanvasLayerKind::Background)
        );
    }
}
