use serde::{Deserialize, Serialize};

use crate::core::ScreenPoint;

pub const STAR_POINTS: usize = 5;
pub const STAR_VERTEX_COUNT: usize = STAR_POINTS * 2;
const STAR_STEP_DEG: f64 = 360.0 / STAR_VERTEX_COUNT as f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleShape {
    Rectangle,
    Circle,
    Star,
}

impl ParticleShape {
    pub const ALL: [ParticleShape; 3] = [
        ParticleShape::Rectangle,
        ParticleShape::Circle,
        ParticleShape::Star,
    ];
}

/// Closed 5-pointed star: 10 vertices alternating outer and inner radius at
/// 36 degree steps. The first vertex points up before `rotation_deg` applies.
#[must_use]
pub fn star_polygon(
    center: ScreenPoint,
    outer_radius: f64,
    inner_radius: f64,
    rotation_deg: f64,
) -> [ScreenPoint; STAR_VERTEX_COUNT] {
    std::array::from_fn(|i| {
        let radius = if i % 2 == 0 {
            outer_radius
        } else {
            inner_radius
        };
        let angle = (rotation_deg - 90.0 + i as f64 * STAR_STEP_DEG).to_radians();
        ScreenPoint::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    })
}

/// Corners of a `width` x `height` rectangle centered on `center`, rotated.
#[must_use]
pub fn rotated_rect(
    center: ScreenPoint,
    width: f64,
    height: f64,
    rotation_deg: f64,
) -> [ScreenPoint; 4] {
    let (sin, cos) = rotation_deg.to_radians().sin_cos();
    let (hw, hh) = (width / 2.0, height / 2.0);
    [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)].map(|(dx, dy)| {
        ScreenPoint::new(
            center.x + dx * cos - dy * sin,
            center.y + dx * sin + dy * cos,
        )
    })
}
