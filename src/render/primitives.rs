use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{PathCommand, ScreenPoint};
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    /// Substitute for color strings that fail to parse.
    pub const FALLBACK: Color = Color::rgb(0.62, 0.62, 0.62);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Creates a color from a 24-bit RGB value (e.g. `0x4CAF50`).
    #[must_use]
    pub fn from_rgb_hex(hex: u32) -> Self {
        Self::from_argb_hex(0xFF00_0000 | (hex & 0x00FF_FFFF))
    }

    /// Creates a color from a 32-bit ARGB value (e.g. `0x804CAF50`).
    #[must_use]
    pub fn from_argb_hex(hex: u32) -> Self {
        let channel = |shift: u32| f64::from((hex >> shift) & 0xFF) / 255.0;
        Self::rgba(channel(16), channel(8), channel(0), channel(24))
    }

    /// Parses `#RRGGBB` or `#AARRGGBB`.
    #[must_use]
    pub fn parse_hex(text: &str) -> Option<Self> {
        let digits = text.trim().strip_prefix('#')?;
        if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Self::from_rgb_hex(value)),
            8 => Some(Self::from_argb_hex(value)),
            _ => None,
        }
    }

    #[must_use]
    pub fn parse_hex_or_fallback(text: &str) -> Self {
        Self::parse_hex(text).unwrap_or_else(|| {
            warn!(color = text, "unparsable color, using fallback");
            Self::FALLBACK
        })
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    fn channels(self) -> [(&'static str, f64); 4] {
        [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ]
    }

    /// Whether every channel is finite and in `[0, 1]`.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.channels()
            .iter()
            .all(|(_, value)| (0.0..=1.0).contains(value))
    }

    /// Returns `self`, or [`Color::FALLBACK`] when a channel is out of range.
    #[must_use]
    pub fn or_fallback(self) -> Self {
        if self.is_valid() {
            self
        } else {
            warn!(color = ?self, "color channel out of range, using fallback");
            Self::FALLBACK
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in self.channels() {
            if !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Fill source for areas and shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    Solid(Color),
    /// Linear gradient along the y axis between two pixel rows.
    VerticalGradient {
        top_y: f64,
        bottom_y: f64,
        top: Color,
        bottom: Color,
    },
}

impl Paint {
    pub fn validate(self) -> ChartResult<()> {
        match self {
            Self::Solid(color) => color.validate(),
            Self::VerticalGradient {
                top_y,
                bottom_y,
                top,
                bottom,
            } => {
                require_finite(&[top_y, bottom_y], "gradient bounds")?;
                top.validate()?;
                bottom.validate()
            }
        }
    }
}

fn require_finite(values: &[f64], what: &str) -> ChartResult<()> {
    if values.iter().any(|value| !value.is_finite()) {
        return Err(ChartError::InvalidData(format!("{what} must be finite")));
    }
    Ok(())
}

fn validate_stroke_width(stroke_width: f64, kind: &str) -> ChartResult<()> {
    if !stroke_width.is_finite() || stroke_width <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{kind} stroke width must be finite and > 0"
        )));
    }
    Ok(())
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        require_finite(&[self.x1, self.y1, self.x2, self.y2], "line coordinates")?;
        validate_stroke_width(self.stroke_width, "line")?;
        self.color.validate()
    }
}

/// Filled, optionally rounded rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub fill: Paint,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill: Paint) -> Self {
        Self {
            x,
            y,
            width,
            height,
            corner_radius: 0.0,
            fill,
        }
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        require_finite(&[self.x, self.y], "rect origin")?;
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(ChartError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Stroked and/or filled vector path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub commands: Vec<PathCommand>,
    pub fill: Option<Paint>,
    pub stroke: Option<(f64, Color)>,
}

impl PathPrimitive {
    #[must_use]
    pub fn stroked(commands: &[PathCommand], stroke_width: f64, color: Color) -> Self {
        Self {
            commands: commands.to_vec(),
            fill: None,
            stroke: Some((stroke_width, color)),
        }
    }

    #[must_use]
    pub fn filled(commands: &[PathCommand], fill: Paint) -> Self {
        Self {
            commands: commands.to_vec(),
            fill: Some(fill),
            stroke: None,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.commands.iter().any(|command| !command.is_finite()) {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        if self.fill.is_none() && self.stroke.is_none() {
            return Err(ChartError::InvalidData(
                "path needs a fill or a stroke".to_owned(),
            ));
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if let Some((stroke_width, color)) = self.stroke {
            validate_stroke_width(stroke_width, "path")?;
            color.validate()?;
        }
        Ok(())
    }
}

/// Filled annular sector. Angles are in degrees, clockwise from 3 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPrimitive {
    pub center: ScreenPoint,
    pub radius: f64,
    /// Zero draws a full pie wedge; positive values draw a donut segment.
    pub inner_radius: f64,
    pub start_deg: f64,
    pub sweep_deg: f64,
    pub color: Color,
}

impl ArcPrimitive {
    pub fn validate(self) -> ChartResult<()> {
        require_finite(
            &[self.center.x, self.center.y, self.start_deg, self.sweep_deg],
            "arc geometry",
        )?;
        if !self.radius.is_finite()
            || !self.inner_radius.is_finite()
            || self.inner_radius < 0.0
            || self.inner_radius > self.radius
        {
            return Err(ChartError::InvalidData(
                "arc radii must satisfy 0 <= inner <= outer".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub center: ScreenPoint,
    pub radius: f64,
    pub fill: Option<Color>,
    pub stroke: Option<(f64, Color)>,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn filled(center: ScreenPoint, radius: f64, color: Color) -> Self {
        Self {
            center,
            radius,
            fill: Some(color),
            stroke: None,
        }
    }

    #[must_use]
    pub const fn with_stroke(mut self, stroke_width: f64, color: Color) -> Self {
        self.stroke = Some((stroke_width, color));
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.center.is_finite() || !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ChartError::InvalidData(
                "circle geometry must be finite with radius >= 0".to_owned(),
            ));
        }
        if let Some(color) = self.fill {
            color.validate()?;
        }
        if let Some((stroke_width, color)) = self.stroke {
            validate_stroke_width(stroke_width, "circle")?;
            color.validate()?;
        }
        Ok(())
    }
}

/// Closed filled polygon (carets, confetti shapes).
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub vertices: Vec<ScreenPoint>,
    pub color: Color,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(vertices: impl Into<Vec<ScreenPoint>>, color: Color) -> Self {
        Self {
            vertices: vertices.into(),
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.vertices.len() < 3 {
            return Err(ChartError::InvalidData(
                "polygon needs at least 3 vertices".to_owned(),
            ));
        }
        if self.vertices.iter().any(|vertex| !vertex.is_finite()) {
            return Err(ChartError::InvalidData(
                "polygon vertices must be finite".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space. `y` is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        require_finite(&[self.x, self.y], "text coordinates")?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Deterministic, backend-independent text width estimate.
#[must_use]
pub fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            'A'..='Z' => 0.68,
            _ => 0.58,
        }
    });
    units * font_size_px
}
