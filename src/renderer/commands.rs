//! Draw command definitions.

use crate::color::Color;
use crate::geometry::Rect;

/// Clip region in absolute coordinates with optional rounded corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRegion {
    pub rect: Rect,
    pub corner_radius: f32,
}

impl ClipRegion {
    pub fn new(rect: Rect, corner_radius: f32) -> Self {
        Self {
            rect,
            corner_radius,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.rect.contains_rounded(x, y, self.corner_radius)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient, `0.0..=1.0`
    pub offset: f32,
    pub color: Color,
}

/// Left-to-right linear gradient spanning the shape it fills.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Stops are sorted by offset; an empty list samples as transparent.
    pub fn horizontal(stops: impl IntoIterator<Item = GradientStop>) -> Self {
        let mut stops: Vec<_> = stops.into_iter().collect();
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        Self { stops }
    }

    /// Evenly spaced stops, like `linear-gradient(90deg, a, b, c)`.
    pub fn even(colors: &[Color]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        Self::horizontal(colors.iter().enumerate().map(|(i, &color)| GradientStop {
            offset: i as f32 / last,
            color,
        }))
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Color at position `t` across the shape.
    pub fn sample(&self, t: f32) -> Color {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Color::TRANSPARENT;
        };
        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                if span <= 0.0 {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.offset) / span);
            }
        }
        last.color
    }
}

/// A single draw operation in absolute coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Draw a rounded rectangle with an optional gradient.
    RoundedRect {
        /// Rectangle bounds
        rect: Rect,
        /// Fill color
        color: Color,
        /// Corner radius in logical pixels
        radius: f32,
        /// Optional gradient (overrides solid color)
        gradient: Option<Gradient>,
        /// Every clip must contain a pixel for it to be drawn
        clips: Vec<ClipRegion>,
    },
}

impl DrawCommand {
    /// Create a simple rounded rectangle.
    pub fn rounded_rect(rect: Rect, color: Color, radius: f32) -> Self {
        Self::RoundedRect {
            rect,
            color,
            radius,
            gradient: None,
            clips: Vec::new(),
        }
    }

    /// Create a rectangle filled with a gradient.
    pub fn gradient_rect(rect: Rect, gradient: Gradient) -> Self {
        Self::RoundedRect {
            rect,
            color: Color::TRANSPARENT,
            radius: 0.0,
            gradient: Some(gradient),
            clips: Vec::new(),
        }
    }

    pub fn rect(&self) -> Rect {
        match self {
            DrawCommand::RoundedRect { rect, .. } => *rect,
        }
    }

    pub fn clips(&self) -> &[ClipRegion] {
        match self {
            DrawCommand::RoundedRect { clips, .. } => clips,
        }
    }
}
