use serde::Serialize;

use super::{color::Rgb, geometry::Point, geometry::Rect};

/// Horizontal text alignment within a target rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Renderer-agnostic draw command.
///
/// A row render emits an ordered sequence of these; later operations paint
/// over earlier ones where they overlap. Sinks (listing, JSON) and any real
/// canvas backend consume the same stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Fill a rectangle with a solid color.
    FillRect { rect: Rect, color: Rgb },
    /// Clip to the inscribed circle of `bounds` and fill it.
    ClipCircleFill { bounds: Rect, color: Rgb },
    /// Fill the inscribed circle of `bounds` without clipping.
    FillCircle { bounds: Rect, color: Rgb },
    /// Draw text inside `rect`, vertically centered, horizontally aligned.
    Text {
        rect: Rect,
        text: String,
        align: TextAlign,
        color: Rgb,
        font_px: i32,
    },
    /// Draw a one-pixel line between two points.
    Line { from: Point, to: Point, color: Rgb },
}
