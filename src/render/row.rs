//! Row renderer for the chat list.
//!
//! `render_row` is a pure function: for one fixed-height row it computes the
//! layout rectangles and emits the ordered draw operations that fully
//! describe the visual result. The caller supplies the row bounds and the
//! per-frame selection/hover flags; the function never mutates anything.

use crate::domain::chat::ChatRow;

use super::{
    elide::elide_right,
    geometry::{Point, Rect},
    metrics::Font,
    ops::{DrawOp, TextAlign},
    palette,
};

/// Fixed row height. Uniform across all rows so the list can virtualize.
pub const ROW_HEIGHT: i32 = 72;
/// Avatar circle diameter.
pub const AVATAR_DIAMETER: i32 = 50;
/// Outer margin: avatar inset, timestamp right gap, preview right gap.
pub const MARGIN: i32 = 12;
/// Unread badge circle diameter.
pub const BADGE_DIAMETER: i32 = 18;
/// How far the badge shifts past the avatar's top-right corner.
const BADGE_OVERLAP: i32 = 6;
/// Left edge of the text column: margin + avatar + margin.
pub const TEXT_LEFT: i32 = MARGIN + AVATAR_DIAMETER + MARGIN;

const NAME_FONT: Font = Font::new(16);
const TIMESTAMP_FONT: Font = Font::new(12);
const PREVIEW_FONT: Font = Font::new(14);
const BADGE_FONT: Font = Font::new(10);

const NAME_BAND_TOP: i32 = 14;
const NAME_BAND_HEIGHT: i32 = 25;
const PREVIEW_BAND_BOTTOM_OFFSET: i32 = 35;
const PREVIEW_BAND_HEIGHT: i32 = 20;

/// Per-frame container state for one row.
///
/// Both flags may be set at once; selection takes precedence for the
/// background fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderState {
    pub selected: bool,
    pub hovered: bool,
}

/// Renders one chat row into an ordered draw-operation sequence.
///
/// `bounds` must have the fixed row height; its width may be anything the
/// container allots. Zero-width bounds produce an empty sequence.
pub fn render_row(bounds: Rect, row: &ChatRow, state: RenderState) -> Vec<DrawOp> {
    debug_assert_eq!(bounds.h, ROW_HEIGHT, "rows have a fixed height");

    if bounds.is_empty() {
        return Vec::new();
    }

    let mut ops = Vec::new();

    // 1. Background. Selection wins over hover.
    let background = if state.selected {
        palette::selected_background()
    } else if state.hovered {
        palette::hover_background()
    } else {
        palette::base_background()
    };
    ops.push(DrawOp::FillRect {
        rect: bounds,
        color: background,
    });

    // 2. Avatar: circle clip over a square, vertically centered.
    let avatar = Rect::new(
        bounds.x + MARGIN,
        bounds.y + (bounds.h - AVATAR_DIAMETER) / 2,
        AVATAR_DIAMETER,
        AVATAR_DIAMETER,
    );
    ops.push(DrawOp::ClipCircleFill {
        bounds: avatar,
        color: row.avatar_color,
    });

    // 3. Unread badge, overlapping the avatar's top-right corner.
    if row.unread_count > 0 {
        let badge = Rect::new(
            avatar.right() - BADGE_OVERLAP,
            avatar.y - BADGE_OVERLAP,
            BADGE_DIAMETER,
            BADGE_DIAMETER,
        );
        ops.push(DrawOp::FillCircle {
            bounds: badge,
            color: palette::badge_background(),
        });
        ops.push(DrawOp::Text {
            rect: badge,
            text: row.unread_count.to_string(),
            align: TextAlign::Center,
            color: palette::badge_text_color(),
            font_px: BADGE_FONT.px(),
        });
    }

    // Timestamp width must be known before the name can be elided.
    let timestamp_width = TIMESTAMP_FONT.measure(&row.timestamp) + MARGIN;

    // 4. Name, elided to the space left of the timestamp.
    let name_width = (bounds.w - TEXT_LEFT - timestamp_width).max(0);
    let name = elide_right(&row.name, NAME_FONT, name_width);
    if !name.is_empty() {
        ops.push(DrawOp::Text {
            rect: Rect::new(
                bounds.x + TEXT_LEFT,
                bounds.y + NAME_BAND_TOP,
                name_width,
                NAME_BAND_HEIGHT,
            ),
            text: name,
            align: TextAlign::Left,
            color: palette::name_color(),
            font_px: NAME_FONT.px(),
        });
    }

    // 5. Timestamp at its natural width, never elided.
    if !row.timestamp.is_empty() {
        ops.push(DrawOp::Text {
            rect: Rect::new(
                bounds.right() - timestamp_width,
                bounds.y + NAME_BAND_TOP,
                timestamp_width - MARGIN,
                NAME_BAND_HEIGHT,
            ),
            text: row.timestamp.clone(),
            align: TextAlign::Right,
            color: palette::timestamp_color(),
            font_px: TIMESTAMP_FONT.px(),
        });
    }

    // 6. Last-message preview near the bottom of the row.
    let preview_width = (bounds.w - TEXT_LEFT - MARGIN).max(0);
    let preview = elide_right(&row.last_message, PREVIEW_FONT, preview_width);
    if !preview.is_empty() {
        ops.push(DrawOp::Text {
            rect: Rect::new(
                bounds.x + TEXT_LEFT,
                bounds.bottom() - 1 - PREVIEW_BAND_BOTTOM_OFFSET,
                preview_width,
                PREVIEW_BAND_HEIGHT,
            ),
            text: preview,
            align: TextAlign::Left,
            color: palette::preview_color(),
            font_px: PREVIEW_FONT.px(),
        });
    }

    // 7. Separator along the bottom edge, starting at the text column.
    let separator_y = bounds.bottom() - 1;
    ops.push(DrawOp::Line {
        from: Point::new(bounds.x + TEXT_LEFT, separator_y),
        to: Point::new(bounds.right(), separator_y),
        color: palette::separator_color(),
    });

    ops
}
