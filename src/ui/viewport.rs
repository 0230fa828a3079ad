//! Viewport pass: assigns row bounds and collects draw operations.

use crate::domain::chat_list_state::ChatListState;
use crate::render::{
    geometry::Rect,
    ops::DrawOp,
    row::{render_row, RenderState, ROW_HEIGHT},
};

/// The visible area of the list, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

/// Renders every row that intersects the viewport, in row order.
///
/// A stateless pass-through: each visible row gets bounds at
/// `y = index * ROW_HEIGHT - scroll_offset` and its selection/hover flags
/// from the list state, then the row renderer does the rest. Rows fully
/// above or below the viewport emit nothing.
pub fn render_visible(state: &ChatListState, viewport: Viewport) -> Vec<DrawOp> {
    let view = Rect::new(0, 0, viewport.width, viewport.height);
    let mut ops = Vec::new();

    for (index, row) in state.rows().iter().enumerate() {
        let y = index as i32 * ROW_HEIGHT - state.scroll_offset();
        if !view.overlaps_vertically(y, ROW_HEIGHT) {
            continue;
        }

        let bounds = Rect::new(0, y, viewport.width, ROW_HEIGHT);
        let row_state = RenderState {
            selected: state.selected_index() == Some(index),
            hovered: state.hovered_index() == Some(index),
        };
        ops.extend(render_row(bounds, row, row_state));
    }

    ops
}
