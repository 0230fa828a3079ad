//! Human-readable dump of a draw-operation stream.

use std::fmt::Write as _;

use crate::render::ops::{DrawOp, TextAlign};

/// Formats an operation sequence as one line per operation.
pub fn format_ops(ops: &[DrawOp]) -> String {
    let mut out = String::new();
    for op in ops {
        // String formatting is infallible.
        let _ = writeln!(out, "{}", format_op(op));
    }
    out
}

fn format_op(op: &DrawOp) -> String {
    match op {
        DrawOp::FillRect { rect, color } => {
            format!(
                "fill_rect        x={} y={} w={} h={} color={color}",
                rect.x, rect.y, rect.w, rect.h
            )
        }
        DrawOp::ClipCircleFill { bounds, color } => {
            format!(
                "clip_circle_fill x={} y={} d={} color={color}",
                bounds.x, bounds.y, bounds.w
            )
        }
        DrawOp::FillCircle { bounds, color } => {
            format!(
                "fill_circle      x={} y={} d={} color={color}",
                bounds.x, bounds.y, bounds.w
            )
        }
        DrawOp::Text {
            rect,
            text,
            align,
            color,
            font_px,
        } => {
            format!(
                "text             x={} y={} w={} h={} align={} px={font_px} color={color} {text:?}",
                rect.x,
                rect.y,
                rect.w,
                rect.h,
                align_label(*align)
            )
        }
        DrawOp::Line { from, to, color } => {
            format!(
                "line             ({},{}) -> ({},{}) color={color}",
                from.x, from.y, to.x, to.y
            )
        }
    }
}

fn align_label(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "left",
        TextAlign::Center => "center",
        TextAlign::Right => "right",
    }
}
