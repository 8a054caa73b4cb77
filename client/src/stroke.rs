//! Freehand strokes: pointer movement becomes connected line segments
//! committed straight to the surface. Nothing is buffered or retained
//! beyond the last point of each active pointer.

use web_sys::{HtmlInputElement, PointerEvent};

use pitchboard_shared::{Point, Tool, DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH};

use crate::dom::release_capture;
use crate::state::State;

fn event_point(event: &PointerEvent) -> Point {
    Point {
        x: f64::from(event.offset_x()),
        y: f64::from(event.offset_y()),
    }
}

/// Width slider reading, falling back to the default when the control
/// is absent or holds junk.
pub fn slider_width(size_input: Option<&HtmlInputElement>) -> f64 {
    size_input
        .and_then(|input| input.value().parse::<f64>().ok())
        .unwrap_or(DEFAULT_STROKE_WIDTH)
}

/// Pen color, read at stroke time rather than cached at tool selection:
/// a mid-stroke change takes effect on the very next segment.
pub fn stroke_color(color_input: Option<&HtmlInputElement>) -> String {
    color_input
        .map(|input| input.value())
        .filter(|color| !color.is_empty())
        .unwrap_or_else(|| DEFAULT_STROKE_COLOR.to_string())
}

/// Pointer-down over the canvas: enter the drawing state for this
/// pointer and capture it so move/up events route here regardless of
/// where the pointer travels.
pub fn pointer_down(state: &mut State, event: &PointerEvent) {
    if event.button() != 0 {
        return;
    }
    state.strokes.begin(event.pointer_id(), event_point(event));
    let _ = state.canvas.set_pointer_capture(event.pointer_id());
}

/// Pointer-move while drawing: commit one segment from the previous
/// point and advance it. Tool semantics are applied per segment, so a
/// tool or color switch never leaks into strokes already on the surface.
pub fn pointer_move(
    state: &mut State,
    event: &PointerEvent,
    size_input: Option<&HtmlInputElement>,
    color_input: Option<&HtmlInputElement>,
) {
    let Some((from, to)) = state.strokes.advance(event.pointer_id(), event_point(event)) else {
        return;
    };

    let tool = state.tool;
    let ctx = &state.ctx;
    let _ = ctx.set_global_composite_operation(tool.composite_operation());
    ctx.set_line_width(tool.line_width(slider_width(size_input)));
    if tool == Tool::Pen {
        ctx.set_stroke_style_str(&stroke_color(color_input));
    }
    ctx.begin_path();
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.stroke();
}

/// Pointer-up, pointer-cancel, and pointer-leave all end the stroke the
/// same way; anything less leaves a stuck drawing state.
pub fn pointer_stop(state: &mut State, event: &PointerEvent) {
    if state.strokes.end(event.pointer_id()) {
        release_capture(&state.canvas, event.pointer_id());
    }
}
