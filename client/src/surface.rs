//! The drawing surface: keeps the canvas backing store aligned to its
//! displayed size and the device pixel ratio, without losing committed
//! strokes.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

use pitchboard_shared::board::backing_size;

use crate::dom::context_2d;
use crate::state::State;

/// Recompute the backing-store size from the element's displayed size
/// and the device pixel ratio, then restore the previous content scaled
/// into the new buffer. Drawing commands afterwards are issued in CSS
/// pixels.
pub fn resize(document: &Document, window: &Window, state: &State) -> Result<(), JsValue> {
    let old_width = state.canvas.width();
    let old_height = state.canvas.height();

    // Snapshot the current buffer; the canvas forgets its pixels the
    // moment width/height are assigned.
    let scratch: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    let has_content = old_width > 0 && old_height > 0;
    if has_content {
        scratch.set_width(old_width);
        scratch.set_height(old_height);
        context_2d(&scratch)?.draw_image_with_html_canvas_element(&state.canvas, 0.0, 0.0)?;
    }

    let rect = state.canvas.get_bounding_client_rect();
    let dpr = window.device_pixel_ratio();
    let (width, height) = backing_size(rect.width(), rect.height(), dpr);
    state.canvas.set_width(width);
    state.canvas.set_height(height);

    state.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    state.ctx.set_line_cap("round");
    state.ctx.set_line_join("round");

    if has_content {
        state.ctx.save();
        state.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
        let _ = state
            .ctx
            .draw_image_with_html_canvas_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                &scratch,
                0.0,
                0.0,
                f64::from(old_width),
                f64::from(old_height),
                0.0,
                0.0,
                f64::from(width),
                f64::from(height),
            );
        state.ctx.restore();
    }

    Ok(())
}

/// Erase the whole physical buffer. Pending strokes are discarded; the
/// logical-unit transform survives via save/restore.
pub fn clear(state: &State) {
    state.ctx.save();
    let _ = state.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    state.ctx.clear_rect(
        0.0,
        0.0,
        f64::from(state.canvas.width()),
        f64::from(state.canvas.height()),
    );
    state.ctx.restore();
}
