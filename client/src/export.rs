//! PNG export: composites the pitch background, the drawing surface,
//! and every token onto a fresh high-resolution buffer, then offers the
//! result as a download.
//!
//! The operation is async because the background image must settle
//! first. State is snapshotted only after that await resolves, so
//! tokens moved while the asset loads are reflected in the export.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlAnchorElement, HtmlCanvasElement, HtmlImageElement,
};

use pitchboard_shared::board::{export_file_name, export_size};
use pitchboard_shared::{
    EXPORT_SCALE, PITCH_FALLBACK_COLOR, TOKEN_BORDER_COLOR, TOKEN_BORDER_WIDTH, TOKEN_FILL_COLOR,
    TOKEN_NUMBER_COLOR, TOKEN_NUMBER_FONT, TOKEN_SIZE,
};

use crate::dom::{context_2d, StatusLine};
use crate::state::State;

/// Resolve the pitch image, or `None` when it fails to load; the caller
/// falls back to a solid fill instead of aborting the export.
async fn load_pitch_image(document: &Document, src: &str) -> Option<HtmlImageElement> {
    let image: HtmlImageElement = document
        .create_element("img")
        .ok()?
        .dyn_into()
        .ok()?;
    let promise = Promise::new(&mut |resolve, reject| {
        let onload = Closure::once_into_js(move |_: web_sys::Event| {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = Closure::once_into_js(move |_: web_sys::Event| {
            let _ = reject.call0(&JsValue::NULL);
        });
        image.set_onload(Some(onload.unchecked_ref()));
        image.set_onerror(Some(onerror.unchecked_ref()));
    });
    image.set_src(src);
    match JsFuture::from(promise).await {
        Ok(_) => Some(image),
        Err(_) => None,
    }
}

fn draw_token(ctx: &CanvasRenderingContext2d, number: u8, x: f64, y: f64) -> Result<(), JsValue> {
    // Tokens are re-rendered as vector shapes so the export stays sharp
    // at any scale, instead of rasterizing their on-screen appearance.
    let center_x = x + TOKEN_SIZE / 2.0;
    let center_y = y + TOKEN_SIZE / 2.0;
    let radius = TOKEN_SIZE / 2.0;

    ctx.begin_path();
    ctx.arc(center_x, center_y, radius, 0.0, std::f64::consts::PI * 2.0)?;
    ctx.set_fill_style_str(TOKEN_FILL_COLOR);
    ctx.fill();
    ctx.set_line_width(TOKEN_BORDER_WIDTH);
    ctx.set_stroke_style_str(TOKEN_BORDER_COLOR);
    ctx.stroke();

    ctx.set_fill_style_str(TOKEN_NUMBER_COLOR);
    ctx.set_font(TOKEN_NUMBER_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(&number.to_string(), center_x, center_y)?;
    Ok(())
}

fn timestamped_file_name() -> String {
    let now = js_sys::Date::new_0();
    export_file_name(
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date(),
        now.get_hours(),
        now.get_minutes(),
        now.get_seconds(),
    )
}

fn trigger_download(document: &Document, url: &str, name: &str) -> Result<(), JsValue> {
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(url);
    anchor.set_download(name);
    anchor.click();
    Ok(())
}

/// Composite background, surface, and tokens into a PNG and hand it to
/// the user. Failures end up on the status line, never swallowed.
pub async fn export_png(state: Rc<RefCell<State>>, status: StatusLine) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;

    status.set("busy", "Exporting...");

    let pitch_src = state.borrow().pitch_src.clone();
    // The UI stays live during this await; no state is read before the
    // load settles.
    let background = load_pitch_image(&document, &pitch_src).await;
    if background.is_none() {
        web_sys::console::warn_1(
            &format!("Pitch image {pitch_src} unavailable, exporting with fallback fill").into(),
        );
    }

    let (board_width, board_height, tokens) = {
        let state = state.borrow();
        let (width, height) = state.board_size();
        let tokens: Vec<(u8, f64, f64)> = state
            .tokens
            .iter()
            .map(|token| (token.number, token.x, token.y))
            .collect();
        (width, height, tokens)
    };

    let (out_width, out_height) = export_size(board_width, board_height);
    let output: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    output.set_width(out_width);
    output.set_height(out_height);
    let ctx = context_2d(&output)?;
    ctx.set_transform(EXPORT_SCALE, 0.0, 0.0, EXPORT_SCALE, 0.0, 0.0)?;

    match &background {
        Some(image) => {
            ctx.draw_image_with_html_image_element_and_dw_and_dh(
                image,
                0.0,
                0.0,
                board_width,
                board_height,
            )?;
        }
        None => {
            ctx.set_fill_style_str(PITCH_FALLBACK_COLOR);
            ctx.fill_rect(0.0, 0.0, board_width, board_height);
        }
    }

    {
        let state = state.borrow();
        let physical_width = f64::from(state.canvas.width());
        let physical_height = f64::from(state.canvas.height());
        if physical_width > 0.0 && physical_height > 0.0 {
            ctx.draw_image_with_html_canvas_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                &state.canvas,
                0.0,
                0.0,
                physical_width,
                physical_height,
                0.0,
                0.0,
                board_width,
                board_height,
            )?;
        }
    }

    for (number, x, y) in tokens {
        draw_token(&ctx, number, x, y)?;
    }

    let url = output.to_data_url_with_type("image/png")?;
    let name = timestamped_file_name();
    if trigger_download(&document, &url, &name).is_err() {
        web_sys::console::warn_1(&"Download unsupported, opening the image instead".into());
        window
            .open_with_url(&url)?
            .ok_or_else(|| JsValue::from_str("Unable to present the exported image"))?;
    }

    status.set("ok", &format!("Saved {name}"));
    Ok(())
}
