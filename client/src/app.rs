use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Event, HtmlButtonElement, HtmlCanvasElement, HtmlElement, HtmlInputElement, HtmlSpanElement,
    PointerEvent,
};

use pitchboard_shared::session::{DragSessions, StrokeSessions};
use pitchboard_shared::{Tool, TokenModel, TRAY_COUNT};

use crate::dom::{
    context_2d, data_attr, get_element, optional_element, set_tool_button, update_size_label,
    StatusLine,
};
use crate::state::State;
use crate::{export, stroke, surface, tokens};

const DEFAULT_PITCH_SRC: &str = "assets/pitch.png";

fn sync_tool_buttons(tool: Tool, pen: Option<&HtmlButtonElement>, eraser: Option<&HtmlButtonElement>) {
    if let Some(pen) = pen {
        set_tool_button(pen, tool == Tool::Pen);
    }
    if let Some(eraser) = eraser {
        set_tool_button(eraser, tool == Tool::Eraser);
    }
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let started = Rc::new(Cell::new(false));

    if document.ready_state() == "complete" {
        started.set(true);
        return start_app();
    }

    let onload_started = started.clone();
    let onload = Closure::<dyn FnMut(Event)>::new(move |_| {
        if onload_started.replace(true) {
            return;
        }
        if let Err(err) = start_app() {
            web_sys::console::error_1(&err);
        }
    });
    window.add_event_listener_with_callback("load", onload.as_ref().unchecked_ref())?;
    onload.forget();

    Ok(())
}

fn start_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;

    let canvas: HtmlCanvasElement = get_element(&document, "board")?;
    let ctx = context_2d(&canvas)?;
    let wrap: HtmlElement = get_element(&document, "boardWrap")?;
    let tokens_layer: HtmlElement = get_element(&document, "tokensLayer")?;

    // Everything past the board itself is optional: a missing control
    // disables its feature, nothing more.
    let pen_button: Option<HtmlButtonElement> = optional_element(&document, "pen");
    let eraser_button: Option<HtmlButtonElement> = optional_element(&document, "eraser");
    let clear_button: Option<HtmlButtonElement> = optional_element(&document, "clear");
    let save_button: Option<HtmlButtonElement> = optional_element(&document, "saveImage");
    let status = StatusLine::from_document(&document);
    let size_input: Option<HtmlInputElement> = optional_element(&document, "size");
    let size_value: Option<HtmlSpanElement> = optional_element(&document, "sizeValue");
    let color_input: Option<HtmlInputElement> = optional_element(&document, "color");
    let reset_button: Option<HtmlButtonElement> = optional_element(&document, "resetTokens");

    let token_model = TokenModel::from_attr(data_attr(&wrap, "token-model").as_deref());
    let pitch_src =
        data_attr(&wrap, "pitch-src").unwrap_or_else(|| DEFAULT_PITCH_SRC.to_string());

    let state = Rc::new(RefCell::new(State {
        canvas: canvas.clone(),
        ctx,
        wrap: wrap.clone(),
        tokens_layer,
        pitch_src,
        token_model,
        tool: Tool::default(),
        strokes: StrokeSessions::new(),
        drags: DragSessions::new(),
        tokens: Vec::new(),
    }));

    surface::resize(&document, &window, &state.borrow())?;
    sync_tool_buttons(state.borrow().tool, pen_button.as_ref(), eraser_button.as_ref());
    status.set("ok", "Ready");
    if let (Some(input), Some(value)) = (size_input.as_ref(), size_value.as_ref()) {
        update_size_label(input, value);
    }

    match token_model {
        TokenModel::Bench => {
            tokens::populate_bench(&document, &mut state.borrow_mut())?;
        }
        TokenModel::Tray => {
            if let Some(tray) = optional_element::<HtmlElement>(&document, "playerTray") {
                for number in 1..=TRAY_COUNT {
                    let element: HtmlElement = document.create_element("div")?.dyn_into()?;
                    element.set_class_name("tray-token");
                    element.set_text_content(Some(&number.to_string()));

                    let spawn_state = state.clone();
                    let document_cb = document.clone();
                    let ondown =
                        Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
                            if event.button() != 0 {
                                return;
                            }
                            event.prevent_default();
                            event.stop_propagation();
                            let mut state = spawn_state.borrow_mut();
                            if let Err(err) =
                                tokens::spawn_from_tray(&document_cb, &mut state, number, &event)
                            {
                                web_sys::console::error_1(&err);
                            }
                        });
                    element.add_event_listener_with_callback(
                        "pointerdown",
                        ondown.as_ref().unchecked_ref(),
                    )?;
                    ondown.forget();
                    tray.append_child(&element)?;
                }
            }
        }
    }

    {
        let resize_state = state.clone();
        let window_cb = window.clone();
        let document_cb = document.clone();
        let onresize = Closure::<dyn FnMut()>::new(move || {
            let mut state = resize_state.borrow_mut();
            if let Err(err) = surface::resize(&document_cb, &window_cb, &state) {
                web_sys::console::error_1(&err);
            }
            // A shrink can leave placed tokens past the new edges.
            tokens::reclamp_all(&mut state);
        });
        window.add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
        onresize.forget();
    }

    if let Some(pen) = pen_button.clone() {
        let tool_state = state.clone();
        let pen_cb = pen_button.clone();
        let eraser_cb = eraser_button.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut state = tool_state.borrow_mut();
            state.tool = Tool::Pen;
            sync_tool_buttons(state.tool, pen_cb.as_ref(), eraser_cb.as_ref());
        });
        pen.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    if let Some(eraser) = eraser_button.clone() {
        let tool_state = state.clone();
        let pen_cb = pen_button.clone();
        let eraser_cb = eraser_button.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut state = tool_state.borrow_mut();
            state.tool = Tool::Eraser;
            sync_tool_buttons(state.tool, pen_cb.as_ref(), eraser_cb.as_ref());
        });
        eraser.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    if let (Some(input), Some(value)) = (size_input.clone(), size_value) {
        let input_cb = input.clone();
        let oninput = Closure::<dyn FnMut(Event)>::new(move |_| {
            update_size_label(&input_cb, &value);
        });
        input.add_event_listener_with_callback("input", oninput.as_ref().unchecked_ref())?;
        oninput.forget();
    }

    if let Some(clear_button) = clear_button {
        let clear_state = state.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            surface::clear(&clear_state.borrow());
        });
        clear_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    if let Some(reset_button) = reset_button {
        let reset_state = state.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            tokens::reset(&mut reset_state.borrow_mut());
        });
        reset_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let down_state = state.clone();
        let ondown = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            event.prevent_default();
            stroke::pointer_down(&mut down_state.borrow_mut(), &event);
        });
        canvas.add_event_listener_with_callback("pointerdown", ondown.as_ref().unchecked_ref())?;
        ondown.forget();
    }

    {
        let move_state = state.clone();
        let size_cb = size_input.clone();
        let color_cb = color_input.clone();
        let onmove = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            stroke::pointer_move(
                &mut move_state.borrow_mut(),
                &event,
                size_cb.as_ref(),
                color_cb.as_ref(),
            );
        });
        canvas.add_event_listener_with_callback("pointermove", onmove.as_ref().unchecked_ref())?;
        onmove.forget();
    }

    {
        // Up, cancel, and leave end a stroke identically; a missed one
        // would leave the pointer stuck in the drawing state.
        let stop_state = state.clone();
        let onstop = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            stroke::pointer_stop(&mut stop_state.borrow_mut(), &event);
        });
        for kind in ["pointerup", "pointercancel", "pointerleave"] {
            canvas.add_event_listener_with_callback(kind, onstop.as_ref().unchecked_ref())?;
        }
        onstop.forget();
    }

    {
        // Token drags are delegated to the wrap: pointer-down on a token
        // bubbles here, and capture keeps move/up flowing here too.
        let down_state = state.clone();
        let ondown = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            if event.button() != 0 {
                return;
            }
            let Some(target) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            let mut state = down_state.borrow_mut();
            let Some(index) = state.token_index(&target) else {
                return;
            };
            event.prevent_default();
            tokens::begin_drag(&mut state, index, &event);
        });
        wrap.add_event_listener_with_callback("pointerdown", ondown.as_ref().unchecked_ref())?;
        ondown.forget();
    }

    {
        let move_state = state.clone();
        let onmove = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            if tokens::update_drag(&mut move_state.borrow_mut(), &event) {
                event.prevent_default();
            }
        });
        wrap.add_event_listener_with_callback("pointermove", onmove.as_ref().unchecked_ref())?;
        onmove.forget();
    }

    {
        let stop_state = state.clone();
        let onstop = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            tokens::end_drag(&mut stop_state.borrow_mut(), &event);
        });
        for kind in ["pointerup", "pointercancel", "pointerleave"] {
            wrap.add_event_listener_with_callback(kind, onstop.as_ref().unchecked_ref())?;
        }
        onstop.forget();
    }

    if let Some(save_button) = save_button {
        let save_state = state.clone();
        let status_cb = status.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let state = save_state.clone();
            let status = status_cb.clone();
            spawn_local(async move {
                if let Err(err) = export::export_png(state, status.clone()).await {
                    web_sys::console::error_1(&err);
                    status.set("error", "Export failed");
                }
            });
        });
        save_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    Ok(())
}
