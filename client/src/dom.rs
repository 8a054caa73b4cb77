use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement,
    HtmlInputElement, HtmlSpanElement, PointerEvent,
};

use pitchboard_shared::Point;

/// Look up a required element. Setup fails without it.
pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

/// Look up an element whose absence only disables a feature. Missing or
/// mistyped controls are reported as a warning, and the caller treats
/// the feature as a no-op.
pub fn optional_element<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let Some(element) = document.get_element_by_id(id) else {
        web_sys::console::warn_1(&format!("Missing element: {id}, feature disabled").into());
        return None;
    };
    match element.dyn_into::<T>() {
        Ok(element) => Some(element),
        Err(_) => {
            web_sys::console::warn_1(&format!("Invalid element type: {id}").into());
            None
        }
    }
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Missing canvas context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("Invalid canvas context"))
}

pub fn update_size_label(input: &HtmlInputElement, value: &HtmlSpanElement) {
    value.set_text_content(Some(&input.value()));
}

pub fn set_tool_button(button: &web_sys::HtmlButtonElement, active: bool) {
    let pressed = if active { "true" } else { "false" };
    let _ = button.set_attribute("aria-pressed", pressed);
}

/// Status line that keeps working without its markup: reports land on
/// the console when the page carries no status elements.
#[derive(Clone)]
pub struct StatusLine {
    el: Option<Element>,
    text: Option<Element>,
}

impl StatusLine {
    pub fn from_document(document: &Document) -> Self {
        Self {
            el: optional_element(document, "status"),
            text: optional_element(document, "statusText"),
        }
    }

    pub fn set(&self, state: &str, text: &str) {
        if let Some(el) = &self.el {
            let _ = el.set_attribute("data-state", state);
        }
        match &self.text {
            Some(node) => node.set_text_content(Some(text)),
            None if state == "error" => web_sys::console::error_1(&text.into()),
            None => web_sys::console::log_1(&text.into()),
        }
    }
}

pub fn data_attr(element: &HtmlElement, name: &str) -> Option<String> {
    element.get_attribute(&format!("data-{name}"))
}

/// Pointer position in board-local CSS pixels.
pub fn event_to_board(wrap: &HtmlElement, event: &PointerEvent) -> Point {
    let rect = wrap.get_bounding_client_rect();
    Point {
        x: f64::from(event.client_x()) - rect.left(),
        y: f64::from(event.client_y()) - rect.top(),
    }
}

/// Release pointer capture if this element still holds it. The runtime
/// may already have released it (pointer-cancel does this), so holding
/// nothing is a normal outcome, not an error.
pub fn release_capture(element: &Element, pointer_id: i32) -> bool {
    if !element.has_pointer_capture(pointer_id) {
        return false;
    }
    element.release_pointer_capture(pointer_id).is_ok()
}
