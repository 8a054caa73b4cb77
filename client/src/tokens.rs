//! Numbered player tokens: spawned from the tray or pre-seated on the
//! bench, dragged with per-pointer sessions, and always clamped to the
//! board.
//!
//! Drag handling is centralized on the board wrap element rather than on
//! each token, so the session table in `pitchboard_shared::session` is
//! the single source of truth for who is dragging what.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, PointerEvent};

use pitchboard_shared::board::{bench_slot, clamp_to_board, spawn_position};
use pitchboard_shared::{TokenModel, TRAY_COUNT};

use crate::dom::{event_to_board, release_capture};
use crate::state::{State, Token};

fn set_position(element: &HtmlElement, x: f64, y: f64) {
    let style = element.style();
    let _ = style.set_property("left", &format!("{x}px"));
    let _ = style.set_property("top", &format!("{y}px"));
}

fn set_elevated(element: &HtmlElement, elevated: bool) {
    let _ = element
        .style()
        .set_property("z-index", if elevated { "10" } else { "1" });
}

fn create_board_token(
    document: &Document,
    state: &mut State,
    number: u8,
    x: f64,
    y: f64,
) -> Result<usize, JsValue> {
    let element: HtmlElement = document.create_element("div")?.dyn_into()?;
    element.set_class_name("token");
    element.set_text_content(Some(&number.to_string()));
    set_position(&element, x, y);
    state.tokens_layer.append_child(&element)?;
    state.tokens.push(Token {
        number,
        x,
        y,
        element,
    });
    Ok(state.tokens.len() - 1)
}

/// Seat tokens 1..=15 at their bench slots. Bench model only; these
/// tokens live for the whole page and are only ever repositioned.
pub fn populate_bench(document: &Document, state: &mut State) -> Result<(), JsValue> {
    for number in 1..=TRAY_COUNT {
        let (x, y) = bench_slot(number);
        create_board_token(document, state, number, x, y)?;
    }
    Ok(())
}

/// Create a board token centered under the pointer and immediately open
/// a drag session for it, bound to the triggering pointer.
pub fn spawn_from_tray(
    document: &Document,
    state: &mut State,
    number: u8,
    event: &PointerEvent,
) -> Result<(), JsValue> {
    let point = event_to_board(&state.wrap, event);
    let (board_width, board_height) = state.board_size();
    let (x, y) = spawn_position(point.x, point.y, board_width, board_height);
    let index = create_board_token(document, state, number, x, y)?;

    state
        .drags
        .begin(event.pointer_id(), index, point.x, point.y, x, y);
    set_elevated(&state.tokens[index].element, true);
    // Capture on the wrap: its move/up handlers drive every session.
    let _ = state.wrap.set_pointer_capture(event.pointer_id());
    Ok(())
}

/// Pointer-down on an existing board token. Records the grab offset so
/// the token does not jump to re-center under the pointer.
pub fn begin_drag(state: &mut State, index: usize, event: &PointerEvent) {
    let point = event_to_board(&state.wrap, event);
    let Some(token) = state.tokens.get(index) else {
        return;
    };
    state
        .drags
        .begin(event.pointer_id(), index, point.x, point.y, token.x, token.y);
    set_elevated(&token.element, true);
    let _ = state.wrap.set_pointer_capture(event.pointer_id());
}

/// Pointer-move with an active session: clamp the proposed top-left
/// against the live board size and apply it. Returns whether this event
/// belonged to a drag.
pub fn update_drag(state: &mut State, event: &PointerEvent) -> bool {
    let point = event_to_board(&state.wrap, event);
    let (board_width, board_height) = state.board_size();
    let Some((index, x, y)) = state.drags.target(
        event.pointer_id(),
        point.x,
        point.y,
        board_width,
        board_height,
    ) else {
        return false;
    };
    if let Some(token) = state.tokens.get_mut(index) {
        token.x = x;
        token.y = y;
        set_position(&token.element, x, y);
    }
    true
}

/// Close the session for this pointer: restore stacking order and
/// release capture if the wrap still holds it.
pub fn end_drag(state: &mut State, event: &PointerEvent) {
    let Some(session) = state.drags.end(event.pointer_id()) else {
        return;
    };
    if let Some(token) = state.tokens.get(session.token) {
        set_elevated(&token.element, false);
    }
    release_capture(&state.wrap, event.pointer_id());
}

/// Pin every token back inside the board. Run after the wrap changes
/// size, since a shrink can strand tokens past the new edges.
pub fn reclamp_all(state: &mut State) {
    let (board_width, board_height) = state.board_size();
    for token in &mut state.tokens {
        let (x, y) = clamp_to_board(token.x, token.y, board_width, board_height);
        if (x, y) != (token.x, token.y) {
            token.x = x;
            token.y = y;
            set_position(&token.element, x, y);
        }
    }
}

/// Remove every placed token. Open drag sessions die with them.
pub fn clear_all(state: &mut State) {
    for token in state.tokens.drain(..) {
        token.element.remove();
    }
    state.drags.clear();
}

/// Reset per the active lifecycle model: bench tokens go back to their
/// slots; tray tokens have no original position, so reset is clear.
pub fn reset(state: &mut State) {
    match state.token_model {
        TokenModel::Bench => {
            state.drags.clear();
            for token in &mut state.tokens {
                let (x, y) = bench_slot(token.number);
                token.x = x;
                token.y = y;
                set_position(&token.element, x, y);
                set_elevated(&token.element, false);
            }
        }
        TokenModel::Tray => clear_all(state),
    }
}
