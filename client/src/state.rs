use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use pitchboard_shared::session::{DragSessions, StrokeSessions};
use pitchboard_shared::{Tool, TokenModel};

/// A numbered player marker on the board. The element is an absolutely
/// positioned node in the tokens layer; `x`/`y` mirror its top-left in
/// board-local CSS pixels.
pub struct Token {
    pub number: u8,
    pub x: f64,
    pub y: f64,
    pub element: HtmlElement,
}

pub struct State {
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    pub wrap: HtmlElement,
    pub tokens_layer: HtmlElement,
    pub pitch_src: String,
    pub token_model: TokenModel,
    pub tool: Tool,
    pub strokes: StrokeSessions,
    pub drags: DragSessions,
    pub tokens: Vec<Token>,
}

impl State {
    /// Live board dimensions in CSS pixels. Read from the DOM on every
    /// use so a concurrent resize is respected mid-drag.
    pub fn board_size(&self) -> (f64, f64) {
        let rect = self.wrap.get_bounding_client_rect();
        (rect.width(), rect.height())
    }

    pub fn token_index(&self, element: &HtmlElement) -> Option<usize> {
        self.tokens
            .iter()
            .position(|token| &token.element == element)
    }
}
