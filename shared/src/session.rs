//! Per-pointer interaction sessions.
//!
//! The original bug class this guards against: sharing one mutable
//! "dragging" flag across pointers. Every active gesture — a stroke in
//! progress or a token drag — is keyed by its pointer identifier, so
//! concurrent multi-touch sessions never interfere.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;

use crate::board::clamp_to_board;
use crate::Point;

/// Active freehand strokes, one per pointer identifier. Only the last
/// point is retained; each move event commits one segment to the
/// surface and advances it.
#[derive(Debug, Default)]
pub struct StrokeSessions {
    last: HashMap<i32, Point>,
}

impl StrokeSessions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the drawing state for a pointer.
    pub fn begin(&mut self, pointer_id: i32, point: Point) {
        self.last.insert(pointer_id, point);
    }

    /// Advance an active stroke, returning the segment to commit.
    /// `None` when the pointer has no stroke in progress.
    pub fn advance(&mut self, pointer_id: i32, point: Point) -> Option<(Point, Point)> {
        let last = self.last.get_mut(&pointer_id)?;
        let from = *last;
        *last = point;
        Some((from, point))
    }

    /// Leave the drawing state. Returns whether a stroke was active.
    pub fn end(&mut self, pointer_id: i32) -> bool {
        self.last.remove(&pointer_id).is_some()
    }

    #[must_use]
    pub fn is_active(&self, pointer_id: i32) -> bool {
        self.last.contains_key(&pointer_id)
    }
}

/// One token drag in progress: which token, and the pointer-to-top-left
/// offset captured at drag start so the token does not jump.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub token: usize,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Active token drags keyed by pointer identifier.
#[derive(Debug, Default)]
pub struct DragSessions {
    sessions: HashMap<i32, DragSession>,
}

impl DragSessions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session binding `pointer_id` to the token at `token`
    /// index. The offset is measured from the token's current top-left.
    pub fn begin(
        &mut self,
        pointer_id: i32,
        token: usize,
        pointer_x: f64,
        pointer_y: f64,
        token_x: f64,
        token_y: f64,
    ) {
        self.sessions.insert(
            pointer_id,
            DragSession {
                token,
                offset_x: pointer_x - token_x,
                offset_y: pointer_y - token_y,
            },
        );
    }

    /// New clamped top-left for the dragged token given the current
    /// pointer position and live board size. `None` when the pointer
    /// has no session.
    #[must_use]
    pub fn target(
        &self,
        pointer_id: i32,
        pointer_x: f64,
        pointer_y: f64,
        board_width: f64,
        board_height: f64,
    ) -> Option<(usize, f64, f64)> {
        let session = self.sessions.get(&pointer_id)?;
        let (x, y) = clamp_to_board(
            pointer_x - session.offset_x,
            pointer_y - session.offset_y,
            board_width,
            board_height,
        );
        Some((session.token, x, y))
    }

    /// Close the session for a pointer, if any.
    pub fn end(&mut self, pointer_id: i32) -> Option<DragSession> {
        self.sessions.remove(&pointer_id)
    }

    /// Drop every session. Used when the token set itself is cleared.
    pub fn clear(&mut self) {
        self.sessions.clear();
    }

    #[must_use]
    pub fn is_active(&self, pointer_id: i32) -> bool {
        self.sessions.contains_key(&pointer_id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
