//! Board geometry: backing-store sizing, token clamping, bench slots,
//! and export dimensioning. Everything here is pure so the clamping and
//! sizing invariants can be tested without a browser.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::{
    BENCH_GAP, BENCH_ROWS, BENCH_START_X, BENCH_START_Y, EXPORT_FILE_PREFIX, EXPORT_SCALE,
    TOKEN_SIZE,
};

/// Physical backing-store size for a canvas displayed at `css_width` x
/// `css_height` under the given device pixel ratio. Each dimension is
/// floored and never below one pixel.
#[must_use]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let width = (css_width * dpr).floor().max(1.0);
    let height = (css_height * dpr).floor().max(1.0);
    (width as u32, height as u32)
}

/// Clamp a token's proposed top-left so its full box stays on the board.
#[must_use]
pub fn clamp_to_board(x: f64, y: f64, board_width: f64, board_height: f64) -> (f64, f64) {
    let max_x = (board_width - TOKEN_SIZE).max(0.0);
    let max_y = (board_height - TOKEN_SIZE).max(0.0);
    (x.clamp(0.0, max_x), y.clamp(0.0, max_y))
}

/// Top-left of the bench slot for a jersey number: column-major order in
/// a 3x5 grid with a fixed gap.
#[must_use]
pub fn bench_slot(number: u8) -> (f64, f64) {
    let index = f64::from(number.saturating_sub(1));
    let rows = f64::from(BENCH_ROWS);
    let column = (index / rows).floor();
    let row = index % rows;
    let pitch = TOKEN_SIZE + BENCH_GAP;
    (BENCH_START_X + column * pitch, BENCH_START_Y + row * pitch)
}

/// Top-left for a token spawned from the tray: centered under the
/// pointer, then clamped.
#[must_use]
pub fn spawn_position(
    pointer_x: f64,
    pointer_y: f64,
    board_width: f64,
    board_height: f64,
) -> (f64, f64) {
    clamp_to_board(
        pointer_x - TOKEN_SIZE / 2.0,
        pointer_y - TOKEN_SIZE / 2.0,
        board_width,
        board_height,
    )
}

/// Clamp a slider value to a usable stroke width.
#[must_use]
pub fn sanitize_width(width: f64) -> f64 {
    let width = if width.is_finite() {
        width
    } else {
        crate::DEFAULT_STROKE_WIDTH
    };
    width.clamp(1.0, 60.0)
}

/// Pixel dimensions of the export buffer for a board of the given
/// logical size.
#[must_use]
pub fn export_size(board_width: f64, board_height: f64) -> (u32, u32) {
    let width = (board_width * EXPORT_SCALE).round().max(1.0);
    let height = (board_height * EXPORT_SCALE).round().max(1.0);
    (width as u32, height as u32)
}

/// File name for an exported image: fixed prefix plus a timestamp
/// suffix. `month` is 1-based.
#[must_use]
pub fn export_file_name(
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> String {
    format!("{EXPORT_FILE_PREFIX}-{year:04}{month:02}{day:02}-{hour:02}{minute:02}{second:02}.png")
}
