pub mod board;
pub mod session;

/// A position in board-local CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Side of a board token in CSS pixels. Tokens are square.
pub const TOKEN_SIZE: f64 = 46.0;

/// Jersey numbers offered by the tray, 1..=TRAY_COUNT.
pub const TRAY_COUNT: u8 = 15;

/// Bench grid: 3 columns of 5 slots, laid out column-major.
pub const BENCH_ROWS: u8 = 5;
pub const BENCH_GAP: f64 = 10.0;
pub const BENCH_START_X: f64 = 12.0;
pub const BENCH_START_Y: f64 = 12.0;

/// Multiplier applied to the logical board size when exporting.
pub const EXPORT_SCALE: f64 = 2.0;
pub const EXPORT_FILE_PREFIX: &str = "tactics-board";

pub const DEFAULT_STROKE_WIDTH: f64 = 4.0;
pub const DEFAULT_STROKE_COLOR: &str = "#111111";

/// Eraser strokes are always wider than pen strokes at the same
/// slider setting.
pub const ERASER_MIN_WIDTH: f64 = 10.0;
pub const ERASER_WIDTH_FACTOR: f64 = 5.0;

/// Export rendering of tokens and the background fallback.
pub const PITCH_FALLBACK_COLOR: &str = "#2e7d32";
pub const TOKEN_FILL_COLOR: &str = "#d63031";
pub const TOKEN_BORDER_COLOR: &str = "rgba(255, 255, 255, 0.9)";
pub const TOKEN_BORDER_WIDTH: f64 = 2.0;
pub const TOKEN_NUMBER_COLOR: &str = "#ffffff";
pub const TOKEN_NUMBER_FONT: &str = "bold 20px sans-serif";

/// The active drawing tool. Exactly one is active at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Pen,
    Eraser,
}

impl Tool {
    /// Canvas composite operation for strokes made with this tool.
    /// The eraser subtracts alpha instead of painting white.
    #[must_use]
    pub fn composite_operation(self) -> &'static str {
        match self {
            Tool::Pen => "source-over",
            Tool::Eraser => "destination-out",
        }
    }

    /// Line width for this tool at the given slider setting.
    #[must_use]
    pub fn line_width(self, slider: f64) -> f64 {
        let width = board::sanitize_width(slider);
        match self {
            Tool::Pen => width,
            Tool::Eraser => ERASER_MIN_WIDTH.max(width * ERASER_WIDTH_FACTOR),
        }
    }
}

/// Which token lifecycle the board runs with. The two models have
/// different reset semantics and are never merged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TokenModel {
    /// Tokens spawn from the tray on demand; reset removes them all.
    #[default]
    Tray,
    /// Tokens 1..=15 pre-exist at fixed bench slots and are only
    /// repositioned; reset restores the slots.
    Bench,
}

impl TokenModel {
    /// Parse the `data-token-model` attribute. Unknown or missing
    /// values fall back to the tray model.
    #[must_use]
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("bench") => TokenModel::Bench,
            _ => TokenModel::Tray,
        }
    }
}
