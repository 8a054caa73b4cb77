use super::*;

// =============================================================
// backing_size
// =============================================================

#[test]
fn backing_size_scales_by_dpr() {
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
}

#[test]
fn backing_size_floors_fractional_pixels() {
    assert_eq!(backing_size(333.4, 200.7, 1.5), (500, 301));
}

#[test]
fn backing_size_never_below_one_pixel() {
    assert_eq!(backing_size(0.0, 0.0, 1.0), (1, 1));
    assert_eq!(backing_size(0.3, 0.3, 1.0), (1, 1));
}

// =============================================================
// clamp_to_board
// =============================================================

#[test]
fn clamp_keeps_token_box_inside_board() {
    let (board_w, board_h) = (800.0, 600.0);
    let inputs = [
        (-50.0, -50.0),
        (0.0, 0.0),
        (400.0, 300.0),
        (799.0, 599.0),
        (10_000.0, -10_000.0),
    ];
    for (x, y) in inputs {
        let (cx, cy) = clamp_to_board(x, y, board_w, board_h);
        assert!(cx >= 0.0 && cx <= board_w - TOKEN_SIZE, "x={cx}");
        assert!(cy >= 0.0 && cy <= board_h - TOKEN_SIZE, "y={cy}");
    }
}

#[test]
fn clamp_is_identity_for_in_bounds_positions() {
    assert_eq!(clamp_to_board(100.0, 200.0, 800.0, 600.0), (100.0, 200.0));
}

#[test]
fn clamp_repins_token_after_board_shrink() {
    // A position that was valid on the old board must come back inside
    // when the same clamp is re-run against the shrunken one.
    let (x, y) = (700.0, 500.0);
    assert_eq!(clamp_to_board(x, y, 800.0, 600.0), (x, y));
    assert_eq!(
        clamp_to_board(x, y, 400.0, 300.0),
        (400.0 - TOKEN_SIZE, 300.0 - TOKEN_SIZE)
    );
}

#[test]
fn clamp_pins_to_origin_on_tiny_boards() {
    // Board smaller than a token: the only valid position is 0,0.
    assert_eq!(clamp_to_board(30.0, 30.0, 40.0, 40.0), (0.0, 0.0));
}

// =============================================================
// bench_slot
// =============================================================

#[test]
fn bench_slot_number_one_is_grid_origin() {
    assert_eq!(bench_slot(1), (BENCH_START_X, BENCH_START_Y));
}

#[test]
fn bench_slot_seven_is_column_one_row_one() {
    let pitch = TOKEN_SIZE + BENCH_GAP;
    assert_eq!(
        bench_slot(7),
        (BENCH_START_X + pitch, BENCH_START_Y + pitch)
    );
}

#[test]
fn bench_slot_fills_columns_of_five() {
    let pitch = TOKEN_SIZE + BENCH_GAP;
    // 5 finishes the first column, 6 starts the second.
    assert_eq!(bench_slot(5), (BENCH_START_X, BENCH_START_Y + 4.0 * pitch));
    assert_eq!(bench_slot(6), (BENCH_START_X + pitch, BENCH_START_Y));
    // 15 is the last slot of the third column.
    assert_eq!(
        bench_slot(15),
        (BENCH_START_X + 2.0 * pitch, BENCH_START_Y + 4.0 * pitch)
    );
}

// =============================================================
// spawn_position
// =============================================================

#[test]
fn spawn_centers_token_under_pointer() {
    let (x, y) = spawn_position(400.0, 300.0, 800.0, 600.0);
    assert_eq!(x, 400.0 - TOKEN_SIZE / 2.0);
    assert_eq!(y, 300.0 - TOKEN_SIZE / 2.0);
}

#[test]
fn spawn_near_edge_is_clamped() {
    assert_eq!(spawn_position(0.0, 0.0, 800.0, 600.0), (0.0, 0.0));
    let (x, y) = spawn_position(800.0, 600.0, 800.0, 600.0);
    assert_eq!(x, 800.0 - TOKEN_SIZE);
    assert_eq!(y, 600.0 - TOKEN_SIZE);
}

// =============================================================
// sanitize_width / tool widths
// =============================================================

#[test]
fn sanitize_width_bounds() {
    assert_eq!(sanitize_width(0.0), 1.0);
    assert_eq!(sanitize_width(4.0), 4.0);
    assert_eq!(sanitize_width(500.0), 60.0);
    assert_eq!(sanitize_width(f64::NAN), crate::DEFAULT_STROKE_WIDTH);
}

#[test]
fn eraser_is_always_wider_than_pen() {
    for slider in [1.0, 2.0, 4.0, 10.0, 60.0] {
        assert!(crate::Tool::Eraser.line_width(slider) > crate::Tool::Pen.line_width(slider));
    }
}

#[test]
fn eraser_width_has_a_floor() {
    assert_eq!(crate::Tool::Eraser.line_width(1.0), crate::ERASER_MIN_WIDTH);
    assert_eq!(crate::Tool::Eraser.line_width(4.0), 20.0);
}

#[test]
fn composite_operation_is_a_function_of_the_tool_alone() {
    // Switching tools cannot leak a mode: the operation is derived per
    // segment from the active tool, never stored.
    assert_eq!(crate::Tool::Pen.composite_operation(), "source-over");
    assert_eq!(crate::Tool::Eraser.composite_operation(), "destination-out");
}

// =============================================================
// export_size / export_file_name
// =============================================================

#[test]
fn export_size_doubles_board_dimensions() {
    assert_eq!(export_size(800.0, 600.0), (1600, 1200));
}

#[test]
fn export_size_never_collapses_to_zero() {
    assert_eq!(export_size(0.0, 0.0), (1, 1));
}

#[test]
fn export_file_name_has_prefix_and_timestamp() {
    assert_eq!(
        export_file_name(2024, 3, 9, 7, 5, 30),
        "tactics-board-20240309-070530.png"
    );
}

// =============================================================
// TokenModel
// =============================================================

#[test]
fn token_model_defaults_to_tray() {
    assert_eq!(crate::TokenModel::from_attr(None), crate::TokenModel::Tray);
    assert_eq!(
        crate::TokenModel::from_attr(Some("anything")),
        crate::TokenModel::Tray
    );
}

#[test]
fn token_model_bench_is_explicit() {
    assert_eq!(
        crate::TokenModel::from_attr(Some("bench")),
        crate::TokenModel::Bench
    );
}
