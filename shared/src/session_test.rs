use super::*;
use crate::TOKEN_SIZE;

// =============================================================
// StrokeSessions
// =============================================================

#[test]
fn stroke_advance_requires_begin() {
    let mut strokes = StrokeSessions::new();
    assert!(strokes
        .advance(1, Point { x: 5.0, y: 5.0 })
        .is_none());
}

#[test]
fn stroke_advance_returns_connected_segments() {
    let mut strokes = StrokeSessions::new();
    strokes.begin(1, Point { x: 0.0, y: 0.0 });
    let (from, to) = strokes.advance(1, Point { x: 3.0, y: 4.0 }).unwrap();
    assert_eq!(from, Point { x: 0.0, y: 0.0 });
    assert_eq!(to, Point { x: 3.0, y: 4.0 });
    // The next segment starts where the previous one ended.
    let (from, _) = strokes.advance(1, Point { x: 9.0, y: 9.0 }).unwrap();
    assert_eq!(from, Point { x: 3.0, y: 4.0 });
}

#[test]
fn stroke_end_returns_to_idle() {
    let mut strokes = StrokeSessions::new();
    strokes.begin(1, Point { x: 0.0, y: 0.0 });
    assert!(strokes.end(1));
    assert!(!strokes.is_active(1));
    assert!(strokes.advance(1, Point { x: 1.0, y: 1.0 }).is_none());
    // Ending twice is harmless: up, cancel, and leave all call this.
    assert!(!strokes.end(1));
}

#[test]
fn two_pointers_draw_independently() {
    let mut strokes = StrokeSessions::new();
    strokes.begin(1, Point { x: 0.0, y: 0.0 });
    strokes.begin(2, Point { x: 100.0, y: 100.0 });
    let (from, _) = strokes.advance(1, Point { x: 1.0, y: 1.0 }).unwrap();
    assert_eq!(from, Point { x: 0.0, y: 0.0 });
    let (from, _) = strokes.advance(2, Point { x: 99.0, y: 99.0 }).unwrap();
    assert_eq!(from, Point { x: 100.0, y: 100.0 });
    assert!(strokes.end(1));
    assert!(strokes.is_active(2));
}

// =============================================================
// DragSessions
// =============================================================

#[test]
fn drag_preserves_grab_offset() {
    let mut drags = DragSessions::new();
    // Grab token 0 (top-left 100,100) at 110,120.
    drags.begin(7, 0, 110.0, 120.0, 100.0, 100.0);
    // Moving the pointer by +10,+10 moves the token by the same delta.
    let (token, x, y) = drags.target(7, 120.0, 130.0, 800.0, 600.0).unwrap();
    assert_eq!(token, 0);
    assert_eq!((x, y), (110.0, 110.0));
}

#[test]
fn drag_target_is_clamped_to_live_board_size() {
    let mut drags = DragSessions::new();
    drags.begin(1, 3, 0.0, 0.0, 0.0, 0.0);
    let (_, x, y) = drags.target(1, 5_000.0, 5_000.0, 800.0, 600.0).unwrap();
    assert_eq!((x, y), (800.0 - TOKEN_SIZE, 600.0 - TOKEN_SIZE));
    // A concurrent shrink of the board tightens the clamp immediately.
    let (_, x, y) = drags.target(1, 5_000.0, 5_000.0, 400.0, 300.0).unwrap();
    assert_eq!((x, y), (400.0 - TOKEN_SIZE, 300.0 - TOKEN_SIZE));
}

#[test]
fn concurrent_drags_do_not_share_state() {
    let mut drags = DragSessions::new();
    drags.begin(1, 0, 10.0, 10.0, 0.0, 0.0);
    drags.begin(2, 5, 200.0, 200.0, 150.0, 180.0);

    let (token_a, ax, ay) = drags.target(1, 60.0, 60.0, 800.0, 600.0).unwrap();
    let (token_b, bx, by) = drags.target(2, 210.0, 210.0, 800.0, 600.0).unwrap();
    assert_eq!(token_a, 0);
    assert_eq!((ax, ay), (50.0, 50.0));
    assert_eq!(token_b, 5);
    assert_eq!((bx, by), (160.0, 190.0));

    // Ending one session leaves the other untouched.
    assert!(drags.end(1).is_some());
    assert!(!drags.is_active(1));
    let (_, bx2, by2) = drags.target(2, 210.0, 210.0, 800.0, 600.0).unwrap();
    assert_eq!((bx2, by2), (bx, by));
}

#[test]
fn drag_target_for_unknown_pointer_is_none() {
    let drags = DragSessions::new();
    assert!(drags.target(9, 0.0, 0.0, 800.0, 600.0).is_none());
}

#[test]
fn clear_drops_every_session() {
    let mut drags = DragSessions::new();
    drags.begin(1, 0, 0.0, 0.0, 0.0, 0.0);
    drags.begin(2, 1, 0.0, 0.0, 0.0, 0.0);
    drags.clear();
    assert!(drags.is_empty());
    assert!(drags.end(1).is_none());
}

#[test]
fn clamp_invariant_holds_for_any_move_sequence() {
    let mut drags = DragSessions::new();
    drags.begin(1, 0, 23.0, 17.0, 20.0, 10.0);
    let moves = [
        (-1_000.0, -1_000.0),
        (400.0, 300.0),
        (10_000.0, 2.0),
        (3.0, 10_000.0),
        (799.9, 599.9),
    ];
    for (px, py) in moves {
        let (_, x, y) = drags.target(1, px, py, 800.0, 600.0).unwrap();
        assert!((0.0..=800.0 - TOKEN_SIZE).contains(&x));
        assert!((0.0..=600.0 - TOKEN_SIZE).contains(&y));
    }
}
