//! Locked pieces and the active piece must reach the terminal byte stream.

use blocktris::core::{Session, SessionConfig};
use blocktris::term::{changed_runs, encode_diff_into, encode_full_into, FrameBuffer, GameView, Viewport};
use blocktris::types::{GameAction, Phase};

const VIEWPORT: Viewport = Viewport {
    width: 60,
    height: 24,
};

fn frame(session: &Session) -> FrameBuffer {
    GameView::default().render(&session.snapshot(), VIEWPORT)
}

fn block_count(fb: &FrameBuffer) -> usize {
    fb.cells().iter().filter(|c| c.ch == '█').count()
}

#[test]
fn active_piece_is_rendered_as_four_blocks() {
    let mut session = Session::new(SessionConfig::default());
    session.start();

    // 4 board cells, 2 columns each.
    assert_eq!(block_count(&frame(&session)), 8);
}

#[test]
fn locked_piece_stays_visible_after_lock() {
    let mut session = Session::new(SessionConfig::default());
    session.start();
    let first = session.piece_id();
    while session.piece_id() == first {
        session.apply_action(GameAction::SoftDrop);
    }
    assert_eq!(session.phase(), Phase::Falling);

    // Locked piece plus the new active piece.
    assert_eq!(block_count(&frame(&session)), 16);
}

#[test]
fn moving_the_piece_produces_a_small_diff() {
    let mut session = Session::new(SessionConfig::default());
    session.start();
    let before = frame(&session);
    assert!(session.apply_action(GameAction::MoveLeft));
    let after = frame(&session);

    let runs = changed_runs(&before, &after);
    assert!(!runs.is_empty());
    let dirty: u16 = runs.iter().map(|&(_, _, len)| len).sum();
    assert!(dirty < 40, "moving one column repainted {} cells", dirty);

    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    let mut full = Vec::new();
    encode_full_into(&after, &mut full).unwrap();
    assert!(diff.len() < full.len());
}

#[test]
fn unchanged_session_encodes_an_empty_diff() {
    let mut session = Session::new(SessionConfig::default());
    session.start();
    let a = frame(&session);
    let b = frame(&session);

    let mut out = Vec::new();
    encode_diff_into(&a, &b, &mut out).unwrap();
    assert!(out.is_empty());
}
