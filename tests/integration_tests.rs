//! Integration tests for the main game loop: keys in, frames out.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use blocktris::core::{Session, SessionConfig};
use blocktris::input::{handle_key_event, should_quit};
use blocktris::term::{GameView, RenderThrottle, Viewport};
use blocktris::types::{Phase, FRAME_MS};

/// Feed keys the way the binary does, one frame of gravity after each.
fn press(session: &mut Session, code: KeyCode) -> bool {
    let key = KeyEvent::from(code);
    assert!(!should_quit(key));
    let applied = handle_key_event(key)
        .map(|action| session.apply_action(action))
        .unwrap_or(false);
    session.tick(FRAME_MS);
    applied
}

#[test]
fn test_game_lifecycle() {
    let mut session = Session::new(SessionConfig::default());
    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.active().is_none());

    session.start();
    assert_eq!(session.phase(), Phase::Falling);
    assert!(session.active().is_some());
    assert_eq!(session.score(), 0);
}

#[test]
fn test_keys_drive_the_piece() {
    let mut session = Session::new(SessionConfig::default());
    session.start();
    let start = session.active().unwrap();

    assert!(press(&mut session, KeyCode::Left));
    assert_eq!(session.active().unwrap().x, start.x - 1);

    assert!(press(&mut session, KeyCode::Char('d')));
    assert_eq!(session.active().unwrap().x, start.x);

    assert!(press(&mut session, KeyCode::Down));
    assert_eq!(session.active().unwrap().y, start.y + 1);

    // Unmapped keys do nothing.
    assert!(!press(&mut session, KeyCode::Char(' ')));
    assert_eq!(session.active().unwrap().y, start.y + 1);
}

#[test]
fn test_rotate_key_never_leaves_piece_colliding() {
    let mut session = Session::new(SessionConfig::default());
    session.start();
    for _ in 0..8 {
        press(&mut session, KeyCode::Up);
        let piece = session.active().unwrap();
        assert!(!session.board().collides(&piece));
    }
}

#[test]
fn test_quit_keys_are_not_actions() {
    assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
    assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('q'))), None);
}

#[test]
fn test_restart_key_after_game_over() {
    let mut session = Session::new(SessionConfig::default());
    session.start();
    while session.phase() != Phase::GameOver {
        press(&mut session, KeyCode::Char('s'));
    }

    let view = GameView::default();
    let over = view.render(&session.snapshot(), Viewport::new(60, 24));
    let text: String = (0..over.height()).map(|y| over.row_text(y)).collect();
    assert!(text.contains("GAME OVER"));

    assert!(press(&mut session, KeyCode::Char('r')));
    assert_eq!(session.phase(), Phase::Falling);
    assert!(session.board().is_empty());
}

#[test]
fn test_gravity_over_real_frames() {
    let mut session = Session::new(SessionConfig::default());
    session.start();
    let y0 = session.active().unwrap().y;

    // 62 frames = 992ms, not enough; the 63rd crosses 1000ms.
    for _ in 0..62 {
        session.tick(FRAME_MS);
    }
    assert_eq!(session.active().unwrap().y, y0);
    session.tick(FRAME_MS);
    assert_eq!(session.active().unwrap().y, y0 + 1);
}

#[test]
fn test_throttle_skips_idle_frames() {
    let mut session = Session::new(SessionConfig::default());
    session.start();
    let mut throttle = RenderThrottle::new(1000);

    let mut rendered = 0;
    for frame in 0..30u64 {
        let now = frame * FRAME_MS as u64;
        if throttle.should_render(now, session.snapshot().fingerprint()) {
            rendered += 1;
        }
        session.tick(FRAME_MS);
    }
    // 30 frames = 480ms: no gravity step, nothing changed after the first frame.
    assert_eq!(rendered, 1);
}
