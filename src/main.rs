//! Terminal blocktris runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from
//! `blocktris::term`. One loop: render, wait for input until the next frame,
//! apply key presses in arrival order, then advance gravity by the real time
//! that passed.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{debug, info};

use blocktris::config::Args;
use blocktris::core::{GameSnapshot, Session};
use blocktris::input::{handle_key_event, should_quit};
use blocktris::logging::init_file_logging;
use blocktris::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use blocktris::types::FRAME_MS;

/// Repaint at least this often even when nothing changed.
const REFRESH_INTERVAL_MS: u64 = 1000;

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_path {
        init_file_logging(path, args.log_level)?;
    }

    let config = args.session_config();
    info!(
        seed = config.seed,
        drop_interval_ms = config.drop_interval_ms,
        scoring = %config.scoring,
        "starting blocktris"
    );

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, Session::new(config)));

    // Always try to restore terminal state.
    let restored = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "game loop failed");
    }
    result.and(restored)
}

fn run(term: &mut TerminalRenderer, mut session: Session) -> Result<()> {
    session.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut throttle = RenderThrottle::new(REFRESH_INTERVAL_MS);

    let frame = Duration::from_millis(FRAME_MS as u64);
    let started = Instant::now();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, snap.fingerprint()) {
            let (w, h) = term.size();
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input until the next frame is due.
        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!(score = session.score(), lines = session.lines(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let applied = session.apply_action(action);
                        debug!(
                            action = action.as_str(),
                            applied,
                            phase = session.phase().as_str(),
                            "input"
                        );
                    }
                }
                Event::Resize(w, h) => {
                    debug!(w, h, "terminal resized");
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Gravity.
        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            session.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }

        if let Some(event) = session.take_last_event() {
            if event.game_over {
                info!(final_score = event.score, "game over");
            } else if event.lines_cleared > 0 {
                info!(
                    lines = event.lines_cleared,
                    points = event.points,
                    score = event.score,
                    "lines cleared"
                );
            }
        }
    }
}
