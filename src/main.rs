//! Terminal runner (default binary).
//!
//! Hosts the engine: forwards key presses as commands, calls `tick` at a
//! fixed cadence, drains engine events into a status line, and submits the
//! final score to the score service once per finished game.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{Game, GameSnapshot};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::service::{LocalScoreService, ScoreService};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameEvent, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(time_seed());
    game.start();

    let view = GameView::default();
    let mut score_service = LocalScoreService::new();
    let mut snapshot = GameSnapshot::default();
    let mut status_line = String::from("arrows move · up rotates · space drops · p pause · q quit");

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        game.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&snapshot, Viewport::new(w, h), &status_line);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }

        // Drain engine events into host-side effects.
        for ev in game.take_events() {
            match ev {
                GameEvent::PieceMoved => status_line = "♪ move".to_string(),
                GameEvent::LinesCleared(kind) => {
                    status_line = format!("♪ {}", kind.effect_name());
                }
                GameEvent::GameOver { final_score } => {
                    let receipt = score_service.submit_final_score(final_score)?;
                    status_line = if receipt.new_high_score {
                        format!(
                            "game over · new high score {} · +{} coins · r restarts",
                            final_score, receipt.coins_earned
                        )
                    } else {
                        format!(
                            "game over · {} points · +{} coins · r restarts",
                            final_score, receipt.coins_earned
                        )
                    };
                }
                // Rendering reads the snapshot directly each frame.
                GameEvent::ScoreChanged(_)
                | GameEvent::LinesChanged(_)
                | GameEvent::BoardChanged
                | GameEvent::PieceChanged => {}
            }
        }
    }
}
