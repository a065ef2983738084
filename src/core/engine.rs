use std::io;

use crate::core::game::Game;
use crate::core::input::{is_quit, KeyInput};
use anyhow::{Context, Result};
use crossterm::event::{Event, KeyEventKind};
use futures_util::{Stream, StreamExt};
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Drives a [`Game`] from three sources on one thread: the frame timer, the
/// spawn timer and terminal events.
pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Runs until a quit key is pressed or `events` ends, then hands the game
    /// back. The binary passes crossterm's `EventStream`.
    pub async fn run<B, S>(mut self, terminal: &mut Terminal<B>, mut events: S) -> Result<G>
    where
        B: Backend,
        B::Error: std::error::Error + Send + Sync + 'static,
        S: Stream<Item = io::Result<Event>> + Unpin,
    {
        let mut frames = tokio::time::interval(self.game.tick_rate());
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // First spawn comes one full period after start.
        let spawn_period = self.game.spawn_rate();
        let mut spawns = interval_at(Instant::now() + spawn_period, spawn_period);
        spawns.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut was_running = self.game.is_running();
        info!(?spawn_period, "engine started");

        loop {
            terminal
                .draw(|f| self.game.render(f))
                .context("failed to draw frame")?;

            tokio::select! {
                _ = frames.tick() => {
                    let size = terminal.size().context("failed to query terminal size")?;
                    self.game.on_tick(Rect::new(0, 0, size.width, size.height));
                }

                _ = spawns.tick(), if self.game.is_running() => {
                    self.game.on_spawn();
                }

                maybe_event = events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if is_quit(&key) {
                            info!("quit requested");
                            break;
                        }
                        self.game.handle_input(KeyInput::from(key));
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e).context("failed to read terminal event"),
                    None => break,
                }
            }

            let running = self.game.is_running();
            if running && !was_running {
                debug!("session resumed; re-arming spawn timer");
                spawns.reset();
            }
            was_running = running;
        }

        Ok(self.game)
    }
}
