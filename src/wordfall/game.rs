use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use super::catalog::WordCatalog;
use super::renderer;
use super::session::{Rules, Session, SessionEvent};
use super::spawner::{self, SpeedRange};
use super::{matcher, physics};
use crate::config::GameConfig;
use crate::core::game::Game;
use crate::core::input::KeyInput;
use crate::core::surface::{Surface, TerminalSurface};

/// The falling-words typing game, wired to the engine's three callbacks.
pub struct WordfallGame {
    session: Session,
    catalog: WordCatalog,
    speed: SpeedRange,
    tick_rate: Duration,
    spawn_rate: Duration,
    surface: TerminalSurface,
    rng: StdRng,
}

impl WordfallGame {
    /// `seed` makes spawn positions, speeds and word choice reproducible.
    pub fn new(config: &GameConfig, catalog: WordCatalog, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            session: Session::new(Rules {
                initial_lives: config.initial_lives,
            }),
            catalog,
            speed: SpeedRange {
                min: config.speed_min,
                max: config.speed_max,
            },
            tick_rate: config.frame_interval(),
            spawn_rate: config.spawn_interval(),
            surface: TerminalSurface::default(),
            rng,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Same effect as pressing Enter on the game-over screen.
    pub fn restart(&mut self) {
        let event = self.session.reset();
        self.log(&event);
    }

    fn log(&self, event: &SessionEvent) {
        match event {
            SessionEvent::Spawned { id, text } => debug!(id, %text, "word spawned"),
            SessionEvent::Hit { id, text, score } => debug!(id, %text, score, "word typed"),
            SessionEvent::Missed { id, text, lives } => debug!(id, %text, lives, "word missed"),
            SessionEvent::Ended { score } => info!(score, "session ended"),
            SessionEvent::Reset => info!(lives = self.session.lives(), "session started"),
        }
    }
}

impl Game for WordfallGame {
    fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    fn spawn_rate(&self) -> Duration {
        self.spawn_rate
    }

    fn is_running(&self) -> bool {
        self.session.is_running()
    }

    fn on_tick(&mut self, area: Rect) {
        let playfield = renderer::layout(area).playfield;
        if playfield != self.surface.area() {
            debug!(?playfield, "playfield resized");
            self.surface = TerminalSurface::new(playfield);
        }

        let floor = self.surface.viewport().height;
        for event in physics::tick(&mut self.session, floor) {
            self.log(&event);
        }
    }

    fn on_spawn(&mut self) {
        if self.surface.area().is_empty() {
            warn!("spawn skipped: playfield not sized yet");
            return;
        }
        if let Some(event) = spawner::spawn(
            &mut self.session,
            &self.catalog,
            &self.surface,
            self.speed,
            &mut self.rng,
        ) {
            self.log(&event);
        }
    }

    fn handle_input(&mut self, input: KeyInput) {
        if let Some(event) = matcher::handle_key(&mut self.session, &input) {
            self.log(&event);
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        renderer::render(frame, &self.session);
    }
}
