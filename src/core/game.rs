/// Core game interface for the wordfall engine
use std::time::Duration;

use ratatui::layout::Rect;

use crate::core::input::KeyInput;

/// A single-player real-time game driven by the engine loop.
///
/// The engine owns the schedules; the game only decides what each callback
/// does and whether the session is still live.
pub trait Game {
    /// Animation frame cadence.
    fn tick_rate(&self) -> Duration;

    /// Spawn timer cadence.
    fn spawn_rate(&self) -> Duration;

    /// The engine stops firing the spawn timer while this is false.
    fn is_running(&self) -> bool;

    /// One animation frame. `area` is the whole terminal.
    fn on_tick(&mut self, area: Rect);

    fn on_spawn(&mut self);

    fn handle_input(&mut self, input: KeyInput);

    /// Render the current state into the Ratatui Frame
    fn render(&self, frame: &mut ratatui::Frame);
}
