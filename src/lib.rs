pub mod cli;
pub mod config;
pub mod core;
pub mod wordfall;

// Re-export for convenience
pub use crate::core::game::Game;
pub use crate::wordfall::WordfallGame;
