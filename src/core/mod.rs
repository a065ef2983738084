pub mod engine;
pub mod game;
pub mod input;   // Key translation
pub mod surface; // Viewport measurements for the simulation
