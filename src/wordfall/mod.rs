/// Wordfall: type the falling words before they hit the floor
pub mod catalog;
pub mod game;
pub mod matcher;
pub mod physics;
pub mod renderer;
pub mod session;
pub mod spawner;
pub mod word;

pub use catalog::WordCatalog;
pub use game::WordfallGame;
pub use session::{Phase, Rules, Session, SessionEvent};
pub use spawner::SpeedRange;
pub use word::FallingWord;
