use rand::Rng;

use super::catalog::WordCatalog;
use super::session::{Session, SessionEvent};
use super::word::FallingWord;
use crate::core::surface::Surface;

/// Inclusive bounds for a new word's fall speed, in rows per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedRange {
    pub min: f32,
    pub max: f32,
}

/// Drops one random word just above the viewport. Does nothing once the
/// session has ended.
pub fn spawn<S, R>(
    session: &mut Session,
    catalog: &WordCatalog,
    surface: &S,
    speed: SpeedRange,
    rng: &mut R,
) -> Option<SessionEvent>
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    if !session.is_running() {
        return None;
    }

    let text = catalog.pick(rng).to_string();
    let size = surface.measure(&text);
    let max_x = (surface.viewport().width - size.width).max(0.0);

    let word = FallingWord {
        id: 0,
        x: rng.random_range(0.0..=max_x),
        y: -size.height,
        speed: rng.random_range(speed.min..=speed.max),
        width: size.width,
        height: size.height,
        text,
    };
    Some(session.insert_word(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::Extent;
    use crate::wordfall::session::Rules;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct FixedSurface(Extent);

    impl Surface for FixedSurface {
        fn viewport(&self) -> Extent {
            self.0
        }

        fn measure(&self, text: &str) -> Extent {
            Extent::new(text.chars().count() as f32, 1.0)
        }
    }

    const SPEED: SpeedRange = SpeedRange { min: 0.1, max: 0.3 };

    #[test]
    fn spawned_word_starts_above_viewport_within_bounds() {
        let mut session = Session::new(Rules { initial_lives: 3 });
        let catalog = WordCatalog::new(["hack", "terminal"]).unwrap();
        let surface = FixedSurface(Extent::new(20.0, 10.0));
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..100 {
            spawn(&mut session, &catalog, &surface, SPEED, &mut rng);
        }

        assert_eq!(session.words().len(), 100);
        for word in session.words() {
            assert_eq!(word.y, -1.0);
            assert!(word.x >= 0.0 && word.x + word.width <= 20.0);
            assert!(word.speed >= SPEED.min && word.speed <= SPEED.max);
        }
    }

    #[test]
    fn word_wider_than_viewport_is_pinned_left() {
        let mut session = Session::new(Rules { initial_lives: 3 });
        let catalog = WordCatalog::new(["terminal"]).unwrap();
        let surface = FixedSurface(Extent::new(4.0, 10.0));
        let mut rng = StdRng::seed_from_u64(2);

        spawn(&mut session, &catalog, &surface, SPEED, &mut rng);
        assert_eq!(session.words()[0].x, 0.0);
    }

    #[test]
    fn ended_session_spawns_nothing() {
        let mut session = Session::new(Rules { initial_lives: 1 });
        session.lose_life();
        let catalog = WordCatalog::default();
        let surface = FixedSurface(Extent::new(20.0, 10.0));
        let mut rng = StdRng::seed_from_u64(3);

        assert!(spawn(&mut session, &catalog, &surface, SPEED, &mut rng).is_none());
        assert!(session.words().is_empty());
    }

    #[test]
    fn spawn_reports_event() {
        let mut session = Session::new(Rules { initial_lives: 3 });
        let catalog = WordCatalog::new(["hack"]).unwrap();
        let surface = FixedSurface(Extent::new(20.0, 10.0));
        let mut rng = StdRng::seed_from_u64(4);

        let event = spawn(&mut session, &catalog, &surface, SPEED, &mut rng);
        assert_eq!(
            event,
            Some(SessionEvent::Spawned {
                id: 0,
                text: "hack".into()
            })
        );
    }
}
