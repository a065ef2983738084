use super::session::{Session, SessionEvent};

/// Advances every word by its speed and resolves misses against `floor`.
///
/// A miss costs a life and clears the typed buffer. Losing the last life ends
/// the session on the spot; words after the fatal one are left untouched.
pub fn tick(session: &mut Session, floor: f32) -> Vec<SessionEvent> {
    let mut events = Vec::new();
    if !session.is_running() {
        return events;
    }

    let mut index = 0;
    while index < session.words.len() {
        let word = &mut session.words[index];
        word.advance();
        if !word.has_reached(floor) {
            index += 1;
            continue;
        }

        let Some(missed) = session.remove_word(index) else {
            break;
        };
        let ended = session.lose_life();
        session.typed.clear();
        events.push(SessionEvent::Missed {
            id: missed.id,
            text: missed.text,
            lives: session.lives,
        });
        if ended {
            events.push(SessionEvent::Ended {
                score: session.score,
            });
            break;
        }
    }
    events
}
