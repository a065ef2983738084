use super::session::{Session, SessionEvent};
use crate::core::input::KeyInput;

/// Applies one key press to the session.
///
/// While the session runs, the typed buffer is always empty or a prefix of at
/// least one active word: a completed word is destroyed, and a sequence no
/// word starts with is discarded. After the session ends only `Confirm`
/// does anything, and it starts a new session.
pub fn handle_key(session: &mut Session, key: &KeyInput) -> Option<SessionEvent> {
    if !session.is_running() {
        return match key {
            KeyInput::Confirm => Some(session.reset()),
            _ => None,
        };
    }

    match key {
        KeyInput::Delete => {
            session.typed.pop();
        }
        KeyInput::Char(c) => session.typed.extend(c.to_lowercase()),
        KeyInput::Confirm | KeyInput::Named(_) => return None,
    }

    // First in creation order wins when several words share the same text.
    if let Some(index) = session.words.iter().position(|w| w.text == session.typed) {
        let hit = session.remove_word(index)?;
        let score = session.add_point();
        session.typed.clear();
        return Some(SessionEvent::Hit {
            id: hit.id,
            text: hit.text,
            score,
        });
    }

    if !session.words.iter().any(|w| w.text.starts_with(&session.typed)) {
        session.typed.clear();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordfall::session::{Phase, Rules};
    use crate::wordfall::word::FallingWord;

    fn session_with(texts: &[&str]) -> Session {
        let mut session = Session::new(Rules { initial_lives: 3 });
        for text in texts {
            session.insert_word(FallingWord {
                id: 0,
                text: text.to_string(),
                x: 0.0,
                y: 0.0,
                speed: 0.1,
                width: text.len() as f32,
                height: 1.0,
            });
        }
        session
    }

    fn type_str(session: &mut Session, text: &str) -> Vec<SessionEvent> {
        text.chars()
            .filter_map(|c| handle_key(session, &KeyInput::Char(c)))
            .collect()
    }

    #[test]
    fn typing_full_word_destroys_it() {
        let mut session = session_with(&["hack"]);

        let events = type_str(&mut session, "hack");

        assert_eq!(
            events,
            vec![SessionEvent::Hit {
                id: 0,
                text: "hack".into(),
                score: 1
            }]
        );
        assert_eq!(session.score(), 1);
        assert_eq!(session.typed(), "");
        assert!(session.words().is_empty());
    }

    #[test]
    fn partial_word_is_kept() {
        let mut session = session_with(&["hack"]);
        type_str(&mut session, "ha");
        assert_eq!(session.typed(), "ha");
    }

    #[test]
    fn mistyped_sequence_is_discarded() {
        let mut session = session_with(&["hack", "code"]);
        type_str(&mut session, "ha");
        type_str(&mut session, "x");
        assert_eq!(session.typed(), "");
        assert_eq!(session.words().len(), 2);
    }

    #[test]
    fn buffer_clears_when_nothing_matches() {
        let mut session = session_with(&["rust"]);
        type_str(&mut session, "h");
        assert_eq!(session.typed(), "");
    }

    #[test]
    fn uppercase_input_is_lowercased() {
        let mut session = session_with(&["hack"]);
        type_str(&mut session, "HaCk");
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn delete_removes_last_char_and_rechecks() {
        let mut session = session_with(&["hack"]);
        type_str(&mut session, "hac");
        handle_key(&mut session, &KeyInput::Delete);
        assert_eq!(session.typed(), "ha");

        let mut empty = session_with(&["hack"]);
        handle_key(&mut empty, &KeyInput::Delete);
        assert_eq!(empty.typed(), "");
    }

    #[test]
    fn named_keys_leave_buffer_alone() {
        let mut session = session_with(&["hack"]);
        type_str(&mut session, "ha");
        assert!(handle_key(&mut session, &KeyInput::Named("Tab".into())).is_none());
        assert!(handle_key(&mut session, &KeyInput::Confirm).is_none());
        assert_eq!(session.typed(), "ha");
    }

    #[test]
    fn identical_texts_hit_oldest_first() {
        let mut session = session_with(&["code", "code"]);
        let events = type_str(&mut session, "code");
        assert!(matches!(events.as_slice(), [SessionEvent::Hit { id: 0, .. }]));
        assert_eq!(session.words()[0].id, 1);
    }

    #[test]
    fn shorter_word_matches_before_longer_prefix() {
        let mut session = session_with(&["code", "cod"]);

        let events = type_str(&mut session, "cod");
        assert!(matches!(events.as_slice(), [SessionEvent::Hit { id: 1, .. }]));
        assert_eq!(session.typed(), "");

        // "code" is still on screen and can be typed from scratch.
        let events = type_str(&mut session, "code");
        assert!(matches!(events.as_slice(), [SessionEvent::Hit { id: 0, .. }]));
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn prefix_is_kept_while_longer_word_remains() {
        let mut session = session_with(&["code"]);
        type_str(&mut session, "cod");
        assert_eq!(session.typed(), "cod");
        type_str(&mut session, "e");
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn ended_session_only_accepts_confirm() {
        let mut session = session_with(&["hack"]);
        session.lose_life();
        session.lose_life();
        session.lose_life();
        assert_eq!(session.phase(), Phase::Ended);

        assert!(handle_key(&mut session, &KeyInput::Char('h')).is_none());
        assert!(handle_key(&mut session, &KeyInput::Delete).is_none());
        assert_eq!(session.typed(), "");

        assert_eq!(
            handle_key(&mut session, &KeyInput::Confirm),
            Some(SessionEvent::Reset)
        );
        assert!(session.is_running());
        assert_eq!(session.lives(), 3);
        assert!(session.words().is_empty());
    }
}
