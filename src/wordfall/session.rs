use super::word::FallingWord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub initial_lives: u32,
}

/// State changes reported back to the game loop, mostly for logging.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Spawned { id: u64, text: String },
    Hit { id: u64, text: String, score: u32 },
    Missed { id: u64, text: String, lives: u32 },
    Ended { score: u32 },
    Reset,
}

/// One play-through. Owns every active word; nothing outside the session
/// holds on to a word.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    rules: Rules,
    pub(super) score: u32,
    pub(super) lives: u32,
    pub(super) phase: Phase,
    pub(super) typed: String,
    pub(super) words: Vec<FallingWord>,
    next_id: u64,
}

impl Session {
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            score: 0,
            lives: rules.initial_lives,
            phase: Phase::Running,
            typed: String::new(),
            words: Vec::new(),
            next_id: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    /// Active words in creation order.
    pub fn words(&self) -> &[FallingWord] {
        &self.words
    }

    /// Adds a word, assigning it the next creation id.
    pub fn insert_word(&mut self, mut word: FallingWord) -> SessionEvent {
        word.id = self.next_id;
        self.next_id += 1;
        let event = SessionEvent::Spawned {
            id: word.id,
            text: word.text.clone(),
        };
        self.words.push(word);
        event
    }

    /// Out-of-range indices are ignored. The typed buffer is dropped if no
    /// remaining word starts with it.
    pub fn remove_word(&mut self, index: usize) -> Option<FallingWord> {
        if index >= self.words.len() {
            return None;
        }
        let removed = self.words.remove(index);
        if !self.words.iter().any(|w| w.text.starts_with(&self.typed)) {
            self.typed.clear();
        }
        Some(removed)
    }

    pub(super) fn add_point(&mut self) -> u32 {
        self.score += 1;
        self.score
    }

    /// Returns true when this was the last life.
    pub(super) fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.phase = Phase::Ended;
        }
        self.lives == 0
    }

    /// Starts a fresh session with the same rules, whatever came before.
    pub fn reset(&mut self) -> SessionEvent {
        *self = Self::new(self.rules);
        SessionEvent::Reset
    }

    pub fn summary(&self) -> String {
        let noun = if self.score == 1 { "word" } else { "words" };
        format!("Game over! You typed {} {}.", self.score, noun)
    }
}
