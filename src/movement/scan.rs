//! Word scanner state machines
//!
//! Scanners consume one classified character per step and know nothing about
//! documents, which keeps them testable on plain slices.

/// State of a forward word scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardState {
    /// Inside a word: waiting for a non-word character
    SeekingBreak,
    /// Outside a word: the next word character is the target
    SeekingStart,
}

/// Forward scan for the start of the next word (`w`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordForwardScan {
    state: ForwardState,
}

impl WordForwardScan {
    /// Scan starting on `current`, the character under the cursor
    ///
    /// A missing or non-word character means the cursor is already outside a word.
    #[must_use]
    pub fn starting_on(current: Option<char>) -> Self {
        let state = match current {
            Some(c) if super::is_word_char(c) => ForwardState::SeekingBreak,
            _ => ForwardState::SeekingStart,
        };
        Self { state }
    }

    /// Scan from a position that is not inside text
    #[must_use]
    pub fn outside_word() -> Self {
        Self {
            state: ForwardState::SeekingStart,
        }
    }

    #[must_use]
    pub fn state(&self) -> ForwardState {
        self.state
    }

    /// Feed one character; returns true when it starts the target word
    pub fn step(&mut self, is_word: bool) -> bool {
        match self.state {
            ForwardState::SeekingBreak => {
                if !is_word {
                    self.state = ForwardState::SeekingStart;
                }
                false
            }
            ForwardState::SeekingStart => is_word,
        }
    }
}

/// Phase of a backward word scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackwardPhase {
    /// Walking back over non-word characters
    SkipNonWord,
    /// Walking back through a word, tracking its earliest character
    SkipWord,
}

/// Backward scan for the start of the word behind the cursor (`b`)
///
/// `P` is whatever identifies a character position to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordBackwardScan<P: Copy> {
    phase: BackwardPhase,
    candidate: Option<P>,
}

impl<P: Copy> Default for WordBackwardScan<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Copy> WordBackwardScan<P> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: BackwardPhase::SkipNonWord,
            candidate: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> BackwardPhase {
        self.phase
    }

    /// Feed the character at `at`, moving backward
    ///
    /// Returns the word start once the character before it has been seen.
    pub fn step(&mut self, is_word: bool, at: P) -> Option<P> {
        match (self.phase, is_word) {
            (BackwardPhase::SkipNonWord, true) => {
                self.phase = BackwardPhase::SkipWord;
                self.candidate = Some(at);
                None
            }
            (BackwardPhase::SkipNonWord, false) => None,
            (BackwardPhase::SkipWord, true) => {
                self.candidate = Some(at);
                None
            }
            (BackwardPhase::SkipWord, false) => self.candidate,
        }
    }

    /// Result when content runs out: the word start if a word was entered
    #[must_use]
    pub fn finish(self) -> Option<P> {
        match self.phase {
            BackwardPhase::SkipWord => self.candidate,
            BackwardPhase::SkipNonWord => None,
        }
    }
}
