//! Per-game data
//!
//! A session is created when a sequence is generated and discarded when the
//! next game starts.

use crate::config::ROUNDS;
use crate::sequence::Sequence;

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameOutcome {
    /// Rounds replicated correctly
    pub score: u8,
    /// All rounds were replicated
    pub won: bool,
}

/// Sequence, round index, score, and game-over flag of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    sequence: Sequence,
    round: u8,
    score: u8,
    over: bool,
}

impl Session {
    /// Start a game with a fresh sequence
    pub fn new(sequence: Sequence) -> Self {
        Self {
            sequence,
            round: 0,
            score: 0,
            over: false,
        }
    }

    /// Target pattern of this game
    pub fn sequence(&self) -> Sequence {
        self.sequence
    }

    /// Zero-based index of the round being played
    pub fn round(&self) -> u8 {
        self.round
    }

    /// Rounds replicated so far
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Check whether the game has ended
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Record a replicated round and advance
    ///
    /// Passing the last round ends the game.
    pub fn record_pass(&mut self) {
        if self.over {
            return;
        }
        self.score += 1;
        self.round += 1;
        if self.round >= ROUNDS {
            self.over = true;
        }
    }

    /// End the game after a wrong press
    pub fn record_failure(&mut self) {
        self.over = true;
    }

    /// Summarize the game
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome {
            score: self.score,
            won: self.score == ROUNDS,
        }
    }
}
