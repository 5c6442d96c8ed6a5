//! Game state machine definition
//!
//! The controller's phase is a function of the current state and an event.

use super::events::Event;

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Both lights on, prompt scrolling, waiting for the start press
    AwaitStart,
    /// A non-zero sequence was sampled for the new game
    SequenceGenerated,
    /// Rounds are being played
    RoundLoop,
    /// Final message shown, waiting for the restart chord
    GameOver,
}

impl State {
    /// Check whether rounds are in progress
    pub fn is_playing(&self) -> bool {
        matches!(self, State::RoundLoop)
    }

    /// Check whether the game has ended
    pub fn is_over(&self) -> bool {
        matches!(self, State::GameOver)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (AwaitStart, SequenceReady) => SequenceGenerated,

            (SequenceGenerated, RoundsBegin) => RoundLoop,

            // Passing a round keeps the loop going; the controller decides
            // when all rounds are done
            (RoundLoop, RoundPassed) => RoundLoop,
            (RoundLoop, RoundFailed) => GameOver,
            (RoundLoop, AllRoundsComplete) => GameOver,

            (GameOver, RestartChord) => AwaitStart,

            // Default: stay in current state
            _ => self,
        }
    }
}
