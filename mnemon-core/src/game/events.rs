//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Start was pressed and a non-zero sequence sampled
    SequenceReady,
    /// First round is about to be announced
    RoundsBegin,
    /// Player replicated the current round
    RoundPassed,
    /// Player pressed the wrong button
    RoundFailed,
    /// The last round was passed
    AllRoundsComplete,
    /// Both buttons held on the game-over screen
    RestartChord,
}
