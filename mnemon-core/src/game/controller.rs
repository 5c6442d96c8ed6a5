//! Top-level game controller
//!
//! Owns the peripherals for the lifetime of the program and a [`Session`]
//! for the lifetime of one game:
//!
//! ```text
//! AwaitStart ──► SequenceGenerated ──► RoundLoop ──► GameOver
//!     ▲                                                  │
//!     └──────────────────── restart chord ───────────────┘
//! ```

use mnemon_hal::{ButtonInput, CharDisplay, IndicatorOutput};

use super::events::Event;
use super::machine::State;
use super::session::{GameOutcome, Session};
use crate::config::{ConfigError, GameConfig, ROUNDS};
use crate::input::{InputCapture, RoundResult};
use crate::playback::PlaybackEngine;
use crate::render::DisplayRenderer;
use crate::sequence::{Sequence, SequenceGenerator};
use crate::timing::{Delay, EntropySource};

/// Prompt scrolled while waiting for the start press
pub const START_PROMPT: &str = "PRESS S1 TO BEGIN";

/// Word announcing each round
pub const ROUND_TEXT: &str = "ROUND";

/// Message scrolled after all rounds are replicated
pub const WIN_TEXT: &str = "YOU WIN";

/// Message scrolled before the final score
pub const LOSS_TEXT: &str = "GAME OVER FINAL SCORE";

/// Game controller
///
/// `T` is the timing source: delays and the entropy sample both come from
/// it (normally a [`crate::timing::TimingService`]).
pub struct GameController<D, B, L, T> {
    renderer: DisplayRenderer<D>,
    buttons: B,
    indicators: L,
    clock: T,
    generator: SequenceGenerator,
    playback: PlaybackEngine,
    capture: InputCapture,
    round_pause: u16,
    state: State,
}

impl<D, B, L, T> GameController<D, B, L, T>
where
    D: CharDisplay,
    B: ButtonInput,
    L: IndicatorOutput,
    T: Delay + EntropySource,
{
    /// Create a controller, validating the configuration
    pub fn new(
        display: D,
        buttons: B,
        indicators: L,
        clock: T,
        config: &GameConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            renderer: DisplayRenderer::from_config(display, config),
            buttons,
            indicators,
            clock,
            generator: SequenceGenerator::default(),
            playback: PlaybackEngine::new(&config.timings),
            capture: InputCapture::new(&config.timings),
            round_pause: config.timings.round_pause,
            state: State::AwaitStart,
        })
    }

    /// Get current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Get the renderer mutably, for display housekeeping between games
    pub fn renderer_mut(&mut self) -> &mut DisplayRenderer<D> {
        &mut self.renderer
    }

    /// Get the timing source
    pub fn clock(&self) -> &T {
        &self.clock
    }

    /// Play one game, from the start prompt to the restart chord
    pub fn run_game(&mut self) -> GameOutcome {
        let sequence = self.await_start();
        let mut session = Session::new(sequence);

        self.transition(Event::RoundsBegin);
        self.play_rounds(&mut session);

        let outcome = session.outcome();
        self.show_result(&outcome);
        self.await_restart();
        outcome
    }

    fn await_start(&mut self) -> Sequence {
        self.indicators.set_all(true);
        self.renderer.scroll(START_PROMPT, &mut self.clock);

        let sequence = self.generator.generate(&mut self.buttons, &self.clock);
        self.transition(Event::SequenceReady);
        sequence
    }

    fn play_rounds(&mut self, session: &mut Session) {
        let sequence = session.sequence();

        while !session.is_over() {
            let round = session.round();

            self.indicators.set_all(false);
            self.clock.wait(self.round_pause);
            self.renderer.show_word(ROUND_TEXT);
            self.clock.wait(self.round_pause);
            self.renderer.show_number(u32::from(round) + 1);
            self.clock.wait(self.round_pause);

            self.playback.play_round(
                sequence,
                round,
                &mut self.renderer,
                &mut self.indicators,
                &mut self.clock,
            );

            let result = self.capture.capture(
                sequence,
                round,
                &mut self.renderer,
                &mut self.buttons,
                &mut self.indicators,
                &mut self.clock,
            );

            match result {
                RoundResult::Passed => {
                    session.record_pass();
                    self.transition(Event::RoundPassed);
                }
                RoundResult::Failed { .. } => {
                    session.record_failure();
                    self.transition(Event::RoundFailed);
                }
            }
        }

        if session.score() == ROUNDS {
            self.transition(Event::AllRoundsComplete);
        }
    }

    fn show_result(&mut self, outcome: &GameOutcome) {
        #[cfg(feature = "defmt")]
        defmt::info!("Game over: {:?}", outcome);

        self.indicators.set_all(true);
        if outcome.won {
            self.renderer.scroll(WIN_TEXT, &mut self.clock);
        } else {
            self.renderer.scroll(LOSS_TEXT, &mut self.clock);
            self.renderer.show_number(u32::from(outcome.score));
        }
    }

    fn await_restart(&mut self) {
        while !self.buttons.both_pressed() {}
        self.transition(Event::RestartChord);
    }

    fn transition(&mut self, event: Event) {
        let next = self.state.transition(event);
        #[cfg(feature = "defmt")]
        defmt::debug!("State {:?} -> {:?} on {:?}", self.state, next, event);
        self.state = next;
    }
}
