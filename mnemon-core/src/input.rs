//! Player input capture and verification
//!
//! Presses are debounced by holding: while a button stays down its
//! indicator is lit and the button is re-polled every debounce interval.
//! Only the release completes the press. Each completed press is checked
//! against the sequence immediately.

use mnemon_hal::{Button, ButtonInput, CharDisplay, IndicatorOutput};

use crate::config::{Timings, ROUNDS};
use crate::render::DisplayRenderer;
use crate::sequence::Sequence;
use crate::timing::Delay;

/// Word shown while waiting for the player
pub const GO_TEXT: &str = "GO";

/// Result of one round of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoundResult {
    /// Every press matched
    Passed,
    /// A press did not match; the game is over
    Failed {
        /// Zero-based index of the wrong press
        press: u8,
        /// Button the sequence asked for
        expected: Button,
    },
}

impl RoundResult {
    /// Check whether this result ends the game
    pub fn is_game_over(&self) -> bool {
        matches!(self, RoundResult::Failed { .. })
    }
}

/// Collects and verifies the player's presses for a round
#[derive(Debug, Clone, Copy)]
pub struct InputCapture {
    debounce_poll: u16,
}

impl InputCapture {
    /// Create a capture stage with the given debounce interval
    pub fn new(timings: &Timings) -> Self {
        Self {
            debounce_poll: timings.debounce_poll,
        }
    }

    /// Collect `round + 1` presses, stopping at the first mismatch
    ///
    /// Button A is always polled before button B, so holding both counts as
    /// a press of A. Rounds past the last are treated as the last.
    pub fn capture<D, B, L, T>(
        &self,
        sequence: Sequence,
        round: u8,
        renderer: &mut DisplayRenderer<D>,
        buttons: &mut B,
        indicators: &mut L,
        delay: &mut T,
    ) -> RoundResult
    where
        D: CharDisplay,
        B: ButtonInput,
        L: IndicatorOutput,
        T: Delay,
    {
        renderer.show_word(GO_TEXT);

        let round = round.min(ROUNDS - 1);
        let mut presses: u8 = 0;
        while presses <= round {
            let Some(pressed) = Button::ALL.into_iter().find(|&b| buttons.is_pressed(b)) else {
                continue;
            };

            self.hold(pressed, buttons, indicators, delay);

            let expected = sequence.expected(presses);
            if pressed != expected {
                return RoundResult::Failed {
                    press: presses,
                    expected,
                };
            }
            presses += 1;
        }
        RoundResult::Passed
    }

    /// Keep the indicator lit until the button is released
    fn hold<B, L, T>(&self, button: Button, buttons: &mut B, indicators: &mut L, delay: &mut T)
    where
        B: ButtonInput,
        L: IndicatorOutput,
        T: Delay,
    {
        let indicator = button.indicator();
        while buttons.is_pressed(button) {
            indicators.set(indicator, true);
            delay.wait(self.debounce_poll);
        }
        indicators.set(indicator, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::PlaybackEngine;
    use crate::testing::{
        RecordingDisplay, RecordingIndicators, ScriptedButtons, SnapshotDelay, Step,
    };
    use mnemon_hal::Indicator;
    use std::vec::Vec;

    struct Rig {
        renderer: DisplayRenderer<RecordingDisplay>,
        display: RecordingDisplay,
        indicators: RecordingIndicators,
        delay: SnapshotDelay,
        capture: InputCapture,
    }

    fn rig() -> Rig {
        let display = RecordingDisplay::new();
        let indicators = RecordingIndicators::new();
        let timings = Timings::default();
        Rig {
            renderer: DisplayRenderer::new(display.clone(), 6, &timings),
            delay: SnapshotDelay::with_indicators(display.clone(), indicators.clone()),
            display,
            indicators,
            capture: InputCapture::new(&timings),
        }
    }

    /// Script a press of `button` held for `held` debounce polls, then released
    fn press(button: Button, held: u32) -> [Step; 2] {
        // A press of B is seen only after A's poll for the same iteration
        let reads = match button {
            Button::A => 1 + held,
            Button::B => 2 + held,
        };
        [Step::Hold(button, reads), Step::Idle(1)]
    }

    fn script(buttons: &[Button]) -> Vec<Step> {
        buttons.iter().flat_map(|&b| press(b, 2)).collect()
    }

    fn run(rig: &mut Rig, seq: Sequence, round: u8, buttons: &mut ScriptedButtons) -> RoundResult {
        let mut lights = rig.indicators.clone();
        rig.capture.capture(
            seq,
            round,
            &mut rig.renderer,
            buttons,
            &mut lights,
            &mut rig.delay,
        )
    }

    #[test]
    fn test_correct_presses_pass() {
        let mut rig = rig();
        // bits 0 and 2 set: B, A, B
        let seq = Sequence::new(0b0101).unwrap();
        let mut buttons = ScriptedButtons::new(&script(&[Button::B, Button::A, Button::B]));

        assert_eq!(run(&mut rig, seq, 2, &mut buttons), RoundResult::Passed);
        assert!(buttons.is_exhausted());
        assert_eq!(rig.display.visible(), "GO    ");
    }

    #[test]
    fn test_wrong_press_fails_immediately() {
        let mut rig = rig();
        let seq = Sequence::new(0b0101).unwrap();
        // Second press should be A; the trailing press must never be read
        let mut buttons =
            ScriptedButtons::new(&script(&[Button::B, Button::B, Button::A, Button::A]));

        let result = run(&mut rig, seq, 3, &mut buttons);
        assert_eq!(
            result,
            RoundResult::Failed {
                press: 1,
                expected: Button::A
            }
        );
        assert!(result.is_game_over());
        assert!(!buttons.is_exhausted());
    }

    #[test]
    fn test_indicator_lit_while_held() {
        let mut rig = rig();
        let seq = Sequence::new(0b0010).unwrap(); // step 0 = A
        let mut buttons = ScriptedButtons::new(&script(&[Button::A]));

        assert_eq!(run(&mut rig, seq, 0, &mut buttons), RoundResult::Passed);

        let snaps = rig.delay.snapshots();
        assert_eq!(snaps.len(), 2);
        assert!(snaps.iter().all(|s| s.lights == [true, false] && s.units == 3));
        assert!(!rig.indicators.is_on(Indicator::A));
    }

    #[test]
    fn test_idle_polls_do_not_count() {
        let mut rig = rig();
        let seq = Sequence::new(0b0001).unwrap(); // step 0 = B
        let mut steps = std::vec![Step::Idle(50)];
        steps.extend(script(&[Button::B]));
        let mut buttons = ScriptedButtons::new(&steps);

        assert_eq!(run(&mut rig, seq, 0, &mut buttons), RoundResult::Passed);
    }

    #[test]
    fn test_both_buttons_count_as_a() {
        // Chord reads: the A poll that finds it, two held polls, then release
        let chord = [Step::Chord(3), Step::Idle(1)];

        let mut first = rig();
        let seq = Sequence::new(0b0010).unwrap(); // step 0 = A
        let mut buttons = ScriptedButtons::new(&chord);
        assert_eq!(run(&mut first, seq, 0, &mut buttons), RoundResult::Passed);
        assert!(buttons.is_exhausted());
        let snaps = first.delay.snapshots();
        assert_eq!(snaps.len(), 2);
        assert!(snaps.iter().all(|s| s.lights == [true, false]));

        let mut second = rig();
        let seq = Sequence::new(0b0001).unwrap(); // step 0 = B
        let mut buttons = ScriptedButtons::new(&chord);
        assert_eq!(
            run(&mut second, seq, 0, &mut buttons),
            RoundResult::Failed {
                press: 0,
                expected: Button::B
            }
        );
    }

    #[test]
    fn test_round_past_last_is_clamped() {
        let mut rig = rig();
        let seq = Sequence::new(0xFFFF).unwrap(); // every step = B
        let mut buttons = ScriptedButtons::new(&script(&[Button::B; ROUNDS as usize]));

        assert_eq!(run(&mut rig, seq, u8::MAX, &mut buttons), RoundResult::Passed);
        assert!(buttons.is_exhausted());
    }

    #[test]
    fn test_playback_and_capture_agree() {
        // What playback flashes for step k is what capture accepts for press k
        let seq = Sequence::new(0xA5C3).unwrap();
        let round = 15;

        let display = RecordingDisplay::new();
        let indicators = RecordingIndicators::new();
        let timings = Timings::default();
        let mut renderer = DisplayRenderer::new(display.clone(), 6, &timings);
        let mut lights = indicators.clone();
        let mut delay = SnapshotDelay::with_indicators(display, indicators);
        PlaybackEngine::new(&timings).play_round(seq, round, &mut renderer, &mut lights, &mut delay);

        let flashed: Vec<Button> = delay
            .snapshots()
            .iter()
            .skip(1)
            .step_by(2)
            .map(|s| {
                if s.lights[0] {
                    Indicator::A.button()
                } else {
                    Indicator::B.button()
                }
            })
            .collect();
        assert_eq!(flashed.len(), 16);

        let mut rig = rig();
        let mut buttons = ScriptedButtons::new(&script(&flashed));
        assert_eq!(run(&mut rig, seq, round, &mut buttons), RoundResult::Passed);
    }
}
