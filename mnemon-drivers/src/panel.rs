//! Button and indicator pins
//!
//! Buttons are wired to ground with pull-ups (pressed = low). Indicators are
//! driven directly (lit = high).

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use mnemon_hal::{Button, ButtonInput, Indicator, IndicatorOutput};

/// Two push-buttons on GPIO inputs
pub struct PinButtons<A, B> {
    a: A,
    b: B,
}

impl<A: InputPin, B: InputPin> PinButtons<A, B> {
    /// Create from the start button (A) and the second button (B)
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }

    /// Release both pins
    pub fn into_inner(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A: InputPin, B: InputPin> ButtonInput for PinButtons<A, B> {
    fn is_pressed(&mut self, button: Button) -> bool {
        let level = match button {
            Button::A => self.a.is_high().ok(),
            Button::B => self.b.is_high().ok(),
        };
        // A failed read counts as released
        level.is_some_and(|high| Button::ACTIVE_LEVEL.is_active(high))
    }
}

/// Two indicator lights on GPIO outputs
pub struct PinIndicators<A, B> {
    a: A,
    b: B,
    lit: [bool; 2],
}

impl<A: OutputPin, B: OutputPin> PinIndicators<A, B> {
    /// Take both pins and switch the lights off
    pub fn new(a: A, b: B) -> Self {
        let mut indicators = Self {
            a,
            b,
            lit: [false; 2],
        };
        indicators.set_all(false);
        indicators
    }

    /// Last requested state of an indicator
    pub fn is_lit(&self, indicator: Indicator) -> bool {
        self.lit[index(indicator)]
    }

    /// Release both pins
    pub fn into_inner(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A: OutputPin, B: OutputPin> IndicatorOutput for PinIndicators<A, B> {
    fn set(&mut self, indicator: Indicator, on: bool) {
        self.lit[index(indicator)] = on;
        let level = PinState::from(Indicator::ACTIVE_LEVEL.line_level(on));
        // Write errors are ignored; the requested state is kept
        match indicator {
            Indicator::A => {
                let _ = self.a.set_state(level);
            }
            Indicator::B => {
                let _ = self.b.set_state(level);
            }
        }
    }
}

fn index(indicator: Indicator) -> usize {
    match indicator {
        Indicator::A => 0,
        Indicator::B => 1,
    }
}
