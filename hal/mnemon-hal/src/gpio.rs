//! Button and indicator abstractions
//!
//! The board has two push-buttons and two indicator lights. Button A and
//! indicator A stand for sequence bit value 0; button B and indicator B for
//! bit value 1.

/// Input port mask for button A (S1), active-low
pub const BUTTON_A_MASK: u16 = 0x0002;

/// Input port mask for button B (S2), active-low
pub const BUTTON_B_MASK: u16 = 0x0004;

/// Electrical level at which a signal is considered asserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Asserted when the line reads high (indicators)
    High,
    /// Asserted when the line reads low (buttons with pull-ups)
    Low,
}

impl ActiveLevel {
    /// Check whether a raw line level means "asserted"
    pub fn is_active(self, line_high: bool) -> bool {
        match self {
            ActiveLevel::High => line_high,
            ActiveLevel::Low => !line_high,
        }
    }

    /// Raw line level that asserts (or deasserts) the signal
    pub fn line_level(self, active: bool) -> bool {
        match self {
            ActiveLevel::High => active,
            ActiveLevel::Low => !active,
        }
    }
}

/// Push-button identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Start button; answers sequence bit 0
    A,
    /// Answers sequence bit 1
    B,
}

impl Button {
    /// Both buttons, in polling order
    pub const ALL: [Button; 2] = [Button::A, Button::B];

    /// Electrical level of a pressed button
    pub const ACTIVE_LEVEL: ActiveLevel = ActiveLevel::Low;

    /// Indicator lit while this button is held
    pub fn indicator(self) -> Indicator {
        match self {
            Button::A => Indicator::A,
            Button::B => Indicator::B,
        }
    }

    /// Bit position of this button in the raw input register
    pub fn mask(self) -> u16 {
        match self {
            Button::A => BUTTON_A_MASK,
            Button::B => BUTTON_B_MASK,
        }
    }
}

/// Indicator light identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indicator {
    /// Shows sequence bit 0
    A,
    /// Shows sequence bit 1
    B,
}

impl Indicator {
    /// Both indicators
    pub const ALL: [Indicator; 2] = [Indicator::A, Indicator::B];

    /// Electrical level of a lit indicator
    pub const ACTIVE_LEVEL: ActiveLevel = ActiveLevel::High;

    /// Button that answers this indicator
    pub fn button(self) -> Button {
        match self {
            Indicator::A => Button::A,
            Indicator::B => Button::B,
        }
    }

    /// The opposite indicator
    pub fn other(self) -> Indicator {
        match self {
            Indicator::A => Indicator::B,
            Indicator::B => Indicator::A,
        }
    }
}

/// Live button state
///
/// Implementations report the instantaneous, undebounced state. Debouncing
/// is the caller's job.
pub trait ButtonInput {
    /// Check whether a button is currently held down
    fn is_pressed(&mut self, button: Button) -> bool;

    /// Check whether both buttons are held down at once
    fn both_pressed(&mut self) -> bool {
        self.is_pressed(Button::A) && self.is_pressed(Button::B)
    }
}

/// Indicator light outputs
pub trait IndicatorOutput {
    /// Turn an indicator on or off
    fn set(&mut self, indicator: Indicator, on: bool);

    /// Light exactly one indicator, forcing the other off
    fn show_only(&mut self, indicator: Indicator) {
        self.set(indicator.other(), false);
        self.set(indicator, true);
    }

    /// Set both indicators to the same state
    fn set_all(&mut self, on: bool) {
        for indicator in Indicator::ALL {
            self.set(indicator, on);
        }
    }
}

/// Raw digital input port
///
/// Exposes the live level of every line on the port as one word.
pub trait InputRegister {
    /// Read the port; bit set = line high
    fn read(&mut self) -> u16;
}

/// Button input decoded from a raw input port
///
/// Uses [`BUTTON_A_MASK`] and [`BUTTON_B_MASK`] with active-low semantics.
pub struct RegisterButtons<R> {
    port: R,
}

impl<R: InputRegister> RegisterButtons<R> {
    /// Wrap a raw input port
    pub fn new(port: R) -> Self {
        Self { port }
    }

    /// Release the underlying port
    pub fn into_inner(self) -> R {
        self.port
    }
}

impl<R: InputRegister> ButtonInput for RegisterButtons<R> {
    fn is_pressed(&mut self, button: Button) -> bool {
        let line_high = self.port.read() & button.mask() != 0;
        Button::ACTIVE_LEVEL.is_active(line_high)
    }

    fn both_pressed(&mut self) -> bool {
        // Single read so the chord is sampled atomically
        let value = self.port.read();
        Button::ALL
            .iter()
            .all(|b| Button::ACTIVE_LEVEL.is_active(value & b.mask() != 0))
    }
}
