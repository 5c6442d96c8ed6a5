//! Simulated peripherals for unit tests
//!
//! Handles are cheap clones over shared state, so a test can keep one copy
//! for assertions while the code under test owns another.

use core::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use mnemon_hal::{
    Button, ButtonInput, CharDisplay, FreeRunningCounter, Indicator, IndicatorOutput,
    PeriodicTimer, ADDRESSABLE_SLOTS,
};

use crate::timing::{Delay, EntropySource};

const SLOTS: usize = ADDRESSABLE_SLOTS as usize;

/// Counter that replays a list of values, repeating the last one
pub struct ScriptedCounter {
    values: Vec<u16>,
    index: Cell<usize>,
}

impl ScriptedCounter {
    pub fn new(values: &[u16]) -> Self {
        assert!(!values.is_empty());
        Self {
            values: values.to_vec(),
            index: Cell::new(0),
        }
    }

    pub fn constant(value: u16) -> Self {
        Self::new(&[value])
    }

    fn next(&self) -> u16 {
        let i = self.index.get();
        self.index.set(i + 1);
        self.values[i.min(self.values.len() - 1)]
    }
}

impl FreeRunningCounter for ScriptedCounter {
    fn count(&self) -> u16 {
        self.next()
    }
}

/// Periodic timer whose flag rises on every `n`th poll
pub struct SimTimer {
    every: u32,
    polls: Cell<u32>,
    pending: Cell<bool>,
    ticks: u32,
}

impl SimTimer {
    pub fn every(n: u32) -> Self {
        assert!(n > 0);
        Self {
            every: n,
            polls: Cell::new(0),
            pending: Cell::new(false),
            ticks: 0,
        }
    }

    /// Periods consumed by `clear`
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn polls(&self) -> u32 {
        self.polls.get()
    }
}

impl PeriodicTimer for SimTimer {
    fn has_elapsed(&self) -> bool {
        let polls = self.polls.get() + 1;
        self.polls.set(polls);
        if polls % self.every == 0 {
            self.pending.set(true);
        }
        self.pending.get()
    }

    fn clear(&mut self) {
        if self.pending.replace(false) {
            self.ticks += 1;
        }
    }
}

/// Entropy source that replays samples, repeating the last one
pub struct ScriptedEntropy {
    counter: ScriptedCounter,
}

impl ScriptedEntropy {
    pub fn new(samples: &[u16]) -> Self {
        Self {
            counter: ScriptedCounter::new(samples),
        }
    }

    /// Number of samples taken so far
    pub fn samples(&self) -> usize {
        self.counter.index.get()
    }
}

impl EntropySource for ScriptedEntropy {
    fn sample_entropy(&self) -> u16 {
        self.counter.next()
    }
}

#[derive(Debug)]
struct DisplayState {
    slots: [u8; SLOTS],
    writes: Vec<(u8, u8)>,
}

/// Display that records every write
///
/// Slots start as `?` so untouched cells are visible in assertions.
#[derive(Debug, Clone)]
pub struct RecordingDisplay(Rc<RefCell<DisplayState>>);

impl RecordingDisplay {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(DisplayState {
            slots: [b'?'; SLOTS],
            writes: Vec::new(),
        })))
    }

    pub fn slots(&self) -> [u8; SLOTS] {
        self.0.borrow().slots
    }

    pub fn slot(&self, slot: usize) -> u8 {
        self.0.borrow().slots[slot]
    }

    /// Visible slots `1..=6` as text
    pub fn visible(&self) -> String {
        self.0.borrow().slots[1..].iter().map(|&b| b as char).collect()
    }

    /// Every `(glyph, slot)` write in order
    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.0.borrow().writes.clone()
    }
}

impl CharDisplay for RecordingDisplay {
    fn write_char(&mut self, ch: u8, slot: u8) {
        assert!(slot < ADDRESSABLE_SLOTS, "slot {} out of range", slot);
        let mut state = self.0.borrow_mut();
        state.slots[slot as usize] = ch;
        state.writes.push((ch, slot));
    }
}

fn light_index(indicator: Indicator) -> usize {
    match indicator {
        Indicator::A => 0,
        Indicator::B => 1,
    }
}

/// Indicator pair with shared on/off state
#[derive(Debug, Clone)]
pub struct RecordingIndicators(Rc<Cell<[bool; 2]>>);

impl RecordingIndicators {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new([false; 2])))
    }

    pub fn is_on(&self, indicator: Indicator) -> bool {
        self.0.get()[light_index(indicator)]
    }

    pub fn lights(&self) -> [bool; 2] {
        self.0.get()
    }
}

impl IndicatorOutput for RecordingIndicators {
    fn set(&mut self, indicator: Indicator, on: bool) {
        let mut lights = self.0.get();
        lights[light_index(indicator)] = on;
        self.0.set(lights);
    }
}

/// One step of a button script
///
/// Every read of either button consumes one unit of the front step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `n` reads with nothing pressed
    Idle(u32),
    /// `n` reads during which only the given button is down
    Hold(Button, u32),
    /// `n` reads with both buttons down
    Chord(u32),
}

/// Buttons driven by a script of reads
///
/// Reading past the end of the script panics, which catches code that
/// polls more than a test expects.
#[derive(Debug, Clone)]
pub struct ScriptedButtons(Rc<RefCell<VecDeque<Step>>>);

impl ScriptedButtons {
    pub fn new(steps: &[Step]) -> Self {
        let steps = steps
            .iter()
            .copied()
            .filter(|step| match *step {
                Step::Idle(n) | Step::Hold(_, n) | Step::Chord(n) => n > 0,
            })
            .collect();
        Self(Rc::new(RefCell::new(steps)))
    }

    /// Check whether every scripted read was consumed
    pub fn is_exhausted(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl ButtonInput for ScriptedButtons {
    fn is_pressed(&mut self, button: Button) -> bool {
        let mut steps = self.0.borrow_mut();
        let Some(step) = steps.front_mut() else {
            panic!("button script exhausted reading {:?}", button);
        };
        let (pressed, left) = match step {
            Step::Idle(n) => (false, n),
            Step::Hold(held, n) => (*held == button, n),
            Step::Chord(n) => (true, n),
        };
        *left -= 1;
        if *left == 0 {
            steps.pop_front();
        }
        pressed
    }
}

/// What the player could see when a wait started
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Visible slots
    pub text: String,
    /// Indicator A and B
    pub lights: [bool; 2],
    /// Length of the wait
    pub units: u16,
}

/// Delay that returns at once and records the display on every wait
///
/// Also serves as the entropy source so a controller can run on it alone.
pub struct SnapshotDelay {
    display: RecordingDisplay,
    indicators: Option<RecordingIndicators>,
    entropy: ScriptedEntropy,
    snapshots: Vec<Snapshot>,
}

impl SnapshotDelay {
    pub fn new(display: RecordingDisplay) -> Self {
        Self {
            display,
            indicators: None,
            entropy: ScriptedEntropy::new(&[1]),
            snapshots: Vec::new(),
        }
    }

    pub fn with_indicators(display: RecordingDisplay, indicators: RecordingIndicators) -> Self {
        Self {
            indicators: Some(indicators),
            ..Self::new(display)
        }
    }

    pub fn with_entropy(mut self, samples: &[u16]) -> Self {
        self.entropy = ScriptedEntropy::new(samples);
        self
    }

    pub fn snapshots(&self) -> Vec<Snapshot> {
        self.snapshots.clone()
    }

    /// Visible text at every wait
    pub fn frames(&self) -> Vec<String> {
        self.snapshots.iter().map(|s| s.text.clone()).collect()
    }

    pub fn total_units(&self) -> u32 {
        self.snapshots.iter().map(|s| u32::from(s.units)).sum()
    }
}

impl Delay for SnapshotDelay {
    fn wait(&mut self, units: u16) {
        let lights = self
            .indicators
            .as_ref()
            .map_or([false; 2], RecordingIndicators::lights);
        self.snapshots.push(Snapshot {
            text: self.display.visible(),
            lights,
            units,
        });
    }
}

impl EntropySource for SnapshotDelay {
    fn sample_entropy(&self) -> u16 {
        self.entropy.sample_entropy()
    }
}
