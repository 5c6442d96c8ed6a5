//! Game controller and state machine
//!
//! The controller composes the renderer, sequence generator, playback, and
//! input capture into the full cycle: await start, play up to sixteen
//! rounds, show the result, wait for the restart chord.

pub mod controller;
pub mod events;
pub mod machine;
pub mod session;

pub use controller::GameController;
pub use events::Event;
pub use machine::State;
pub use session::{GameOutcome, Session};
