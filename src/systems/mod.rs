//! Application systems
//!
//! Window and frame timing, kept out of main.rs so they can be tested.

mod frame_clock;
mod window;

pub use frame_clock::{FrameClock, FrameStats};
pub use window::{WindowError, WindowSystem};
