//! Timing constants for the simulator.
//!
//! These use `std::time::Duration`, which the `no_std` face crate does not
//! have, so they live here.

use std::time::Duration;

/// Target frame time. The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(50);

/// How far one clock adjustment key press moves the simulated clock.
pub const CLOCK_STEP_MINUTES: i64 = 17;
