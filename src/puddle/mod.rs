//! Puddle ripple animation
//!
//! `ripple` builds the per-frame intensity field, `drops` animates the rain
//! streaks, `scheduler` paces the ticks and `session` ties them into the
//! click-driven state machine.

pub mod drops;
pub mod ripple;
pub mod scheduler;
pub mod session;

pub use session::{AnimationSession, FrameKind, Redraw};
