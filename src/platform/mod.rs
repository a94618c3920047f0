//! Platform abstraction layer
//!
//! The game core talks to the outside world through these traits:
//! - Polled keyboard state (`KeySource`)
//! - Frame pacing (`Clock`)
//! - Draw-list consumers (`FrameSink`, see `renderer`)
//! - Sound playback (`AudioBackend`, see `audio`)
//!
//! Window, device and surface setup live outside this crate.

pub mod clock;
pub mod input;

pub use clock::{Clock, ManualClock, StdClock};
pub use input::{Controls, InputTracker, Key, KeySnapshot, KeySource};

use crate::renderer::FrameSink;

/// Borrowed collaborators the frame driver runs against
pub struct Platform<'a> {
    pub keys: &'a mut dyn KeySource,
    pub clock: &'a mut dyn Clock,
    pub frames: &'a mut dyn FrameSink,
}
