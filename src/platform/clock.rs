//! Frame pacing
//!
//! The match loop blocks in `wait_frame` until the next frame is due.

use std::thread;
use std::time::{Duration, Instant};

/// Frame pacing and the end-of-match hold
pub trait Clock {
    /// Block until the next frame is due; returns seconds since the previous one
    fn wait_frame(&mut self) -> f32;
    /// Keep the last presented frame up for `secs`
    fn hold(&mut self, secs: f32);
}

/// Wall-clock pacing at a target frame rate
#[derive(Debug)]
pub struct StdClock {
    frame: Duration,
    last: Instant,
}

impl StdClock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs_f64(1.0 / f64::from(fps.max(1))),
            last: Instant::now(),
        }
    }
}

impl Clock for StdClock {
    fn wait_frame(&mut self) -> f32 {
        let due = self.last + self.frame;
        let now = Instant::now();
        if due > now {
            thread::sleep(due - now);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }

    fn hold(&mut self, secs: f32) {
        thread::sleep(Duration::from_secs_f32(secs.max(0.0)));
        self.last = Instant::now();
    }
}

/// Deterministic clock for headless runs and tests: fixed delta, no sleeping
#[derive(Debug, Clone)]
pub struct ManualClock {
    pub dt: f32,
    pub frames: u64,
    /// Total seconds spent in `hold`
    pub held: f32,
}

impl ManualClock {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            frames: 0,
            held: 0.0,
        }
    }
}

impl Clock for ManualClock {
    fn wait_frame(&mut self) -> f32 {
        self.frames += 1;
        self.dt
    }

    fn hold(&mut self, secs: f32) {
        self.held += secs;
    }
}
