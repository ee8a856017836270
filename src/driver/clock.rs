//! Frame time sources and the dt policy
//!
//! A `FrameClock` yields one monotonically increasing timestamp (seconds) per
//! frame. `FrameTimer` turns consecutive timestamps into the `dt` handed to
//! `World::step`:
//! - the first frame only seeds the previous timestamp and steps by 0
//! - a gap larger than `max_dt` is clamped, counted and logged
//! - a timestamp earlier than the previous one, or a non-finite one, is an error

use std::collections::VecDeque;
use std::time::Instant;

use anyhow::{bail, Result};

pub trait FrameClock {
    fn now(&mut self) -> f64;
}

/// Monotonic wall clock, seconds since construction
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn now(&mut self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Deterministic clock: 0, period, 2*period, ...
pub struct FixedClock {
    period: f64,
    ticks: u64,
}

impl FixedClock {
    pub fn new(period: f64) -> Self {
        Self { period, ticks: 0 }
    }
}

impl FrameClock for FixedClock {
    fn now(&mut self) -> f64 {
        // multiply rather than accumulate so long runs do not drift
        let t = self.ticks as f64 * self.period;
        self.ticks += 1;
        t
    }
}

/// Replays a fixed list of timestamps, then keeps returning the last one
pub struct ScriptedClock {
    stamps: VecDeque<f64>,
    last: f64,
}

impl ScriptedClock {
    pub fn new(stamps: impl IntoIterator<Item = f64>) -> Self {
        Self {
            stamps: stamps.into_iter().collect(),
            last: 0.0,
        }
    }
}

impl FrameClock for ScriptedClock {
    fn now(&mut self) -> f64 {
        if let Some(t) = self.stamps.pop_front() {
            self.last = t;
        }
        self.last
    }
}

/// Turns frame timestamps into simulation steps
#[derive(Debug, Clone)]
pub struct FrameTimer {
    prev: Option<f64>,
    max_dt: f64,
    clamped: u64,
}

impl FrameTimer {
    pub fn new(max_dt: f64) -> Self {
        Self {
            prev: None,
            max_dt,
            clamped: 0,
        }
    }

    /// dt for the frame stamped `now`
    pub fn advance(&mut self, now: f64) -> Result<f64> {
        if !now.is_finite() {
            bail!("frame timestamp is not finite: {now}");
        }
        let dt = match self.prev {
            None => 0.0,
            Some(prev) => {
                let dt = now - prev;
                if dt < 0.0 {
                    bail!("frame timestamp went backwards: {prev} -> {now}");
                }
                dt
            }
        };
        self.prev = Some(now);

        if dt > self.max_dt {
            self.clamped += 1;
            log::warn!("frame dt {:.4}s exceeds max_dt {:.4}s, clamping", dt, self.max_dt);
            return Ok(self.max_dt);
        }
        Ok(dt)
    }

    /// How many frames have been clamped so far
    pub fn clamped(&self) -> u64 {
        self.clamped
    }
}
