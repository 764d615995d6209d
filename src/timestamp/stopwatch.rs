//! Chronometer and frame-delta helpers.

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use super::format::format_duration;

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

/// Seconds since the first stopwatch in this process was created.
pub fn running_time() -> f64 {
    start().elapsed().as_secs_f64()
}

pub fn secs_from_millis(ms: f64) -> f64 {
    ms * 1e-3
}

pub fn secs_from_micros(us: f64) -> f64 {
    us * 1e-6
}

pub fn secs_from_nanos(ns: f64) -> f64 {
    ns * 1e-9
}

/// Measures elapsed time since the last reset, and time between updates.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    started: Instant,
    last_stop: f64,
    last_update: Instant,
    delta: Duration,
}

impl Stopwatch {
    /// Create a running stopwatch.
    pub fn new() -> Self {
        start();
        let now = Instant::now();
        Self {
            started: now,
            last_stop: 0.0,
            last_update: now,
            delta: Duration::ZERO,
        }
    }

    /// Restart the chronometer.
    pub fn reset(&mut self) {
        self.started = Instant::now();
    }

    /// Seconds since the last reset. The value is remembered for [`Self::stamp`].
    pub fn stop(&mut self) -> f64 {
        self.last_stop = self.started.elapsed().as_secs_f64();
        self.last_stop
    }

    /// The value returned by the most recent [`Self::stop`].
    pub fn last_stop(&self) -> f64 {
        self.last_stop
    }

    /// Duration stamp of the most recent stop, e.g. `01:05.25`.
    pub fn stamp(&self) -> String {
        format_duration(self.last_stop)
    }

    /// Stop, then stamp.
    pub fn stamp_with_stop(&mut self) -> String {
        format_duration(self.stop())
    }

    /// Record the time since the previous update.
    ///
    /// The first call measures from construction.
    pub fn update_delta(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_update;
        self.last_update = now;
    }

    /// Time between the two most recent updates.
    pub fn delta(&self) -> Duration {
        self.delta
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
