//! Frame timing with lag smoothing.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Produces per-frame deltas and tracks FPS over a rolling window.
///
/// A frame longer than the lag threshold (e.g. after the tab was hidden)
/// advances animations by a fixed small step instead of jumping ahead.
pub struct FrameClock {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    max_samples: usize,
    lag_threshold: Duration,
    lag_step: Duration,
}

impl FrameClock {
    pub fn new(lag_threshold: Duration, lag_step: Duration) -> Self {
        Self {
            frame_times: VecDeque::new(),
            last_frame: Instant::now(),
            max_samples: 120,
            lag_threshold,
            lag_step,
        }
    }

    /// Measure wall time since the previous frame and advance by it.
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let raw = now - self.last_frame;
        self.last_frame = now;
        self.advance(raw)
    }

    /// Record a frame of length `raw` and return the animation delta in seconds.
    pub fn advance(&mut self, raw: Duration) -> f32 {
        self.frame_times.push_back(raw);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }
        let dt = if raw > self.lag_threshold {
            self.lag_step
        } else {
            raw
        };
        dt.as_secs_f32()
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        (total / self.frame_times.len() as f64) * 1000.0
    }

    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(500), Duration::from_millis(33))
    }
}
