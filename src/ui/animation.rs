//! Tick-based animation primitives.
//!
//! Time is measured in runtime ticks so every animation is deterministic and
//! owned by the component that started it. Nothing here is global: dropping
//! the owner stops the animation.

/// A single timed transition from 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    delay: u64,
    duration: u64,
    started_at: Option<u64>,
}

impl Animation {
    pub fn new(duration: u64) -> Self {
        Self {
            delay: 0,
            duration: duration.max(1),
            started_at: None,
        }
    }

    pub fn with_delay(mut self, delay: u64) -> Self {
        self.delay = delay;
        self
    }

    pub fn start(&mut self, now: u64) {
        self.started_at = Some(now);
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    /// Progress in `0.0..=1.0`; a stopped animation reports 0.0.
    pub fn progress(&self, now: u64) -> f32 {
        let Some(start) = self.started_at else {
            return 0.0;
        };
        let elapsed = now.saturating_sub(start);
        if elapsed < self.delay {
            return 0.0;
        }
        ((elapsed - self.delay) as f32 / self.duration as f32).min(1.0)
    }
}

/// Looping animation with an explicit start/stop lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Loop {
    started_at: Option<u64>,
}

impl Loop {
    pub fn start(&mut self, now: u64) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn elapsed(&self, now: u64) -> Option<u64> {
        self.started_at.map(|start| now.saturating_sub(start))
    }
}

/// Linear interpolation of `value` from `input` onto `output`, clamped at both ends.
pub fn interpolate(value: f32, input: (f32, f32), output: (f32, f32)) -> f32 {
    let (in_lo, in_hi) = input;
    let (out_lo, out_hi) = output;
    if (in_hi - in_lo).abs() < f32::EPSILON {
        return out_lo;
    }
    let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + (out_hi - out_lo) * t
}
