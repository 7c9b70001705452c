use std::time::{Duration, Instant};

/// Fixed-rate frame pacing.
///
/// Each frame calls [`FrameClock::tick`] when it starts; the loop then waits
/// until [`FrameClock::deadline`] before starting the next one. A frame that
/// overruns simply starts the next one immediately.
#[derive(Clone, Debug)]
pub struct FrameClock {
    interval: Duration,
    deadline: Option<Instant>,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn from_fps(fps: u32) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / fps.max(1) as f64))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True before the first frame and once the current deadline has passed.
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.map_or(true, |d| now >= d)
    }

    /// Start a frame at `now` and return when the next one is due.
    pub fn tick(&mut self, now: Instant) -> Instant {
        let next = now + self.interval;
        self.deadline = Some(next);
        next
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
