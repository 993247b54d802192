use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockKind {
    /// Counts down from a fixed duration; the run ends when it reaches zero.
    Countdown(Duration),
    /// Counts up until the run is stopped.
    Stopwatch,
}

/// Timer shown above the words. Starts on the first keystroke, not when the
/// test screen opens.
#[derive(Clone, Debug)]
pub struct RunClock {
    kind: ClockKind,
    started_at: Option<Instant>,
    stopped_at: Option<Instant>,
}

impl RunClock {
    pub fn countdown(duration: Duration) -> Self {
        Self::new(ClockKind::Countdown(duration))
    }

    pub fn stopwatch() -> Self {
        Self::new(ClockKind::Stopwatch)
    }

    fn new(kind: ClockKind) -> Self {
        Self {
            kind,
            started_at: None,
            stopped_at: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn stop(&mut self, now: Instant) {
        if self.started_at.is_some() && self.stopped_at.is_none() {
            self.stopped_at = Some(now);
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.stopped_at.is_none()
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        let Some(start) = self.started_at else {
            return Duration::ZERO;
        };
        let end = self.stopped_at.unwrap_or(now);
        let elapsed = end.saturating_duration_since(start);
        match self.kind {
            ClockKind::Countdown(limit) => elapsed.min(limit),
            ClockKind::Stopwatch => elapsed,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        match self.kind {
            ClockKind::Countdown(limit) => self.started_at.is_some() && self.elapsed(now) >= limit,
            ClockKind::Stopwatch => false,
        }
    }

    /// Whole seconds: remaining time rounded up for a countdown, elapsed
    /// time rounded down for a stopwatch.
    pub fn view(&self, now: Instant) -> String {
        let secs = match self.kind {
            ClockKind::Countdown(limit) => {
                let remaining = limit.saturating_sub(self.elapsed(now));
                remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0)
            }
            ClockKind::Stopwatch => self.elapsed(now).as_secs(),
        };
        format_secs(secs)
    }
}

/// `45s`, `1m0s`, `1h2m3s`.
pub fn format_secs(secs: u64) -> String {
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}
