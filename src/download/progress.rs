//! Download progress checkpoints.

use std::time::{Duration, Instant};

use crate::config::{Config, ProgressMode};

/// Spacing between progress checkpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressInterval {
    /// Every `n` percent of the expected size.
    Percentage(u64),
    /// Every `n` seconds.
    Seconds(u64),
}

impl ProgressInterval {
    pub fn from_config(config: &Config) -> Self {
        match config.progress_mode {
            ProgressMode::Percentage => ProgressInterval::Percentage(config.progress_interval),
            ProgressMode::Seconds => ProgressInterval::Seconds(config.progress_interval),
        }
    }
}

impl Default for ProgressInterval {
    fn default() -> Self {
        ProgressInterval::Percentage(10)
    }
}

/// A reported snapshot of download progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub percent: u64,
    pub bytes: u64,
    pub total: u64,
}

/// Integer percent complete; an empty expected size counts as done.
pub fn progress_percentage(current: u64, total: u64) -> u64 {
    if total == 0 {
        return 100;
    }
    ((current as u128 * 100) / total as u128) as u64
}

/// Decides when a download has passed the next checkpoint.
///
/// The threshold only moves forward, so each boundary is reported at most once.
/// In percentage mode every multiple of the step gets its own checkpoint, even
/// when a single observation crosses several of them.
#[derive(Debug)]
pub struct ProgressReporter {
    total: u64,
    interval: ProgressInterval,
    last_percent: u64,
    last_time: Option<Instant>,
}

impl ProgressReporter {
    pub fn new(total: u64, interval: ProgressInterval) -> Self {
        Self {
            total,
            interval,
            last_percent: 0,
            last_time: None,
        }
    }

    /// Record `bytes` written so far, returning the checkpoints now due.
    pub fn observe(&mut self, bytes: u64) -> Vec<Checkpoint> {
        self.observe_at(bytes, Instant::now())
    }

    /// Like [`observe`](Self::observe) with an explicit clock reading.
    pub fn observe_at(&mut self, bytes: u64, now: Instant) -> Vec<Checkpoint> {
        let percent = progress_percentage(bytes, self.total);
        let mut due = Vec::new();

        match self.interval {
            ProgressInterval::Percentage(step) => {
                let step = step.max(1);
                let reached = percent.min(100) / step * step;
                while self.last_percent + step <= reached {
                    self.last_percent += step;
                    due.push(Checkpoint {
                        percent: self.last_percent,
                        bytes,
                        total: self.total,
                    });
                }
            }
            ProgressInterval::Seconds(step) => {
                let last = *self.last_time.get_or_insert(now);
                if now >= last + Duration::from_secs(step) {
                    self.last_time = Some(now);
                    due.push(Checkpoint {
                        percent,
                        bytes,
                        total: self.total,
                    });
                }
            }
        }

        due
    }
}
