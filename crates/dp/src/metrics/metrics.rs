use crate::Progress;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Instant;

/// Accumulated solver counters.
///
/// Counters are atomics so they can be bumped through `&self`, including
/// from inside a parallel sweep. Owns timing for both the total run and
/// periodic checkpoint logging.
pub struct Metrics {
    epoch: AtomicUsize,
    sweeps: AtomicUsize,
    backups: AtomicUsize,
    start: Instant,
    prior: Mutex<(Instant, usize)>,
}

impl Default for Metrics {
    fn default() -> Self {
        let now = Instant::now();
        Self {
            epoch: AtomicUsize::new(0),
            sweeps: AtomicUsize::new(0),
            backups: AtomicUsize::new(0),
            start: now,
            prior: Mutex::new((now, 0)),
        }
    }
}

impl Metrics {
    pub fn inc_epoch(&self) {
        self.epoch.fetch_add(1, Ordering::Relaxed);
    }
    pub fn add_sweeps(&self, n: usize) {
        self.sweeps.fetch_add(n, Ordering::Relaxed);
    }
    pub fn add_backups(&self, n: usize) {
        self.backups.fetch_add(n, Ordering::Relaxed);
    }
    /// Returns stats only if the checkpoint interval has elapsed.
    /// Reports the interval rate (backups/sec since last checkpoint).
    pub fn checkpoint(&self) -> Option<String> {
        let mut prior = self.prior.lock().ok()?;
        if prior.0.elapsed() < skirmish_core::SWEEP_LOG_INTERVAL {
            return None;
        }
        let secs = prior.0.elapsed().as_secs_f64().max(1e-3);
        let curr = self.backups();
        let rate = (curr - prior.1) as f64 / secs;
        *prior = (Instant::now(), curr);
        Some(format!(
            "{:<20}{:<20}{:<24}{:<20}",
            format!("epoch {}", self.epoch()),
            format!("sweeps {}", self.sweeps()),
            format!("backups {}", curr),
            format!("B/sec {:.1}", rate),
        ))
    }
}

impl Progress for Metrics {
    fn epoch(&self) -> usize {
        self.epoch.load(Ordering::Relaxed)
    }
    fn sweeps(&self) -> usize {
        self.sweeps.load(Ordering::Relaxed)
    }
    fn backups(&self) -> usize {
        self.backups.load(Ordering::Relaxed)
    }
    fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("epoch", &self.epoch())
            .field("sweeps", &self.sweeps())
            .field("backups", &self.backups())
            .finish()
    }
}
