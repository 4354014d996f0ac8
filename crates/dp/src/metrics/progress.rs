use std::time::Duration;

/// Unified view of solver progress.
///
/// Provides core accessors for epochs, sweeps, backups, and elapsed time,
/// with default implementations for formatted stats and summary output.
///
/// # Required Methods
///
/// - `epoch()` — Evaluation/improvement rounds completed
/// - `sweeps()` — Bellman sweeps run across all evaluations
/// - `backups()` — Single-state backups across all sweeps
/// - `elapsed()` — Wall-clock duration
pub trait Progress {
    fn epoch(&self) -> usize;
    fn sweeps(&self) -> usize;
    fn backups(&self) -> usize;
    fn elapsed(&self) -> Duration;
    /// Formats stats as aligned columns with throughput calculation.
    fn format(&self) -> String {
        let rates = self.backups() as f64 / self.elapsed().as_secs_f64().max(1e-3);
        format!(
            "{:<20}{:<20}{:<24}{:<20}",
            format!("epoch {}", self.epoch()),
            format!("sweeps {}", self.sweeps()),
            format!("backups {}", self.backups()),
            format!("B/sec {:.1}", rates),
        )
    }
    fn summary(&self) -> String {
        format!("solver stopped\n{}", self.format())
    }
}
