//! Solver diagnostics and progress tracking.

mod metrics;
mod progress;

pub use metrics::*;
pub use progress::*;
