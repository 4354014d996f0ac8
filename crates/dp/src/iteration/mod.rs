//! Policy iteration.
//!
//! - [`PolicyIteration`] — alternates evaluation and greedy improvement
//! - [`Step`] — the result of one evaluation/improvement round
//! - [`Solution`] — the stable profile and its values

mod iteration;
mod solution;

pub use iteration::*;
pub use solution::*;
