//! Policy evaluation.
//!
//! - [`Values`] — dense state-value table
//! - `action_value` / `policy_value` — action values and policy backups
//! - [`Evaluation`] — iterated backups to a fixed point

mod bellman;
mod evaluation;
mod values;

pub use bellman::*;
pub use evaluation::*;
pub use values::*;
