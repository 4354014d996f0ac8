//! Training, evaluation, and inspection entrypoints.
//!
//! This crate wraps the solver in the workflow around it: solve the
//! battle, persist the result, then measure or inspect it.
//!
//! ## Entrypoints
//!
//! - [`Mode`] — `train`, `evaluate`, and `inspect` subcommands
//! - [`Session`] — policy iteration run and artifact writer
//! - [`Rollout`] — Monte Carlo win rate of a saved policy
//!
//! ## Artifacts
//!
//! - [`PolicyTable`] — sparse `state → action` table, PGCOPY
//! - [`ValueTable`] — dense value array, PGCOPY
//! - [`Summary`] — run parameters and convergence, JSON
mod artifact;
mod mode;
mod pgcopy;
mod policy;
mod rollout;
mod selection;
mod session;
mod summary;
mod values;

pub use artifact::*;
pub use mode::*;
pub use policy::*;
pub use rollout::*;
pub use selection::*;
pub use session::*;
pub use summary::*;
pub use values::*;
