//! Transition models.
//!
//! - [`Model`] — the transition function of a finite MDP
//! - [`Tabular`] — a model memoised into dense per-state tables

mod model;
mod tabular;

pub use model::*;
pub use tabular::*;
