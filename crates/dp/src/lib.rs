//! Game-agnostic exact dynamic programming for small finite MDPs.
//!
//! This crate contains the traits and machinery that solve any fully
//! enumerable Markov Decision Process independently of the game that
//! produces it.
//!
//! # Module Structure
//!
//! - `state` — Action trait and transition outcomes
//! - `model` — The transition-model trait and its memoised table
//! - `policy` — Per-state action distributions and the dense profile
//! - `evaluation` — Value tables, Bellman backups, policy evaluation
//! - `sweep` — In-place and double-buffered backup schemes
//! - `iteration` — Policy iteration (evaluation + greedy improvement)
//! - `metrics` — Solver observability
//! - `coin` — Coin-flip reference MDP with closed-form values

mod coin;
mod evaluation;
mod iteration;
mod metrics;
mod model;
mod policy;
mod state;
mod sweep;

pub use coin::*;
pub use evaluation::*;
pub use iteration::*;
pub use metrics::*;
pub use model::*;
pub use policy::*;
pub use state::*;
pub use sweep::*;
