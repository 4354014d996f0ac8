//! Exact dynamic programming for a small turn-based battle.
//!
//! This facade crate re-exports the skirmish crates for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`] — Type aliases, constants, and shared traits
//! - [`dp`] — Game-agnostic policy evaluation and policy iteration
//! - [`battle`] — Battle state codec, rules, and transition model
//! - [`autotrain`] — Training, evaluation, and artifact persistence

pub use skirmish_core      as core;
pub use skirmish_dp        as dp;
pub use skirmish_battle    as battle;
pub use skirmish_autotrain as autotrain;
