//! A two-on-two elemental battle, enumerated as a finite MDP.
//!
//! Each side fields an active battler and a bench battler. Elements beat
//! each other in a cycle and every battler has three HP bins. The fixed
//! opponent policy is folded into the transition function, so the agent
//! faces an ordinary single-agent MDP that `skirmish-dp` solves exactly.
//!
//! ## State
//!
//! - [`Element`] — Fire, Water, Grass and the advantage cycle between them
//! - [`Mon`] — one battler: element plus HP bin
//! - [`Team`] — active and bench battlers of one side
//! - [`Battle`] — both teams; the full MDP state
//! - [`codec`] — mixed-radix bijection between battles and [`StateId`]s
//! - [`BattleIterator`] — lexicographic enumeration of every battle
//!
//! ## Dynamics
//!
//! - [`Action`] — light move, heavy move, switch
//! - [`Side`] — which team acts
//! - [`Opponent`] — the fixed response policy baked into the model
//! - [`Arena`] — the transition model, implementing [`skirmish_dp::Model`]
//! - [`Episode`] — sampled reset/step wrapper for rollouts
//!
//! [`StateId`]: skirmish_core::StateId
mod action;
mod arena;
mod battle;
pub mod codec;
mod element;
mod episode;
mod iterator;
mod mon;
mod opponent;
mod side;
mod team;

pub use action::*;
pub use arena::*;
pub use battle::*;
pub use element::*;
pub use episode::*;
pub use iterator::*;
pub use mon::*;
pub use opponent::*;
pub use side::*;
pub use team::*;
