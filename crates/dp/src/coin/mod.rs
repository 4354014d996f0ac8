//! Coin-flip reference MDP.
//!
//! Small enough to solve by hand, so the solver can be checked against
//! closed-form values. See [`Coin`].

mod coin;
mod edge;

pub use coin::*;
pub use edge::*;
