//! State primitives for finite MDPs.
//!
//! This module defines the types that describe one step of an MDP:
//! - Edge types (actions)
//! - Outcomes (probability-weighted successor, reward, termination)

mod edge;
mod outcome;

pub use edge::*;
pub use outcome::*;
