//! Policies and the dense per-state profile.

mod distribution;
mod profile;

pub use distribution::*;
pub use profile::*;
