/// An action available to the agent at a decision point.
///
/// Edges are used as keys in policy tables and are iterated in their
/// enumeration order during greedy improvement, so the order in which a
/// model lists them decides ties.
///
/// # Requirements
///
/// - Copyable and hashable for policy table lookups
/// - Ordered for deterministic iteration
/// - `Send + Sync` so profiles can be shared with parallel sweeps
pub trait MdpEdge:
    Copy
    + Clone
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Send
    + Sync
    + std::hash::Hash
    + std::fmt::Debug
{
}
