/// A probability distribution over actions (edges) at one state.
///
/// Maps each legal edge to its probability weight. Used for:
/// - The uniform starting policy of policy iteration
/// - Deterministic policies after improvement (`[(edge, 1.0)]`)
/// - Fixed opponent responses baked into a transition model
///
/// # Implementation
///
/// Uses a `Vec` rather than `HashMap`/`BTreeMap` for better cache locality
/// and lower overhead with small action counts (two or three per state).
/// The `Vec` also preserves enumeration order, which decides ties when the
/// most probable edge is read back.
pub type Policy<E> = Vec<(E, skirmish_core::Probability)>;
