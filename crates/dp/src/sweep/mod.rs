//! Bellman sweep schemes.

mod gauss;
mod jacobi;

pub use gauss::*;
pub use jacobi::*;

use crate::*;
use skirmish_core::*;

/// Trait for one pass of Bellman backups over a state set.
///
/// Every scheme applies the same backup to every state with a non-empty
/// policy and reports the largest absolute change, which evaluation
/// compares against its tolerance. Schemes differ only in when new values
/// become visible to later backups of the same pass.
pub trait SweepScheme: Send + Sync {
    /// Backs up every decision state in `states`, returning max |ΔV|.
    fn sweep<M>(
        model: &M,
        states: &[StateId],
        profile: &Profile<M::E>,
        values: &mut Values,
        discount: Utility,
    ) -> Utility
    where
        M: Model;
}
