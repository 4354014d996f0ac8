use crate::*;
use skirmish_dp::Policy;

/// A fixed response policy for the opponent side.
///
/// The transition model asks the opponent for a distribution over its
/// actions after every agent phase that leaves the battle running. The
/// opponent never learns, so folding it into the dynamics leaves a
/// single-agent MDP. Swapping it changes the MDP, not the solver.
///
/// An empty response means the opponent passes.
pub trait Opponent: Send + Sync {
    fn respond(&self, battle: &Battle) -> Policy<Action>;
}

/// Picks uniformly among the opponent's legal actions.
#[derive(Debug, Default, Clone, Copy)]
pub struct Uniform;

impl Opponent for Uniform {
    fn respond(&self, battle: &Battle) -> Policy<Action> {
        let choices = battle.choices(Side::Opponent);
        let weight = 1.0 / choices.len().max(1) as skirmish_core::Probability;
        choices.into_iter().map(|a| (a, weight)).collect()
    }
}

/// Always throws the heavy move.
#[derive(Debug, Default, Clone, Copy)]
pub struct Aggressive;

impl Opponent for Aggressive {
    fn respond(&self, battle: &Battle) -> Policy<Action> {
        match battle.is_terminal() {
            true => vec![],
            false => vec![(Action::Heavy, 1.0)],
        }
    }
}

impl<O> Opponent for &O
where
    O: Opponent + ?Sized,
{
    fn respond(&self, battle: &Battle) -> Policy<Action> {
        (**self).respond(battle)
    }
}

impl<O> Opponent for Box<O>
where
    O: Opponent + ?Sized,
{
    fn respond(&self, battle: &Battle) -> Policy<Action> {
        (**self).respond(battle)
    }
}
