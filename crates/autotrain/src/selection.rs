use serde::Deserialize;
use serde::Serialize;
use skirmish_battle::Aggressive;
use skirmish_battle::Opponent;
use skirmish_battle::Uniform;

/// Bellman sweep scheme used during policy evaluation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sweep {
    #[default]
    GaussSeidel,
    Jacobi,
}

/// Fixed opponent folded into the transition model.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Adversary {
    #[default]
    Uniform,
    Aggressive,
}

impl Adversary {
    pub fn opponent(&self) -> Box<dyn Opponent> {
        match self {
            Self::Uniform => Box::new(Uniform),
            Self::Aggressive => Box::new(Aggressive),
        }
    }
}
