use crate::*;
use skirmish_battle::*;
use skirmish_core::*;
use skirmish_dp::*;
use std::path::PathBuf;

/// One training run: solve the battle against a fixed opponent, then
/// write the policy, the values, and a summary to `outdir`.
#[derive(Debug, Clone)]
pub struct Session {
    pub gamma: Utility,
    pub tolerance: Utility,
    pub max_iters: usize,
    pub max_outer: usize,
    pub sweep: Sweep,
    pub opponent: Adversary,
    pub outdir: PathBuf,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            gamma: DISCOUNT,
            tolerance: EVALUATION_TOLERANCE,
            max_iters: EVALUATION_ITERATIONS,
            max_outer: IMPROVEMENT_ITERATIONS,
            sweep: Sweep::default(),
            opponent: Adversary::default(),
            outdir: PathBuf::from("artifacts"),
        }
    }
}

impl Session {
    pub fn train(&self) -> anyhow::Result<Summary> {
        anyhow::ensure!(
            (0.0..1.0).contains(&self.gamma),
            "discount {} must lie in [0, 1)",
            self.gamma
        );
        anyhow::ensure!(self.tolerance > 0.0, "tolerance must be positive");
        log::info!("training against {:?} opponent ({:?})", self.opponent, self.sweep);
        let ref arena = Arena::new(self.opponent.opponent());
        let summary = match self.sweep {
            Sweep::GaussSeidel => self.solve::<GaussSeidel, _>(arena)?,
            Sweep::Jacobi => self.solve::<Jacobi, _>(arena)?,
        };
        summary.save(&self.outdir)?;
        log::info!("summary\n{}", summary);
        Ok(summary)
    }

    fn solve<S, O>(&self, arena: &Arena<O>) -> anyhow::Result<Summary>
    where
        S: SweepScheme,
        O: Opponent,
    {
        let solver = PolicyIteration::<S>::default()
            .with_iterations(self.max_outer)
            .with_evaluation(
                Evaluation::<S>::default()
                    .with_discount(self.gamma)
                    .with_tolerance(self.tolerance)
                    .with_iterations(self.max_iters),
            );
        let solution = arena.solve(&solver);
        log::info!("{}", solver.metrics().summary());
        let policy = PolicyTable::from(&solution);
        policy.save(&self.outdir)?;
        ValueTable::from(solution.values.clone()).save(&self.outdir)?;
        Ok(Summary {
            gamma: self.gamma,
            tolerance: self.tolerance,
            max_iters: self.max_iters,
            max_outer: self.max_outer,
            accuracy: arena.accuracy(),
            sweep: self.sweep,
            opponent: self.opponent,
            states: arena.n(),
            decisions: policy.len(),
            epochs: solution.epochs,
            stable: solution.stable,
            sweeps: solver.metrics().sweeps(),
            backups: solver.metrics().backups(),
            seconds: solver.metrics().elapsed().as_secs_f64(),
            start_value: Self::start_value(&solution.values),
        })
    }

    /// Mean value over every full-health opening.
    fn start_value(values: &Values) -> Utility {
        let openings = Battle::all()
            .filter(|b| b.digits().iter().skip(1).step_by(2).all(|hp| *hp == MAX_HEALTH))
            .map(StateId::from)
            .collect::<Vec<_>>();
        openings.iter().map(|s| values.get(*s)).sum::<Utility>() / openings.len().max(1) as Utility
    }
}
