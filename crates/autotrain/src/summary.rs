use crate::*;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// Run parameters and convergence report of one training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub gamma: f64,
    pub tolerance: f64,
    pub max_iters: usize,
    pub max_outer: usize,
    pub accuracy: f64,
    pub sweep: Sweep,
    pub opponent: Adversary,
    pub states: usize,
    pub decisions: usize,
    pub epochs: usize,
    pub stable: bool,
    pub sweeps: usize,
    pub backups: usize,
    pub seconds: f64,
    /// Mean value over fresh full-health battles.
    pub start_value: f64,
}

impl Artifact for Summary {
    fn name() -> &'static str {
        "summary.json"
    }
    fn load(dir: &Path) -> anyhow::Result<Self> {
        let ref path = Self::path(dir);
        let file = std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
        serde_json::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("parse {}", path.display()))
    }
    fn save(&self, dir: &Path) -> anyhow::Result<()> {
        std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        let ref path = Self::path(dir);
        log::info!("{:<32}{:<32}", "saving summary", path.display());
        let file = std::fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
        serde_json::to_writer_pretty(file, self).context("write summary")
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "opponent   {:?}", self.opponent)?;
        writeln!(f, "sweep      {:?}", self.sweep)?;
        writeln!(f, "γ          {}", self.gamma)?;
        writeln!(f, "epochs     {}{}", self.epochs, if self.stable { "" } else { " (capped)" })?;
        writeln!(f, "decisions  {} / {}", self.decisions, self.states)?;
        writeln!(f, "sweeps     {}", self.sweeps)?;
        writeln!(f, "elapsed    {:.2}s", self.seconds)?;
        write!(f, "V(start)   {:+.4}", self.start_value)
    }
}
