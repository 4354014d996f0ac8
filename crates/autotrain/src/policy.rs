use crate::*;
use anyhow::Context;
use skirmish_battle::Action;
use skirmish_core::StateId;
use skirmish_dp::Solution;
use std::collections::BTreeMap;
use std::path::Path;

/// Deterministic policy over every state that has a decision.
///
/// Stored as PGCOPY rows `(state_id i64, action_id i64)`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PolicyTable(BTreeMap<StateId, Action>);

impl PolicyTable {
    pub fn get(&self, state: StateId) -> Option<Action> {
        self.0.get(&state).copied()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (StateId, Action)> + '_ {
        self.0.iter().map(|(s, a)| (*s, *a))
    }
}

impl From<&Solution<Action>> for PolicyTable {
    fn from(solution: &Solution<Action>) -> Self {
        Self(solution.decisions().collect())
    }
}

impl FromIterator<(StateId, Action)> for PolicyTable {
    fn from_iter<I: IntoIterator<Item = (StateId, Action)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Artifact for PolicyTable {
    fn name() -> &'static str {
        "policy.pgcopy"
    }
    fn load(dir: &Path) -> anyhow::Result<Self> {
        let ref path = Self::path(dir);
        let file = std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
        let ref mut reader = std::io::BufReader::new(file);
        pgcopy::verify(reader)?;
        let mut table = BTreeMap::new();
        while pgcopy::row(reader, 2)?.is_some() {
            let state = StateId::try_from(pgcopy::int(reader)?).context("negative state id")?;
            let action = u8::try_from(pgcopy::int(reader)?)
                .map_err(anyhow::Error::from)
                .and_then(Action::try_from)
                .with_context(|| format!("action of state {}", state))?;
            table.insert(state, action);
        }
        log::debug!("loaded {} decisions from {}", table.len(), path.display());
        Ok(Self(table))
    }
    fn save(&self, dir: &Path) -> anyhow::Result<()> {
        std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        let ref path = Self::path(dir);
        log::info!("{:<32}{:<32}", "saving policy", path.display());
        let file = std::fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
        let ref mut writer = std::io::BufWriter::new(file);
        pgcopy::header(writer)?;
        for (state, action) in self.iter() {
            pgcopy::pair(writer, state as i64, u8::from(action) as i64)?;
        }
        pgcopy::trailer(writer)?;
        std::io::Write::flush(writer).context("flush policy")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("skirmish-policy-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn write(dir: &Path, rows: &[(i64, i64)]) {
        std::fs::create_dir_all(dir).unwrap();
        let mut bytes = Vec::new();
        pgcopy::header(&mut bytes).unwrap();
        for &(state, action) in rows {
            pgcopy::pair(&mut bytes, state, action).unwrap();
        }
        pgcopy::trailer(&mut bytes).unwrap();
        std::fs::write(PolicyTable::path(dir), bytes).unwrap();
    }

    #[test]
    fn decisions_reload() {
        let ref dir = scratch("reload");
        let table = [(3, Action::Heavy), (7, Action::Switch), (12, Action::Light)]
            .into_iter()
            .collect::<PolicyTable>();
        table.save(dir).unwrap();
        let loaded = PolicyTable::load(dir).unwrap();
        assert_eq!(loaded, table);
        assert_eq!(loaded.get(7), Some(Action::Switch));
        assert_eq!(loaded.get(8), None);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn unknown_actions_are_rejected() {
        let ref dir = scratch("unknown");
        write(dir, &[(0, 1), (1, 7)]);
        assert!(PolicyTable::load(dir).is_err());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn negative_ids_are_rejected() {
        let ref dir = scratch("negative");
        write(dir, &[(-1, 0)]);
        assert!(PolicyTable::load(dir).is_err());
        write(dir, &[(0, -2)]);
        assert!(PolicyTable::load(dir).is_err());
        let _ = std::fs::remove_dir_all(dir);
    }
}
