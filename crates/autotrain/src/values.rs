use crate::*;
use anyhow::Context;
use skirmish_battle::codec;
use skirmish_core::StateId;
use skirmish_core::Utility;
use skirmish_dp::Values;
use std::path::Path;

/// Dense value function over every state id.
///
/// Stored as PGCOPY rows `(state_id i64, value f64)` in id order, one row
/// per state, terminal and unreachable ones included.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTable(Values);

impl ValueTable {
    pub fn get(&self, state: StateId) -> Utility {
        self.0.get(state)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn values(&self) -> &Values {
        &self.0
    }
}

impl From<Values> for ValueTable {
    fn from(values: Values) -> Self {
        Self(values)
    }
}

impl Artifact for ValueTable {
    fn name() -> &'static str {
        "values.pgcopy"
    }
    fn load(dir: &Path) -> anyhow::Result<Self> {
        let ref path = Self::path(dir);
        let file = std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
        let ref mut reader = std::io::BufReader::new(file);
        pgcopy::verify(reader)?;
        let mut values = Vec::new();
        while pgcopy::row(reader, 2)?.is_some() {
            let state = pgcopy::int(reader)?;
            anyhow::ensure!(
                state == values.len() as i64,
                "value rows out of order: expected state {}, found {}",
                values.len(),
                state
            );
            values.push(pgcopy::float(reader)?);
        }
        anyhow::ensure!(
            values.len() == codec::num_states(),
            "value table covers {} states, expected {}",
            values.len(),
            codec::num_states()
        );
        log::debug!("loaded {} values from {}", values.len(), path.display());
        Ok(Self(Values::from(values)))
    }
    fn save(&self, dir: &Path) -> anyhow::Result<()> {
        std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        let ref path = Self::path(dir);
        log::info!("{:<32}{:<32}", "saving values", path.display());
        let file = std::fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
        let ref mut writer = std::io::BufWriter::new(file);
        pgcopy::header(writer)?;
        for (state, value) in self.0.iter() {
            pgcopy::entry(writer, state as i64, value)?;
        }
        pgcopy::trailer(writer)?;
        std::io::Write::flush(writer).context("flush values")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("skirmish-values-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn dense_tables_reload() {
        let ref dir = scratch("dense");
        let values = (0..codec::num_states()).map(|s| s as Utility / 8.0).collect::<Vec<_>>();
        let table = ValueTable::from(Values::from(values));
        table.save(dir).unwrap();
        assert!(ValueTable::done(dir));
        assert_eq!(ValueTable::load(dir).unwrap(), table);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn truncated_tables_are_rejected() {
        let ref dir = scratch("truncated");
        ValueTable::from(Values::from(vec![0.25, -0.5])).save(dir).unwrap();
        assert!(ValueTable::load(dir).is_err());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn unordered_rows_are_rejected() {
        let ref dir = scratch("unordered");
        std::fs::create_dir_all(dir).unwrap();
        let mut bytes = Vec::new();
        pgcopy::header(&mut bytes).unwrap();
        pgcopy::entry(&mut bytes, 1, 0.5).unwrap();
        pgcopy::entry(&mut bytes, 0, 0.5).unwrap();
        pgcopy::trailer(&mut bytes).unwrap();
        std::fs::write(ValueTable::path(dir), bytes).unwrap();
        assert!(ValueTable::load(dir).is_err());
        let _ = std::fs::remove_dir_all(dir);
    }
}
