//! Trainer Binary
//!
//! Solves the battle MDP and works with the saved artifacts.
//!
//! Subcommands: train, evaluate, inspect

fn main() -> anyhow::Result<()> {
    skirmish_core::log().map_err(|e| anyhow::anyhow!("logger: {}", e))?;
    skirmish_autotrain::Mode::run()
}
