use allevo_sim::simulation::SimulationConfig;
use anyhow::{Context, Result};
use std::path::Path;

use crate::printing::print_parameters;

pub fn validate_config(path: &Path) -> Result<()> {
    println!("🔍 Validating configuration: {}", path.display());

    if !path.exists() {
        anyhow::bail!("Configuration file does not exist");
    }

    let config = SimulationConfig::from_json_file(path)
        .with_context(|| format!("Invalid configuration {}", path.display()))?;

    println!("✓ Parameters: OK");
    println!("  {}", config.title());
    print_parameters(&config);

    if config.max_capacity_passes.is_none() {
        println!("\n⚠️  Capacity culling is unbounded and may never terminate");
    }
    if config.survival_policy()?.has_certain_survival() {
        println!("\n⚠️  A survival probability of 1.0 can stall capacity culling");
    }

    println!("\n✓ Configuration is valid");
    Ok(())
}
