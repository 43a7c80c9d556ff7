use allevo_sim::simulation::SimulationConfig;
use anyhow::{Context, Result};

use crate::args::InitArgs;
use crate::printing::print_parameters;

pub fn init_config(args: &InitArgs) -> Result<()> {
    let output = &args.output;

    println!("🧬 Allevo - Single-Locus Population Simulator");
    println!("============================================\n");
    println!("Initializing configuration: {}", output.display());

    if output.exists() && !args.force {
        anyhow::bail!(
            "Configuration file {} already exists (use --force to overwrite)",
            output.display()
        );
    }

    let config = args.simulation.apply(SimulationConfig::default());
    config.validate().context("Invalid simulation parameters")?;

    print_parameters(&config);

    config
        .to_json_file(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::info!(path = %output.display(), "configuration written");

    println!("\n✓ Configuration initialized successfully!");
    println!("  Run it with: allevo run --config {}", output.display());

    Ok(())
}
