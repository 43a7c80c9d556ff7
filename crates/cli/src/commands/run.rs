use allevo_analysis::aggregate;
use allevo_sim::simulation::{Simulation, SimulationConfig};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::args::RunArgs;
use crate::commands::export::export_series;
use crate::printing::{print_generation_table, print_parameters, print_summary};

pub fn run_simulation(args: &RunArgs) -> Result<()> {
    println!("🧬 Allevo - Running Simulation");
    println!("============================================\n");

    let base = match &args.config {
        Some(path) => {
            println!("📂 Loading configuration: {}", path.display());
            SimulationConfig::from_json_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?
        }
        None => SimulationConfig::default(),
    };
    let config = args.simulation.apply(base);

    let mut sim = Simulation::new(config).context("Failed to create simulation")?;

    println!("Simulation Results: {}", sim.config().title());
    print_parameters(sim.config());
    if let Some(seed) = sim.seed() {
        println!("  • Effective Seed: {seed}");
    }

    let total_generations = sim.config().generations;
    println!("\nRunning {total_generations} generations...");

    let pb = if args.progress {
        let pb = ProgressBar::new(total_generations as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
                )
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    sim.run_with(|record| {
        if let Some(pb) = &pb {
            pb.set_message(format!("{} survivors", record.len()));
            pb.inc(1);
        }
    })
    .context("Simulation failed")?;

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    let series = aggregate(sim.history());

    if !args.quiet {
        print_generation_table(&series);
    }
    print_summary(&series);

    if let Some(output) = &args.output {
        export_series(&series, args.format, output)?;
        println!("\n✓ Statistics exported to: {}", output.display());
    }

    println!("\n✓ Simulation complete!");
    Ok(())
}
