use allevo_analysis::{StatisticsSeries, extinction_generation, fixation_generation};
use allevo_sim::simulation::SimulationConfig;

pub fn print_parameters(config: &SimulationConfig) {
    println!("\n📋 Simulation Configuration");
    println!(
        "  • Initial Population: {} Aa [-n, --initial-population]",
        config.initial_population
    );
    println!("  • Generations: {} [-g, --generations]", config.generations);
    if let Some(seed) = config.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }

    println!("\n☠️  Survival Probabilities");
    println!("  • AA: {} [--hom-dom-survival]", config.hom_dom_survival);
    println!("  • Aa: {} [--het-survival]", config.het_survival);
    println!("  • aa: {} [--hom-rec-survival]", config.hom_rec_survival);

    println!("\n🐣 Reproduction");
    println!(
        "  • Brood Size: Normal(mean = {}, std = {}) [--offspring-mean, --offspring-std]",
        config.offspring_mean, config.offspring_std
    );

    println!("\n📦 Carrying Capacity");
    println!("  • Capacity: {} [-k, --carrying-capacity]", config.carrying_capacity);
    match config.max_capacity_passes {
        Some(passes) => println!("  • Max Culling Passes: {passes} [--max-capacity-passes]"),
        None => println!("  • Max Culling Passes: Unbounded [--unbounded-capacity]"),
    }
}

/// Per-generation table of genotype shares, allele shares and totals.
pub fn print_generation_table(series: &StatisticsSeries) {
    println!(
        "\n{:>5} {:>8} {:>8} {:>8} {:>8} {:>8} {:>7}",
        "Gen", "AA %", "Aa %", "aa %", "p %", "q %", "Total"
    );
    println!("{}", "-".repeat(58));
    for row in series {
        println!(
            "{:>5} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>7}",
            row.generation,
            row.hom_dom_pct,
            row.het_pct,
            row.hom_rec_pct,
            row.dominant_pct,
            row.recessive_pct,
            row.total
        );
    }
}

pub fn print_summary(series: &StatisticsSeries) {
    let Some(last) = series.rows().last() else {
        println!("\n⚠️  No generations were simulated");
        return;
    };

    println!("\n📊 Summary");
    println!("  • Final Survivors: {}", last.total);
    if let Some(generation) = extinction_generation(series) {
        println!("  • Extinct From Generation: {generation}");
    } else if let Some((generation, allele)) = fixation_generation(series) {
        println!("  • Allele {allele} Fixed In Generation: {generation}");
    } else {
        println!(
            "  • Final Allele Frequencies: p = {:.2}%, q = {:.2}%",
            last.dominant_pct, last.recessive_pct
        );
    }
}
