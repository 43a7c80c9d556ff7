use allevo_sim::simulation::SimulationConfig;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::defaults;

/// Simulation parameters shared by `init` and `run`.
///
/// Every field is optional so that values given on the command line can be
/// layered over a configuration file.
#[derive(Args, Debug, Default, Clone)]
pub struct SimulationArgs {
    /// Survival probability of AA organisms [default: 0.99]
    #[arg(long)]
    pub hom_dom_survival: Option<f64>,

    /// Survival probability of Aa organisms [default: 0.99]
    #[arg(long)]
    pub het_survival: Option<f64>,

    /// Survival probability of aa organisms [default: 0.99]
    #[arg(long)]
    pub hom_rec_survival: Option<f64>,

    /// Number of heterozygous founders [default: 100]
    #[arg(short = 'n', long)]
    pub initial_population: Option<usize>,

    /// Number of generations [default: 20]
    #[arg(short = 'g', long)]
    pub generations: Option<usize>,

    /// Mean brood size per mating pair [default: 2.5]
    #[arg(long, allow_negative_numbers = true)]
    pub offspring_mean: Option<f64>,

    /// Standard deviation of the brood size [default: 0.5]
    #[arg(long)]
    pub offspring_std: Option<f64>,

    /// Carrying capacity [default: 1000]
    #[arg(short = 'k', long)]
    pub carrying_capacity: Option<usize>,

    /// Maximum culling passes per generation before giving up
    #[arg(long, conflicts_with = "unbounded_capacity")]
    pub max_capacity_passes: Option<usize>,

    /// Retry capacity culling without limit (may never terminate)
    #[arg(long)]
    pub unbounded_capacity: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SimulationArgs {
    /// Overlay the values given on the command line onto `config`.
    pub fn apply(&self, mut config: SimulationConfig) -> SimulationConfig {
        if let Some(v) = self.hom_dom_survival {
            config.hom_dom_survival = v;
        }
        if let Some(v) = self.het_survival {
            config.het_survival = v;
        }
        if let Some(v) = self.hom_rec_survival {
            config.hom_rec_survival = v;
        }
        if let Some(v) = self.initial_population {
            config.initial_population = v;
        }
        if let Some(v) = self.generations {
            config.generations = v;
        }
        if let Some(v) = self.offspring_mean {
            config.offspring_mean = v;
        }
        if let Some(v) = self.offspring_std {
            config.offspring_std = v;
        }
        if let Some(v) = self.carrying_capacity {
            config.carrying_capacity = v;
        }
        if self.unbounded_capacity {
            config.max_capacity_passes = None;
        } else if let Some(v) = self.max_capacity_passes {
            config.max_capacity_passes = Some(v);
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output configuration file
    #[arg(short, long, default_value = defaults::CONFIG_FILE)]
    pub output: PathBuf,

    /// Overwrite the output file if it exists
    #[arg(short, long)]
    pub force: bool,

    #[command(flatten)]
    pub simulation: SimulationArgs,
}

/// Output format for the statistic series.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Configuration file (flags override its values)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub simulation: SimulationArgs,

    /// Write the per-generation statistics to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Format of the statistics file
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Do not print the per-generation table
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_keeps_unset_values() {
        let base = SimulationConfig {
            generations: 7,
            ..Default::default()
        };
        let config = SimulationArgs::default().apply(base.clone());
        assert_eq!(config, base);
    }

    #[test]
    fn test_apply_overrides() {
        let args = SimulationArgs {
            hom_rec_survival: Some(0.5),
            initial_population: Some(10),
            seed: Some(3),
            unbounded_capacity: true,
            ..Default::default()
        };
        let config = args.apply(SimulationConfig::default());
        assert_eq!(config.hom_rec_survival, 0.5);
        assert_eq!(config.initial_population, 10);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.max_capacity_passes, None);
        assert_eq!(config.het_survival, defaults::SURVIVAL);
    }
}
