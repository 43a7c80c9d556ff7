mod args;
mod commands;
pub mod defaults;
mod printing;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use args::{InitArgs, RunArgs};
use commands::{init, run, validate};

/// Allevo: a single-locus population genetics simulator
///
/// This tool follows how the genotype and allele frequencies of a
/// two-allele gene change over generations under genotype-dependent
/// survival, random mating and a carrying capacity.
#[derive(Parser, Debug)]
#[command(name = "allevo")]
#[command(author, version, about = "Simulates genotype and allele frequencies over time", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    ///
    /// Logs go to stderr. RUST_LOG takes precedence when set.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize a new simulation configuration file.
    ///
    /// Writes the parameters (survival probabilities, brood size, capacity, etc.)
    /// to a JSON file but does not run anything yet.
    Init(Box<InitArgs>),

    /// Run a simulation.
    ///
    /// Loads a configuration file and/or command-line parameters, runs every
    /// generation and prints the genotype and allele percentages.
    Run(Box<RunArgs>),

    /// Validate a configuration file and show its parameters.
    Validate {
        /// Configuration file
        #[arg(short, long, default_value = defaults::CONFIG_FILE)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    utils::init_logging(cli.verbose);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Init(args) => {
            init::init_config(&args)?;
        }
        Commands::Run(args) => {
            run::run_simulation(&args)?;
        }
        Commands::Validate { config } => {
            validate::validate_config(&config)?;
        }
    }

    Ok(())
}
