use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use discovery_snapshot::commands::{save_command, show_command, slot_name_command};

/// Deterministic discovery snapshots.
///
/// This CLI is a thin wrapper around `discovery-core` (exposed in code as
/// `discovery_core`). It reads the analysis results and the discovery config
/// from disk and writes `discovery/<project>/discovered.json` plus the
/// `.code` source tree.
#[derive(Parser, Debug)]
#[command(
    name = "discovery-snapshot",
    version,
    about = "Write deterministic discovery snapshots and source trees",
    long_about = None
)]
struct Cli {
    /// Only log warnings and errors.
    #[arg(long, short, global = true, default_value_t = false)]
    quiet: bool,

    /// Log every file written.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Save a discovery run under `<root>/discovery/<project>/`.
    ///
    /// This will:
    /// - Write `discovered.json` (contracts, sorted EOAs, sorted ABIs).
    /// - Delete and rebuild `.code/` from the contracts' sources.
    Save {
        /// Workspace root containing the `discovery/` folder. Defaults to the current directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// JSON file with the analysis results (array of EOA/Contract records).
        #[arg(long)]
        results: PathBuf,

        /// Discovery config (.json, .yaml or .yml).
        #[arg(long)]
        config: PathBuf,

        /// Block number the analysis was run at.
        #[arg(long)]
        block_number: u64,

        /// Emit the save outcome as JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the snapshot JSON that `save` would write, without writing anything.
    Show {
        #[arg(long)]
        results: PathBuf,

        #[arg(long)]
        config: PathBuf,

        #[arg(long)]
        block_number: u64,
    },

    /// Print the `.code` folder suffix for a source group.
    SlotName {
        /// Zero-based index of the source group.
        #[arg(long)]
        index: usize,

        /// Number of source groups of the contract.
        #[arg(long)]
        count: usize,
    },
}

fn init_logging(quiet: bool, verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    match cli.command {
        Command::Save { root, results, config, block_number, json } => {
            save_command(&root, &results, &config, block_number, json)?
        }
        Command::Show { results, config, block_number } => {
            show_command(&results, &config, block_number)?
        }
        Command::SlotName { index, count } => slot_name_command(index, count)?,
    }

    Ok(())
}
