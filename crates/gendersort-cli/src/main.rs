//! `gendersort`: assign a gender label to first names.
//!
//! ```bash
//! gendersort assign "Ali (Roberta) Smith" "François"
//! gendersort --variant bibliographic file authors.txt
//! gendersort table stats
//! gendersort evidence merge NamesLog.txt
//! ```

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use gendersort_core::config::{CliOverrides, GendersortConfig};
use gendersort_core::tracing::init_tracing;
use gendersort_core::NormalizerVariant;

#[derive(Parser)]
#[command(name = "gendersort")]
#[command(version)]
#[command(about = "Infer the gender associated with first names from a lookup table")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (replaces ./gendersort.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Lookup table resource
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    /// Normalizer: general or bibliographic
    #[arg(long, global = true)]
    variant: Option<NormalizerVariant>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the label of each name
    Assign {
        #[arg(required = true)]
        names: Vec<String>,

        /// Print full resolutions as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Print the candidate tokens of each name
    Normalize {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Assign every line of a file
    File {
        input: PathBuf,

        /// Output file (default: <stem>_output.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Unknown-token file (default: <stem>_unknown.txt)
        #[arg(short, long)]
        unknown: Option<PathBuf>,

        /// Worker threads, 0 for all cores
        #[arg(long)]
        threads: Option<usize>,
    },

    /// Inspect or rewrite the lookup table
    Table {
        #[command(subcommand)]
        action: TableAction,
    },

    /// Maintain the evidence log
    Evidence {
        #[command(subcommand)]
        action: EvidenceAction,
    },
}

#[derive(Subcommand)]
enum TableAction {
    /// Record counts per label
    Stats,
    /// Write the table back sorted, deduplicated, and without bad records
    Rewrite { out: PathBuf },
}

#[derive(Subcommand)]
enum EvidenceAction {
    /// Fold numbered partial logs into the log
    Merge { log: Option<PathBuf> },
    /// List names that have no evidence record yet
    Pending {
        names: Option<PathBuf>,
        log: Option<PathBuf>,
    },
    /// Write NAME<TAB>LABEL rows for the names file from the log
    Dataset {
        names: Option<PathBuf>,
        log: Option<PathBuf>,
        out: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let threads = match &cli.command {
        Commands::File { threads, .. } => *threads,
        _ => None,
    };
    let overrides = CliOverrides {
        config_file: cli.config,
        table_path: cli.table.map(|p| p.display().to_string()),
        variant: cli.variant,
        batch_threads: threads,
    };
    let root = std::env::current_dir()?;
    let config = GendersortConfig::load(&root, Some(&overrides))?;

    match cli.command {
        Commands::Assign { names, json } => commands::assign(&config, &names, json),
        Commands::Normalize { names } => {
            commands::normalize(&config, &names);
            Ok(())
        }
        Commands::File {
            input,
            output,
            unknown,
            ..
        } => commands::file(&config, &input, output, unknown),
        Commands::Table { action } => match action {
            TableAction::Stats => commands::table_stats(&config),
            TableAction::Rewrite { out } => commands::table_rewrite(&config, &out),
        },
        Commands::Evidence { action } => match action {
            EvidenceAction::Merge { log } => commands::evidence_merge(&config, log),
            EvidenceAction::Pending { names, log } => commands::evidence_pending(&config, names, log),
            EvidenceAction::Dataset { names, log, out } => {
                commands::evidence_dataset(&config, names, log, out)
            }
        },
    }
}
