//! CLI entry point for the `graphq` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_queries::cli::commands::{self, DocumentKind};
use graph_queries::GraphError;

#[derive(Parser)]
#[command(
    name = "graphq",
    about = "graphq: BFS/DFS queries over JSON graph documents"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print reachable words shorter than K characters, in BFS order
    ShortWords {
        /// Path to a vertex graph document
        file: PathBuf,
        /// Exclusive length limit
        #[arg(allow_negative_numbers = true)]
        k: i64,
        /// Index of the starting vertex (omit for an absent start)
        #[arg(long)]
        start: Option<usize>,
    },
    /// Print the longest reachable word
    LongestWord {
        /// Path to a vertex graph document
        file: PathBuf,
        /// Index of the starting vertex (omit for an absent start)
        #[arg(long)]
        start: Option<usize>,
    },
    /// Print reachable vertices that list themselves as a neighbor
    SelfLoopers {
        /// Path to a vertex graph document
        file: PathBuf,
        /// Index of the starting vertex (omit for an absent start)
        #[arg(long)]
        start: Option<usize>,
    },
    /// Check whether one airport can be reached from another
    CanReach {
        /// Path to a flight network document
        file: PathBuf,
        /// Departure airport code
        from: String,
        /// Destination airport code
        to: String,
    },
    /// Print adjacency keys that cannot be reached from START
    Unreachable {
        /// Path to an adjacency document
        file: PathBuf,
        /// Starting key
        start: String,
    },
    /// Vertex and edge counts of a document
    Stats {
        /// Path to the document
        file: PathBuf,
        /// Document kind: vertex, flights, adjacency
        #[arg(long, default_value = "vertex")]
        kind: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::ShortWords { file, k, start } => {
            commands::cmd_short_words(&file, k, start, json, &mut out)
        }
        Commands::LongestWord { file, start } => {
            commands::cmd_longest_word(&file, start, json, &mut out)
        }
        Commands::SelfLoopers { file, start } => {
            commands::cmd_self_loopers(&file, start, json, &mut out)
        }
        Commands::CanReach { file, from, to } => {
            commands::cmd_can_reach(&file, &from, &to, json, &mut out)
        }
        Commands::Unreachable { file, start } => {
            commands::cmd_unreachable(&file, &start, json, &mut out)
        }
        Commands::Stats { file, kind } => {
            let kind = match DocumentKind::from_name(&kind) {
                Some(kind) => kind,
                None => {
                    eprintln!("Invalid document kind: {}", kind);
                    process::exit(3);
                }
            };
            commands::cmd_stats(&file, kind, json, &mut out)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_)
            | GraphError::InvalidNeighbor { .. }
            | GraphError::DuplicateAirport(_)
            | GraphError::UnknownAirport(_) => 2,
            _ => 5,
        };
        process::exit(code);
    }
}
