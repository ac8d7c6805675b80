//! CLI argument definitions

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::automaton::Representation;

/// Command-line arguments
#[derive(Parser)]
#[command(name = "levenshtein-dfa")]
#[command(about = "Compile Levenshtein automata into explicit DFAs")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter implied by the verbosity flag
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Compile the automaton for a reference string into a DFA
    Dfa {
        /// Reference string
        reference: String,

        /// Maximum edit distance
        #[arg(short = 'm', long, default_value = "2")]
        max_distance: usize,

        /// Automaton representation to explore
        #[arg(short, long, value_enum, default_value_t = Representation::Sparse)]
        automaton: Representation,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Dot)]
        format: OutputFormat,

        /// Graph name for DOT output
        #[arg(short, long, default_value = crate::export::dot::DEFAULT_GRAPH_NAME)]
        graph_name: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check the dense and sparse automata against each other
    Check {
        /// JSON corpus file (`references`, `queries`, `max_distances`)
        #[arg(short, long)]
        corpus: Option<PathBuf>,
    },

    /// Test queries against a reference string
    Match {
        /// Reference string
        reference: String,

        /// Queries to test
        #[arg(required = true)]
        queries: Vec<String>,

        /// Maximum edit distance
        #[arg(short = 'm', long, default_value = "2")]
        max_distance: usize,

        /// Automaton representation
        #[arg(short, long, value_enum, default_value_t = Representation::Sparse)]
        automaton: Representation,
    },
}

/// Output format for compiled DFAs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Graphviz DOT
    Dot,
    /// JSON
    Json,
}
