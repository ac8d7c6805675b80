//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::automaton::{Automaton, DenseAutomaton, Representation, SparseAutomaton};
use crate::checker::{check_corpus, Corpus};
use crate::dfa::{determinize, Dfa};
use crate::distance::standard_distance;
use crate::export::{write_dot, write_json};

use super::args::{Commands, OutputFormat};

/// Execute a CLI command
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Dfa {
            reference,
            max_distance,
            automaton,
            format,
            graph_name,
            output,
        } => cmd_dfa(
            &reference,
            max_distance,
            automaton,
            format,
            &graph_name,
            output,
        ),
        Commands::Check { corpus } => cmd_check(corpus.as_deref()),
        Commands::Match {
            reference,
            queries,
            max_distance,
            automaton,
        } => cmd_match(&reference, &queries, max_distance, automaton),
    }
}

/// Compile the DFA for `reference` with the chosen representation
pub fn compile(reference: &str, max_distance: usize, automaton: Representation) -> Dfa<char> {
    match automaton {
        Representation::Dense => determinize(&DenseAutomaton::new(reference.chars(), max_distance)),
        Representation::Sparse => {
            determinize(&SparseAutomaton::new(reference.chars(), max_distance))
        }
    }
}

fn cmd_dfa(
    reference: &str,
    max_distance: usize,
    automaton: Representation,
    format: OutputFormat,
    graph_name: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    let dfa = compile(reference, max_distance, automaton);
    info!(
        "compiled {:?} (max_distance={}, {}): {} states, {} transitions",
        reference,
        max_distance,
        automaton,
        dfa.state_count(),
        dfa.transitions().len()
    );

    let writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    match format {
        OutputFormat::Dot => write_dot(&dfa, graph_name, writer),
        OutputFormat::Json => write_json(&dfa, writer),
    }
    .context("Failed to write DFA")?;

    if let Some(path) = output {
        eprintln!(
            "{} {} states written to {}",
            "✓".green(),
            dfa.state_count(),
            path.display()
        );
    }
    Ok(())
}

/// Load a JSON corpus, or the default corpus when no path is given
pub fn load_corpus(path: Option<&Path>) -> Result<Corpus> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open corpus: {}", path.display()))?;
            Corpus::from_json(BufReader::new(file))
                .with_context(|| format!("Failed to parse corpus: {}", path.display()))
        }
        None => Ok(Corpus::default()),
    }
}

fn cmd_check(corpus_path: Option<&Path>) -> Result<()> {
    let corpus = load_corpus(corpus_path)?;
    info!("checking {} cases", corpus.case_count());

    let summary = check_corpus(&corpus)?;
    println!(
        "{} dense and sparse automata agree: {} automata, {} queries, {} prefixes",
        "✓".green(),
        summary.automata,
        summary.queries,
        summary.prefixes
    );
    Ok(())
}

fn cmd_match(
    reference: &str,
    queries: &[String],
    max_distance: usize,
    automaton: Representation,
) -> Result<()> {
    let dfa = compile(reference, max_distance, automaton);

    for query in queries {
        let symbols: Vec<char> = query.chars().collect();
        let accepted = match automaton {
            Representation::Dense => {
                DenseAutomaton::new(reference.chars(), max_distance).accepts(&symbols)
            }
            Representation::Sparse => {
                SparseAutomaton::new(reference.chars(), max_distance).accepts(&symbols)
            }
        };
        let distance = standard_distance(reference, query);

        let verdict = if accepted {
            "match".green()
        } else {
            "no match".red()
        };
        println!(
            "   {} {} (d={}, dfa={})",
            query.bold(),
            verdict,
            distance,
            dfa.accepts(&symbols)
        );
    }
    Ok(())
}
