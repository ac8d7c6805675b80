//! Graphviz DOT output.
//!
//! Literal symbols are spelled with their `Debug` form, so a `char` label
//! reads `'w'`. The wildcard is a bare `*`, which no quoted literal can
//! collide with.
//!
//! ```text
//! digraph G {
//! 0 -> 1 [label=" 'w' "]
//! 0 -> 2 [label=" * "]
//! 4 [style=filled]
//! }
//! ```

use std::fmt::{self, Debug, Write as _};
use std::io::Write;

use super::ExportError;
use crate::automaton::{Label, Symbol};
use crate::dfa::Dfa;

/// Default graph name.
pub const DEFAULT_GRAPH_NAME: &str = "G";

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn label_text<T: Debug>(label: &Label<T>) -> Result<String, fmt::Error> {
    match label {
        Label::Literal(symbol) => {
            let mut text = String::new();
            write!(text, "{:?}", symbol)?;
            Ok(text)
        }
        Label::Wildcard => Ok("*".to_owned()),
    }
}

/// Write `dfa` as a directed graph named `graph_name`.
///
/// One line per transition, then one `[style=filled]` line per matching
/// state. Names that are not plain identifiers are quoted.
pub fn write_dot<T, W>(dfa: &Dfa<T>, graph_name: &str, mut writer: W) -> Result<(), ExportError>
where
    T: Symbol,
    W: Write,
{
    if is_identifier(graph_name) {
        writeln!(writer, "digraph {} {{", graph_name)?;
    } else {
        writeln!(writer, "digraph \"{}\" {{", escape(graph_name))?;
    }

    for transition in dfa.transitions() {
        writeln!(
            writer,
            "{} -> {} [label=\" {} \"]",
            transition.source,
            transition.target,
            escape(&label_text(&transition.label)?)
        )?;
    }

    for state in dfa.matching() {
        writeln!(writer, "{} [style=filled]", state)?;
    }

    writeln!(writer, "}}")?;
    writer.flush()?;
    Ok(())
}

/// Render `dfa` as a DOT string.
pub fn to_dot<T: Symbol>(dfa: &Dfa<T>, graph_name: &str) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_dot(dfa, graph_name, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
