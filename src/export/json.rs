//! JSON output of the DFA boundary data.

use std::io::Write;

use serde::Serialize;

use super::ExportError;
use crate::automaton::Symbol;
use crate::dfa::Dfa;

/// Write `dfa` as pretty-printed JSON.
///
/// Fields: `state_count`, `start`, `matching`, `transitions` (each
/// `{source, target, label}`, with the label as `{"Literal": c}` or
/// `"Wildcard"`).
pub fn write_json<T, W>(dfa: &Dfa<T>, mut writer: W) -> Result<(), ExportError>
where
    T: Symbol + Serialize,
    W: Write,
{
    serde_json::to_writer_pretty(&mut writer, dfa)?;
    writeln!(writer)?;
    Ok(())
}

/// Render `dfa` as a JSON string.
pub fn to_json<T: Symbol + Serialize>(dfa: &Dfa<T>) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(dfa)?)
}
