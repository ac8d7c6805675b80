//! Rendering compiled DFAs for visualization and persistence.
//!
//! The core only hands over boundary data (states, start id, matching ids,
//! transition triples). How symbols and the wildcard are spelled is decided
//! by each format: DOT quotes literals via `Debug`, JSON tags the label.

pub mod dot;

#[cfg(feature = "serialization")]
pub mod json;

pub use self::dot::{to_dot, write_dot};

#[cfg(feature = "serialization")]
pub use self::json::{to_json, write_json};

/// Errors that can occur while exporting a DFA.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// I/O error
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    /// A symbol could not be formatted
    #[error("symbol formatting error")]
    Format(#[from] std::fmt::Error),
    /// Error during JSON serialization
    #[cfg(feature = "serialization")]
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}
