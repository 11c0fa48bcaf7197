//! Error types for the extraction engine.

use thiserror::Error;

/// Errors produced while building or querying a [`Document`](crate::Document).
#[derive(Debug, Error)]
pub enum Error {
    /// The grammar could not be loaded or the parser produced no tree.
    #[error("failed to parse {language} source: {reason}")]
    Parse {
        language: &'static str,
        reason: String,
    },

    /// A structural pattern failed to compile against the grammar.
    #[error("query failed to compile: {0}")]
    QueryCompile(#[from] tree_sitter::QueryError),

    /// A user-supplied search pattern is not a valid regular expression.
    #[error("invalid search pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// No grammar is registered for the file extension.
    #[error("unsupported file extension: {0:?}")]
    UnsupportedLanguage(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
