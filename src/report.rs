//! Output formatting for extraction results.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output, one block per symbol
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};

use crate::document::Symbol;
use crate::range::Range;

/// An owned copy of a symbol, detached from its document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRecord {
    pub summary: String,
    pub range: Range,
}

impl From<&Symbol<'_>> for SymbolRecord {
    fn from(symbol: &Symbol<'_>) -> Self {
        Self {
            summary: symbol.summary.clone(),
            range: symbol.range,
        }
    }
}

/// Symbols extracted from one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: String,
    pub language: String,
    pub symbols: Vec<SymbolRecord>,
}

impl FileReport {
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Format reports for the terminal.
///
/// Each file gets a `path:` header followed by its symbols, each printed as
/// `summary row:col-row:col` and separated by a blank line.
pub fn format_pretty(reports: &[FileReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&format!("{}\n", format!("{}:", report.path).as_str().bold()));
        for symbol in &report.symbols {
            out.push_str(&format!(
                "{} {}\n\n",
                symbol.summary,
                symbol.range.to_string().as_str().dimmed()
            ));
        }
    }
    out
}

/// Format reports as a JSON array.
pub fn format_json(reports: &[FileReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

/// Print reports for the terminal.
pub fn write_pretty(reports: &[FileReport]) {
    print!("{}", format_pretty(reports));
}

/// Print reports as JSON.
pub fn write_json(reports: &[FileReport]) -> anyhow::Result<()> {
    println!("{}", format_json(reports)?);
    Ok(())
}
