//! Command-line interface for tako.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use rayon::prelude::*;
use regex::Regex;
use walkdir::WalkDir;

use crate::document::{Document, Symbol};
use crate::languages::{self, LanguageId};
use crate::render;
use crate::report::{self, FileReport, SymbolRecord};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_NO_MATCHES: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Directory names never descended into.
pub const IGNORED_DIRS: &[&str] = &[
    "vendor",
    "node_modules",
    "third_party",
    "build",
    "dist",
    "out",
    "target",
    "bin",
    ".git",
];

/// Width used when the terminal size cannot be determined.
const DEFAULT_WIDTH: usize = 80;

/// Summarize declarations and draw syntax trees for source code.
#[derive(Parser)]
#[command(name = "tako")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print declaration signatures for a file or directory
    Symbols(SymbolsArgs),
    /// Print top-level declarations whose name matches a regex
    Grep(GrepArgs),
    /// Draw the syntax tree of a file
    Tree(TreeArgs),
}

/// Arguments for the symbols command.
#[derive(Parser)]
pub struct SymbolsArgs {
    /// Path to search for symbols (file or directory)
    pub path: PathBuf,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

/// Arguments for the grep command.
#[derive(Parser)]
pub struct GrepArgs {
    /// Regular expression matched against declaration names
    pub pattern: String,

    /// Path to search (file or directory)
    pub path: PathBuf,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

/// Arguments for the tree command.
#[derive(Parser)]
pub struct TreeArgs {
    /// Source file to draw
    pub file: PathBuf,

    /// Maximum number of tree levels to print
    #[arg(short, long, default_value_t = 10)]
    pub depth: usize,

    /// Line width (default: terminal width)
    #[arg(short, long)]
    pub width: Option<usize>,
}

fn validate_format(format: &str) -> bool {
    if format != "pretty" && format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            format
        );
        return false;
    }
    true
}

/// Collect supported source files under `root`.
///
/// A file path is returned as-is, even if its extension is unsupported, so
/// that the caller reports it. Directories are walked in file-name order,
/// skipping [`IGNORED_DIRS`].
pub fn collect_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            !IGNORED_DIRS.contains(&name.as_ref())
        })
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let ext = entry.path().extension().and_then(|e| e.to_str()).unwrap_or("");
        if languages::for_extension(ext).is_some() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Read and parse one file.
pub fn load_document(path: &Path) -> crate::Result<Document> {
    let language = LanguageId::from_path(path)?;
    let source = fs::read(path)?;
    Document::new(source, language)
}

/// Run `extract` over every file in parallel, returning results in input order.
fn extract_reports<F>(files: &[PathBuf], extract: F) -> Vec<(PathBuf, crate::Result<FileReport>)>
where
    F: for<'d> Fn(&'d Document) -> crate::Result<Vec<Symbol<'d>>> + Sync,
{
    files
        .par_iter()
        .map(|path| {
            let result = load_document(path).and_then(|doc| {
                let symbols = extract(&doc)?;
                Ok(FileReport {
                    path: path.to_string_lossy().to_string(),
                    language: doc.language().name().to_string(),
                    symbols: symbols.iter().map(SymbolRecord::from).collect(),
                })
            });
            (path.clone(), result)
        })
        .collect()
}

/// Print the successful reports and warn about failed files.
///
/// Returns whether any file failed.
fn emit(
    results: Vec<(PathBuf, crate::Result<FileReport>)>,
    format: &str,
    skip_empty: bool,
) -> anyhow::Result<(Vec<FileReport>, bool)> {
    let mut reports = Vec::new();
    let mut failed = false;
    for (path, result) in results {
        match result {
            Ok(report) if skip_empty && report.is_empty() => {}
            Ok(report) => reports.push(report),
            Err(e) => {
                eprintln!("Warning: {}: {}", path.display(), e);
                failed = true;
            }
        }
    }

    match format {
        "json" => report::write_json(&reports)?,
        _ => report::write_pretty(&reports),
    }

    Ok((reports, failed))
}

/// Run the symbols command.
pub fn run_symbols(args: &SymbolsArgs) -> anyhow::Result<i32> {
    if !validate_format(&args.format) {
        return Ok(EXIT_ERROR);
    }
    if let Err(e) = fs::metadata(&args.path) {
        eprintln!("Error: cannot access path {:?}: {}", args.path, e);
        return Ok(EXIT_ERROR);
    }

    let files = collect_files(&args.path)?;
    if files.is_empty() {
        eprintln!("Warning: no files to scan");
        return Ok(EXIT_SUCCESS);
    }

    let results = extract_reports(&files, |doc| doc.query_symbols());
    let (_, failed) = emit(results, &args.format, false)?;

    Ok(if failed { EXIT_ERROR } else { EXIT_SUCCESS })
}

/// Run the grep command.
pub fn run_grep(args: &GrepArgs) -> anyhow::Result<i32> {
    if !validate_format(&args.format) {
        return Ok(EXIT_ERROR);
    }
    if let Err(e) = Regex::new(&args.pattern) {
        eprintln!("Error: invalid pattern: {}", e);
        return Ok(EXIT_ERROR);
    }
    if let Err(e) = fs::metadata(&args.path) {
        eprintln!("Error: cannot access path {:?}: {}", args.path, e);
        return Ok(EXIT_ERROR);
    }

    let files = collect_files(&args.path)?;
    let pattern = args.pattern.as_str();
    let results = extract_reports(&files, |doc| doc.find_symbols_matching(pattern));
    let (reports, failed) = emit(results, &args.format, true)?;

    Ok(if failed {
        EXIT_ERROR
    } else if reports.is_empty() {
        EXIT_NO_MATCHES
    } else {
        EXIT_SUCCESS
    })
}

/// Run the tree command.
pub fn run_tree(args: &TreeArgs) -> anyhow::Result<i32> {
    let doc = match load_document(&args.file) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: {}: {}", args.file.display(), e);
            return Ok(EXIT_ERROR);
        }
    };

    let width = terminal_width(args.width);
    for line in render::render_tree(&doc, args.depth, width) {
        println!("{}", line);
    }

    Ok(EXIT_SUCCESS)
}

/// Resolve the output width once: explicit override, then the terminal's
/// column count, then [`DEFAULT_WIDTH`].
pub fn terminal_width(override_width: Option<usize>) -> usize {
    override_width
        .or_else(|| {
            crossterm::terminal::size()
                .ok()
                .map(|(cols, _)| cols as usize)
                .filter(|cols| *cols > 0)
        })
        .unwrap_or(DEFAULT_WIDTH)
}
