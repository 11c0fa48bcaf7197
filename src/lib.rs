//! Tako - declaration summaries and syntax-tree diagrams for source code.
//!
//! Tako parses source files with tree-sitter and offers three independent
//! operations over a parsed [`Document`]:
//!
//! - [`Document::query_symbols`]: signatures of every top-level function,
//!   method, type and variable declaration, bodies omitted, each with its
//!   leading comment block, in source order
//! - [`Document::find_symbols_matching`]: full text of top-level declarations
//!   whose name matches a regular expression
//! - [`render_tree`]: an indented drawing of the whole syntax tree
//!
//! # Architecture
//!
//! - `languages`: grammar table and per-language extraction rules
//! - `document`: parsed document and the `Symbol` type
//! - `query`: structural pattern queries restricted by scope
//! - `comments`: leading comment attachment
//! - `signature`: body-less signature assembly
//! - `catalog`: the symbol catalog
//! - `names`: name matching
//! - `render`: tree diagrams
//! - `report`, `cli`: output formatting and the command-line front end
//!
//! # Adding a New Language
//!
//! Add a module under `src/languages/` with a static `LanguageSpec` and a
//! `LanguageId` variant pointing at it.

pub mod catalog;
pub mod cli;
pub mod comments;
pub mod document;
pub mod error;
pub mod languages;
pub mod names;
pub mod query;
pub mod range;
pub mod render;
pub mod report;
pub mod signature;

pub use comments::{leading_comment, LeadingComment};
pub use document::{Document, Symbol};
pub use error::{Error, Result};
pub use languages::{for_extension, DeclarationKind, LanguageId, LanguageSpec, Wrapper};
pub use query::{Capture, CaptureScope};
pub use range::{Position, Range};
pub use render::render_tree;
