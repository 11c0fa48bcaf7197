//! Language table: grammars, file extensions and per-language extraction rules.
//!
//! Each language module provides a static [`LanguageSpec`] with:
//! - The tree-sitter grammar
//! - Node kinds treated as comments
//! - One declaration pattern per [`DeclarationKind`] it supports
//! - Name fallbacks for top-level nodes that have no `name` field
//! - Wrapper kinds (decorators, `export`) that hold a declaration in a field
//!
//! Adding a language means adding a module here and a [`LanguageId`] variant;
//! the shared matching code never changes.

use std::fmt;
use std::path::Path;

use tree_sitter::Language;

use crate::error::{Error, Result};

mod c;
mod cpp;
mod csharp;
mod go;
mod java;
mod javascript;
mod php;
mod python;
mod ruby;
mod rust_lang;
mod scala;
mod typescript;

/// Identifies one of the supported grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageId {
    C,
    Cpp,
    CSharp,
    Go,
    Java,
    JavaScript,
    Php,
    Python,
    Ruby,
    Rust,
    Scala,
    TypeScript,
    Tsx,
}

impl LanguageId {
    /// All supported languages.
    pub const ALL: &'static [LanguageId] = &[
        LanguageId::C,
        LanguageId::Cpp,
        LanguageId::CSharp,
        LanguageId::Go,
        LanguageId::Java,
        LanguageId::JavaScript,
        LanguageId::Php,
        LanguageId::Python,
        LanguageId::Ruby,
        LanguageId::Rust,
        LanguageId::Scala,
        LanguageId::TypeScript,
        LanguageId::Tsx,
    ];

    /// Extraction rules for this language.
    pub fn spec(self) -> &'static LanguageSpec {
        match self {
            LanguageId::C => &c::SPEC,
            LanguageId::Cpp => &cpp::SPEC,
            LanguageId::CSharp => &csharp::SPEC,
            LanguageId::Go => &go::SPEC,
            LanguageId::Java => &java::SPEC,
            LanguageId::JavaScript => &javascript::SPEC,
            LanguageId::Php => &php::SPEC,
            LanguageId::Python => &python::SPEC,
            LanguageId::Ruby => &ruby::SPEC,
            LanguageId::Rust => &rust_lang::SPEC,
            LanguageId::Scala => &scala::SPEC,
            LanguageId::TypeScript => &typescript::SPEC,
            LanguageId::Tsx => &typescript::TSX_SPEC,
        }
    }

    /// The tree-sitter grammar for this language.
    pub fn grammar(self) -> Language {
        (self.spec().grammar)()
    }

    /// Short language name (e.g., "go", "rust").
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Resolve the language of a file from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        for_extension(ext).ok_or_else(|| Error::UnsupportedLanguage(ext.to_string()))
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up the language for a file extension.
///
/// A leading dot is accepted (".go" and "go" are equivalent).
pub fn for_extension(ext: &str) -> Option<LanguageId> {
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    LanguageId::ALL
        .iter()
        .copied()
        .find(|id| id.spec().extensions.contains(&ext))
}

/// Return all supported file extensions (without dot).
pub fn supported_extensions() -> Vec<&'static str> {
    LanguageId::ALL
        .iter()
        .flat_map(|id| id.spec().extensions.iter().copied())
        .collect()
}

/// Kind of declaration the symbol catalog recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Method,
    Function,
    TypeDefinition,
    VariableDeclaration,
}

impl DeclarationKind {
    /// Catalog order. Results are re-sorted by position afterwards.
    pub const ALL: &'static [DeclarationKind] = &[
        DeclarationKind::Method,
        DeclarationKind::Function,
        DeclarationKind::TypeDefinition,
        DeclarationKind::VariableDeclaration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Method => "method",
            DeclarationKind::Function => "function",
            DeclarationKind::TypeDefinition => "type",
            DeclarationKind::VariableDeclaration => "variable",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tree-sitter query for one kind of declaration.
#[derive(Debug, Clone, Copy)]
pub struct DeclarationQuery {
    pub kind: DeclarationKind,
    /// Query pattern; every capture is treated as a declaration node.
    pub pattern: &'static str,
}

/// How to approximate an identifier from a node's raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStrategy {
    /// First whitespace-delimited token (`x = 1` -> `x`).
    FirstToken,
    /// Second whitespace-delimited token (`var x int` -> `x`).
    SecondToken,
}

impl NameStrategy {
    /// Apply the strategy to a node's text.
    pub fn apply<'a>(&self, text: &'a str) -> Option<&'a str> {
        let mut tokens = text.split_whitespace();
        match self {
            NameStrategy::FirstToken => tokens.next(),
            NameStrategy::SecondToken => tokens.nth(1),
        }
    }
}

/// Name fallback for a node kind that has no `name` field.
#[derive(Debug, Clone, Copy)]
pub struct NameFallback {
    pub node_kind: &'static str,
    pub strategy: NameStrategy,
}

/// A node kind that wraps a declaration without being one itself, such as a
/// decorated definition or an `export` statement.
///
/// A declaration held in the wrapper's field counts as top-level when the
/// wrapper is a child of the root. The wrapper's own text before the
/// declaration (decorators, `export`) is kept in signatures.
#[derive(Debug, Clone, Copy)]
pub struct Wrapper {
    pub node_kind: &'static str,
    /// Field holding the wrapped declaration.
    pub field: &'static str,
}

/// Extraction rules for a single language.
pub struct LanguageSpec {
    /// Language name (e.g., "go", "rust").
    pub name: &'static str,
    /// File extensions without the dot.
    pub extensions: &'static [&'static str],
    pub grammar: fn() -> Language,
    /// Node kinds that count as comments for comment attachment.
    pub comment_kinds: &'static [&'static str],
    /// Field holding a declaration's implementation, dropped from signatures.
    pub body_field: &'static str,
    pub declarations: &'static [DeclarationQuery],
    pub name_fallbacks: &'static [NameFallback],
    pub wrappers: &'static [Wrapper],
}

impl LanguageSpec {
    /// Query pattern for a declaration kind, if the language has one.
    pub fn pattern(&self, kind: DeclarationKind) -> Option<&'static str> {
        self.declarations
            .iter()
            .find(|d| d.kind == kind)
            .map(|d| d.pattern)
    }

    pub fn is_comment(&self, node_kind: &str) -> bool {
        self.comment_kinds.contains(&node_kind)
    }

    /// Name fallback strategy for a node kind.
    pub fn name_fallback(&self, node_kind: &str) -> Option<NameStrategy> {
        self.name_fallbacks
            .iter()
            .find(|f| f.node_kind == node_kind)
            .map(|f| f.strategy)
    }

    /// Field holding the wrapped declaration, if `node_kind` is a wrapper.
    pub fn wrapped_field(&self, node_kind: &str) -> Option<&'static str> {
        self.wrappers
            .iter()
            .find(|w| w.node_kind == node_kind)
            .map(|w| w.field)
    }
}

impl fmt::Debug for LanguageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageSpec")
            .field("name", &self.name)
            .field("extensions", &self.extensions)
            .finish_non_exhaustive()
    }
}
