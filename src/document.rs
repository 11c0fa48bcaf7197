//! Parsed source documents.

use std::fmt;

use tree_sitter::{Node, Parser, Tree};

use crate::error::{Error, Result};
use crate::languages::{LanguageId, LanguageSpec};
use crate::range::Range;

/// A parsed source file: the syntax tree, the bytes it was parsed from, and
/// the language used to parse them.
///
/// Documents are immutable. Every extraction operation borrows the document,
/// and the nodes it returns live only as long as that borrow.
pub struct Document {
    tree: Tree,
    source: Vec<u8>,
    language: LanguageId,
}

impl Document {
    /// Parse `source` with the grammar for `language`.
    ///
    /// Syntax errors in the source do not fail: tree-sitter still produces a
    /// tree containing ERROR nodes (see [`Document::has_syntax_errors`]).
    /// An error is returned only if the grammar cannot be loaded or no tree
    /// is produced at all.
    pub fn new(source: impl Into<Vec<u8>>, language: LanguageId) -> Result<Self> {
        let source = source.into();

        let mut parser = Parser::new();
        parser
            .set_language(&language.grammar())
            .map_err(|e| Error::Parse {
                language: language.name(),
                reason: e.to_string(),
            })?;

        let tree = parser.parse(&source, None).ok_or_else(|| Error::Parse {
            language: language.name(),
            reason: "parser produced no tree".to_string(),
        })?;

        tracing::debug!(
            language = language.name(),
            bytes = source.len(),
            has_errors = tree.root_node().has_error(),
            "parsed document"
        );

        Ok(Self {
            tree,
            source,
            language,
        })
    }

    /// The root node of the syntax tree.
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn source(&self) -> &[u8] {
        &self.source
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    /// Extraction rules for the document's language.
    pub fn spec(&self) -> &'static LanguageSpec {
        self.language.spec()
    }

    /// Get the source text for a node.
    pub fn node_text(&self, node: Node) -> &str {
        node.utf8_text(&self.source).unwrap_or("")
    }

    /// Whether the parser had to recover from syntax errors.
    pub fn has_syntax_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// The root child that declares `node`: the node itself when its parent
    /// is the root, or the outermost wrapper (see
    /// [`Wrapper`](crate::languages::Wrapper)) holding it when that wrapper
    /// is a root child. `None` for anything nested deeper.
    pub fn top_level_declaration<'doc>(&'doc self, node: Node<'doc>) -> Option<Node<'doc>> {
        let root_id = self.root().id();
        let mut current = node;
        loop {
            let parent = current.parent()?;
            if parent.id() == root_id {
                return Some(current);
            }
            let field = self.spec().wrapped_field(parent.kind())?;
            if parent.child_by_field_name(field)?.id() != current.id() {
                return None;
            }
            current = parent;
        }
    }

    /// The declaration inside any wrappers around `node`.
    ///
    /// Returns `node` itself when it is not a wrapper, or when the wrapper
    /// holds no declaration (`export { a, b }`).
    pub fn unwrap_declaration<'doc>(&'doc self, node: Node<'doc>) -> Node<'doc> {
        let mut current = node;
        while let Some(inner) = self
            .spec()
            .wrapped_field(current.kind())
            .and_then(|field| current.child_by_field_name(field))
        {
            current = inner;
        }
        current
    }

    /// Source text between two byte offsets, empty if they do not fall on
    /// character boundaries.
    pub fn text_between(&self, start_byte: usize, end_byte: usize) -> &str {
        self.source
            .get(start_byte..end_byte)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .unwrap_or("")
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("language", &self.language)
            .field("bytes", &self.source.len())
            .finish()
    }
}

/// A declaration extracted from a document.
///
/// `summary` is either a body-less signature ([`Document::query_symbols`]) or
/// the full declaration text ([`Document::find_symbols_matching`]), prefixed
/// by any attached leading comment. `range` starts at that comment when one
/// is attached.
#[derive(Debug, Clone)]
pub struct Symbol<'doc> {
    pub summary: String,
    pub range: Range,
    pub node: Node<'doc>,
}

impl fmt::Display for Symbol<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.summary, self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_go() {
        let doc = Document::new("package main\n\nfunc main() {}\n", LanguageId::Go).unwrap();
        assert_eq!(doc.root().kind(), "source_file");
        assert_eq!(doc.language(), LanguageId::Go);
        assert!(!doc.has_syntax_errors());
        assert_eq!(doc.node_text(doc.root()), "package main\n\nfunc main() {}\n");
    }

    #[test]
    fn test_syntax_errors_still_produce_tree() {
        let doc = Document::new("func (", LanguageId::Go).unwrap();
        assert!(doc.has_syntax_errors());
    }

    #[test]
    fn test_every_language_parses_empty_source() {
        for id in LanguageId::ALL {
            let doc = Document::new("", *id);
            assert!(doc.is_ok(), "{} failed to parse empty source", id);
        }
    }

    #[test]
    fn test_decorated_definition_is_top_level() {
        let doc = Document::new("@cache\ndef f(x):\n    return x\n", LanguageId::Python).unwrap();
        let root = doc.root();
        let decorated = root.child(0).unwrap();
        assert_eq!(decorated.kind(), "decorated_definition");

        let function = doc.unwrap_declaration(decorated);
        assert_eq!(function.kind(), "function_definition");
        assert_eq!(doc.top_level_declaration(function).map(|n| n.id()), Some(decorated.id()));
        assert_eq!(doc.text_between(decorated.start_byte(), function.start_byte()), "@cache\n");

        // the decorator itself is not a wrapped declaration
        let decorator = decorated.child(0).unwrap();
        assert_eq!(decorator.kind(), "decorator");
        assert!(doc.top_level_declaration(decorator).is_none());
    }

    #[test]
    fn test_nested_node_is_not_top_level() {
        let doc = Document::new("func f() {\n\tvar x int\n}\n", LanguageId::Go).unwrap();
        let function = doc.root().child(0).unwrap();
        assert_eq!(doc.top_level_declaration(function).map(|n| n.id()), Some(function.id()));
        assert_eq!(doc.unwrap_declaration(function).id(), function.id());

        let body = function.child_by_field_name("body").unwrap();
        assert!(doc.top_level_declaration(body).is_none());
        assert!(doc.top_level_declaration(doc.root()).is_none());
    }

    #[test]
    fn test_export_without_declaration_unwraps_to_itself() {
        let doc = Document::new("const a = 1;\nexport { a };\n", LanguageId::JavaScript).unwrap();
        let export = doc.root().child(1).unwrap();
        assert_eq!(export.kind(), "export_statement");
        assert_eq!(doc.unwrap_declaration(export).id(), export.id());
    }
}
