//! Name search over top-level declarations.
//!
//! Names are approximated syntactically: the `name` field when the node has
//! one, otherwise a per-language token heuristic over the node's text. The
//! heuristic is not grammar-aware; `var a, b int` yields the candidate `a,`.

use regex::Regex;
use tree_sitter::Node;

use crate::document::{Document, Symbol};
use crate::error::Result;

impl Document {
    /// Find top-level declarations whose derived name matches `pattern`.
    ///
    /// Each symbol carries the full declaration text (body included) with any
    /// leading comment prepended. Only direct children of the root are
    /// considered. An invalid pattern fails before any matching.
    pub fn find_symbols_matching(&self, pattern: &str) -> Result<Vec<Symbol<'_>>> {
        let re = Regex::new(pattern)?;
        let root = self.root();

        let mut symbols = Vec::new();
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            let Some(name) = self.declared_name(child) else {
                continue;
            };
            if name.is_empty() || !re.is_match(name) {
                continue;
            }

            let (mut summary, range) = self.with_leading_comment(child);
            summary.push_str(self.node_text(child));
            symbols.push(Symbol {
                summary,
                range,
                node: child,
            });
        }

        tracing::debug!(
            language = self.language().name(),
            pattern,
            matches = symbols.len(),
            "matched symbol names"
        );

        Ok(symbols)
    }

    /// Approximate the identifier a node declares. Wrappers are looked
    /// through, so `@cache def f()` and `export const x = 1` name `f` and `x`.
    pub fn declared_name(&self, node: Node) -> Option<&str> {
        let node = self.unwrap_declaration(node);
        if let Some(name) = node.child_by_field_name("name") {
            return Some(self.node_text(name));
        }

        let strategy = self.spec().name_fallback(node.kind())?;
        strategy.apply(self.node_text(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::languages::LanguageId;

    const SOURCE: &str = r#"package main

// Handler serves requests.
func Handler() {
	helper := func() {}
	_ = helper
}

func helper() int {
	return 42
}

type HandlerConfig struct {
	Port int
}
"#;

    #[test]
    fn test_match_by_name_field() {
        let doc = Document::new(SOURCE, LanguageId::Go).unwrap();
        let symbols = doc.find_symbols_matching("^helper$").unwrap();
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].summary, "func helper() int {\n\treturn 42\n}");
    }

    #[test]
    fn test_full_text_with_comment() {
        let doc = Document::new(SOURCE, LanguageId::Go).unwrap();
        let symbols = doc.find_symbols_matching("^Handler$").unwrap();
        assert_eq!(symbols.len(), 1);
        assert_eq!(
            symbols[0].summary,
            "// Handler serves requests.\nfunc Handler() {\n\thelper := func() {}\n\t_ = helper\n}"
        );
        assert_eq!(
            symbols[0].range.text(doc.source()),
            symbols[0].summary,
            "widened range must slice back to the summary"
        );
    }

    #[test]
    fn test_fallback_for_type_declaration() {
        let doc = Document::new(SOURCE, LanguageId::Go).unwrap();
        let symbols = doc.find_symbols_matching("Config$").unwrap();
        assert_eq!(symbols.len(), 1);
        assert!(symbols[0].summary.starts_with("type HandlerConfig struct"));
        assert_eq!(doc.declared_name(symbols[0].node), Some("HandlerConfig"));
    }

    #[test]
    fn test_only_root_children() {
        let doc = Document::new(SOURCE, LanguageId::Go).unwrap();
        let symbols = doc.find_symbols_matching("elper").unwrap();
        assert_eq!(symbols.len(), 1, "nested `helper` must not match");
        for symbol in &symbols {
            assert_eq!(symbol.node.parent().map(|p| p.id()), Some(doc.root().id()));
        }
    }

    #[test]
    fn test_invalid_regex() {
        let doc = Document::new(SOURCE, LanguageId::Go).unwrap();
        let err = doc.find_symbols_matching("(unclosed").unwrap_err();
        assert!(matches!(err, Error::InvalidRegex(_)));
    }

    #[test]
    fn test_grouped_var_uses_raw_second_token() {
        // The second token of `var a, b int` is `a,`, so an exact match on
        // `a` finds nothing.
        let doc = Document::new("var a, b int\n", LanguageId::Go).unwrap();
        assert!(doc.find_symbols_matching("^a$").unwrap().is_empty());

        let symbols = doc.find_symbols_matching("^a,$").unwrap();
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].summary, "var a, b int");

        assert!(doc.find_symbols_matching("^b$").unwrap().is_empty());
    }

    #[test]
    fn test_single_var_matches() {
        let doc = Document::new("var a int\n", LanguageId::Go).unwrap();
        assert_eq!(doc.find_symbols_matching("^a$").unwrap().len(), 1);
    }

    #[test]
    fn test_nodes_without_name_are_skipped() {
        let doc = Document::new(SOURCE, LanguageId::Go).unwrap();
        // package_clause and comments have no name and no fallback
        let symbols = doc.find_symbols_matching(".*").unwrap();
        assert_eq!(symbols.len(), 3);
    }

    #[test]
    fn test_python_assignment_fallback() {
        let doc = Document::new("LIMIT = 3\ndef limit():\n    pass\n", LanguageId::Python).unwrap();
        let symbols = doc.find_symbols_matching("(?i)^limit$").unwrap();
        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[0].summary, "LIMIT = 3");
    }

    #[test]
    fn test_decorated_definitions_match_by_inner_name() {
        let source = "@cache\ndef f(x): ...\n@dataclass\nclass P: ...\n";
        let doc = Document::new(source, LanguageId::Python).unwrap();

        let symbols = doc.find_symbols_matching("^f$").unwrap();
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].summary, "@cache\ndef f(x): ...");
        assert_eq!(symbols[0].node.kind(), "decorated_definition");

        let symbols = doc.find_symbols_matching("^P$").unwrap();
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].summary, "@dataclass\nclass P: ...");
    }

    #[test]
    fn test_exports_match_by_inner_name() {
        let source = "// Adds.\nexport function add(a, b) {\n  return a + b;\n}\nexport const ZERO = 0;\nexport { add as plus };\n";
        let doc = Document::new(source, LanguageId::JavaScript).unwrap();

        let symbols = doc.find_symbols_matching("^add$").unwrap();
        assert_eq!(symbols.len(), 1);
        assert_eq!(
            symbols[0].summary,
            "// Adds.\nexport function add(a, b) {\n  return a + b;\n}"
        );
        assert_eq!(symbols[0].range.text(doc.source()), symbols[0].summary);

        let symbols = doc.find_symbols_matching("^ZERO$").unwrap();
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].summary, "export const ZERO = 0;");

        // a bare export list declares nothing
        assert_eq!(doc.find_symbols_matching(".").unwrap().len(), 2);
    }
}
