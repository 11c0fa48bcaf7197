//! Leading comment attachment.
//!
//! A declaration owns the run of comment siblings that sits directly above
//! it. Any other sibling between the comments and the declaration breaks the
//! run, so a comment block separated from a declaration by unrelated code is
//! not attached.
//!
//! Some grammars (Rust doc comments, for one) include the line terminator in
//! the comment node. One trailing newline is dropped from each comment so the
//! joined text never carries blank lines the source does not have.

use tree_sitter::Node;

use crate::range::Position;

/// Comment text attached to a declaration and where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadingComment {
    /// Comment texts joined with newlines, in source order.
    pub text: String,
    pub start_byte: usize,
    pub start: Position,
}

/// Find the unbroken run of comments immediately preceding `node`.
///
/// `is_comment` decides which sibling kinds count as comments.
pub fn leading_comment(
    node: Node,
    source: &[u8],
    is_comment: impl Fn(&str) -> bool,
) -> Option<LeadingComment> {
    let parent = node.parent()?;
    let target_start = node.start_byte();

    let mut run: Vec<&str> = Vec::new();
    let mut run_start: Option<(usize, Position)> = None;

    let mut cursor = parent.walk();
    for sibling in parent.children(&mut cursor) {
        if sibling.id() == node.id() || sibling.start_byte() >= target_start {
            break;
        }

        if is_comment(sibling.kind()) {
            run.push(strip_line_end(sibling.utf8_text(source).unwrap_or("")));
            if run_start.is_none() {
                run_start = Some((sibling.start_byte(), sibling.start_position().into()));
            }
        } else {
            run.clear();
            run_start = None;
        }
    }

    let (start_byte, start) = run_start?;
    Some(LeadingComment {
        text: run.join("\n"),
        start_byte,
        start,
    })
}

fn strip_line_end(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::languages::LanguageId;

    fn comment_in(
        source: &str,
        language: LanguageId,
        decl_index: usize,
    ) -> Option<LeadingComment> {
        let doc = Document::new(source, language).unwrap();
        let root = doc.root();
        let mut cursor = root.walk();
        let decl = root
            .named_children(&mut cursor)
            .filter(|n| !doc.spec().is_comment(n.kind()))
            .nth(decl_index)
            .expect("declaration");
        leading_comment(decl, doc.source(), |kind| doc.spec().is_comment(kind))
    }

    fn comment_for(source: &str, decl_index: usize) -> Option<LeadingComment> {
        comment_in(source, LanguageId::Go, decl_index)
    }

    #[test]
    fn test_adjacent_comments_attach_in_order() {
        let source = "// one\n// two\nfunc F() {}\n";
        let comment = comment_for(source, 0).unwrap();
        assert_eq!(comment.text, "// one\n// two");
        assert_eq!(comment.start_byte, 0);
        assert_eq!(comment.start, Position { row: 0, column: 0 });
    }

    #[test]
    fn test_intervening_declaration_breaks_run() {
        let source = "// stray\nvar x = 1\n\nfunc F() {}\n";
        assert_eq!(comment_for(source, 1), None);
    }

    #[test]
    fn test_only_comments_after_break_attach() {
        let source = "// stray\nvar x = 1\n// doc\nfunc F() {}\n";
        let comment = comment_for(source, 1).unwrap();
        assert_eq!(comment.text, "// doc");
        assert_eq!(comment.start_byte, source.find("// doc").unwrap());
        assert_eq!(comment.start.row, 2);
    }

    #[test]
    fn test_no_comment() {
        assert_eq!(comment_for("func F() {}\n", 0), None);
    }

    #[test]
    fn test_rust_doc_comments_attach() {
        // Doc comment nodes end at the start of the next line, right where
        // the item begins.
        let source = "/// First line.\n/// Second line.\nfn f() {}\n";
        let comment = comment_in(source, LanguageId::Rust, 0).unwrap();
        assert_eq!(comment.text, "/// First line.\n/// Second line.");
        assert_eq!(comment.start_byte, 0);
    }

    #[test]
    fn test_rust_doc_comment_after_item_breaks_run() {
        let source = "/// stray\nconst A: u8 = 1;\n/// doc\nfn f() {}\n";
        let comment = comment_in(source, LanguageId::Rust, 1).unwrap();
        assert_eq!(comment.text, "/// doc");
        assert_eq!(comment.start.row, 2);
    }

    #[test]
    fn test_rust_attributes_join_doc_comments() {
        let source = "/// A point.\n#[derive(Debug)]\nstruct Point;\n";
        let comment = comment_in(source, LanguageId::Rust, 0).unwrap();
        assert_eq!(comment.text, "/// A point.\n#[derive(Debug)]");
        assert_eq!(comment.start_byte, 0);
    }

    #[test]
    fn test_strip_line_end() {
        assert_eq!(strip_line_end("/// doc\n"), "/// doc");
        assert_eq!(strip_line_end("// doc\r\n"), "// doc");
        assert_eq!(strip_line_end("/* a */"), "/* a */");
    }

    #[test]
    fn test_root_has_no_parent() {
        let doc = Document::new("// doc\nfunc F() {}\n", LanguageId::Go).unwrap();
        assert_eq!(leading_comment(doc.root(), doc.source(), |_| true), None);
    }
}
