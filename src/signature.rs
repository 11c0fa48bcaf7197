//! Declaration signatures: everything except the body.

use tree_sitter::Node;

use crate::comments::leading_comment;
use crate::document::{Document, Symbol};
use crate::range::Range;

/// Fields whose text is written without a separating space, so that
/// `name`, `<T>` and `(params)` stay together.
const UNSPACED_FIELDS: &[&str] = &["parameters", "type_parameters"];

impl Document {
    /// Build a symbol from a declaration node, keeping every immediate child
    /// except the body field.
    ///
    /// Any leading comment is prepended and the range widened to include it.
    /// Children that are missing from the tree are simply not written.
    ///
    /// For a wrapper node (a decorated definition, an `export` statement) the
    /// wrapper's text up to the declaration is kept verbatim and the
    /// declaration inside it supplies the children.
    pub fn signature<'doc>(&'doc self, node: Node<'doc>) -> Symbol<'doc> {
        let spec = self.spec();
        let (mut summary, range) = self.with_leading_comment(node);

        let declaration = self.unwrap_declaration(node);
        summary.push_str(self.text_between(node.start_byte(), declaration.start_byte()));

        let mut cursor = declaration.walk();
        let mut started = false;
        if cursor.goto_first_child() {
            loop {
                let field = cursor.field_name();
                if field != Some(spec.body_field) {
                    if started && !field.is_some_and(|f| UNSPACED_FIELDS.contains(&f)) {
                        summary.push(' ');
                    }
                    summary.push_str(self.node_text(cursor.node()));
                    started = true;
                }

                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }

        Symbol {
            summary,
            range,
            node,
        }
    }

    /// Start a summary with the node's leading comment (and a newline), and
    /// compute the node's range widened to cover that comment.
    pub(crate) fn with_leading_comment(&self, node: Node) -> (String, Range) {
        let spec = self.spec();
        let mut range = Range::from_node(node);
        let mut summary = String::new();

        if let Some(comment) = leading_comment(node, self.source(), |kind| spec.is_comment(kind)) {
            summary.push_str(&comment.text);
            summary.push('\n');
            range.widen_start(comment.start_byte, comment.start);
        }

        (summary, range)
    }
}
