//! Syntax tree diagrams.
//!
//! Renders every node of a document as one line: a margin of connector cells
//! (one per ancestor), a label, and a one-line preview of the node's source
//! text trimmed to the available width.
//!
//! ```text
//! source_file                             func F() {}
//! └─function_declaration                  func F() {}
//!   ├─"func"                              func
//!   ├─identifier name                     F
//!   ├─parameter_list parameters           ()
//!   └─block body                          {}
//! ```

use tree_sitter::Node;

use crate::document::Document;

/// Column at which previews start when the label is shorter.
pub const PREVIEW_COLUMN: usize = 40;

/// One 2-character cell of the left margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// The ancestor at this depth has no more siblings to draw.
    Blank,
    /// The ancestor at this depth has later siblings still to draw.
    Vertical,
    /// Connector to a node that has later siblings.
    Branch,
    /// Connector to the last sibling.
    LastBranch,
}

impl Cell {
    pub fn as_str(self) -> &'static str {
        match self {
            Cell::Blank => "  ",
            Cell::Vertical => "│ ",
            Cell::Branch => "├─",
            Cell::LastBranch => "└─",
        }
    }

    /// How this cell looks on the lines below the node it connects.
    fn continued(self) -> Self {
        match self {
            Cell::Branch => Cell::Vertical,
            Cell::LastBranch => Cell::Blank,
            other => other,
        }
    }
}

/// Render the document's syntax tree, at most `max_depth` levels deep, with
/// lines no wider than `width` columns where the preview allows.
///
/// A depth of 0 renders nothing and a depth of 1 renders only the root.
pub fn render_tree(doc: &Document, max_depth: usize, width: usize) -> Vec<String> {
    let renderer = TreeRenderer { doc, width };
    let mut lines = Vec::new();
    renderer.visit(doc.root(), None, &[], max_depth, &mut lines);
    lines
}

struct TreeRenderer<'a> {
    doc: &'a Document,
    width: usize,
}

impl TreeRenderer<'_> {
    fn visit(
        &self,
        node: Node,
        field: Option<&str>,
        margin: &[Cell],
        remaining: usize,
        lines: &mut Vec<String>,
    ) {
        if remaining == 0 {
            return;
        }

        if let Some(label) = self.label(node, field) {
            lines.push(self.line(margin, &label, node));
        }

        if node.child_count() == 0 {
            return;
        }

        let children = self.children(node);
        let last_printed = children
            .iter()
            .rposition(|(child, _)| self.is_printed(*child));

        let inherited: Vec<Cell> = margin.iter().map(|c| c.continued()).collect();
        for (index, (child, child_field)) in children.iter().enumerate() {
            let connector = if Some(index) == last_printed || last_printed.is_none() {
                Cell::LastBranch
            } else {
                Cell::Branch
            };
            let mut child_margin = inherited.clone();
            child_margin.push(connector);
            self.visit(*child, *child_field, &child_margin, remaining - 1, lines);
        }
    }

    /// Children paired with their field names, in source order.
    fn children<'t>(&self, node: Node<'t>) -> Vec<(Node<'t>, Option<&'static str>)> {
        let mut children = Vec::with_capacity(node.child_count());
        let mut cursor = node.walk();
        if cursor.goto_first_child() {
            loop {
                children.push((cursor.node(), cursor.field_name()));
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }
        children
    }

    /// Unnamed nodes made only of whitespace get no line.
    fn is_printed(&self, node: Node) -> bool {
        node.is_named() || !self.doc.node_text(node).trim().is_empty()
    }

    fn label(&self, node: Node, field: Option<&str>) -> Option<String> {
        if node.is_named() {
            return Some(match field {
                Some(field) => format!("{} {}", node.kind(), field),
                None => node.kind().to_string(),
            });
        }

        let text = self.doc.node_text(node);
        if text.trim().is_empty() {
            return None;
        }
        Some(format!("\"{}\"", text))
    }

    fn line(&self, margin: &[Cell], label: &str, node: Node) -> String {
        let mut line: String = margin.iter().map(|c| c.as_str()).collect();
        line.push_str(label);

        let used = line.chars().count();
        let padded = if used < PREVIEW_COLUMN {
            PREVIEW_COLUMN
        } else {
            used + 1
        };

        let available = self.width.saturating_sub(padded);
        if available == 0 {
            return line;
        }

        let preview = collapse_whitespace(self.doc.node_text(node));
        if preview.is_empty() {
            return line;
        }

        line.extend(std::iter::repeat(' ').take(padded - used));
        line.extend(preview.chars().take(available));
        line
    }
}

/// Replace every run of whitespace with a single space.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
