//! Structural pattern queries over a document.

use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Query, QueryCursor};

use crate::document::Document;
use crate::error::Result;

/// Which captures a query keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureScope {
    /// Only nodes whose parent is the document root, or that a root-level
    /// wrapper (decorators, `export`) holds as its declaration.
    #[default]
    TopLevel,
    /// Every captured node, however deeply nested.
    Anywhere,
}

/// A node matched by a query, labeled with its capture name.
#[derive(Debug, Clone)]
pub struct Capture<'doc> {
    pub name: String,
    pub node: Node<'doc>,
}

impl Document {
    /// Compile `pattern` against the document's grammar and collect its
    /// captures in document order.
    ///
    /// Fails with [`Error::QueryCompile`](crate::Error::QueryCompile) if the
    /// pattern is malformed.
    pub fn captures(&self, pattern: &str, scope: CaptureScope) -> Result<Vec<Capture<'_>>> {
        let query = Query::new(&self.language().grammar(), pattern)?;
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, self.root(), self.source());

        let mut captures = Vec::new();
        while let Some(m) = matches.next() {
            for capture in m.captures {
                if !self.in_scope(capture.node, scope) {
                    continue;
                }
                captures.push(Capture {
                    name: query.capture_names()[capture.index as usize].to_string(),
                    node: capture.node,
                });
            }
        }

        tracing::trace!(
            language = self.language().name(),
            ?scope,
            captures = captures.len(),
            "executed query"
        );

        Ok(captures)
    }

    fn in_scope(&self, node: Node, scope: CaptureScope) -> bool {
        match scope {
            CaptureScope::TopLevel => self.top_level_declaration(node).is_some(),
            CaptureScope::Anywhere => true,
        }
    }
}
