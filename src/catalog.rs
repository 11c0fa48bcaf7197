//! Symbol catalog: every top-level declaration of a document, in source order.

use crate::document::{Document, Symbol};
use crate::error::Result;
use crate::languages::DeclarationKind;
use crate::query::CaptureScope;

impl Document {
    /// Extract body-less signatures for all top-level declarations.
    ///
    /// Runs one query per [`DeclarationKind`] the language supports and
    /// returns the combined symbols sorted by their (comment-widened) start
    /// byte. A query that fails to compile aborts the whole call.
    pub fn query_symbols(&self) -> Result<Vec<Symbol<'_>>> {
        let mut symbols = Vec::new();
        for kind in DeclarationKind::ALL {
            symbols.extend(self.query_declarations(*kind)?);
        }

        symbols.sort_by_key(|s| s.range.start_byte);

        tracing::debug!(
            language = self.language().name(),
            symbols = symbols.len(),
            "built symbol catalog"
        );

        Ok(symbols)
    }

    /// Extract signatures for one kind of top-level declaration, in
    /// document order. Empty if the language has no such kind.
    pub fn query_declarations(&self, kind: DeclarationKind) -> Result<Vec<Symbol<'_>>> {
        let Some(pattern) = self.spec().pattern(kind) else {
            return Ok(Vec::new());
        };

        // wrapped declarations are reported as their wrapper
        let captures = self.captures(pattern, CaptureScope::TopLevel)?;
        Ok(captures
            .into_iter()
            .filter_map(|capture| self.top_level_declaration(capture.node))
            .map(|node| self.signature(node))
            .collect())
    }
}
