//! Rust language rules.
//!
//! Methods live inside `impl` blocks and are never top-level, so the method
//! slot captures the `impl` header itself.

use tree_sitter::Language;

use super::{DeclarationKind, DeclarationQuery, LanguageSpec, NameFallback, NameStrategy};

const DECLARATIONS: &[DeclarationQuery] = &[
    DeclarationQuery {
        kind: DeclarationKind::Method,
        pattern: "(impl_item) @impl",
    },
    DeclarationQuery {
        kind: DeclarationKind::Function,
        pattern: "(function_item) @function",
    },
    DeclarationQuery {
        kind: DeclarationKind::TypeDefinition,
        pattern: r#"
(struct_item) @struct
(enum_item) @enum
(union_item) @union
(trait_item) @trait
(type_item) @type
"#,
    },
    DeclarationQuery {
        kind: DeclarationKind::VariableDeclaration,
        pattern: r#"
(const_item) @const
(static_item) @static
"#,
    },
];

const NAME_FALLBACKS: &[NameFallback] = &[NameFallback {
    node_kind: "impl_item",
    strategy: NameStrategy::SecondToken,
}];

/// Outer attributes (`#[derive(..)]`) sit between doc comments and their
/// item, so they join the leading comment block.
const COMMENT_KINDS: &[&str] = &["line_comment", "block_comment", "attribute_item"];

fn grammar() -> Language {
    tree_sitter_rust::LANGUAGE.into()
}

pub(super) static SPEC: LanguageSpec = LanguageSpec {
    name: "rust",
    extensions: &["rs"],
    grammar,
    comment_kinds: COMMENT_KINDS,
    body_field: "body",
    declarations: DECLARATIONS,
    name_fallbacks: NAME_FALLBACKS,
    wrappers: &[],
};
