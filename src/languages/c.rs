//! C language rules.
//!
//! C functions name themselves through nested declarators, so the catalog
//! keeps the whole declarator text rather than a `name` child.

use tree_sitter::Language;

use super::{DeclarationKind, DeclarationQuery, LanguageSpec, NameFallback, NameStrategy};

const DECLARATIONS: &[DeclarationQuery] = &[
    DeclarationQuery {
        kind: DeclarationKind::Function,
        pattern: "(function_definition) @function",
    },
    DeclarationQuery {
        kind: DeclarationKind::TypeDefinition,
        pattern: r#"
(type_definition) @typedef
(struct_specifier) @struct
(enum_specifier) @enum
(union_specifier) @union
"#,
    },
    DeclarationQuery {
        kind: DeclarationKind::VariableDeclaration,
        pattern: "(declaration) @declaration",
    },
];

const NAME_FALLBACKS: &[NameFallback] = &[
    NameFallback {
        node_kind: "declaration",
        strategy: NameStrategy::SecondToken,
    },
    NameFallback {
        node_kind: "type_definition",
        strategy: NameStrategy::SecondToken,
    },
];

fn grammar() -> Language {
    tree_sitter_c::LANGUAGE.into()
}

pub(super) static SPEC: LanguageSpec = LanguageSpec {
    name: "c",
    extensions: &["c", "h"],
    grammar,
    comment_kinds: &["comment"],
    body_field: "body",
    declarations: DECLARATIONS,
    name_fallbacks: NAME_FALLBACKS,
    wrappers: &[],
};
