//! PHP language rules.
//!
//! Files are parsed with the full PHP grammar, so source must open with a
//! `<?php` tag; the tag is a root child of its own.

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
(class_declaration) @class
(interface_declaration) @interface
(trait_declaration) @trait
"#,
    },
    DeclarationQuery {
        kind: DeclarationKind::VariableDeclaration,
        pattern: "(const_declaration) @const",
    },
];

const NAME_FALLBACKS: &[NameFallback] = &[NameFallback {
    node_kind: "const_declaration",
    strategy: NameStrategy::SecondToken,
}];

fn grammar() -> Language {
    tree_sitter_php::LANGUAGE_PHP.into()
}

pub(super) static SPEC: LanguageSpec = LanguageSpec {
    name: "php",
    extensions: &["php"],
    grammar,
    comment_kinds: &["comment"],
    body_field: "body",
    declarations: DECLARATIONS,
    name_fallbacks: NAME_FALLBACKS,
    wrappers: &[],
};
