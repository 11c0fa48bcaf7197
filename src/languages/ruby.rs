//! Ruby language rules.
//!
//! Ruby blocks close with `end`, which follows the body and so stays in
//! signatures (`def greet(name) end`).

use tree_sitter::Language;

use super::{DeclarationKind, DeclarationQuery, LanguageSpec, NameFallback, NameStrategy};

const DECLARATIONS: &[DeclarationQuery] = &[
    DeclarationQuery {
        kind: DeclarationKind::Method,
        pattern: r#"
(method) @method
(singleton_method) @method
"#,
    },
    DeclarationQuery {
        kind: DeclarationKind::TypeDefinition,
        pattern: r#"
(class) @class
(module) @module
"#,
    },
    DeclarationQuery {
        kind: DeclarationKind::VariableDeclaration,
        pattern: "(assignment) @assignment",
    },
];

/// `LIMIT = 3` starts with its target.
const NAME_FALLBACKS: &[NameFallback] = &[NameFallback {
    node_kind: "assignment",
    strategy: NameStrategy::FirstToken,
}];

fn grammar() -> Language {
    tree_sitter_ruby::LANGUAGE.into()
}

pub(super) static SPEC: LanguageSpec = LanguageSpec {
    name: "ruby",
    extensions: &["rb"],
    grammar,
    comment_kinds: &["comment"],
    body_field: "body",
    declarations: DECLARATIONS,
    name_fallbacks: NAME_FALLBACKS,
    wrappers: &[],
};
