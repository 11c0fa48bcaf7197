//! JavaScript language rules.

use tree_sitter::Language;

use super::{
    DeclarationKind, DeclarationQuery, LanguageSpec, NameFallback, NameStrategy, Wrapper,
};

const DECLARATIONS: &[DeclarationQuery] = &[
    DeclarationQuery {
        kind: DeclarationKind::Function,
        pattern: r#"
(function_declaration) @function
(generator_function_declaration) @function
"#,
    },
    DeclarationQuery {
        kind: DeclarationKind::TypeDefinition,
        pattern: "(class_declaration) @class",
    },
    DeclarationQuery {
        kind: DeclarationKind::VariableDeclaration,
        pattern: r#"
(lexical_declaration) @let
(variable_declaration) @var
"#,
    },
];

const NAME_FALLBACKS: &[NameFallback] = &[
    NameFallback {
        node_kind: "lexical_declaration",
        strategy: NameStrategy::SecondToken,
    },
    NameFallback {
        node_kind: "variable_declaration",
        strategy: NameStrategy::SecondToken,
    },
];

/// `export function`, `export class`, `export const` and friends.
const WRAPPERS: &[Wrapper] = &[Wrapper {
    node_kind: "export_statement",
    field: "declaration",
}];

fn grammar() -> Language {
    tree_sitter_javascript::LANGUAGE.into()
}

pub(super) static SPEC: LanguageSpec = LanguageSpec {
    name: "javascript",
    extensions: &["js", "mjs", "cjs", "jsx"],
    grammar,
    comment_kinds: &["comment"],
    body_field: "body",
    declarations: DECLARATIONS,
    name_fallbacks: NAME_FALLBACKS,
    wrappers: WRAPPERS,
};
