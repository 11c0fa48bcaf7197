//! TypeScript and TSX language rules.
//!
//! Both dialects share declarations; only the grammar differs.

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
        pattern: r#"
(class_declaration) @class
(abstract_class_declaration) @class
(interface_declaration) @interface
(type_alias_declaration) @type
(enum_declaration) @enum
"#,
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
    tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
}

fn tsx_grammar() -> Language {
    tree_sitter_typescript::LANGUAGE_TSX.into()
}

pub(super) static SPEC: LanguageSpec = LanguageSpec {
    name: "typescript",
    extensions: &["ts", "mts", "cts"],
    grammar,
    comment_kinds: &["comment"],
    body_field: "body",
    declarations: DECLARATIONS,
    name_fallbacks: NAME_FALLBACKS,
    wrappers: WRAPPERS,
};

pub(super) static TSX_SPEC: LanguageSpec = LanguageSpec {
    name: "tsx",
    extensions: &["tsx"],
    grammar: tsx_grammar,
    comment_kinds: &["comment"],
    body_field: "body",
    declarations: DECLARATIONS,
    name_fallbacks: NAME_FALLBACKS,
    wrappers: WRAPPERS,
};
