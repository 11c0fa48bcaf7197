//! Go language rules.

use tree_sitter::Language;

use super::{DeclarationKind, DeclarationQuery, LanguageSpec, NameFallback, NameStrategy};

/// Go declaration queries.
///
/// `const_declaration` is grouped with `var_declaration` since both bind
/// package-level names.
const DECLARATIONS: &[DeclarationQuery] = &[
    DeclarationQuery {
        kind: DeclarationKind::Method,
        pattern: "(method_declaration) @method",
    },
    DeclarationQuery {
        kind: DeclarationKind::Function,
        pattern: "(function_declaration) @function",
    },
    DeclarationQuery {
        kind: DeclarationKind::TypeDefinition,
        pattern: "(type_declaration) @type",
    },
    DeclarationQuery {
        kind: DeclarationKind::VariableDeclaration,
        pattern: r#"
(var_declaration) @var
(const_declaration) @const
"#,
    },
];

/// `type`, `var` and `const` declarations carry their names inside specs.
const NAME_FALLBACKS: &[NameFallback] = &[
    NameFallback {
        node_kind: "type_declaration",
        strategy: NameStrategy::SecondToken,
    },
    NameFallback {
        node_kind: "var_declaration",
        strategy: NameStrategy::SecondToken,
    },
    NameFallback {
        node_kind: "const_declaration",
        strategy: NameStrategy::SecondToken,
    },
];

fn grammar() -> Language {
    tree_sitter_go::LANGUAGE.into()
}

pub(super) static SPEC: LanguageSpec = LanguageSpec {
    name: "go",
    extensions: &["go"],
    grammar,
    comment_kinds: &["comment"],
    body_field: "body",
    declarations: DECLARATIONS,
    name_fallbacks: NAME_FALLBACKS,
    wrappers: &[],
};
