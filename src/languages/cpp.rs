//! C++ language rules.

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
(class_specifier) @class
(struct_specifier) @struct
(enum_specifier) @enum
(type_definition) @typedef
(alias_declaration) @alias
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
    tree_sitter_cpp::LANGUAGE.into()
}

pub(super) static SPEC: LanguageSpec = LanguageSpec {
    name: "cpp",
    extensions: &["cpp", "cxx", "cc", "hpp", "hxx", "hh"],
    grammar,
    comment_kinds: &["comment"],
    body_field: "body",
    declarations: DECLARATIONS,
    name_fallbacks: NAME_FALLBACKS,
    wrappers: &[],
};
