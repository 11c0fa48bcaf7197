//! Scala language rules.

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
(class_definition) @class
(object_definition) @object
(trait_definition) @trait
(type_definition) @type
"#,
    },
    DeclarationQuery {
        kind: DeclarationKind::VariableDeclaration,
        pattern: r#"
(val_definition) @val
(var_definition) @var
"#,
    },
];

/// `val` and `var` bind a pattern rather than a name.
const NAME_FALLBACKS: &[NameFallback] = &[
    NameFallback {
        node_kind: "val_definition",
        strategy: NameStrategy::SecondToken,
    },
    NameFallback {
        node_kind: "var_definition",
        strategy: NameStrategy::SecondToken,
    },
];

fn grammar() -> Language {
    tree_sitter_scala::LANGUAGE.into()
}

pub(super) static SPEC: LanguageSpec = LanguageSpec {
    name: "scala",
    extensions: &["scala"],
    grammar,
    comment_kinds: &["comment", "block_comment"],
    body_field: "body",
    declarations: DECLARATIONS,
    name_fallbacks: NAME_FALLBACKS,
    wrappers: &[],
};
