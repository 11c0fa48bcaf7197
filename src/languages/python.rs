//! Python language rules.

use tree_sitter::Language;

use super::{
    DeclarationKind, DeclarationQuery, LanguageSpec, NameFallback, NameStrategy, Wrapper,
};

const DECLARATIONS: &[DeclarationQuery] = &[
    DeclarationQuery {
        kind: DeclarationKind::Function,
        pattern: "(function_definition) @function",
    },
    DeclarationQuery {
        kind: DeclarationKind::TypeDefinition,
        pattern: "(class_definition) @class",
    },
    DeclarationQuery {
        kind: DeclarationKind::VariableDeclaration,
        pattern: "(expression_statement (assignment)) @assignment",
    },
];

/// Module-level assignments (`NAME = value`) start with their target.
const NAME_FALLBACKS: &[NameFallback] = &[NameFallback {
    node_kind: "expression_statement",
    strategy: NameStrategy::FirstToken,
}];

/// `@decorator` lines wrap the function or class they apply to.
const WRAPPERS: &[Wrapper] = &[Wrapper {
    node_kind: "decorated_definition",
    field: "definition",
}];

fn grammar() -> Language {
    tree_sitter_python::LANGUAGE.into()
}

pub(super) static SPEC: LanguageSpec = LanguageSpec {
    name: "python",
    extensions: &["py"],
    grammar,
    comment_kinds: &["comment"],
    body_field: "body",
    declarations: DECLARATIONS,
    name_fallbacks: NAME_FALLBACKS,
    wrappers: WRAPPERS,
};
