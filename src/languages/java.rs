//! Java language rules.
//!
//! Methods and fields are always nested inside a type, so only type
//! declarations reach the top level.

use tree_sitter::Language;

use super::{DeclarationKind, DeclarationQuery, LanguageSpec, NameFallback};

const DECLARATIONS: &[DeclarationQuery] = &[DeclarationQuery {
    kind: DeclarationKind::TypeDefinition,
    pattern: r#"
(class_declaration) @class
(interface_declaration) @interface
(enum_declaration) @enum
"#,
}];

const NAME_FALLBACKS: &[NameFallback] = &[];

fn grammar() -> Language {
    tree_sitter_java::LANGUAGE.into()
}

pub(super) static SPEC: LanguageSpec = LanguageSpec {
    name: "java",
    extensions: &["java"],
    grammar,
    comment_kinds: &["line_comment", "block_comment"],
    body_field: "body",
    declarations: DECLARATIONS,
    name_fallbacks: NAME_FALLBACKS,
    wrappers: &[],
};
