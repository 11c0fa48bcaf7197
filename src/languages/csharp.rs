//! C# language rules.
//!
//! Members live inside types, and types declared in a block-scoped
//! `namespace { ... }` are nested, so only file-level types are cataloged.

use tree_sitter::Language;

use super::{DeclarationKind, DeclarationQuery, LanguageSpec, NameFallback};

const DECLARATIONS: &[DeclarationQuery] = &[DeclarationQuery {
    kind: DeclarationKind::TypeDefinition,
    pattern: r#"
(class_declaration) @class
(interface_declaration) @interface
(struct_declaration) @struct
(enum_declaration) @enum
(record_declaration) @record
"#,
}];

const NAME_FALLBACKS: &[NameFallback] = &[];

fn grammar() -> Language {
    tree_sitter_c_sharp::LANGUAGE.into()
}

pub(super) static SPEC: LanguageSpec = LanguageSpec {
    name: "csharp",
    extensions: &["cs"],
    grammar,
    comment_kinds: &["comment"],
    body_field: "body",
    declarations: DECLARATIONS,
    name_fallbacks: NAME_FALLBACKS,
    wrappers: &[],
};
