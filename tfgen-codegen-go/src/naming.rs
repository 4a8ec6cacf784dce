//! Go-specific naming conventions.

use tfgen_codegen::language::NamingConvention;
use tfgen_core::to_pascal_case;

fn escape_go_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Go naming conventions.
pub const GO_NAMING: NamingConvention = NamingConvention {
    key_to_type: to_pascal_case,
    key_to_field: to_pascal_case,
    reserved_words: &[
        "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
        "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
        "return", "select", "struct", "switch", "type", "var",
    ],
    escape_reserved: escape_go_reserved,
};
