//! Lines shared by attribute, block and nested object emission.

use tfgen_codegen::builder::CodeBuilder;
use tfgen_ir::{
    AttributeShape, CustomType, DefaultValue, Docs, PlanModifier, StaticValue, Validator,
};

use crate::templates::KindTemplate;

/// Quote a string as a Go interpreted string literal.
pub fn go_quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_ascii_control() => quoted.push_str(&format!("\\x{:02x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Write `label: expr,` where `expr` may span several lines. Lines after
/// the first keep their own relative indentation.
pub(crate) fn push_expr(b: &mut CodeBuilder, label: &str, expr: &str) {
    let mut lines = expr.lines();
    let first = lines.next().unwrap_or_default();
    let rest: Vec<&str> = lines.collect();

    match rest.split_last() {
        None => {
            b.push_line(&format!("{}: {},", label, first));
        }
        Some((last, middle)) => {
            b.push_line(&format!("{}: {}", label, first));
            for line in middle {
                b.push_line(line);
            }
            b.push_line(&format!("{},", last));
        }
    }
}

/// Write one slice element, which may span several lines.
fn push_item(b: &mut CodeBuilder, expr: &str) {
    let lines: Vec<&str> = expr.lines().collect();
    if let Some((last, init)) = lines.split_last() {
        for line in init {
            b.push_line(line);
        }
        b.push_line(&format!("{},", last));
    }
}

pub(crate) fn push_shape(b: &mut CodeBuilder, shape: &AttributeShape) {
    let flags = [
        ("Required", shape.is_required()),
        ("Optional", shape.is_optional()),
        ("Computed", shape.is_computed()),
        ("Sensitive", shape.sensitive),
    ];
    for (name, _) in flags.iter().filter(|(_, set)| *set) {
        b.push_line(&format!("{}: true,", name));
    }
}

/// The markdown description is always the description.
pub(crate) fn push_docs(b: &mut CodeBuilder, docs: &Docs) {
    if let Some(description) = &docs.description {
        let quoted = go_quote(description);
        b.push_line(&format!("Description: {},", quoted));
        b.push_line(&format!("MarkdownDescription: {},", quoted));
    }
    if let Some(message) = &docs.deprecation_message {
        b.push_line(&format!("DeprecationMessage: {},", go_quote(message)));
    }
}

pub(crate) fn push_custom_type(b: &mut CodeBuilder, custom_type: Option<&CustomType>) {
    if let Some(custom) = custom_type {
        push_expr(b, "CustomType", &custom.type_name);
    }
}

/// Write a slice of custom expressions, or nothing when there are none.
fn push_slice<'a>(
    b: &mut CodeBuilder,
    label: &str,
    element_type: &str,
    expressions: impl Iterator<Item = &'a str>,
) {
    let expressions: Vec<&str> = expressions.collect();
    if expressions.is_empty() {
        return;
    }

    b.push_line(&format!("{}: []{}{{", label, element_type)).push_indent();
    for expr in expressions {
        push_item(b, expr);
    }
    b.push_dedent().push_line("},");
}

pub(crate) fn push_validators(b: &mut CodeBuilder, template: &KindTemplate, validators: &[Validator]) {
    push_slice(
        b,
        "Validators",
        &template.validator_type(),
        validators
            .iter()
            .filter_map(Validator::custom)
            .map(|c| c.schema_definition.as_str()),
    );
}

pub(crate) fn push_plan_modifiers(
    b: &mut CodeBuilder,
    template: &KindTemplate,
    plan_modifiers: &[PlanModifier],
) {
    push_slice(
        b,
        "PlanModifiers",
        &template.plan_modifier_type(),
        plan_modifiers
            .iter()
            .filter_map(PlanModifier::custom)
            .map(|c| c.schema_definition.as_str()),
    );
}

fn static_literal(value: &StaticValue) -> String {
    match value {
        StaticValue::Bool(v) => v.to_string(),
        StaticValue::Float64(v) => v.to_string(),
        StaticValue::Int64(v) => v.to_string(),
        StaticValue::String(v) => go_quote(v),
    }
}

pub(crate) fn push_default(
    b: &mut CodeBuilder,
    template: &KindTemplate,
    default: Option<&DefaultValue>,
) {
    match default {
        Some(DefaultValue::Static(value)) => {
            if let Some(package) = template.default_package {
                b.push_line(&format!(
                    "Default: {}.{}({}),",
                    package.name,
                    package.constructor,
                    static_literal(value)
                ));
            }
        }
        Some(DefaultValue::Custom(definition)) => {
            push_expr(b, "Default", &definition.schema_definition);
        }
        None => {}
    }
}
