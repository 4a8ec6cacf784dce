//! Schema emission.
//!
//! Every node renders to a self-contained fragment at indentation level
//! zero, ending in `},`. Composite nodes render their children first and
//! splice them in re-indented, always in sorted key order.

mod attribute;
mod block;
mod common;
mod element;

use indexmap::IndexMap;
use tfgen_codegen::builder::CodeBuilder;
use tfgen_ir::{Attributes, Blocks, Schema};

pub use common::go_quote;
pub use element::element_type_expr;

use self::common::push_docs;

/// A node that renders as an entry of its parent's `Attributes` or
/// `Blocks` map.
pub trait Emit {
    /// Render this node under `key`.
    fn emit(&self, key: &str) -> String;
}

/// Entries of a child map ordered by key.
pub fn sorted_entries<V>(map: &IndexMap<String, V>) -> Vec<(&String, &V)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

/// Render `Attributes: map[string]schema.Attribute{...},`. An empty map
/// renders on one line.
pub(crate) fn push_attributes(b: &mut CodeBuilder, attributes: &Attributes) {
    if attributes.is_empty() {
        b.push_line("Attributes: map[string]schema.Attribute{},");
        return;
    }

    b.push_line("Attributes: map[string]schema.Attribute{").push_indent();
    for (key, attribute) in sorted_entries(attributes) {
        b.push_text(&attribute.emit(key));
    }
    b.push_dedent().push_line("},");
}

/// Render `Blocks: map[string]schema.Block{...},`, or nothing when there
/// are no blocks.
pub(crate) fn push_blocks(b: &mut CodeBuilder, blocks: &Blocks) {
    if blocks.is_empty() {
        return;
    }

    b.push_line("Blocks: map[string]schema.Block{").push_indent();
    for (key, block) in sorted_entries(blocks) {
        b.push_text(&block.emit(key));
    }
    b.push_dedent().push_line("},");
}

/// Render the `schema.Schema{...}` literal for one root.
#[tracing::instrument(level = "debug", skip_all, fields(name = %schema.name, target = %schema.target))]
pub fn emit_schema(schema: &Schema) -> String {
    let mut b = CodeBuilder::go();
    b.push_line("schema.Schema{").push_indent();
    push_attributes(&mut b, &schema.attributes);
    push_blocks(&mut b, &schema.blocks);
    push_docs(&mut b, &schema.docs);
    b.push_dedent().push_line("}");
    b.build()
}
