use tfgen_codegen::builder::CodeBuilder;
use tfgen_ir::{Block, NestedBlockObject};

use super::{
    Emit,
    common::{push_custom_type, push_docs, push_plan_modifiers, push_validators},
    go_quote, push_attributes, push_blocks,
};
use crate::templates::{NESTED_OBJECT, registry};

impl Emit for Block {
    #[tracing::instrument(level = "trace", skip_all, fields(key = %key, kind = %self.kind()))]
    fn emit(&self, key: &str) -> String {
        let template = registry().block(self.kind());
        let common = self.common();

        let mut b = CodeBuilder::go();
        b.push_line(&format!("{}: schema.{}{{", go_quote(key), template.schema_type))
            .push_indent();

        match self {
            Block::ListNested(n) | Block::SetNested(n) => push_nested_object(&mut b, &n.nested_object),
            Block::SingleNested(s) => {
                push_attributes(&mut b, &s.attributes);
                push_blocks(&mut b, &s.blocks);
            }
        }

        push_docs(&mut b, &common.docs);
        push_custom_type(&mut b, common.custom_type.as_ref());
        push_validators(&mut b, template, &common.validators);
        push_plan_modifiers(&mut b, template, &common.plan_modifiers);

        b.push_dedent().push_line("},");
        b.build()
    }
}

fn push_nested_object(b: &mut CodeBuilder, nested_object: &NestedBlockObject) {
    b.push_line("NestedObject: schema.NestedBlockObject{").push_indent();
    push_attributes(b, &nested_object.attributes);
    push_blocks(b, &nested_object.blocks);
    push_custom_type(b, nested_object.custom_type.as_ref());
    push_validators(b, &NESTED_OBJECT, &nested_object.validators);
    push_plan_modifiers(b, &NESTED_OBJECT, &nested_object.plan_modifiers);
    b.push_dedent().push_line("},");
}
