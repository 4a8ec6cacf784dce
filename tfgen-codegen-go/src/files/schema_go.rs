use std::path::{Path, PathBuf};

use tfgen_codegen::builder::CodeBuilder;
use tfgen_core::{GENERATED_HEADER, GeneratedFile, to_snake_case};
use tfgen_ir::{Import, Schema, Target};

use crate::{
    emit::emit_schema,
    imports::schema_imports,
    model::model_structs,
    naming::GO_NAMING,
    packages::{CONTEXT, DATASOURCE_SCHEMA, RESOURCE_SCHEMA},
};

/// `<target>_<name>/<name>_<target>_gen.go`: schema function, model structs
/// and their imports for one root.
pub struct SchemaGo<'a> {
    schema: &'a Schema,
}

impl<'a> SchemaGo<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Go package name, e.g. `resource_server`.
    pub fn package(&self) -> String {
        format!("{}_{}", self.schema.target, to_snake_case(&self.schema.name))
    }

    /// Name of the generated schema function.
    pub fn function_name(&self) -> String {
        let suffix = match self.schema.target {
            Target::Resource => "ResourceSchema",
            Target::DataSource => "DataSourceSchema",
        };
        format!("{}{}", GO_NAMING.type_name(&self.schema.name), suffix)
    }

    /// Every import of the file, in output order after `context`.
    pub fn imports(&self) -> Vec<Import> {
        let schema_package = match self.schema.target {
            Target::Resource => RESOURCE_SCHEMA,
            Target::DataSource => DATASOURCE_SCHEMA,
        };

        let imports = schema_imports(self.schema);
        let mut all = vec![Import::new(schema_package)];
        all.extend(imports.into_vec().into_iter().filter(|i| i.path != schema_package));
        all
    }
}

fn import_line(import: &Import) -> String {
    match &import.alias {
        Some(alias) => format!("{} \"{}\"", alias, import.path),
        None => format!("\"{}\"", import.path),
    }
}

impl GeneratedFile for SchemaGo<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        let name = to_snake_case(&self.schema.name);
        base.join(self.package())
            .join(format!("{}_{}_gen.go", name, self.schema.target))
    }

    fn render(&self) -> String {
        let mut b = CodeBuilder::go();
        b.push_line(GENERATED_HEADER)
            .push_blank()
            .push_line(&format!("package {}", self.package()))
            .push_blank();

        b.push_line("import (").push_indent();
        b.push_line(&format!("\"{}\"", CONTEXT)).push_blank();
        for import in self.imports() {
            b.push_line(&import_line(&import));
        }
        b.push_dedent().push_line(")").push_blank();

        b.push_line(&format!(
            "func {}(ctx context.Context) schema.Schema {{",
            self.function_name()
        ))
        .push_indent();
        let body = emit_schema(self.schema);
        let mut lines = body.lines();
        if let Some(first) = lines.next() {
            b.push_line(&format!("return {}", first));
        }
        for line in lines {
            b.push_line(line);
        }
        b.push_dedent().push_line("}");

        for model in model_structs(self.schema) {
            b.push_blank().push_text(&model.render());
        }

        b.build()
    }
}
