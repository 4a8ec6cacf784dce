use std::path::Path;

use eyre::Result;
use tfgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
use tfgen_core::{GeneratedFile, WriteResult};
use tfgen_ir::Schema;

use crate::files::SchemaGo;

/// Go code generator producing one schema file per resource or data source.
pub struct Generator<'a> {
    schemas: &'a [Schema],
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "go"
    }

    fn file_extension(&self) -> &'static str {
        "go"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .map(|file| PreviewFile {
                path: file.path(Path::new("")).display().to_string(),
                content: file.render(),
            })
            .collect()
    }

    #[tracing::instrument(level = "debug", skip_all, fields(output = %output_dir.display()))]
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for file in self.files() {
            let relative = file.path(Path::new("")).display().to_string();
            match file.write(output_dir)? {
                WriteResult::Written => {
                    tracing::debug!(path = %relative, "wrote file");
                    result.written.push(relative);
                }
                WriteResult::Unchanged => {
                    tracing::trace!(path = %relative, "file unchanged");
                    result.unchanged.push(relative);
                }
            }
        }

        Ok(result)
    }
}

impl<'a> Generator<'a> {
    pub fn new(schemas: &'a [Schema]) -> Self {
        Self { schemas }
    }

    fn files(&self) -> impl Iterator<Item = SchemaGo<'a>> {
        self.schemas.iter().map(SchemaGo::new)
    }
}

#[cfg(test)]
mod tests {
    use tfgen_ir::Target;

    use super::*;

    fn schemas() -> Vec<Schema> {
        vec![
            Schema::new("server", Target::Resource),
            Schema::new("image", Target::DataSource),
        ]
    }

    #[test]
    fn test_preview_paths() {
        let schemas = schemas();
        let generator = Generator::new(&schemas);
        let paths: Vec<String> = generator.preview().into_iter().map(|f| f.path).collect();

        assert_eq!(
            paths,
            [
                "resource_server/server_resource_gen.go",
                "datasource_image/image_datasource_gen.go",
            ]
        );
        assert_eq!(generator.language(), "go");
    }

    #[test]
    fn test_generate_reports_unchanged_files() {
        let dir = tempfile::tempdir().unwrap();
        let schemas = schemas();
        let generator = Generator::new(&schemas);

        let first = generator.generate(dir.path()).unwrap();
        assert_eq!(first.written.len(), 2);
        assert!(first.unchanged.is_empty());
        assert!(dir.path().join("resource_server/server_resource_gen.go").exists());

        let second = generator.generate(dir.path()).unwrap();
        assert!(second.written.is_empty());
        assert_eq!(second.unchanged.len(), 2);
    }
}
