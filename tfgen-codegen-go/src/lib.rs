//! Go code generator for terraform-plugin-framework provider schemas.
//!
//! Each IR root becomes one Go file holding the schema function, the model
//! structs and the import block those need. Three operations read the IR:
//!
//! - [`Emit`] renders a node as a schema field
//! - [`DeriveField`] maps a node to a model struct field
//! - [`CollectImports`] gathers the module references a node needs

mod generator;
mod naming;

pub mod emit;
pub mod files;
pub mod imports;
pub mod model;
pub mod packages;
pub mod templates;

pub use emit::{Emit, go_quote};
pub use generator::Generator;
pub use imports::{CollectImports, schema_imports};
pub use model::{DeriveField, ModelField, ModelStruct, model_structs};
pub use naming::GO_NAMING;
pub use tfgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
