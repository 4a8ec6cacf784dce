//! Generated Go files.

mod schema_go;

pub use schema_go::SchemaGo;
