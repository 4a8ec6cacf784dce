use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{Attribute, Block, Error, Format, Result, error::SourceContext};

/// Root of a provider code specification document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Specification {
    pub version: Option<String>,
    #[serde(default)]
    pub provider: Provider,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub datasources: Vec<DataSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Provider {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Resource {
    pub name: String,
    pub schema: Option<Schema>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DataSource {
    pub name: String,
    pub schema: Option<Schema>,
}

/// The attributes and blocks of one resource or data source.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Schema {
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub attributes: Option<Vec<Attribute>>,
    pub blocks: Option<Vec<Block>>,
}

impl Schema {
    pub fn attributes(&self) -> &[Attribute] {
        self.attributes.as_deref().unwrap_or_default()
    }

    pub fn blocks(&self) -> &[Block] {
        self.blocks.as_deref().unwrap_or_default()
    }
}

/// Which collection a root was declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootKind {
    Resource,
    DataSource,
}

impl RootKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resource => "resource",
            Self::DataSource => "datasource",
        }
    }
}

impl std::fmt::Display for RootKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed view over one resource or data source.
#[derive(Debug, Clone, Copy)]
pub struct Root<'a> {
    pub kind: RootKind,
    pub name: &'a str,
    pub schema: Option<&'a Schema>,
}

impl Specification {
    /// Parse a specification file, choosing the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(
            &content,
            &path.display().to_string(),
            Format::from_path(path),
        )
    }

    /// Parse a specification from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str, format: Format) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        match format {
            Format::Json => serde_json::from_str(content).map_err(|e| ctx.json_error(e)),
            Format::Toml => toml::from_str(content).map_err(|e| ctx.toml_error(e)),
        }
    }

    /// Every resource followed by every data source, in declaration order.
    pub fn roots(&self) -> impl Iterator<Item = Root<'_>> {
        let resources = self.resources.iter().map(|r| Root {
            kind: RootKind::Resource,
            name: &r.name,
            schema: r.schema.as_ref(),
        });
        let datasources = self.datasources.iter().map(|d| Root {
            kind: RootKind::DataSource,
            name: &d.name,
            schema: d.schema.as_ref(),
        });
        resources.chain(datasources)
    }
}

impl FromStr for Specification {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "spec.json", Format::Json)
    }
}
