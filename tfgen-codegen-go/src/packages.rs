//! Fixed Go module references used by generated code.

/// Built-in value types (`types.String`, `types.ListType`, ...).
pub const TYPES: &str = "github.com/hashicorp/terraform-plugin-framework/types";

/// Attribute type support, needed for object member type maps.
pub const ATTR: &str = "github.com/hashicorp/terraform-plugin-framework/attr";

/// Validator element types (`validator.String`, ...).
pub const VALIDATOR: &str = "github.com/hashicorp/terraform-plugin-framework/schema/validator";

/// Plan modifier element types (`planmodifier.String`, ...).
pub const PLANMODIFIER: &str =
    "github.com/hashicorp/terraform-plugin-framework/resource/schema/planmodifier";

pub const RESOURCE_SCHEMA: &str = "github.com/hashicorp/terraform-plugin-framework/resource/schema";

pub const DATASOURCE_SCHEMA: &str =
    "github.com/hashicorp/terraform-plugin-framework/datasource/schema";

pub const CONTEXT: &str = "context";

const DEFAULTS: &str = "github.com/hashicorp/terraform-plugin-framework/resource/schema";

/// A package providing static default constructors, e.g. `stringdefault`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultPackage {
    /// Package name as used in code.
    pub name: &'static str,
    /// Constructor for a literal value, e.g. `StaticString`.
    pub constructor: &'static str,
}

impl DefaultPackage {
    pub const fn new(name: &'static str, constructor: &'static str) -> Self {
        Self { name, constructor }
    }

    /// Full module reference of the package.
    pub fn path(&self) -> String {
        format!("{}/{}", DEFAULTS, self.name)
    }
}
