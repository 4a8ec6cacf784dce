//! Built-in lints for specification validation.

mod attribute_naming;
mod duplicate_name;
mod empty_description;
mod resource_only;

pub use attribute_naming::AttributeNamingLint;
pub use duplicate_name::DuplicateNameLint;
pub use empty_description::EmptyDescriptionLint;
pub use resource_only::ResourceOnlyLint;
use tfgen_spec::{Attribute, Block, RootKind, Specification};

/// One set of siblings: the top of a root, the inside of a block, or the
/// inside of a nested attribute.
pub(crate) struct Level<'a> {
    pub kind: RootKind,
    /// Dotted path of the owner, e.g. `resource.server.disk`.
    pub path: String,
    pub attributes: &'a [Attribute],
    pub blocks: &'a [Block],
}

impl Level<'_> {
    pub fn child_path(&self, name: &str) -> String {
        format!("{}.{}", self.path, name)
    }
}

/// Call `visit` for every level of every root that has a schema.
pub(crate) fn visit_levels<'a>(specification: &'a Specification, visit: &mut impl FnMut(&Level<'a>)) {
    for root in specification.roots() {
        let Some(schema) = root.schema else {
            continue;
        };
        walk(
            Level {
                kind: root.kind,
                path: format!("{}.{}", root.kind, root.name),
                attributes: schema.attributes(),
                blocks: schema.blocks(),
            },
            visit,
        );
    }
}

fn walk<'a>(level: Level<'a>, visit: &mut impl FnMut(&Level<'a>)) {
    visit(&level);

    for attribute in level.attributes {
        let nested = attribute.nested_attributes();
        if !nested.is_empty() {
            walk(
                Level {
                    kind: level.kind,
                    path: level.child_path(&attribute.name),
                    attributes: nested,
                    blocks: &[],
                },
                visit,
            );
        }
    }

    for block in level.blocks {
        walk(
            Level {
                kind: level.kind,
                path: level.child_path(&block.name),
                attributes: block.child_attributes(),
                blocks: block.child_blocks(),
            },
            visit,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_levels_paths() {
        let specification: Specification = r#"{
            "resources": [
                {
                    "name": "server",
                    "schema": {
                        "attributes": [
                            {
                                "name": "labels",
                                "single_nested": {
                                    "computed_optional_required": "optional",
                                    "attributes": [
                                        { "name": "k", "string": { "computed_optional_required": "required" } }
                                    ]
                                }
                            }
                        ],
                        "blocks": [
                            { "name": "disk", "single_nested": { "blocks": [ { "name": "backup", "single_nested": {} } ] } }
                        ]
                    }
                }
            ],
            "datasources": [ { "name": "image", "schema": {} }, { "name": "none" } ]
        }"#
        .parse()
        .unwrap();

        let mut paths = Vec::new();
        visit_levels(&specification, &mut |level| paths.push(level.path.clone()));

        assert_eq!(
            paths,
            [
                "resource.server",
                "resource.server.labels",
                "resource.server.disk",
                "resource.server.disk.backup",
                "datasource.image",
            ]
        );
    }
}
