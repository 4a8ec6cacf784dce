//! Snapshot tests for Go schema generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use tfgen_codegen::convert::convert_specification;
use tfgen_codegen_go::{Generator, LanguageCodegen};
use tfgen_spec::Specification;

/// Generate files from a specification document, sorted by path.
fn generate_files(document: &str) -> Vec<(String, String)> {
    let specification: Specification = document.parse().expect("Failed to parse specification");
    let outcome = convert_specification(&specification);
    assert!(outcome.failures.is_empty(), "{:?}", outcome.failures);

    let generator = Generator::new(&outcome.schemas);
    let mut files: Vec<(String, String)> = generator
        .preview()
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect();
    files.sort_by(|a, b| a.0.cmp(&b.0));
    files
}

fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

#[test]
fn test_resource_compute_server() {
    let files = generate_files(
        r#"{
            "provider": { "name": "example" },
            "resources": [
                {
                    "name": "compute_server",
                    "schema": {
                        "description": "A compute server",
                        "attributes": [
                            {
                                "name": "name",
                                "string": {
                                    "computed_optional_required": "required",
                                    "description": "Server name",
                                    "validators": [
                                        {
                                            "custom": {
                                                "imports": [
                                                    { "path": "github.com/hashicorp/terraform-plugin-framework-validators/stringvalidator" }
                                                ],
                                                "schema_definition": "stringvalidator.LengthAtLeast(1)"
                                            }
                                        }
                                    ]
                                }
                            },
                            {
                                "name": "id",
                                "string": {
                                    "computed_optional_required": "computed",
                                    "plan_modifiers": [
                                        {
                                            "custom": {
                                                "imports": [
                                                    { "path": "github.com/hashicorp/terraform-plugin-framework/resource/schema/stringplanmodifier" }
                                                ],
                                                "schema_definition": "stringplanmodifier.UseStateForUnknown()"
                                            }
                                        }
                                    ]
                                }
                            },
                            {
                                "name": "enabled",
                                "bool": {
                                    "computed_optional_required": "computed_optional",
                                    "default": { "static": true }
                                }
                            },
                            {
                                "name": "tags",
                                "map": {
                                    "computed_optional_required": "optional",
                                    "element_type": { "string": {} }
                                }
                            }
                        ],
                        "blocks": [
                            {
                                "name": "disk",
                                "list_nested": {
                                    "description": "Attached disks",
                                    "nested_object": {
                                        "attributes": [
                                            { "name": "size", "int64": { "computed_optional_required": "required" } }
                                        ]
                                    }
                                }
                            }
                        ]
                    }
                }
            ]
        }"#,
    );

    assert_eq!(files.len(), 1);
    let content = get_file(
        &files,
        "resource_compute_server/compute_server_resource_gen.go",
    )
    .expect("resource file not found");
    insta::assert_snapshot!("resource_compute_server", content);
}

#[test]
fn test_datasource_image() {
    let files = generate_files(
        r#"{
            "provider": { "name": "example" },
            "datasources": [
                {
                    "name": "image",
                    "schema": {
                        "attributes": [
                            { "name": "id", "string": { "computed_optional_required": "required" } },
                            {
                                "name": "metadata",
                                "object": {
                                    "computed_optional_required": "computed",
                                    "attribute_types": [
                                        { "name": "size", "int64": {} },
                                        { "name": "format", "string": {} }
                                    ]
                                }
                            },
                            {
                                "name": "replicas",
                                "list_nested": {
                                    "computed_optional_required": "computed",
                                    "nested_object": {
                                        "attributes": [
                                            {
                                                "name": "region",
                                                "string": {
                                                    "computed_optional_required": "computed",
                                                    "custom_type": {
                                                        "import": { "path": "example.com/provider/fwtypes", "alias": "fw" },
                                                        "type": "fw.RegionType{}",
                                                        "value_type": "fw.Region"
                                                    }
                                                }
                                            }
                                        ]
                                    }
                                }
                            },
                            {
                                "name": "labels",
                                "set": {
                                    "computed_optional_required": "computed",
                                    "element_type": {
                                        "object": { "attribute_types": [ { "name": "key", "string": {} } ] }
                                    }
                                }
                            }
                        ]
                    }
                }
            ]
        }"#,
    );

    let content = get_file(&files, "datasource_image/image_datasource_gen.go")
        .expect("datasource file not found");
    insta::assert_snapshot!("datasource_image", content);
}
