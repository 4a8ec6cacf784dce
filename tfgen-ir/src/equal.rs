//! Structural comparison of independently built IR trees.
//!
//! Comparison reports every difference found instead of stopping at the
//! first one, except that a kind mismatch stops descent into that node.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use indexmap::IndexMap;

use crate::{
    Attribute, AttributeShape, Block, CustomDefinition, CustomType, Docs, NestedAttributeObject,
    NestedBlockObject, PlanModifier, Schema, Target, Validator,
};

/// Which side of a comparison a node was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Why two nodes at the same path differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffReason {
    KindMismatch {
        left: &'static str,
        right: &'static str,
    },
    CustomTypeMismatch,
    ListLength {
        list: &'static str,
        left: usize,
        right: usize,
    },
    ListEntry {
        list: &'static str,
        index: usize,
    },
    FieldMismatch {
        field: &'static str,
    },
    /// A child exists only on `present`.
    MissingChild {
        present: Side,
    },
    /// A root exists only on `present`.
    MissingRoot {
        present: Side,
    },
}

impl fmt::Display for DiffReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KindMismatch { left, right } => write!(f, "kind differs ({left} vs {right})"),
            Self::CustomTypeMismatch => f.write_str("custom type differs"),
            Self::ListLength { list, left, right } => {
                write!(f, "{list} count differs ({left} vs {right})")
            }
            Self::ListEntry { list, index } => write!(f, "{list}[{index}] differs"),
            Self::FieldMismatch { field } => write!(f, "{field} differs"),
            Self::MissingChild { present } => write!(f, "only present on the {present} side"),
            Self::MissingRoot { present } => write!(f, "root only present on the {present} side"),
        }
    }
}

/// One difference between two trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
    /// Dotted path of child names from the compared root.
    pub path: String,
    pub reason: DiffReason,
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.reason)
        } else {
            write!(f, "{}: {}", self.path, self.reason)
        }
    }
}

/// Semantic equality over IR nodes.
pub trait StructuralEq {
    /// Append every difference between `self` and `other` to `out`,
    /// prefixing paths with `path`.
    fn diff_into(&self, other: &Self, path: &str, out: &mut Vec<Difference>);

    fn differences(&self, other: &Self) -> Vec<Difference> {
        let mut out = Vec::new();
        self.diff_into(other, "", &mut out);
        out
    }

    fn structurally_eq(&self, other: &Self) -> bool {
        self.differences(other).is_empty()
    }
}

impl StructuralEq for Attribute {
    fn diff_into(&self, other: &Self, path: &str, out: &mut Vec<Difference>) {
        if self.kind() != other.kind() {
            push(out, path, DiffReason::KindMismatch {
                left: self.kind().as_str(),
                right: other.kind().as_str(),
            });
            return;
        }

        diff_custom_type(self.custom_type(), other.custom_type(), path, out);
        diff_entries("validators", self.validators(), other.validators(), path, out);
        diff_entries(
            "plan_modifiers",
            self.plan_modifiers(),
            other.plan_modifiers(),
            path,
            out,
        );
        diff_shape(self.shape(), other.shape(), path, out);
        if self.default_value() != other.default_value() {
            push(out, path, DiffReason::FieldMismatch { field: "default" });
        }

        if self.element_type() != other.element_type() {
            push(out, path, DiffReason::FieldMismatch {
                field: "element_type",
            });
        }
        // Member types are keyed by name, so order does not matter here.
        if self.attribute_types() != other.attribute_types() {
            push(out, path, DiffReason::FieldMismatch {
                field: "attribute_types",
            });
        }

        match (self.nested_object(), other.nested_object()) {
            (Some(left), Some(right)) => left.diff_into(right, path, out),
            _ => {
                if let (Some(left), Some(right)) = (self.children(), other.children()) {
                    diff_children(left, right, path, out);
                }
            }
        }
    }
}

impl StructuralEq for NestedAttributeObject {
    fn diff_into(&self, other: &Self, path: &str, out: &mut Vec<Difference>) {
        let object_path = join(path, "nested_object");
        diff_custom_type(
            self.custom_type.as_ref(),
            other.custom_type.as_ref(),
            &object_path,
            out,
        );
        diff_entries(
            "validators",
            &self.validators,
            &other.validators,
            &object_path,
            out,
        );
        diff_entries(
            "plan_modifiers",
            &self.plan_modifiers,
            &other.plan_modifiers,
            &object_path,
            out,
        );
        diff_children(&self.attributes, &other.attributes, path, out);
    }
}

impl StructuralEq for Block {
    fn diff_into(&self, other: &Self, path: &str, out: &mut Vec<Difference>) {
        if self.kind() != other.kind() {
            push(out, path, DiffReason::KindMismatch {
                left: self.kind().as_str(),
                right: other.kind().as_str(),
            });
            return;
        }

        diff_custom_type(self.custom_type(), other.custom_type(), path, out);
        diff_entries("validators", self.validators(), other.validators(), path, out);
        diff_entries(
            "plan_modifiers",
            self.plan_modifiers(),
            other.plan_modifiers(),
            path,
            out,
        );
        diff_docs(self.docs(), other.docs(), path, out);

        match (self.nested_object(), other.nested_object()) {
            (Some(left), Some(right)) => left.diff_into(right, path, out),
            _ => {
                diff_children(self.attributes(), other.attributes(), path, out);
                diff_children(self.blocks(), other.blocks(), path, out);
            }
        }
    }
}

impl StructuralEq for NestedBlockObject {
    fn diff_into(&self, other: &Self, path: &str, out: &mut Vec<Difference>) {
        let object_path = join(path, "nested_object");
        diff_custom_type(
            self.custom_type.as_ref(),
            other.custom_type.as_ref(),
            &object_path,
            out,
        );
        diff_entries(
            "validators",
            &self.validators,
            &other.validators,
            &object_path,
            out,
        );
        diff_entries(
            "plan_modifiers",
            &self.plan_modifiers,
            &other.plan_modifiers,
            &object_path,
            out,
        );
        diff_children(&self.attributes, &other.attributes, path, out);
        diff_children(&self.blocks, &other.blocks, path, out);
    }
}

impl StructuralEq for Schema {
    fn diff_into(&self, other: &Self, path: &str, out: &mut Vec<Difference>) {
        if self.target != other.target {
            push(out, path, DiffReason::FieldMismatch { field: "target" });
        }
        if self.name != other.name {
            push(out, path, DiffReason::FieldMismatch { field: "name" });
        }
        diff_docs(&self.docs, &other.docs, path, out);
        diff_children(&self.attributes, &other.attributes, path, out);
        diff_children(&self.blocks, &other.blocks, path, out);
    }
}

/// Compare two forests of schemas, pairing roots by target and name.
///
/// Differences inside a root are prefixed with `<target>.<name>`.
pub fn diff_forests(left: &[Schema], right: &[Schema]) -> Vec<Difference> {
    let index = |schemas: &[Schema]| -> BTreeMap<(Target, String), usize> {
        schemas
            .iter()
            .enumerate()
            .map(|(i, s)| ((s.target, s.name.clone()), i))
            .collect()
    };
    let left_index = index(left);
    let right_index = index(right);

    let keys: BTreeSet<&(Target, String)> = left_index.keys().chain(right_index.keys()).collect();

    let mut out = Vec::new();
    for key in keys {
        let path = format!("{}.{}", key.0, key.1);
        match (left_index.get(key), right_index.get(key)) {
            (Some(&l), Some(&r)) => left[l].diff_into(&right[r], &path, &mut out),
            (Some(_), None) => push(&mut out, &path, DiffReason::MissingRoot {
                present: Side::Left,
            }),
            (None, Some(_)) => push(&mut out, &path, DiffReason::MissingRoot {
                present: Side::Right,
            }),
            (None, None) => {}
        }
    }
    out
}

fn push(out: &mut Vec<Difference>, path: &str, reason: DiffReason) {
    out.push(Difference {
        path: path.to_string(),
        reason,
    });
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn diff_children<T: StructuralEq>(
    left: &IndexMap<String, T>,
    right: &IndexMap<String, T>,
    path: &str,
    out: &mut Vec<Difference>,
) {
    let keys: BTreeSet<&String> = left.keys().chain(right.keys()).collect();
    for key in keys {
        let child_path = join(path, key);
        match (left.get(key), right.get(key)) {
            (Some(l), Some(r)) => l.diff_into(r, &child_path, out),
            (Some(_), None) => push(out, &child_path, DiffReason::MissingChild {
                present: Side::Left,
            }),
            (None, Some(_)) => push(out, &child_path, DiffReason::MissingChild {
                present: Side::Right,
            }),
            (None, None) => {}
        }
    }
}

fn diff_custom_type(
    left: Option<&CustomType>,
    right: Option<&CustomType>,
    path: &str,
    out: &mut Vec<Difference>,
) {
    if left != right {
        push(out, path, DiffReason::CustomTypeMismatch);
    }
}

fn diff_shape(left: &AttributeShape, right: &AttributeShape, path: &str, out: &mut Vec<Difference>) {
    if left.presence != right.presence {
        push(out, path, DiffReason::FieldMismatch { field: "presence" });
    }
    if left.sensitive != right.sensitive {
        push(out, path, DiffReason::FieldMismatch { field: "sensitive" });
    }
    diff_docs(&left.docs, &right.docs, path, out);
}

fn diff_docs(left: &Docs, right: &Docs, path: &str, out: &mut Vec<Difference>) {
    if left.description != right.description {
        push(out, path, DiffReason::FieldMismatch {
            field: "description",
        });
    }
    if left.deprecation_message != right.deprecation_message {
        push(out, path, DiffReason::FieldMismatch {
            field: "deprecation_message",
        });
    }
}

/// Validators and plan modifiers share one comparison.
trait CustomEntry {
    fn definition(&self) -> Option<&CustomDefinition>;
}

impl CustomEntry for Validator {
    fn definition(&self) -> Option<&CustomDefinition> {
        self.custom()
    }
}

impl CustomEntry for PlanModifier {
    fn definition(&self) -> Option<&CustomDefinition> {
        self.custom()
    }
}

/// Positional comparison: the same entries in a different order differ.
fn diff_entries<T: CustomEntry>(
    list: &'static str,
    left: &[T],
    right: &[T],
    path: &str,
    out: &mut Vec<Difference>,
) {
    if left.len() != right.len() {
        push(out, path, DiffReason::ListLength {
            list,
            left: left.len(),
            right: right.len(),
        });
        return;
    }

    for (index, (l, r)) in left.iter().zip(right).enumerate() {
        let same = match (l.definition(), r.definition()) {
            (None, None) => true,
            (Some(l), Some(r)) => {
                l.imports == r.imports && l.schema_definition == r.schema_definition
            }
            _ => false,
        };
        if !same {
            push(out, path, DiffReason::ListEntry { list, index });
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        AttributeCommon, Attributes, ElementType, Import, NestedAttribute, NestedBlock,
        ObjectAttribute, Presence, PrimitiveAttribute, SingleNestedBlock,
    };

    fn string(presence: Presence) -> Attribute {
        Attribute::String(PrimitiveAttribute {
            common: AttributeCommon::new(AttributeShape::new(presence)),
        })
    }

    fn with_validators(mut attribute: Attribute, expressions: &[&str]) -> Attribute {
        if let Attribute::String(body) = &mut attribute {
            body.common.validators = expressions
                .iter()
                .map(|e| {
                    Validator::Custom(CustomDefinition {
                        imports: vec![Import::new("example.com/validators")],
                        schema_definition: e.to_string(),
                    })
                })
                .collect();
        }
        attribute
    }

    fn list_nested(children: &[(&str, Attribute)]) -> Attribute {
        Attribute::ListNested(NestedAttribute {
            common: AttributeCommon::new(AttributeShape::new(Presence::Optional)),
            nested_object: NestedAttributeObject {
                attributes: children
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
                ..Default::default()
            },
        })
    }

    fn object(members: &[(&str, ElementType)]) -> Attribute {
        Attribute::Object(ObjectAttribute {
            common: AttributeCommon::new(AttributeShape::new(Presence::Optional)),
            attribute_types: members
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        })
    }

    #[test]
    fn test_identical_trees_are_equal() {
        let a = list_nested(&[("name", string(Presence::Required))]);
        let b = list_nested(&[("name", string(Presence::Required))]);
        assert!(a.structurally_eq(&b));
    }

    #[test]
    fn test_kind_mismatch_stops_descent() {
        let a = string(Presence::Required);
        let b = list_nested(&[("name", string(Presence::Optional))]);

        assert_eq!(
            a.differences(&b),
            vec![Difference {
                path: String::new(),
                reason: DiffReason::KindMismatch {
                    left: "string",
                    right: "list_nested",
                },
            }]
        );
    }

    #[test]
    fn test_custom_type_nil_vs_set() {
        let a = string(Presence::Optional);
        let mut b = string(Presence::Optional);
        if let Attribute::String(body) = &mut b {
            body.common.custom_type = Some(CustomType {
                import: None,
                type_name: "my.Type".into(),
                value_type: "my.Value".into(),
            });
        }

        assert!(a.structurally_eq(&a.clone()));
        assert_eq!(
            a.differences(&b)[0].reason,
            DiffReason::CustomTypeMismatch
        );
    }

    #[test]
    fn test_validators_compare_positionally() {
        let a = with_validators(string(Presence::Optional), &["v.A()", "v.B()"]);
        let reordered = with_validators(string(Presence::Optional), &["v.B()", "v.A()"]);
        let shorter = with_validators(string(Presence::Optional), &["v.A()"]);

        assert!(a.structurally_eq(&a.clone()));
        assert_eq!(
            a.differences(&reordered)
                .into_iter()
                .map(|d| d.reason)
                .collect::<Vec<_>>(),
            vec![
                DiffReason::ListEntry {
                    list: "validators",
                    index: 0
                },
                DiffReason::ListEntry {
                    list: "validators",
                    index: 1
                },
            ]
        );
        assert_eq!(
            a.differences(&shorter)[0].reason,
            DiffReason::ListLength {
                list: "validators",
                left: 2,
                right: 1
            }
        );
    }

    #[test]
    fn test_empty_validator_vs_custom() {
        let mut a = string(Presence::Optional);
        if let Attribute::String(body) = &mut a {
            body.common.validators = vec![Validator::Empty];
        }
        let b = with_validators(string(Presence::Optional), &["v.A()"]);
        assert!(!a.structurally_eq(&b));
    }

    #[test]
    fn test_object_members_compare_by_name() {
        let a = object(&[("a", ElementType::String), ("b", ElementType::Int64)]);
        let b = object(&[("b", ElementType::Int64), ("a", ElementType::String)]);
        assert!(a.structurally_eq(&b));
    }

    #[test]
    fn test_missing_child_attribute() {
        let a = list_nested(&[
            ("id", string(Presence::Computed)),
            ("name", string(Presence::Required)),
        ]);
        let b = list_nested(&[("id", string(Presence::Computed))]);

        assert_eq!(
            a.differences(&b),
            vec![Difference {
                path: "name".into(),
                reason: DiffReason::MissingChild {
                    present: Side::Left
                },
            }]
        );
    }

    #[test]
    fn test_missing_child_block() {
        let mut left = NestedBlock::default();
        left.nested_object.blocks.insert(
            "timeouts".into(),
            Block::SingleNested(SingleNestedBlock::default()),
        );
        let a = Block::ListNested(left);
        let b = Block::ListNested(NestedBlock::default());

        assert_eq!(
            b.differences(&a),
            vec![Difference {
                path: "timeouts".into(),
                reason: DiffReason::MissingChild {
                    present: Side::Right
                },
            }]
        );
    }

    #[test]
    fn test_nested_paths() {
        let a = list_nested(&[("name", string(Presence::Required))]);
        let b = list_nested(&[("name", string(Presence::Optional))]);

        let mut out = Vec::new();
        a.diff_into(&b, "rules", &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].to_string(), "rules.name: presence differs");
    }

    #[test]
    fn test_diff_forests() {
        let mut server = Schema::new("server", Target::Resource);
        server
            .attributes
            .insert("id".into(), string(Presence::Computed));
        let mut changed = server.clone();
        changed.attributes = Attributes::new();

        let left = vec![server, Schema::new("image", Target::DataSource)];
        let right = vec![changed, Schema::new("network", Target::Resource)];

        let rendered: Vec<String> = diff_forests(&left, &right)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            rendered,
            vec![
                "resource.network: root only present on the right side",
                "resource.server.id: only present on the left side",
                "datasource.image: root only present on the left side",
            ]
        );
    }
}
