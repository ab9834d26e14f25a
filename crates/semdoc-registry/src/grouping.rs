//! Attribute selection and namespace grouping
//!
//! Grouping and ordering are separate steps: `group_by_*` builds unordered
//! buckets, `sorted_keys` fixes the iteration order.

use semdoc_core::{Attribute, SemanticConventionSet};
use std::collections::HashMap;

/// Attributes grouped under a namespace key
pub type Groups<'a> = HashMap<&'a str, Vec<&'a Attribute>>;

/// Attributes defined locally in the set (not imported, not references)
pub fn local_attributes(semconvset: &SemanticConventionSet) -> Vec<&Attribute> {
    semconvset
        .attributes()
        .filter(|attr| attr.is_local && attr.ref_.is_none())
        .collect()
}

/// Bucket attributes by root namespace
pub fn group_by_root_namespace<'a>(
    attributes: impl IntoIterator<Item = &'a Attribute>,
) -> Groups<'a> {
    group_by(attributes, Attribute::root_namespace)
}

/// Bucket attributes by full namespace
pub fn group_by_namespace<'a>(
    attributes: impl IntoIterator<Item = &'a Attribute>,
) -> Groups<'a> {
    group_by(attributes, Attribute::namespace)
}

/// Group keys in ascending lexicographic order
pub fn sorted_keys<'a>(groups: &Groups<'a>) -> Vec<&'a str> {
    let mut keys: Vec<&'a str> = groups.keys().copied().collect();
    keys.sort_unstable();
    keys
}

fn group_by<'a>(
    attributes: impl IntoIterator<Item = &'a Attribute>,
    key: fn(&'a Attribute) -> &'a str,
) -> Groups<'a> {
    let mut groups: Groups<'a> = HashMap::new();
    for attribute in attributes {
        groups.entry(key(attribute)).or_default().push(attribute);
    }
    groups
}
