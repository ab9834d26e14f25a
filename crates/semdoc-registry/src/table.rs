//! Namespace tables
//!
//! Renders all tables of one root namespace: one table per sub-namespace,
//! each followed by its footnotes and enum appendices.

use crate::context::RenderContext;
use crate::enums::render_enum_appendix;
use crate::grouping::{group_by_namespace, sorted_keys};
use crate::row::render_attribute_row;
use semdoc_core::{Attribute, MarkdownOptions};

const TABLE_HEADER: &str =
    "| Attribute  | Type | Description  | Examples  | Stability |\n|---|---|---|---|---|\n";

/// Append the section for `root_namespace`
///
/// `attributes` holds every attribute under the root namespace, across all
/// of its sub-namespaces.
pub fn render_root_namespace(
    root_namespace: &str,
    attributes: &[&Attribute],
    options: &MarkdownOptions,
    output: &mut String,
) {
    let mut by_namespace = group_by_namespace(attributes.iter().copied());
    let mut first = true;

    for namespace in sorted_keys(&by_namespace) {
        let Some(mut rows) = by_namespace.remove(namespace) else {
            continue;
        };

        tracing::debug!(namespace, attributes = rows.len(), "rendering namespace table");

        let mut ctx = RenderContext::new();
        render_heading(root_namespace, namespace, first, output);
        first = false;

        rows.sort_by(|a, b| a.fqn.cmp(&b.fqn));
        for attribute in rows {
            render_attribute_row(attribute, options, &mut ctx, output);
        }

        ctx.render_notes(output);
        render_enum_appendix(&ctx, output);
        output.push('\n');
    }
}

fn render_heading(root_namespace: &str, namespace: &str, first: bool, output: &mut String) {
    if first {
        output.push_str(&format!("## {}\n\n", root_namespace));
    }

    if root_namespace != namespace {
        output.push_str(&format!("### {}\n\n", namespace));
    }

    output.push_str(TABLE_HEADER);
}
