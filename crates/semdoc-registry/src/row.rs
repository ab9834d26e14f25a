//! Attribute rows
//!
//! One attribute becomes one pipe-delimited row matching the table header.
//! Notes and enum types are queued on the [`RenderContext`] as rows are written.

use crate::context::RenderContext;
use crate::format::{anchor, array_literal, code, code_list, footnote_marker, non_empty};
use semdoc_core::{Attribute, AttributeType, MarkdownOptions, StabilityLevel};

/// Stability column for an attribute
///
/// A deprecation message replaces the level-based snippet entirely.
pub fn stability_message(attribute: &Attribute, options: &MarkdownOptions) -> String {
    match non_empty(&attribute.deprecated) {
        Some(message) if message.to_lowercase().contains("deprecated") => {
            format!("**{}**<br>", message)
        }
        Some(message) => {
            let snippet = options.snippet(StabilityLevel::Deprecated).replacen("{}", message, 1);
            format!("{}<br>", snippet)
        }
        None => format!("{}<br>", options.snippet(attribute.stability)),
    }
}

/// Append the table row for `attribute`
pub fn render_attribute_row<'a>(
    attribute: &'a Attribute,
    options: &MarkdownOptions,
    ctx: &mut RenderContext<'a>,
    output: &mut String,
) {
    let name = anchor(&attribute.fqn);
    let stability = stability_message(attribute, options);

    let mut description = attribute.brief.clone();
    if let Some(note) = non_empty(&attribute.note) {
        let number = ctx.add_note(note);
        description.push_str(&footnote_marker(number));
    }

    let (attr_type, examples) = match &attribute.attr_type {
        Some(AttributeType::Enum(enum_type)) => {
            ctx.add_enum(attribute, enum_type);

            let examples = if attribute.examples.is_empty() {
                enum_type
                    .members
                    .first()
                    .map(|member| code(&member.value))
                    .unwrap_or_default()
            } else {
                code_list(&attribute.examples)
            };

            // Open and closed enums display the same scalar type.
            (enum_type.enum_type.clone(), examples)
        }
        Some(attr_type) => {
            let examples = if attr_type.is_array() {
                array_literal(&attribute.examples)
            } else {
                code_list(&attribute.examples)
            };

            (attr_type.to_string(), examples)
        }
        None => (String::new(), String::new()),
    };

    tracing::trace!(fqn = %attribute.fqn, "rendering attribute row");

    output.push_str(&format!(
        "| {} | {} | {} | {} | {} |\n",
        name, attr_type, description, examples, stability
    ));
}
