//! Enum value appendices
//!
//! Every enum attribute in a table gets a value/description block after the
//! table. Member footnotes are numbered per block, independently of the
//! row-level footnotes.

use crate::context::{EnumEntry, RenderContext};
use crate::format::{code, footnote, footnote_marker, non_empty};

const CUSTOM_VALUES_TEXT: &str = "has the following list of well-known values. \
If one of them applies, then the respective value MUST be used, \
otherwise a custom value MAY be used.";

const CLOSED_VALUES_TEXT: &str = "MUST be one of the following:";

/// Append an appendix block for every queued enum, in queue order
pub fn render_enum_appendix(ctx: &RenderContext<'_>, output: &mut String) {
    for entry in ctx.enums() {
        render_enum(entry, output);
    }
}

fn render_enum(entry: &EnumEntry<'_>, output: &mut String) {
    let enum_type = entry.enum_type;

    output.push_str(&code(&entry.attribute.fqn));
    output.push(' ');
    output.push_str(if enum_type.custom_values {
        CUSTOM_VALUES_TEXT
    } else {
        CLOSED_VALUES_TEXT
    });
    output.push_str("\n\n");
    output.push_str("| Value  | Description |\n|---|---|");

    let mut notes = Vec::new();
    for member in &enum_type.members {
        let mut description = member.brief.clone();
        if let Some(note) = non_empty(&member.note) {
            notes.push(note);
            description.push_str(&footnote_marker(notes.len()));
        }
        output.push_str(&format!("\n| {} | {} |", code(&member.value), description));
    }

    if notes.is_empty() {
        output.push('\n');
        return;
    }

    for (i, note) in notes.iter().enumerate() {
        output.push_str("\n\n");
        output.push_str(&footnote(i + 1, note));
    }
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use semdoc_core::{Attribute, EnumAttributeType, EnumMember};

    fn appendix(attribute: &Attribute) -> String {
        let mut ctx = RenderContext::new();
        if let Some(enum_type) = attribute.attr_type.as_ref().and_then(|t| t.as_enum()) {
            ctx.add_enum(attribute, enum_type);
        }
        let mut out = String::new();
        render_enum_appendix(&ctx, &mut out);
        out
    }

    #[test]
    fn closed_enum_without_notes() {
        let enum_type = EnumAttributeType::new(
            "string",
            vec![EnumMember::new("ip_tcp", "TCP"), EnumMember::new("ip_udp", "UDP")],
        );
        let attr = Attribute::new("net.transport", enum_type, "Transport");

        assert_eq!(
            appendix(&attr),
            "`net.transport` MUST be one of the following:\n\n\
             | Value  | Description |\n|---|---|\n\
             | `ip_tcp` | TCP |\n\
             | `ip_udp` | UDP |\n"
        );
    }

    #[test]
    fn member_notes_use_local_numbering() {
        let enum_type = EnumAttributeType::new(
            "string",
            vec![
                EnumMember::new("a", "A"),
                EnumMember::new("b", "B").with_note("about b"),
                EnumMember::new("c", "C").with_note("about c"),
            ],
        )
        .with_custom_values(true);
        let attr = Attribute::new("x.kind", enum_type, "Kind");

        assert_eq!(
            appendix(&attr),
            "`x.kind` has the following list of well-known values. If one of them applies, \
             then the respective value MUST be used, otherwise a custom value MAY be used.\n\n\
             | Value  | Description |\n|---|---|\n\
             | `a` | A |\n\
             | `b` | B [1] |\n\
             | `c` | C [2] |\n\
             \n**[1]:** about b\n\
             \n**[2]:** about c\n"
        );
    }

    #[test]
    fn numbering_restarts_per_enum() {
        let first = Attribute::new(
            "x.first",
            EnumAttributeType::new("int", vec![EnumMember::new(0i64, "zero").with_note("n0")]),
            "First",
        );
        let second = Attribute::new(
            "x.second",
            EnumAttributeType::new("int", vec![EnumMember::new(1i64, "one").with_note("n1")]),
            "Second",
        );

        let mut ctx = RenderContext::new();
        ctx.add_note("row level note");
        for attr in [&first, &second] {
            if let Some(enum_type) = attr.attr_type.as_ref().and_then(|t| t.as_enum()) {
                ctx.add_enum(attr, enum_type);
            }
        }

        let mut out = String::new();
        render_enum_appendix(&ctx, &mut out);

        assert_eq!(out.matches("**[1]:**").count(), 2);
        assert!(!out.contains("[2]"));
        assert!(out.find("`x.first`").unwrap() < out.find("`x.second`").unwrap());
    }
}
