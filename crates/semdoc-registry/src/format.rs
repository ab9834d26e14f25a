//! Small Markdown formatting helpers shared by rows and appendices

use semdoc_core::AttributeValue;

/// Empty strings count as absent
pub(crate) fn non_empty(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|s| !s.is_empty())
}

/// `` `value` ``
pub(crate) fn code(value: impl std::fmt::Display) -> String {
    format!("`{}`", value)
}

/// Anchor-tagged, back-tick-quoted name
pub(crate) fn anchor(fqn: &str) -> String {
    format!("<a name=\"{}\">{}</a>", fqn, code(fqn))
}

/// `` `a`; `b` ``
pub(crate) fn code_list(values: &[AttributeValue]) -> String {
    values.iter().map(code).collect::<Vec<_>>().join("; ")
}

/// `` `[a, b]` ``
pub(crate) fn array_literal(values: &[AttributeValue]) -> String {
    let items = values.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
    code(format!("[{}]", items))
}

/// ` [n]`
pub(crate) fn footnote_marker(n: usize) -> String {
    format!(" [{}]", n)
}

/// `**[n]:** text`
pub(crate) fn footnote(n: usize, text: &str) -> String {
    format!("**[{}]:** {}", n, text)
}
