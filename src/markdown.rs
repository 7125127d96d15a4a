//! Renders the lightweight inline markup carried by some content fields.
//!
//! Hero headings/paragraph and the chart-page description use `**strong**`
//! emphasis; everything else is bound as plain text.

use pulldown_cmark::{html, Options, Parser};

/// Renders a single-paragraph markdown snippet to inline HTML, stripping the
/// outer `<p>` wrapper so the result can be assigned into an existing
/// element. Input that renders to more than one paragraph keeps its wrappers
/// instead: stripping would leave unbalanced markup.
pub fn render_inline(md: &str) -> String {
    let parser = Parser::new_ext(md, Options::empty());
    let mut out = String::new();
    html::push_html(&mut out, parser);

    let trimmed = out.trim();
    if let Some(inner) = trimmed
        .strip_prefix("<p>")
        .and_then(|rest| rest.strip_suffix("</p>"))
    {
        if !inner.contains("<p>") {
            return inner.to_string();
        }
    }
    trimmed.to_string()
}
