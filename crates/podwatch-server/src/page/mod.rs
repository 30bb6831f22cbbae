//! Index page rendering.
//!
//! The page is a static template with a single `{{ENV}}` slot; the polling
//! script inside it drives `/ping` and `/active`.

const TEMPLATE: &str = include_str!("index.html");
const ENV_SLOT: &str = "{{ENV}}";

/// Escape text for an HTML element body, using the same entity set as Go's
/// `html/template` text escaper.
fn escape_html(v: &str) -> String {
    let mut out = String::with_capacity(v.len());
    for c in v.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            '+' => out.push_str("&#43;"),
            '\0' => out.push('\u{FFFD}'),
            _ => out.push(c),
        }
    }
    out
}

/// Render the index page with `env_block` shown in the environment section.
pub fn render_index(env_block: &str) -> String {
    TEMPLATE.replacen(ENV_SLOT, &escape_html(env_block), 1)
}
