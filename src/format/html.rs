//! HTML escaping.

/// Escape `<`, `>`, `"` and `'` for safe inclusion in HTML text or
/// attribute values.
///
/// `&` is passed through unchanged, so already-escaped input is not
/// double-escaped.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }

    out
}
