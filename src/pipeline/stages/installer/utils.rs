//! Installer rendering helpers.

/// Escape a value for use inside a double-quoted shell string.
///
/// Inside `"..."` bash still interprets `\`, `"`, `$` and backquotes; each is
/// prefixed with a backslash so the value is taken literally.
pub fn escape_double_quoted(data: &str) -> String {
    let mut escaped = String::with_capacity(data.len());
    for c in data.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
