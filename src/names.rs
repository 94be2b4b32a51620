//! Name normalization.

/// Convert a name to a lowercase kebab-case label.
///
/// camelCase boundaries and any non-alphanumeric characters become a single
/// `-`; leading and trailing dashes are dropped.
///
/// # Example
///
/// ```
/// use skyforge::names::label_name;
///
/// assert_eq!(label_name("myWebApp"), "my-web-app");
/// assert_eq!(label_name("todo_api.v2"), "todo-api-v2");
/// ```
pub fn label_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            let boundary = c.is_ascii_uppercase()
                && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit());
            if boundary {
                push_separator(&mut out);
            }
            out.push(c.to_ascii_lowercase());
        } else {
            push_separator(&mut out);
        }
        prev = Some(c);
    }

    out.trim_end_matches('-').to_string()
}

fn push_separator(out: &mut String) {
    if !out.is_empty() && !out.ends_with('-') {
        out.push('-');
    }
}
