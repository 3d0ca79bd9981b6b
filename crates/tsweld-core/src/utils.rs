//! Text layout helpers shared by node renderers.

/// Indent every line of `text` by `width` spaces.
///
/// Each line, the last one included, is terminated with `\n`. Blank lines
/// stay empty, so no trailing whitespace is produced. Empty input yields an
/// empty string.
///
/// # Examples
/// ```
/// use tsweld_core::utils::indent;
/// assert_eq!(indent("a\nb", 2), "  a\n  b\n");
/// assert_eq!(indent("a\n\nb", 2), "  a\n\n  b\n");
/// assert_eq!(indent("", 2), "");
/// ```
pub fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    let mut result = String::with_capacity(text.len() + width * 4);
    for line in text.lines() {
        if !line.trim().is_empty() {
            result.push_str(&pad);
            result.push_str(line);
        }
        result.push('\n');
    }
    result
}

/// Collapse a multi-line fragment onto a single line.
///
/// Leading whitespace of every line is dropped and the lines are joined
/// without a separator.
///
/// # Examples
/// ```
/// use tsweld_core::utils::flatten;
/// assert_eq!(flatten("@Input(\n  {\n    a: 1\n  }\n)"), "@Input({a: 1})");
/// ```
pub fn flatten(text: &str) -> String {
    text.lines().map(str::trim_start).collect()
}

/// Join already rendered fragments with `separator`, skipping nothing.
pub fn join<I, S>(parts: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            result.push_str(separator);
        }
        result.push_str(part.as_ref());
    }
    result
}
