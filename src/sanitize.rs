//! Label cleanup for outline lines.

/// Label used when sanitizing leaves nothing to display.
pub const PLACEHOLDER_LABEL: &str = "Node";

/// Punctuation that survives sanitizing. Everything else that is not a
/// letter, digit or whitespace is dropped.
const KEPT_PUNCTUATION: &[char] = &['-', ',', '.', ':', ';', '!', '?', '&', '/', '+', '#', '%'];

/// Mermaid node shape delimiters, longest first.
const SHAPE_DELIMITERS: &[(&str, &str)] = &[
    ("((", "))"),
    ("))", "(("),
    ("{{", "}}"),
    ("[", "]"),
    ("(", ")"),
    (")", "("),
];

/// Strip markup from a raw label.
///
/// Brackets, quotes, emphasis markers and decorative glyphs are removed,
/// leading non-letters are dropped and whitespace is collapsed. Returns
/// [`PLACEHOLDER_LABEL`] if nothing is left.
#[must_use]
pub fn sanitize_label(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|&c| c.is_alphanumeric() || c.is_whitespace() || KEPT_PUNCTUATION.contains(&c))
        .collect();
    let trimmed = kept.trim_start_matches(|c: char| !c.is_alphabetic());
    let label = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");
    if label.is_empty() {
        PLACEHOLDER_LABEL.to_owned()
    } else {
        label
    }
}

/// Text inside a Mermaid shape such as `id[Text]`, `id((Text))` or
/// `id{{Text}}`. Lines without a shape come back trimmed but otherwise whole.
///
/// The part before the opening delimiter must be a single token; `Intro
/// (basics)` is plain text, not a shape.
#[must_use]
pub fn shape_text(line: &str) -> &str {
    let line = line.trim();
    let Some(open_at) = line.find(['[', '(', '{', ')']) else {
        return line;
    };
    if line[..open_at].chars().any(char::is_whitespace) {
        return line;
    }
    let rest = &line[open_at..];
    SHAPE_DELIMITERS
        .iter()
        .find_map(|(open, close)| rest.strip_prefix(open).and_then(|r| r.strip_suffix(close)))
        .unwrap_or(line)
}

/// Inner text of a `root((...))` line, or `None` if the line is not one.
#[must_use]
pub fn root_text(line: &str) -> Option<&str> {
    let inner = line.trim().strip_prefix("root((")?;
    let end = inner.rfind("))")?;
    Some(&inner[..end])
}

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod tests;
