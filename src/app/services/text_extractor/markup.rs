//! Wiki markup cleanup for table cells

use super::patterns::{
    EMPHASIS, EXTERNAL_LINK, HTML_TAG, LINE_BREAK_TAG, REF_BLOCK, REF_SELF_CLOSING, WIKI_LINK,
};

/// Cell text with its first internal link, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WikiText {
    pub is_link: bool,
    /// Target page of the first link, empty when there is none
    pub target: String,
    /// Display text, markup removed
    pub text: String,
}

/// Remove footnotes, returning the cleaned text and the footnote contents
pub fn strip_refs(text: &str) -> (String, Vec<String>) {
    let without_named = REF_SELF_CLOSING.replace_all(text, "");

    let refs = REF_BLOCK
        .captures_iter(&without_named)
        .map(|captures| parse_wiki_text(&captures["content"]).text)
        .filter(|content| !content.is_empty())
        .collect();
    let cleaned = REF_BLOCK.replace_all(&without_named, "").into_owned();

    (cleaned, refs)
}

/// Drop template braces and pipes, `{{n°|1}}` becomes `n°1`
pub fn remove_template_chars(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '{' | '}' | '|'))
        .collect()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Unwrap links, drop emphasis and tags
pub fn parse_wiki_text(text: &str) -> WikiText {
    let target = WIKI_LINK
        .captures(text)
        .map(|captures| captures["target"].trim().to_string());

    let unlinked = WIKI_LINK.replace_all(text, |captures: &regex::Captures<'_>| {
        match captures.name("text") {
            Some(display) if !display.as_str().trim().is_empty() => display.as_str().to_string(),
            _ => captures["target"].to_string(),
        }
    });
    let unlinked = EXTERNAL_LINK.replace_all(&unlinked, "$text");
    let plain = EMPHASIS.replace_all(&unlinked, "");
    let plain = LINE_BREAK_TAG.replace_all(&plain, " ");
    let plain = HTML_TAG.replace_all(&plain, "");

    WikiText {
        is_link: target.is_some(),
        target: target.unwrap_or_default(),
        text: collapse_whitespace(&remove_template_chars(&plain)),
    }
}

/// Split a coordinates cell on `<br>` variants, dropping blank parts
pub fn split_line_breaks(text: &str) -> Vec<String> {
    LINE_BREAK_TAG
        .split(text)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drop a leading `attributes |` from a table cell
///
/// Only a pipe outside `[[...]]` and `{{...}}` separates attributes from
/// content.
pub fn strip_cell_attributes(cell: &str) -> &str {
    let bytes = cell.as_bytes();
    let mut depth = 0usize;
    let mut index = 0;

    while index < bytes.len() {
        match bytes[index] {
            b'[' | b'{' if bytes.get(index + 1) == Some(&bytes[index]) => {
                depth += 1;
                index += 2;
                continue;
            }
            b']' | b'}' if bytes.get(index + 1) == Some(&bytes[index]) => {
                depth = depth.saturating_sub(1);
                index += 2;
                continue;
            }
            b'|' if depth == 0 => return cell[index + 1..].trim(),
            _ => {}
        }
        index += 1;
    }

    cell.trim()
}
