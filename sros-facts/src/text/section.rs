//! Anchor-interval section splitting.
//!
//! A transcript listing several entities repeats one label per entity
//! (`Peer : 10.0.0.1`, `Group : EXTERNAL`, a row starting in column 0).
//! Each occurrence of that anchor opens a section which runs up to, but not
//! including, the next occurrence.

use std::sync::LazyLock;

use regex::Regex;

/// One entity's slice of a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'t> {
    /// Byte offset of the anchor in the original text.
    pub start: usize,

    /// Byte offset one past the end of the section.
    pub end: usize,

    /// Capture group 1 of the anchor, or the whole anchor match when the
    /// pattern has no group.
    pub anchor: &'t str,

    /// The section text, starting with the anchor.
    pub text: &'t str,
}

impl<'t> Section<'t> {
    /// First line of the section (the anchor line).
    pub fn first_line(self) -> &'t str {
        self.text.lines().next().unwrap_or_default()
    }

    /// Lines after the anchor line.
    pub fn body_lines(self) -> impl Iterator<Item = &'t str> {
        self.text.lines().skip(1)
    }
}

/// Split `text` at every non-overlapping match of `anchor`.
///
/// Occurrences are taken in document order and never deduplicated; a peer
/// listed twice yields two sections. No anchor means no sections.
pub fn split<'t>(text: &'t str, anchor: &Regex) -> Vec<Section<'t>> {
    let starts: Vec<(usize, &'t str)> = anchor
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let id = caps.get(1).unwrap_or(whole);
            Some((whole.start(), id.as_str()))
        })
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &(start, id))| {
            let end = starts.get(i + 1).map_or(text.len(), |&(next, _)| next);
            Section {
                start,
                end,
                anchor: id,
                text: &text[start..end],
            }
        })
        .collect()
}

static RULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{4,}").expect("rule pattern"));

/// Body of a dashed-rule table: the text between the first and second
/// `----` rules (or end of text when only one rule exists).
pub fn table_body(text: &str) -> Option<&str> {
    let mut rules = RULE.find_iter(text);
    let first = rules.next()?;
    let end = rules.next().map_or(text.len(), |m| m.start());
    Some(&text[first.end()..end])
}
