//! Fixed-width table columns.
//!
//! Some SR OS tables have no reliable delimiters; values are found by
//! skipping to the column the renderer printed them in. A [`ColumnSchema`]
//! names those columns as `(start_offset, matcher)` pairs so the layout a
//! table depends on is written down in one place.
//!
//! Offsets count characters, not bytes. An open column is searched from its
//! offset to the end of the line, so `(\w+)` at offset 33 means "the first
//! word at or after column 33". A bounded column only sees the characters
//! `[start, end)` and cannot pick up a value printed in a later column.

use std::ops::Range;

use regex::Regex;

/// A single named column.
#[derive(Debug, Clone)]
pub struct ColumnRule {
    /// Column name.
    pub name: &'static str,

    /// Characters to skip before matching.
    pub start: usize,

    /// First character past the column; `None` runs to the end of the line.
    pub end: Option<usize>,

    /// Pattern searched from `start`; capture group 1 is the value.
    pub matcher: Regex,
}

impl ColumnRule {
    /// Apply this rule to one table line.
    pub fn value<'l>(&self, line: &'l str) -> Option<&'l str> {
        let mut rest = skip_chars(line, self.start)?;
        if let Some(end) = self.end {
            rest = take_chars(rest, end.saturating_sub(self.start));
        }
        self.matcher
            .captures(rest)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
    }
}

/// Ordered set of column rules for one table format.
#[derive(Debug, Clone, Default)]
pub struct ColumnSchema {
    rules: Vec<ColumnRule>,
}

impl ColumnSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column running to the end of the line. Panics if `matcher` is
    /// not a valid pattern.
    #[track_caller]
    pub fn column(self, name: &'static str, start: usize, matcher: &str) -> Self {
        self.push(name, start, None, matcher)
    }

    /// Add a column covering the characters `columns.start..columns.end`.
    #[track_caller]
    pub fn bounded(self, name: &'static str, columns: Range<usize>, matcher: &str) -> Self {
        self.push(name, columns.start, Some(columns.end), matcher)
    }

    #[track_caller]
    fn push(mut self, name: &'static str, start: usize, end: Option<usize>, matcher: &str) -> Self {
        let matcher = Regex::new(matcher)
            .unwrap_or_else(|e| panic!("invalid column pattern {matcher:?}: {e}"));
        self.rules.push(ColumnRule {
            name,
            start,
            end,
            matcher,
        });
        self
    }

    /// Look up a rule by name.
    pub fn rule(&self, name: &str) -> Option<&ColumnRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Value of the named column in `line`; `None` when the column is
    /// unknown, the line is too short, or nothing matches.
    pub fn get<'l>(&self, line: &'l str, name: &str) -> Option<&'l str> {
        self.rule(name)?.value(line)
    }

    /// Value of the named column, empty string when missing.
    pub fn text(&self, line: &str, name: &str) -> String {
        self.get(line, name).unwrap_or_default().to_string()
    }

    /// All rules in declaration order.
    pub fn rules(&self) -> &[ColumnRule] {
        &self.rules
    }
}

fn skip_chars(line: &str, count: usize) -> Option<&str> {
    if count == 0 {
        return Some(line);
    }
    line.char_indices().nth(count).map(|(i, _)| &line[i..])
}

fn take_chars(text: &str, count: usize) -> &str {
    text.char_indices().nth(count).map_or(text, |(i, _)| &text[..i])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> ColumnSchema {
        ColumnSchema::new()
            .column("name", 0, r"^(.{1,10})")
            .column("state", 10, r"(\w+)")
            .column("rest", 16, r"^(.+)")
    }

    #[test]
    fn test_columns_by_offset() {
        let line = format!("{:<10}{:<6}{}", "port-a", "Up", "to core");
        let schema = schema();
        assert_eq!(schema.get(&line, "name"), Some("port-a"));
        assert_eq!(schema.get(&line, "state"), Some("Up"));
        assert_eq!(schema.get(&line, "rest"), Some("to core"));
    }

    #[test]
    fn test_word_found_after_offset() {
        // Value shifted right of its column start is still found.
        let line = format!("{:<12}{}", "port-a", "Down");
        assert_eq!(schema().get(&line, "state"), Some("Down"));
    }

    #[test]
    fn test_offsets_count_characters() {
        let line = format!("{:<10}{:<6}{}", "—", "Up", "—");
        assert_eq!(schema().get(&line, "state"), Some("Up"));
        assert_eq!(schema().get(&line, "rest"), Some("—"));
    }

    #[test]
    fn test_short_line_and_unknown_column() {
        let schema = schema();
        assert_eq!(schema.get("port-a", "state"), None);
        assert_eq!(schema.text("port-a", "state"), "");
        assert_eq!(schema.get("port-a", "speed"), None);
    }

    #[test]
    fn test_bounded_column_ignores_later_columns() {
        let schema = ColumnSchema::new()
            .bounded("pair", 0..8, r"^\w+/(\w+)")
            .bounded("word", 8..14, r"(\w+)");
        let line = format!("{:<8}{:<6}{}", "Up", "", "1/1/1");
        assert_eq!(schema.get(&line, "pair"), None);
        assert_eq!(schema.get(&line, "word"), None);

        let line = format!("{:<8}{:<6}{}", "Up/Down", "Net", "1/1/1");
        assert_eq!(schema.get(&line, "pair"), Some("Down"));
        assert_eq!(schema.get(&line, "word"), Some("Net"));
    }

    #[test]
    fn test_bounded_column_on_short_line() {
        let schema = ColumnSchema::new().bounded("word", 2..20, r"(\w+)");
        assert_eq!(schema.get("a b", "word"), Some("b"));
        assert_eq!(schema.get("a", "word"), None);
    }

    #[test]
    fn test_rules_keep_declaration_order() {
        let names: Vec<_> = schema().rules().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["name", "state", "rest"]);
    }
}
