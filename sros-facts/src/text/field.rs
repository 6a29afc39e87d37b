//! Labelled field extraction with typed defaults.
//!
//! SR OS prints most facts as `Label      : value` pairs, often two per line.
//! A [`Field`] wraps a `label-then-capture` pattern and resolves it to a
//! typed value, falling back to a default chosen by the caller when the
//! label is absent.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// Apply `pattern` to `text` and return its first capture group, trimmed.
///
/// Returns `default` unchanged when the pattern does not match.
pub fn extract(pattern: &Regex, text: &str, default: &str) -> String {
    capture(pattern, text)
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string())
}

fn capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// A compiled `label-then-capture` pattern.
///
/// Patterns are string literals owned by the builders, so a pattern that
/// fails to compile is a bug and panics on construction.
#[derive(Debug, Clone)]
pub struct Field {
    pattern: Regex,
}

impl Field {
    /// Compile a field pattern. The value must be capture group 1.
    #[track_caller]
    pub fn new(pattern: &str) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid field pattern {pattern:?}: {e}"));
        Self { pattern }
    }

    /// The underlying regex.
    pub fn regex(&self) -> &Regex {
        &self.pattern
    }

    /// Trimmed capture, or `None` when the label is missing.
    pub fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        capture(&self.pattern, text)
    }

    /// Free text; empty string when missing.
    pub fn text(&self, text: &str) -> String {
        extract(&self.pattern, text, "")
    }

    /// Free text with an explicit default.
    pub fn text_or(&self, text: &str, default: &str) -> String {
        extract(&self.pattern, text, default)
    }

    /// Numeric value; `T::default()` (zero) when missing or not a number.
    pub fn number<T: FromStr + Default>(&self, text: &str) -> T {
        self.optional_number(text).unwrap_or_default()
    }

    /// Numeric value, `None` when missing or not a number.
    pub fn optional_number<T: FromStr>(&self, text: &str) -> Option<T> {
        self.capture(text).and_then(|v| v.parse().ok())
    }

    /// True when the pattern matches at all.
    pub fn flag(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Inverted flag for `Disabled`-labelled fields: false only when the
    /// captured value reads `Disabled`, true otherwise (including when the
    /// label is missing).
    pub fn inverted_flag(&self, text: &str) -> bool {
        !self
            .capture(text)
            .is_some_and(|v| v.eq_ignore_ascii_case("disabled"))
    }

    /// True when the label is present and its value is anything but
    /// `Disabled`.
    pub fn enabled_flag(&self, text: &str) -> bool {
        self.capture(text)
            .is_some_and(|v| !v.is_empty() && !v.eq_ignore_ascii_case("disabled"))
    }

    /// Every capture in document order.
    pub fn all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .collect()
    }
}

static TIMER_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)([ydhms])").expect("timer unit pattern")
});

/// Parse SR OS compact timers (`03h59m12s`, `01d02h03m`, `1y012d04h`) into
/// seconds. Returns `None` unless the whole token is made of timer units.
pub fn duration_secs(token: &str) -> Option<u64> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    let mut consumed = 0;
    let mut total: u64 = 0;
    for caps in TIMER_UNIT.captures_iter(token) {
        let whole = caps.get(0)?;
        if whole.start() != consumed {
            return None;
        }
        consumed = whole.end();

        let value: u64 = caps.get(1)?.as_str().parse().ok()?;
        let scale = match caps.get(2)?.as_str() {
            "y" => 365 * 86_400,
            "d" => 86_400,
            "h" => 3_600,
            "m" => 60,
            _ => 1,
        };
        total = total.checked_add(value.checked_mul(scale)?)?;
    }

    (consumed == token.len()).then_some(total)
}
