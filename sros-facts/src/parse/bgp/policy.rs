//! Import/export policies from a neighbor's `info` output.
//!
//! ```text
//!                 description "core-1"
//!                 import "core-in" "community-strip"
//!                 export "core-out"
//!                 peer-as 200
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Which policy chain to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyDirection {
    Import,
    Export,
}

impl PolicyDirection {
    /// The configuration keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Export => "export",
        }
    }
}

impl fmt::Display for PolicyDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

static IMPORT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*import[ \t]+(.+)$").expect("import line"));
static EXPORT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*export[ \t]+(.+)$").expect("export line"));
static QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]*)""#).expect("quoted"));

/// Policy names configured in `direction`, in chain order, quotes removed.
///
/// Only the first `import`/`export` statement counts; a neighbor context
/// prints its own chain before any nested context.
pub fn policies(direction: PolicyDirection, info: &str) -> Vec<String> {
    let line = match direction {
        PolicyDirection::Import => &*IMPORT_LINE,
        PolicyDirection::Export => &*EXPORT_LINE,
    };

    let Some(chain) = line.captures(info).and_then(|caps| caps.get(1)) else {
        return Vec::new();
    };

    QUOTED
        .captures_iter(chain.as_str())
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
