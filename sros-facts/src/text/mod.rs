//! Text-extraction primitives shared by every fact builder.
//!
//! The pipeline is always the same: a raw transcript is [`clean`]ed, cut
//! into per-entity [`Section`]s by an anchor pattern, and each section is
//! mined with [`Field`]s (labelled values) or a [`ColumnSchema`]
//! (fixed-width table rows).

mod clean;
mod columns;
mod field;
mod section;

pub use clean::{clean, clean_bytes};
pub use columns::{ColumnRule, ColumnSchema};
pub use field::{Field, duration_secs, extract};
pub use section::{Section, split, table_body};
