//! Fact builders.
//!
//! Each builder turns one section (or a whole transcript) into a record.
//! Builders are pure: they only see text, never the session. Per-record
//! builders return [`ParseError`](crate::error::ParseError) when the
//! section has no key; the collection builders log and skip such records.

pub mod arp;
pub mod bgp;
pub mod interface;
pub mod system;

use indexmap::IndexMap;
use log::warn;

use crate::error::ParseError;

/// Insert every successfully built record under its key, last write wins.
pub(crate) fn collect_keyed<T>(
    records: impl IntoIterator<Item = Result<T, ParseError>>,
    key: impl Fn(&T) -> String,
) -> IndexMap<String, T> {
    let mut out = IndexMap::new();
    for record in records {
        match record {
            Ok(record) => {
                out.insert(key(&record), record);
            }
            Err(e) => warn!("skipping record: {}", e),
        }
    }
    out
}
