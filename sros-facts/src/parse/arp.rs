//! `show router arp` table.
//!
//! ```text
//! IP Address      MAC Address       Expiry    Type   Interface
//! -------------------------------------------------------------------------------
//! 10.20.1.1       00:00:00:00:00:01 00h00m00s Oth[I] system
//! 192.168.1.2     d0:f0:ff:00:00:01 03h59m12s Dyn[I] to-core
//! ```

use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use crate::error::{ParseError, Result};
use crate::facts::ArpEntryFact;
use crate::text::{duration_secs, split};

static ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(\d+\.\d+\.\d+\.\d+)").expect("arp anchor"));

static ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+\.\d+\.\d+\.\d+)[ \t]+(\S+)[ \t]+(\S+)[ \t]+(\S+)[ \t]+(.*)")
        .expect("arp row")
});

/// Build one ARP entry from its row.
pub fn arp_entry(section: &str) -> Result<ArpEntryFact> {
    let line = section.lines().next().unwrap_or_default();
    let caps = ROW.captures(line).ok_or_else(|| ParseError::MalformedRow {
        entity: "arp",
        row: line.to_string(),
    })?;
    let col = |i: usize| caps.get(i).map_or("", |m| m.as_str().trim());

    let interface = col(5);
    if interface.is_empty() {
        return Err(ParseError::MissingKey {
            entity: "arp",
            field: "interface",
        });
    }

    Ok(ArpEntryFact {
        ip: col(1).to_string(),
        mac: col(2).to_string(),
        interface: interface.to_string(),
        age: duration_secs(col(3)).unwrap_or(0),
    })
}

/// Build every ARP entry in table order. Rows that do not parse are skipped.
pub fn arp_table(transcript: &str) -> Vec<ArpEntryFact> {
    let rows = split(transcript, &ENTRY);
    debug!("arp table: {} rows", rows.len());

    rows.iter()
        .filter_map(|row| match arp_entry(row.text) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("skipping record: {}", e);
                None
            }
        })
        .collect()
}
