//! ARP table facts.

use serde::Serialize;

/// One row of `show router arp`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArpEntryFact {
    pub ip: String,
    pub mac: String,
    pub interface: String,

    /// Remaining expiry in seconds; 0 when the device shows no timer.
    pub age: u64,
}
