//! Typed fact records.
//!
//! Records are plain values built fresh for every call. Every field is always
//! populated: a label missing from the transcript resolves to the field's
//! documented default, never to an absent key.

mod arp;
mod bgp;
mod interface;
mod system;

pub use arp::ArpEntryFact;
pub use bgp::{
    BgpConfig, BgpGroupFact, BgpNeighborDetailFact, BgpNeighborFact, BgpNeighborSummaryFact,
    PrefixCounters,
};
pub use interface::InterfaceFact;
pub use system::SystemFacts;
