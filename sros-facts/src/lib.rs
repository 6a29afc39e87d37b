//! # sros-facts
//!
//! Structured facts scraped from Nokia SR OS Classic CLI output.
//!
//! The crate turns human-formatted command transcripts (label/value blocks
//! and fixed-width tables) into typed, serializable records: router
//! interfaces, the ARP table, system identity, and BGP configuration,
//! sessions and per-neighbor detail.
//!
//! ## Layers
//!
//! - [`text`]: transcript cleaning, single field extraction, anchor based
//!   section splitting and fixed-width column schemas
//! - [`parse`]: pure builders from text to [`facts`] records
//! - [`linker`]: attaches BGP neighbors to their groups
//! - [`driver`]: async facade issuing the commands over any
//!   [`CommandSession`]
//!
//! Missing labels never fail a call: every field has a default. Only a
//! section without its key field is dropped, with a `warn!` log.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sros_facts::{CommandSession, SrosFactsBuilder};
//!
//! async fn report<S: CommandSession>(session: S) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut facts = SrosFactsBuilder::new(session).build()?;
//!
//!     let system = facts.get_facts().await?;
//!     println!("{} ({}) runs {}", system.hostname, system.model, system.os_version);
//!
//!     for (vrf, peers) in facts.get_bgp_neighbors(None).await? {
//!         for (ip, peer) in peers {
//!             println!("{vrf} {ip} {}", peer.connection_state);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod driver;
pub mod error;
pub mod facts;
pub mod linker;
pub mod parse;
pub mod text;

// Re-export main types for convenience
pub use driver::{CommandSession, FactsConfig, SrosFacts, SrosFactsBuilder};
pub use error::{ConfigError, ParseError};
pub use facts::{
    ArpEntryFact, BgpConfig, BgpGroupFact, BgpNeighborDetailFact, BgpNeighborFact,
    BgpNeighborSummaryFact, InterfaceFact, PrefixCounters, SystemFacts,
};
