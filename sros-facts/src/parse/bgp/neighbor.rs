//! `show router bgp neighbor` sections.

use std::sync::LazyLock;

use indexmap::IndexMap;
use log::debug;
use regex::Regex;

use super::labels;
use crate::error::{ParseError, Result};
use crate::facts::BgpNeighborFact;
use crate::parse::collect_keyed;
use crate::text::{Field, split};

/// Anchor opening each neighbor block (`Peer  : 10.20.1.2`).
pub static PEER_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^Peer[ \t]+:[ \t]*(\d+\.\d+\.\d+\.\d+)").expect("peer anchor")
});

static AUTH_KEYCHAIN: LazyLock<Field> =
    LazyLock::new(|| Field::new(r"Auth key chain\s+:[ \t]*(\S+)"));
static CLUSTER_ID: LazyLock<Field> =
    LazyLock::new(|| Field::new(r"Cluster Id\s+:[ \t]*(\d+\.\d+\.\d+\.\d+)"));
static NEXT_HOP_SELF: LazyLock<Field> =
    LazyLock::new(|| Field::new(r"Next Hop Self\s+:[ \t]*(Enabled)"));

/// Build one neighbor from its section.
pub fn neighbor(section: &str) -> Result<BgpNeighborFact> {
    let peer = labels::PEER.text(section);
    if peer.is_empty() {
        return Err(ParseError::MissingKey {
            entity: "bgp neighbor",
            field: "peer",
        });
    }

    Ok(BgpNeighborFact {
        peer,
        group: labels::GROUP.text(section),
        description: labels::DESCRIPTION.text(section),
        import_policy: labels::IMPORT_POLICY.text(section),
        export_policy: labels::EXPORT_POLICY.text(section),
        local_address: labels::LOCAL_ADDRESS.text(section),
        local_as: labels::LOCAL_AS.number(section),
        remote_as: labels::PEER_AS.number(section),
        authentication_key: AUTH_KEYCHAIN.text(section),
        prefix_limit: labels::PREFIX_LIMIT.optional_number(section),
        route_reflector_client: CLUSTER_ID.flag(section),
        nhs: NEXT_HOP_SELF.flag(section),
    })
}

/// Build every neighbor in the transcript, keyed by peer address.
pub fn neighbors(transcript: &str) -> IndexMap<String, BgpNeighborFact> {
    let sections = split(transcript, &PEER_ANCHOR);
    debug!("bgp neighbor: {} sections", sections.len());

    collect_keyed(sections.iter().map(|s| neighbor(s.text)), |n| n.peer.clone())
}
