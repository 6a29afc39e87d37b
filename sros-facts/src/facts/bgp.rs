//! BGP facts: configuration (groups and neighbors), session summary and
//! per-neighbor detail.

use indexmap::IndexMap;
use serde::Serialize;

/// A BGP peer group from `show router bgp group`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BgpGroupFact {
    /// Group name (key).
    pub name: String,

    /// `External` / `Internal`.
    #[serde(rename = "type")]
    pub group_type: String,

    pub description: String,
    pub multihop_ttl: u32,

    /// True when more than one path is allowed.
    pub multipath: bool,

    pub import_policy: String,
    pub export_policy: String,
    pub local_address: String,
    pub local_as: u32,
    pub remote_as: u32,
    pub remove_private_as: bool,

    /// Maximum prefixes; `None` when no limit is configured.
    pub prefix_limit: Option<u64>,

    /// Neighbors configured in this group, keyed by peer address.
    pub neighbors: IndexMap<String, BgpNeighborFact>,
}

/// A configured BGP neighbor from `show router bgp neighbor`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BgpNeighborFact {
    /// Peer address (key).
    pub peer: String,

    /// Owning group name.
    #[serde(rename = "bgp_group")]
    pub group: String,

    pub description: String,
    pub import_policy: String,
    pub export_policy: String,
    pub local_address: String,
    pub local_as: u32,
    pub remote_as: u32,
    pub authentication_key: String,
    pub prefix_limit: Option<u64>,
    pub route_reflector_client: bool,

    /// Next-hop-self.
    pub nhs: bool,
}

/// Received/accepted/sent prefix counters of one address family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PrefixCounters {
    #[serde(rename = "received_prefixes")]
    pub received: u64,
    #[serde(rename = "accepted_prefixes")]
    pub accepted: u64,
    #[serde(rename = "sent_prefixes")]
    pub sent: u64,
}

/// One peer row of `show router bgp summary`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BgpNeighborSummaryFact {
    /// Peer address (key).
    #[serde(rename = "remote_id")]
    pub peer: String,

    pub local_as: u32,
    pub remote_as: u32,
    pub router_id: String,
    pub uptime: String,
    pub is_enabled: bool,
    pub is_up: bool,
    #[serde(rename = "bgp_state")]
    pub connection_state: String,
    pub address_family: IndexMap<String, PrefixCounters>,
}

/// Session detail for one neighbor from `show router bgp neighbor <ip>
/// detail`, plus the policies of its configuration context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BgpNeighborDetailFact {
    /// Peer address (key).
    pub router_id: String,

    pub is_up: bool,
    pub local_as: u32,
    pub remote_as: u32,
    pub local_address: String,
    pub remote_address: String,
    pub local_port: u16,
    pub multihop: bool,
    pub multihop_ttl: u32,
    pub multipath: bool,
    pub remove_private_as: bool,
    pub import_policy: Vec<String>,
    pub export_policy: Vec<String>,
    pub input_messages: u64,
    pub output_messages: u64,
    pub input_updates: u64,
    pub output_updates: u64,
    pub messages_queued_out: u64,
    pub connection_state: String,
    pub previous_connection_state: String,
    pub last_event: String,
    pub holdtime: u32,
    pub keepalive: u32,
    pub active_prefix_count: u64,
    pub active_pfx_vpn_ipv4_count: u64,
    pub receive_prefix_count: u64,
    pub receive_pfx_vpn_ipv4_count: u64,
    pub suppressed_prefix_count: u64,
    pub suppressed_pfx_count_vpn_ipv4: u64,
    pub flap_count: u64,

    /// Group the neighbor belongs to; its policies are read from there.
    #[serde(rename = "bgp_group")]
    pub group: String,
}

/// Result of a BGP configuration query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BgpConfig {
    /// The requested group, with its neighbors attached.
    Group(BgpGroupFact),

    /// The requested neighbor.
    Neighbor(BgpNeighborFact),

    /// Every group, keyed by name.
    All(IndexMap<String, BgpGroupFact>),
}

impl BgpConfig {
    /// The group map, when no single record was selected.
    pub fn groups(&self) -> Option<&IndexMap<String, BgpGroupFact>> {
        match self {
            Self::All(groups) => Some(groups),
            _ => None,
        }
    }
}
