//! `show router bgp summary`.
//!
//! ```text
//!  BGP Router ID:10.20.1.1        AS:100         Local AS:100
//! ...
//! Neighbor
//! Description
//!                    AS PktRcvd InQ  Up/Down   State|Rcv/Act/Sent (Addr Family)
//!                       PktSent OutQ
//! -------------------------------------------------------------------------------
//! 10.20.1.2
//!                   200    1032    0 08h33m36s 1/1/1 (IPv4)
//!                          1033    0           4/2/3 (VpnIPv4)
//! 10.20.1.3
//!                   300       0    0 01d02h03m Active
//!                             0    0
//! ```
//!
//! A peer that is up shows `received/accepted/sent` counters per address
//! family; otherwise the state follows the up/down timer.

use std::sync::LazyLock;

use indexmap::IndexMap;
use log::debug;
use regex::Regex;

use crate::error::{ParseError, Result};
use crate::facts::{BgpNeighborSummaryFact, PrefixCounters};
use crate::parse::collect_keyed;
use crate::text::{Field, split};

/// Anchor opening each peer row: an address in column 0.
pub static PEER_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(\d+\.\d+\.\d+\.\d+)").expect("peer row anchor"));

static PEER: LazyLock<Field> = LazyLock::new(|| Field::new(r"^(\d+\.\d+\.\d+\.\d+)"));
static LOCAL_AS: LazyLock<Field> = LazyLock::new(|| Field::new(r"Local AS:\s*(\d+)"));
static ROUTER_ID: LazyLock<Field> =
    LazyLock::new(|| Field::new(r"BGP Router ID:\s*(\d+\.\d+\.\d+\.\d+)"));
// AS, PktRcvd and InQ columns.
static REMOTE_AS: LazyLock<Field> =
    LazyLock::new(|| Field::new(r"(?m)^[ \t]+(\d+)[ \t]+\d+[ \t]+\d+[ \t]"));
static SHUTDOWN: LazyLock<Field> = LazyLock::new(|| Field::new(r"(Shutdown)"));
// Up/Down timer: `08h33m36s`, `01d02h03m`, `1y012d04h`.
const TIMER: &str = r"\d+[ydhms](?:\d{2,3}[dhms]){2}";
static UPTIME: LazyLock<Field> = LazyLock::new(|| Field::new(&format!("({TIMER})")));
static STATE: LazyLock<Field> =
    LazyLock::new(|| Field::new(&format!(r"{TIMER}[ \t]+(\w+)")));
static PREFIXES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)/(\d+)/(\d+)").expect("prefix counters"));
static FAMILY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)/(\d+)/(\d+)[ \t]*\(([^)]*)\)").expect("family counters")
});

/// Values printed once per summary, shared by every peer row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryHeader {
    pub local_as: u32,
    pub router_id: String,
}

impl SummaryHeader {
    /// Read the header labels from the whole transcript.
    pub fn parse(transcript: &str) -> Self {
        Self {
            local_as: LOCAL_AS.number(transcript),
            router_id: ROUTER_ID.text(transcript),
        }
    }
}

/// Build one peer from its summary row section.
pub fn summary_row(section: &str, header: &SummaryHeader) -> Result<BgpNeighborSummaryFact> {
    let peer = PEER.text(section);
    if peer.is_empty() {
        return Err(ParseError::MissingKey {
            entity: "bgp summary",
            field: "peer",
        });
    }

    let is_enabled = !SHUTDOWN.flag(section);
    let is_up = PREFIXES.is_match(section);
    let connection_state = if is_up {
        "Established".to_string()
    } else {
        STATE.text(section)
    };

    let mut address_family = IndexMap::new();
    if is_enabled {
        for line in section.lines().skip(1) {
            if let Some(caps) = FAMILY.captures(line) {
                let count = |i: usize| -> u64 {
                    caps.get(i)
                        .and_then(|m| m.as_str().parse().ok())
                        .unwrap_or(0)
                };
                let family = caps.get(4).map_or("", |m| m.as_str().trim());
                address_family.insert(
                    family.to_string(),
                    PrefixCounters {
                        received: count(1),
                        accepted: count(2),
                        sent: count(3),
                    },
                );
            }
        }
    }

    Ok(BgpNeighborSummaryFact {
        peer,
        local_as: header.local_as,
        remote_as: REMOTE_AS.number(section),
        router_id: header.router_id.clone(),
        uptime: UPTIME.text(section),
        is_enabled,
        is_up,
        connection_state,
        address_family,
    })
}

/// Build every peer in the summary, keyed by address.
pub fn summary(transcript: &str) -> IndexMap<String, BgpNeighborSummaryFact> {
    let header = SummaryHeader::parse(transcript);
    let rows = split(transcript, &PEER_ROW);
    debug!("bgp summary: {} peer rows", rows.len());

    collect_keyed(rows.iter().map(|row| summary_row(row.text, &header)), |n| {
        n.peer.clone()
    })
}

/// Peer addresses in the order the summary lists them, duplicates kept.
pub fn peer_addresses(transcript: &str) -> Vec<String> {
    split(transcript, &PEER_ROW)
        .iter()
        .map(|s| s.anchor.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUMMARY: &str = "\
===============================================================================
 BGP Router ID:10.20.1.1        AS:100         Local AS:100
===============================================================================
BGP Admin State         : Up          BGP Oper State              : Up
Total Peer Groups       : 2           Total Peers                 : 3
===============================================================================
BGP Summary
===============================================================================
Neighbor
Description
                   AS PktRcvd InQ  Up/Down   State|Rcv/Act/Sent (Addr Family)
                      PktSent OutQ
-------------------------------------------------------------------------------
10.20.1.2
core-1
                  200    1032    0 08h33m36s 1/1/1 (IPv4)
                         1033    0           4/2/3 (VpnIPv4)
10.20.1.3
                  300       0    0 01d02h03m Active
                            0    0
10.20.1.4
                  400       0    0 00h10m05s Shutdown
                            0    0
-------------------------------------------------------------------------------
";

    #[test]
    fn test_header() {
        let header = SummaryHeader::parse(SUMMARY);
        assert_eq!(header.local_as, 100);
        assert_eq!(header.router_id, "10.20.1.1");
    }

    #[test]
    fn test_established_peer() {
        let peers = summary(SUMMARY);
        assert_eq!(peers.len(), 3);

        let p = &peers["10.20.1.2"];
        assert_eq!(p.local_as, 100);
        assert_eq!(p.remote_as, 200);
        assert_eq!(p.router_id, "10.20.1.1");
        assert_eq!(p.uptime, "08h33m36s");
        assert!(p.is_enabled);
        assert!(p.is_up);
        assert_eq!(p.connection_state, "Established");
        assert_eq!(
            p.address_family["IPv4"],
            PrefixCounters {
                received: 1,
                accepted: 1,
                sent: 1
            }
        );
        assert_eq!(
            p.address_family["VpnIPv4"],
            PrefixCounters {
                received: 4,
                accepted: 2,
                sent: 3
            }
        );
    }

    #[test]
    fn test_down_peer() {
        let peers = summary(SUMMARY);
        let p = &peers["10.20.1.3"];
        assert_eq!(p.remote_as, 300);
        assert!(p.is_enabled);
        assert!(!p.is_up);
        assert_eq!(p.uptime, "01d02h03m");
        assert_eq!(p.connection_state, "Active");
        assert!(p.address_family.is_empty());
    }

    #[test]
    fn test_shutdown_peer() {
        let peers = summary(SUMMARY);
        let p = &peers["10.20.1.4"];
        assert!(!p.is_enabled);
        assert!(!p.is_up);
        assert_eq!(p.connection_state, "Shutdown");
    }

    #[test]
    fn test_year_long_timer() {
        let text = "10.20.1.5\n                  500       0    0 1y012d04h Active\n";
        let peers = summary(text);
        let p = &peers["10.20.1.5"];
        assert_eq!(p.remote_as, 500);
        assert_eq!(p.uptime, "1y012d04h");
        assert_eq!(p.connection_state, "Active");
        assert!(!p.is_up);

        let text = "10.20.1.6\n                  600     100    0 2y100d23h 3/2/1 (IPv4)\n";
        let p = &summary(text)["10.20.1.6"];
        assert_eq!(p.uptime, "2y100d23h");
        assert_eq!(p.connection_state, "Established");
        assert_eq!(p.address_family["IPv4"].received, 3);
    }

    #[test]
    fn test_router_id_is_not_a_peer() {
        assert_eq!(
            peer_addresses(SUMMARY),
            vec!["10.20.1.2", "10.20.1.3", "10.20.1.4"]
        );
    }

    #[test]
    fn test_empty_summary() {
        assert!(summary("").is_empty());
        assert!(peer_addresses("").is_empty());
    }
}
