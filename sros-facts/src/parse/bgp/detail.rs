//! `show router bgp neighbor <ip> detail`.

use std::sync::LazyLock;

use super::labels;
use crate::error::{ParseError, Result};
use crate::facts::BgpNeighborDetailFact;
use crate::text::Field;

static STATE: LazyLock<Field> = LazyLock::new(|| Field::new(r"(?m)^State\s+:[ \t]*(\w+)"));
static LAST_STATE: LazyLock<Field> = LazyLock::new(|| Field::new(r"Last State\s+:[ \t]*(\w+)"));
static LAST_EVENT: LazyLock<Field> = LazyLock::new(|| Field::new(r"Last Event\s+:[ \t]*(\w+)"));
static PEER_ADDRESS: LazyLock<Field> =
    LazyLock::new(|| Field::new(r"Peer Address\s+:[ \t]*(\d+\.\d+\.\d+\.\d+)"));
static LOCAL_PORT: LazyLock<Field> = LazyLock::new(|| Field::new(r"Local Port\s+:[ \t]*(\d+)"));
static ADDPATH: LazyLock<Field> =
    LazyLock::new(|| Field::new(r"Local AddPath[^:\n]*:[ \t]*(\w+)"));
static INPUT_MESSAGES: LazyLock<Field> =
    LazyLock::new(|| Field::new(r"i/p Messages\s+:[ \t]*(\d+)"));
static OUTPUT_MESSAGES: LazyLock<Field> =
    LazyLock::new(|| Field::new(r"o/p Messages\s+:[ \t]*(\d+)"));
static INPUT_UPDATES: LazyLock<Field> = LazyLock::new(|| Field::new(r"i/p Updates\s+:[ \t]*(\d+)"));
static OUTPUT_UPDATES: LazyLock<Field> =
    LazyLock::new(|| Field::new(r"o/p Updates\s+:[ \t]*(\d+)"));
static OUTPUT_QUEUE: LazyLock<Field> =
    LazyLock::new(|| Field::new(r"Output Queue\s+:[ \t]*(\d+)"));
// "Active Hold Time" and friends come later; only the configured timers count.
static HOLD_TIME: LazyLock<Field> = LazyLock::new(|| Field::new(r"(?m)^Hold Time\s+:[ \t]*(\d+)"));
// Bare label at line start or in the right-hand column, not "Min"/"Active".
static KEEP_ALIVE: LazyLock<Field> =
    LazyLock::new(|| Field::new(r"(?m)(?:^|[ \t]{2,})Keep Alive\s+:[ \t]*(\d+)"));
static ACTIVE_IPV4: LazyLock<Field> =
    LazyLock::new(|| Field::new(r"(?m)(?:^|[ \t])IPv4 Active Prefixes\s+:[ \t]*(\d+)"));
static ACTIVE_VPN_IPV4: LazyLock<Field> =
    LazyLock::new(|| Field::new(r"VPN-IPv4 Active Pfxs\s+:[ \t]*(\d+)"));
static RECEIVED_IPV4: LazyLock<Field> =
    LazyLock::new(|| Field::new(r"(?m)(?:^|[ \t])IPv4 Recd\. Prefixes\s+:[ \t]*(\d+)"));
static RECEIVED_VPN_IPV4: LazyLock<Field> =
    LazyLock::new(|| Field::new(r"VPN-IPv4 Recd\. Pfxs\s+:[ \t]*(\d+)"));
static SUPPRESSED_IPV4: LazyLock<Field> =
    LazyLock::new(|| Field::new(r"(?m)(?:^|[ \t])IPv4 Suppressed Pfxs\s+:[ \t]*(\d+)"));
static SUPPRESSED_VPN_IPV4: LazyLock<Field> =
    LazyLock::new(|| Field::new(r"VPN-IPv4 Suppr\. Pfxs\s+:[ \t]*(\d+)"));
static FLAPS: LazyLock<Field> =
    LazyLock::new(|| Field::new(r"Num of Update Flaps\s+:[ \t]*(\d+)"));

/// Build the detail record of one neighbor.
///
/// `multipath` and `remove_private_as` are read from `Disabled`-valued
/// labels and inverted: they are true unless the device prints `Disabled`.
/// Policies are left empty; they live in the neighbor's configuration and
/// are filled in by the caller.
pub fn neighbor_detail(transcript: &str) -> Result<BgpNeighborDetailFact> {
    let peer = labels::PEER.text(transcript);
    if peer.is_empty() {
        return Err(ParseError::MissingKey {
            entity: "bgp neighbor detail",
            field: "peer",
        });
    }

    let connection_state = STATE.text(transcript);
    let multihop_ttl: u32 = labels::MULTIHOP.number(transcript);

    Ok(BgpNeighborDetailFact {
        router_id: peer,
        is_up: connection_state == "Established",
        local_as: labels::LOCAL_AS.number(transcript),
        remote_as: labels::PEER_AS.number(transcript),
        local_address: labels::LOCAL_ADDRESS.text(transcript),
        remote_address: PEER_ADDRESS.text(transcript),
        local_port: LOCAL_PORT.number(transcript),
        multihop: multihop_ttl > 0,
        multihop_ttl,
        multipath: ADDPATH.inverted_flag(transcript),
        remove_private_as: labels::REMOVE_PRIVATE.inverted_flag(transcript),
        import_policy: Vec::new(),
        export_policy: Vec::new(),
        input_messages: INPUT_MESSAGES.number(transcript),
        output_messages: OUTPUT_MESSAGES.number(transcript),
        input_updates: INPUT_UPDATES.number(transcript),
        output_updates: OUTPUT_UPDATES.number(transcript),
        messages_queued_out: OUTPUT_QUEUE.number(transcript),
        connection_state,
        previous_connection_state: LAST_STATE.text(transcript),
        last_event: LAST_EVENT.text(transcript),
        holdtime: HOLD_TIME.number(transcript),
        keepalive: KEEP_ALIVE.number(transcript),
        active_prefix_count: ACTIVE_IPV4.number(transcript),
        active_pfx_vpn_ipv4_count: ACTIVE_VPN_IPV4.number(transcript),
        receive_prefix_count: RECEIVED_IPV4.number(transcript),
        receive_pfx_vpn_ipv4_count: RECEIVED_VPN_IPV4.number(transcript),
        suppressed_prefix_count: SUPPRESSED_IPV4.number(transcript),
        suppressed_pfx_count_vpn_ipv4: SUPPRESSED_VPN_IPV4.number(transcript),
        flap_count: FLAPS.number(transcript),
        group: labels::GROUP.text(transcript),
    })
}
