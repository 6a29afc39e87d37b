//! Command text for SR OS Classic CLI.

/// Normalize an optional VRF: blank means the base router.
pub(crate) fn vrf(vrf: Option<&str>) -> Option<&str> {
    vrf.map(str::trim).filter(|v| !v.is_empty())
}

/// `/show router [vrf] <rest>`, without a doubled space for the base router.
pub(crate) fn show_router(vrf: Option<&str>, rest: &str) -> String {
    match self::vrf(vrf) {
        Some(vrf) => format!("/show router {vrf} {rest}"),
        None => format!("/show router {rest}"),
    }
}

pub(crate) fn interfaces() -> String {
    show_router(None, "interface exclude-services")
}

pub(crate) fn arp() -> String {
    show_router(None, "arp")
}

/// One compound command collecting every system identity label.
pub(crate) fn system() -> String {
    let info = |label: &str| format!("/show system information | match \"{label}\"");
    [
        info("System Name"),
        info("System Type"),
        "/show chassis".to_string(),
        "/show chassis detail".to_string(),
        info("System Version"),
        info("System Up Time"),
    ]
    .join("\n")
}

pub(crate) fn bgp_neighbors(vrf: Option<&str>) -> String {
    show_router(vrf, "bgp neighbor")
}

pub(crate) fn bgp_groups(vrf: Option<&str>) -> String {
    show_router(vrf, "bgp group")
}

pub(crate) fn bgp_summary(vrf: Option<&str>) -> String {
    show_router(vrf, "bgp summary")
}

pub(crate) fn bgp_neighbor_detail(vrf: Option<&str>, neighbor: &str) -> String {
    show_router(vrf, &format!("bgp neighbor {neighbor} detail"))
}

/// Enter the neighbor's configuration context, print it, and return to
/// the root context.
pub(crate) fn bgp_neighbor_info(vrf: Option<&str>, group: &str, neighbor: &str) -> String {
    let context = match self::vrf(vrf) {
        Some(vrf) => format!("/configure service vprn {vrf} bgp"),
        None => "/configure router bgp".to_string(),
    };
    format!("{context} group \"{group}\" neighbor {neighbor}\ninfo\nexit all")
}
