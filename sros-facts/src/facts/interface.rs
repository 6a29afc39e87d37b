//! Router interface facts.

use serde::Serialize;

/// One row of `show router interface`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InterfaceFact {
    /// Interface name (key).
    pub name: String,

    /// Administrative state (`Up`/`Down`).
    pub admin_status: String,

    /// IPv4 operational state.
    pub ipv4_status: String,

    /// IPv6 operational state; empty when the table shows no v6 column.
    pub ipv6_status: String,

    /// Interface mode (`Network`, ...).
    pub mode: String,

    /// Port or SAP the interface is bound to.
    pub link_to: String,

    /// First IPv4 prefix (`a.b.c.d/n`) listed for the interface.
    pub ip_address: Option<String>,
}
