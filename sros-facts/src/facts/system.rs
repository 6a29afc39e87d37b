//! Chassis and system identity.

use serde::Serialize;

/// Identity of the device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SystemFacts {
    pub vendor: String,
    pub model: String,
    pub serial_number: String,
    pub os_version: String,
    pub hostname: String,
    pub fqdn: String,

    /// Uptime as printed (`62 days, 14:58:54.71`).
    pub uptime: String,

    /// Router interface names, in table order.
    pub interface_list: Vec<String>,
}
