//! System identity from `show system information` and `show chassis`.

use std::sync::LazyLock;

use crate::facts::SystemFacts;
use crate::text::Field;

static HOSTNAME: LazyLock<Field> = LazyLock::new(|| Field::new(r"System Name\s+:[ \t]*(.*)"));
static MODEL: LazyLock<Field> = LazyLock::new(|| Field::new(r"System Type\s+:[ \t]*(.*)"));
static SERIAL: LazyLock<Field> = LazyLock::new(|| Field::new(r"Serial number\s+:[ \t]*(.*)"));
static VERSION: LazyLock<Field> = LazyLock::new(|| Field::new(r"System Version\s+:[ \t]*(.*)"));
// Value is followed by the "(hr:min:sec)" legend.
static UPTIME: LazyLock<Field> =
    LazyLock::new(|| Field::new(r"System Up Time\s+:[ \t]*([^(\n]*)"));

/// Build the system facts from one compound transcript.
///
/// The first `Serial number` printed belongs to the chassis; cards listed
/// by `show chassis detail` come after it.
pub fn system_facts(transcript: &str, vendor: &str, interface_list: Vec<String>) -> SystemFacts {
    let hostname = HOSTNAME.text(transcript);
    SystemFacts {
        vendor: vendor.to_string(),
        model: MODEL.text(transcript),
        serial_number: SERIAL.text(transcript),
        os_version: VERSION.text(transcript),
        fqdn: hostname.clone(),
        hostname,
        uptime: UPTIME.text(transcript),
        interface_list,
    }
}
