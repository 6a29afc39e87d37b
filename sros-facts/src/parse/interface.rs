//! `show router interface` table.
//!
//! ```text
//! Interface-Name                   Adm       Opr(v4/v6)  Mode    Port/SapId
//!    IP-Address                                                  PfxState
//! -------------------------------------------------------------------------------
//! system                           Up        Up/Down     Network system
//!    10.20.1.1/32                                                n/a
//! to-core                          Up        Up/Down     Network 1/1/1
//!    192.168.1.1/30                                              n/a
//! -------------------------------------------------------------------------------
//! ```
//!
//! Each interface is a row starting in column 0 plus its indented address
//! lines.

use std::sync::LazyLock;

use indexmap::IndexMap;
use log::debug;
use regex::Regex;

use super::collect_keyed;
use crate::error::{ParseError, Result};
use crate::facts::InterfaceFact;
use crate::text::{ColumnSchema, Field, split, table_body};

/// Column layout of the interface table header row.
pub static INTERFACE_COLUMNS: LazyLock<ColumnSchema> = LazyLock::new(|| {
    ColumnSchema::new()
        .bounded("name", 0..33, r"^(.{1,32})")
        .bounded("admin", 33..43, r"(\w+)")
        .bounded("ipv4", 43..55, r"^(\w+)")
        .bounded("ipv6", 43..55, r"^\w+/(\w+)")
        .bounded("mode", 55..63, r"(\w+)")
        .column("link_to", 63, r"^(.+)")
});

static ROW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\w").expect("row anchor"));

static IP_PREFIX: LazyLock<Field> =
    LazyLock::new(|| Field::new(r"\s(\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}/\d{1,2})"));

/// Build one interface from its row section.
pub fn interface(section: &str) -> Result<InterfaceFact> {
    let row = section.lines().next().unwrap_or_default();
    let columns = &*INTERFACE_COLUMNS;

    let name = columns.text(row, "name");
    if name.is_empty() {
        return Err(ParseError::MissingKey {
            entity: "interface",
            field: "name",
        });
    }

    Ok(InterfaceFact {
        name,
        admin_status: columns.text(row, "admin"),
        ipv4_status: columns.text(row, "ipv4"),
        ipv6_status: columns.text(row, "ipv6"),
        mode: columns.text(row, "mode"),
        link_to: columns.text(row, "link_to"),
        ip_address: IP_PREFIX.capture(section).map(str::to_string),
    })
}

/// Build every interface listed in the transcript, keyed by name.
pub fn interfaces(transcript: &str) -> IndexMap<String, InterfaceFact> {
    let body = table_body(transcript).unwrap_or_default();
    let rows = split(body, &ROW);
    debug!("interface table: {} rows", rows.len());

    collect_keyed(rows.iter().map(|row| interface(row.text)), |f| {
        f.name.clone()
    })
}
