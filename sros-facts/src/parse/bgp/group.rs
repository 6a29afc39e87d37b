//! `show router bgp group` sections.

use std::sync::LazyLock;

use indexmap::IndexMap;
use log::debug;
use regex::Regex;

use super::labels;
use crate::error::{ParseError, Result};
use crate::facts::BgpGroupFact;
use crate::parse::collect_keyed;
use crate::text::{Field, split};

/// Anchor opening each group block.
pub static GROUP_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Group[ \t]+:[ \t]*(.*)$").expect("group anchor"));

static GROUP_TYPE: LazyLock<Field> = LazyLock::new(|| Field::new(r"Group Type\s+:[ \t]*(\w+)"));
static MULTIPATH: LazyLock<Field> = LazyLock::new(|| Field::new(r"Multipath\s+:[ \t]*(\d+)"));

/// Build one group from its section.
pub fn group(section: &str) -> Result<BgpGroupFact> {
    let name = labels::GROUP.text(section);
    if name.is_empty() {
        return Err(ParseError::MissingKey {
            entity: "bgp group",
            field: "name",
        });
    }

    Ok(BgpGroupFact {
        name,
        group_type: GROUP_TYPE.text(section),
        description: labels::DESCRIPTION.text(section),
        multihop_ttl: labels::MULTIHOP.number(section),
        multipath: MULTIPATH.number::<u32>(section) > 1,
        import_policy: labels::IMPORT_POLICY.text(section),
        export_policy: labels::EXPORT_POLICY.text(section),
        local_address: labels::LOCAL_ADDRESS.text(section),
        local_as: labels::LOCAL_AS.number(section),
        remote_as: labels::PEER_AS.number(section),
        remove_private_as: labels::REMOVE_PRIVATE.enabled_flag(section),
        prefix_limit: labels::PREFIX_LIMIT.optional_number(section),
        neighbors: IndexMap::new(),
    })
}

/// Build every group in the transcript, keyed by name.
pub fn groups(transcript: &str) -> IndexMap<String, BgpGroupFact> {
    let sections = split(transcript, &GROUP_ANCHOR);
    debug!("bgp group: {} sections", sections.len());

    collect_keyed(sections.iter().map(|s| group(s.text)), |g| g.name.clone())
}
