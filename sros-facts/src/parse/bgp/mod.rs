//! BGP builders: configured groups and neighbors, the session summary,
//! per-neighbor detail and configured policies.

pub mod detail;
pub mod group;
pub mod neighbor;
pub mod policy;
pub mod summary;

pub use detail::neighbor_detail;
pub use group::{group, groups};
pub use neighbor::{neighbor, neighbors};
pub use policy::{PolicyDirection, policies};
pub use summary::{peer_addresses, summary, summary_row};

/// Labels printed by several BGP show commands.
pub(crate) mod labels {
    use std::sync::LazyLock;

    use crate::text::Field;

    pub static GROUP: LazyLock<Field> = LazyLock::new(|| Field::new(r"(?m)^Group[ \t]+:[ \t]*(.*)$"));
    pub static PEER: LazyLock<Field> =
        LazyLock::new(|| Field::new(r"(?m)^Peer[ \t]+:[ \t]*(\d+\.\d+\.\d+\.\d+)"));
    pub static DESCRIPTION: LazyLock<Field> = LazyLock::new(|| Field::new(r"Description\s+:[ \t]*(.*)"));
    pub static IMPORT_POLICY: LazyLock<Field> =
        LazyLock::new(|| Field::new(r"Import Policy\s+:[ \t]*(.*)"));
    pub static EXPORT_POLICY: LazyLock<Field> =
        LazyLock::new(|| Field::new(r"Export Policy\s+:[ \t]*(.*)"));
    pub static LOCAL_ADDRESS: LazyLock<Field> =
        LazyLock::new(|| Field::new(r"Local Address\s+:[ \t]*(\d+\.\d+\.\d+\.\d+)"));
    pub static LOCAL_AS: LazyLock<Field> = LazyLock::new(|| Field::new(r"Local AS\s+:[ \t]*(\S+)"));
    pub static PEER_AS: LazyLock<Field> = LazyLock::new(|| Field::new(r"Peer AS\s+:[ \t]*(\S+)"));
    pub static REMOVE_PRIVATE: LazyLock<Field> =
        LazyLock::new(|| Field::new(r"Remove Private\s+:[ \t]*(\S+)"));
    pub static PREFIX_LIMIT: LazyLock<Field> =
        LazyLock::new(|| Field::new(r"Prefix Limit\s+:[ \t]*(\S+)"));
    pub static MULTIHOP: LazyLock<Field> = LazyLock::new(|| Field::new(r"Multihop\s+:[ \t]*(\d+)"));
}
