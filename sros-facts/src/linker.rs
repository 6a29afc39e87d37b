//! Cross-references between BGP groups and neighbors.

use indexmap::IndexMap;
use log::debug;

use crate::facts::{BgpConfig, BgpGroupFact, BgpNeighborFact};

/// Attach every neighbor to the group it names.
///
/// Matching is exact string equality on the group name. Neighbors naming an
/// unknown group stay unattached. Scalar fields of the groups are left as
/// they are.
pub fn link(
    groups: &mut IndexMap<String, BgpGroupFact>,
    neighbors: &IndexMap<String, BgpNeighborFact>,
) {
    for (name, group) in groups.iter_mut() {
        group.neighbors = neighbors
            .iter()
            .filter(|(_, n)| n.group == *name)
            .map(|(peer, n)| (peer.clone(), n.clone()))
            .collect();
        debug!("bgp group {}: {} neighbors", name, group.neighbors.len());
    }
}

/// Pick what a configuration query asked for.
///
/// A known group name wins, then a known neighbor address; otherwise (or
/// when neither is given) the whole group map is returned.
pub fn select(
    mut groups: IndexMap<String, BgpGroupFact>,
    mut neighbors: IndexMap<String, BgpNeighborFact>,
    group: Option<&str>,
    neighbor: Option<&str>,
) -> BgpConfig {
    if let Some(found) = group.and_then(|g| groups.swap_remove(g)) {
        return BgpConfig::Group(found);
    }
    if let Some(found) = neighbor.and_then(|n| neighbors.swap_remove(n)) {
        return BgpConfig::Neighbor(found);
    }
    BgpConfig::All(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbor(peer: &str, group: &str) -> BgpNeighborFact {
        BgpNeighborFact {
            peer: peer.into(),
            group: group.into(),
            remote_as: 200,
            ..Default::default()
        }
    }

    fn group(name: &str) -> BgpGroupFact {
        BgpGroupFact {
            name: name.into(),
            local_as: 100,
            ..Default::default()
        }
    }

    fn fixture() -> (
        IndexMap<String, BgpGroupFact>,
        IndexMap<String, BgpNeighborFact>,
    ) {
        let groups = [group("EXTERNAL"), group("INTERNAL")]
            .into_iter()
            .map(|g| (g.name.clone(), g))
            .collect();
        let neighbors = [
            neighbor("10.0.0.1", "EXTERNAL"),
            neighbor("10.0.0.2", "EXTERNAL"),
            neighbor("10.0.0.3", "external"),
        ]
        .into_iter()
        .map(|n| (n.peer.clone(), n))
        .collect();
        (groups, neighbors)
    }

    #[test]
    fn test_link_by_group_name() {
        let (mut groups, neighbors) = fixture();
        link(&mut groups, &neighbors);

        let ext = &groups["EXTERNAL"];
        assert_eq!(
            ext.neighbors.keys().collect::<Vec<_>>(),
            vec!["10.0.0.1", "10.0.0.2"]
        );
        assert_eq!(ext.neighbors["10.0.0.1"], neighbors["10.0.0.1"]);
        assert_eq!(ext.local_as, 100);
        // Matching is case sensitive.
        assert!(groups["INTERNAL"].neighbors.is_empty());
    }

    #[test]
    fn test_link_twice_is_stable() {
        let (mut groups, neighbors) = fixture();
        link(&mut groups, &neighbors);
        let once = groups.clone();
        link(&mut groups, &neighbors);
        assert_eq!(groups, once);
    }

    #[test]
    fn test_select_group() {
        let (groups, neighbors) = fixture();
        match select(groups, neighbors, Some("INTERNAL"), Some("10.0.0.1")) {
            BgpConfig::Group(g) => assert_eq!(g.name, "INTERNAL"),
            other => panic!("expected group, got {other:?}"),
        }
    }

    #[test]
    fn test_select_neighbor() {
        let (groups, neighbors) = fixture();
        match select(groups, neighbors, Some("MISSING"), Some("10.0.0.2")) {
            BgpConfig::Neighbor(n) => assert_eq!(n.peer, "10.0.0.2"),
            other => panic!("expected neighbor, got {other:?}"),
        }
    }

    #[test]
    fn test_select_all() {
        let (groups, neighbors) = fixture();
        let config = select(groups, neighbors, None, Some("10.9.9.9"));
        let all = config.groups().unwrap();
        assert_eq!(all.len(), 2);
    }
}
