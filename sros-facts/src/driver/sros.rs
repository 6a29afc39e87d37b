//! The facts facade.

use indexmap::{IndexMap, IndexSet};
use log::{debug, trace, warn};

use super::commands;
use super::config::FactsConfig;
use super::CommandSession;
use crate::facts::{
    ArpEntryFact, BgpConfig, BgpNeighborDetailFact, BgpNeighborSummaryFact, InterfaceFact,
    SystemFacts,
};
use crate::linker;
use crate::parse::{arp, bgp, interface, system};
use crate::text::clean;

/// Facts retrieval over an open SR OS session.
///
/// Every operation sends its commands, cleans the output and hands it to
/// the builders. Nothing is cached between calls. Session errors are
/// returned unchanged; parse problems never fail an operation, they only
/// drop the affected record.
pub struct SrosFacts<S> {
    session: S,
    config: FactsConfig,
}

impl<S: CommandSession> SrosFacts<S> {
    pub(crate) fn new(session: S, config: FactsConfig) -> Self {
        Self { session, config }
    }

    /// Active configuration.
    pub fn config(&self) -> &FactsConfig {
        &self.config
    }

    /// Borrow the underlying session.
    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    /// Release the underlying session.
    pub fn into_inner(self) -> S {
        self.session
    }

    /// Send one (possibly compound) command and return its cleaned output.
    async fn run(&mut self, command: &str) -> Result<String, S::Error> {
        let text = self.config.compose(command);
        trace!("sending: {:?}", text);

        let raw = self.session.command(&text).await?;
        let output = clean(&raw);
        trace!("received {} bytes", output.len());

        if let Some(marker) = self.config.detect_failure(&output) {
            warn!("device reported '{}' for {:?}", marker, command);
        }
        Ok(output)
    }

    /// Router interfaces keyed by name, in device order.
    pub async fn get_interfaces(&mut self) -> Result<IndexMap<String, InterfaceFact>, S::Error> {
        let output = self.run(&commands::interfaces()).await?;
        Ok(interface::interfaces(&output))
    }

    /// System identity, plus the interface names from [`Self::get_interfaces`].
    pub async fn get_facts(&mut self) -> Result<SystemFacts, S::Error> {
        let output = self.run(&commands::system()).await?;
        let interface_list = self.get_interfaces().await?.into_keys().collect();
        Ok(system::system_facts(&output, &self.config.vendor, interface_list))
    }

    /// The base router's ARP table in device order.
    pub async fn get_arp_table(&mut self) -> Result<Vec<ArpEntryFact>, S::Error> {
        let output = self.run(&commands::arp()).await?;
        Ok(arp::arp_table(&output))
    }

    /// Configured BGP groups with their neighbors attached.
    ///
    /// When `group` names a known group only that group is returned; else
    /// when `neighbor` names a known peer only that neighbor is returned;
    /// otherwise every group.
    pub async fn get_bgp_config(
        &mut self,
        group: Option<&str>,
        neighbor: Option<&str>,
        vrf: Option<&str>,
    ) -> Result<BgpConfig, S::Error> {
        let neighbor_output = self.run(&commands::bgp_neighbors(vrf)).await?;
        let group_output = self.run(&commands::bgp_groups(vrf)).await?;

        let neighbors = bgp::neighbors(&neighbor_output);
        let mut groups = bgp::groups(&group_output);
        linker::link(&mut groups, &neighbors);

        Ok(linker::select(groups, neighbors, group, neighbor))
    }

    /// Session summary keyed by VRF id, then peer address.
    ///
    /// The outer map always holds exactly one entry: `vrf`, or the
    /// configured default id for the base router.
    pub async fn get_bgp_neighbors(
        &mut self,
        vrf: Option<&str>,
    ) -> Result<IndexMap<String, IndexMap<String, BgpNeighborSummaryFact>>, S::Error> {
        let output = self.run(&commands::bgp_summary(vrf)).await?;
        let peers = bgp::summary(&output);

        let vrf_id = commands::vrf(vrf).unwrap_or(self.config.default_vrf_id.as_str());
        let mut out = IndexMap::new();
        out.insert(vrf_id.to_string(), peers);
        Ok(out)
    }

    /// Per-neighbor detail for `neighbor`, or for every summary peer.
    pub async fn get_bgp_config_detail(
        &mut self,
        neighbor: Option<&str>,
        vrf: Option<&str>,
    ) -> Result<IndexMap<String, BgpNeighborDetailFact>, S::Error> {
        // A peer listed twice in the summary is queried once.
        let peers: IndexSet<String> = match neighbor.map(str::trim).filter(|n| !n.is_empty()) {
            Some(peer) => IndexSet::from([peer.to_string()]),
            None => {
                let output = self.run(&commands::bgp_summary(vrf)).await?;
                bgp::peer_addresses(&output).into_iter().collect()
            }
        };
        debug!("bgp detail: {} peers", peers.len());

        let mut out = IndexMap::new();
        for peer in peers {
            let output = self.run(&commands::bgp_neighbor_detail(vrf, &peer)).await?;
            let mut detail = match bgp::neighbor_detail(&output) {
                Ok(detail) => detail,
                Err(e) => {
                    warn!("skipping bgp neighbor {}: {}", peer, e);
                    continue;
                }
            };

            if detail.group.is_empty() {
                debug!("bgp neighbor {} has no group, policies not read", peer);
            } else {
                let info = self
                    .run(&commands::bgp_neighbor_info(vrf, &detail.group, &peer))
                    .await?;
                detail.import_policy = bgp::policies(bgp::PolicyDirection::Import, &info);
                detail.export_policy = bgp::policies(bgp::PolicyDirection::Export, &info);
            }

            out.insert(detail.router_id.clone(), detail);
        }
        Ok(out)
    }
}
