//! Scripted session shared by the integration tests.

#![allow(dead_code)]

use std::io;

use sros_facts::CommandSession;

pub const INTERFACES: &str = include_str!("../fixtures/interfaces.txt");
pub const ARP: &str = include_str!("../fixtures/arp.txt");
pub const SYSTEM: &str = include_str!("../fixtures/system.txt");
pub const BGP_NEIGHBOR: &str = include_str!("../fixtures/bgp_neighbor.txt");
pub const BGP_GROUP: &str = include_str!("../fixtures/bgp_group.txt");
pub const BGP_SUMMARY: &str = include_str!("../fixtures/bgp_summary.txt");
pub const BGP_DETAIL: &str = include_str!("../fixtures/bgp_detail.txt");
pub const BGP_INFO: &str = include_str!("../fixtures/bgp_info.txt");

/// Answers each command with the first scripted reply whose trigger it
/// contains, and records everything sent.
#[derive(Default)]
pub struct ScriptedSession {
    script: Vec<(String, Reply)>,
    pub sent: Vec<String>,
}

enum Reply {
    Text(String),
    Fail(io::ErrorKind),
}

impl ScriptedSession {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self::default()
    }

    /// Reply with `text` to commands containing `trigger`.
    pub fn on(mut self, trigger: &str, text: &str) -> Self {
        self.script
            .push((trigger.to_string(), Reply::Text(text.to_string())));
        self
    }

    /// Fail commands containing `trigger`.
    pub fn fail(mut self, trigger: &str, kind: io::ErrorKind) -> Self {
        self.script.push((trigger.to_string(), Reply::Fail(kind)));
        self
    }

    /// A session scripted with every fixture for the base router.
    pub fn device() -> Self {
        Self::new()
            .on("interface exclude-services", INTERFACES)
            .on("/show router arp", ARP)
            .on("/show system information", SYSTEM)
            .on("bgp neighbor 10.20.1.2 detail", BGP_DETAIL)
            .on("bgp neighbor 10.20.1.3 detail", "MINOR: CLI Peer 10.20.1.3 is not up.\n")
            .on("group \"EXTERNAL\" neighbor 10.20.1.2", BGP_INFO)
            .on("bgp neighbor", BGP_NEIGHBOR)
            .on("bgp group", BGP_GROUP)
            .on("bgp summary", BGP_SUMMARY)
    }

    /// Sent commands with the paging prefix removed.
    pub fn commands(&self) -> Vec<&str> {
        self.sent
            .iter()
            .map(|c| {
                c.strip_prefix("/environment no more\n")
                    .unwrap_or(c)
                    .trim_end()
            })
            .collect()
    }
}

impl CommandSession for ScriptedSession {
    type Error = io::Error;

    async fn command(&mut self, command: &str) -> Result<String, io::Error> {
        self.sent.push(command.to_string());
        match self.script.iter().find(|(t, _)| command.contains(t.as_str())) {
            Some((_, Reply::Text(text))) => Ok(text.clone()),
            Some((_, Reply::Fail(kind))) => Err(io::Error::new(*kind, "scripted failure")),
            None => Ok(String::new()),
        }
    }
}
