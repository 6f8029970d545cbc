//! In-memory mock runner for testing collectors without iproute2.
//!
//! `MockRunner` maps a command line to canned stdout, allowing tests
//! to simulate any host state (or broken tooling) on any platform.

use std::collections::HashMap;
use std::io;

use crate::collector::runner::CommandRunner;

/// Canned-output command runner for tests.
#[derive(Debug, Clone, Default)]
pub struct MockRunner {
    /// Map from full command line ("ip -j addr") to stdout.
    outputs: HashMap<String, String>,
    /// Command lines that fail to spawn.
    failing: Vec<String>,
}

impl MockRunner {
    /// Creates a runner with no commands registered. Unregistered
    /// commands fail like a missing binary would.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers stdout for a command line.
    pub fn with_output(mut self, command_line: impl Into<String>, stdout: impl Into<String>) -> Self {
        self.outputs.insert(command_line.into(), stdout.into());
        self
    }

    /// Marks a command line as failing to spawn.
    pub fn with_failure(mut self, command_line: impl Into<String>) -> Self {
        self.failing.push(command_line.into());
        self
    }

    /// A small dual-interface host: loopback plus eth0 with one
    /// address, one ARP neighbor and a default route.
    pub fn typical_host() -> Self {
        Self::new()
            .with_output(
                "ip -j addr",
                r#"[
                  {"ifname": "lo", "addr_info": [
                    {"family": "inet", "local": "127.0.0.1"},
                    {"family": "inet6", "local": "::1"}
                  ]},
                  {"ifname": "eth0", "addr_info": [
                    {"family": "inet", "local": "10.0.0.1"},
                    {"family": "inet6", "local": "fe80::1"}
                  ]}
                ]"#,
            )
            .with_output(
                "ip -j route",
                r#"[
                  {"dst": "default", "gateway": "10.0.0.254", "dev": "eth0"},
                  {"dst": "10.0.0.0/24", "dev": "eth0", "scope": "link"}
                ]"#,
            )
            .with_output(
                "ip -j neigh",
                r#"[
                  {"dst": "10.0.0.5", "dev": "eth0", "lladdr": "52:54:00:12:34:56", "state": ["REACHABLE"]},
                  {"dst": "10.0.0.254", "dev": "eth0", "lladdr": "52:54:00:ab:cd:ef", "state": ["STALE"]}
                ]"#,
            )
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<String> {
        let mut command_line = program.to_string();
        for arg in args {
            command_line.push(' ');
            command_line.push_str(arg);
        }

        if self.failing.contains(&command_line) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("mock: {command_line} configured to fail"),
            ));
        }

        self.outputs
            .get(&command_line)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("mock: no output for {command_line}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_command_fails() {
        let runner = MockRunner::new();
        assert!(runner.run("ip", &["-j", "addr"]).is_err());
    }

    #[test]
    fn registered_command_returns_output() {
        let runner = MockRunner::new().with_output("ip -j neigh", "[]");
        assert_eq!(runner.run("ip", &["-j", "neigh"]).unwrap(), "[]");
    }
}
