//! Raw network data collection via iproute2.
//!
//! Each call spawns the corresponding `ip -j` subcommand and tags the
//! captured stdout as structured or unstructured. A command that fails
//! to spawn degrades to empty data — the topology just loses that
//! category until the next run. Nothing here retries or times out.

use tracing::warn;

use crate::collector::raw::RawOutput;
use crate::collector::runner::CommandRunner;

const IP: &str = "ip";

/// Collects interface, route and neighbor data from the local host.
///
/// Stateless: every accessor issues its own subprocess call, so one
/// `Collector` can serve the refresh task and request handlers
/// concurrently without locking.
#[derive(Debug, Clone)]
pub struct Collector<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> Collector<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Interface and address data (`ip -j addr`).
    pub fn addresses(&self) -> RawOutput {
        self.fetch(&["-j", "addr"])
    }

    /// Routing table (`ip -j route`).
    pub fn routes(&self) -> RawOutput {
        self.fetch(&["-j", "route"])
    }

    /// Neighbor (ARP) table (`ip -j neigh`).
    pub fn neighbors(&self) -> RawOutput {
        self.fetch(&["-j", "neigh"])
    }

    fn fetch(&self, args: &[&str]) -> RawOutput {
        match self.runner.run(IP, args) {
            Ok(stdout) => RawOutput::parse(&stdout),
            Err(e) => {
                let command = format!("{IP} {}", args.join(" "));
                warn!(command = %command, error = %e, "ip command failed");
                RawOutput::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockRunner;

    #[test]
    fn typical_host_yields_structured_output() {
        let collector = Collector::new(MockRunner::typical_host());
        assert_eq!(collector.addresses().records().len(), 2);
        assert_eq!(collector.routes().records().len(), 2);
        assert_eq!(collector.neighbors().records().len(), 2);
    }

    #[test]
    fn failed_command_degrades_to_empty() {
        let runner = MockRunner::typical_host().with_failure("ip -j route");
        let collector = Collector::new(runner);
        assert!(collector.routes().records().is_empty());
        // The other categories are unaffected.
        assert_eq!(collector.neighbors().records().len(), 2);
    }

    #[test]
    fn unparseable_output_degrades_to_empty() {
        let runner = MockRunner::new().with_output("ip -j addr", "RTNETLINK answers: not supported");
        let collector = Collector::new(runner);
        assert!(collector.addresses().records().is_empty());
    }
}
