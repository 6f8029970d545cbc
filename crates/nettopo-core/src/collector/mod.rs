//! Raw network data collection.
//!
//! The collector runs the three iproute2 queries (`addr`, `route`,
//! `neigh`) through the [`CommandRunner`] seam and hands the tagged
//! output to the analyzer. Use [`IpRunner`] in production and
//! [`MockRunner`] in tests:
//!
//! ```
//! use nettopo_core::collector::{Collector, MockRunner};
//!
//! let collector = Collector::new(MockRunner::typical_host());
//! assert!(!collector.addresses().records().is_empty());
//! ```

#[allow(clippy::module_inception)]
mod collector;
pub mod mock;
pub mod raw;
mod runner;

pub use collector::Collector;
pub use mock::MockRunner;
pub use raw::{AddrInfo, InterfaceRecord, NeighborRecord, RawOutput, RouteRecord};
pub use runner::{CommandRunner, IpRunner};
