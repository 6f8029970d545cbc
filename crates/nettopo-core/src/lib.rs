//! nettopo-core — local network topology discovery.
//!
//! Provides:
//! - `collector` — raw interface/route/neighbor data via iproute2,
//!   behind a mockable command-runner seam
//! - `analysis` — pure raw-data → [`model::Topology`] transformation
//! - `metrics` — pure topology → gauge-sample projection
//! - `api` — node-graph formatting and the static field schema
//! - `model` — the shared topology data model
//!
//! Everything outside `collector` is side-effect free; the daemon
//! wires the pieces to its listeners and refresh task.

pub mod analysis;
pub mod api;
pub mod collector;
pub mod metrics;
pub mod model;

pub use analysis::analyze;
pub use model::{Link, LinkKind, Topology};

/// Crate version, exposed for startup logging and CLI `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
