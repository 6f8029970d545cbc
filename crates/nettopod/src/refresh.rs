//! Background refresh: periodic topology collection into the gauges.

use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::metrics::TopologyMetrics;
use crate::state::SharedState;

/// Fixed refresh period.
pub(crate) const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Collects and records the topology every [`REFRESH_INTERVAL`] until
/// the token is cancelled. The first tick fires immediately, so the
/// gauges are populated right after startup.
pub(crate) async fn refresh_loop(
    state: SharedState,
    metrics: TopologyMetrics,
    cancel: CancellationToken,
) {
    let mut tick = tokio::time::interval(REFRESH_INTERVAL);
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut refresh_count: u64 = 0;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                info!("refresh loop stopped");
                return;
            }
            _ = tick.tick() => {}
        }

        // Run blocking provider calls off the async runtime.
        let state_clone = state.clone();
        let t0 = Instant::now();
        let result = tokio::task::spawn_blocking(move || state_clone.snapshot()).await;
        let elapsed = t0.elapsed();

        match result {
            Ok(topology) => {
                refresh_count += 1;
                metrics.record(&topology);
                if refresh_count == 1 {
                    info!(
                        ips = topology.ips.len(),
                        links = topology.links.len(),
                        duration_ms = elapsed.as_millis() as u64,
                        "first topology recorded"
                    );
                } else {
                    debug!(
                        ips = topology.ips.len(),
                        links = topology.links.len(),
                        duration_ms = elapsed.as_millis() as u64,
                        refresh_count,
                        "topology refreshed"
                    );
                }
            }
            Err(e) => {
                error!(error = %e, "refresh panicked in spawn_blocking");
            }
        }
    }
}
