//! Utility helpers shared across the crate

use crate::plugins::rehosts::RehostsTable;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Handle returned by `spawn_periodic_reload` to allow graceful
/// shutdown of the reload task.
pub struct ReloadTaskHandle {
    stop_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl ReloadTaskHandle {
    /// Signal the reload task to stop and await its termination.
    pub async fn stop(self) {
        let _ = self.stop_tx.send(true);
        let _ = self.handle.await;
    }
}

/// Spawn the periodic reload task for a table.
///
/// Ticks at the table's configured reload interval and invokes
/// [`RehostsTable::reload`] on each tick; the reload itself is
/// idempotent and skips unchanged files cheaply. An interval of zero
/// disables periodic reload and spawns nothing.
///
/// - `name`: name used in logs
/// - `table`: the shared table to reload
pub fn spawn_periodic_reload(
    name: impl Into<String>,
    table: Arc<RehostsTable>,
) -> Option<ReloadTaskHandle> {
    let name = name.into();
    let interval = table.reload_interval();

    if interval.is_zero() {
        debug!(name = %name, "periodic reload disabled");
        return None;
    }

    // Channel used to notify the background task to stop
    let (stop_tx, mut stop_rx) = watch::channel(false);

    let handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // The first tick of a tokio interval completes immediately;
        // consume it so reloads start one full period after spawn.
        ticker.tick().await;

        debug!(name = %name, interval = ?interval, "periodic reload started");

        loop {
            tokio::select! {
                biased;
                _ = stop_rx.changed() => {
                    if *stop_rx.borrow() {
                        trace!(name = %name, "periodic reload stop requested");
                        break;
                    }
                }
                _ = ticker.tick() => {
                    table.reload();
                }
            }
        }

        trace!(name = %name, "periodic reload task exiting");
    });

    Some(ReloadTaskHandle { stop_tx, handle })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::rehosts::RehostsOptions;
    use std::net::Ipv4Addr;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_zero_interval_spawns_nothing() {
        let table = Arc::new(RehostsTable::new(
            "/nonexistent/rehosts",
            RehostsOptions {
                ttl: 3600,
                reload: Duration::ZERO,
            },
        ));

        assert!(spawn_periodic_reload("rehosts", table).is_none());
    }

    #[tokio::test]
    async fn test_periodic_reload_picks_up_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "1.2.3.4 uwu\n").unwrap();

        let table = Arc::new(RehostsTable::new(
            file.path(),
            RehostsOptions {
                ttl: 3600,
                reload: Duration::from_millis(20),
            },
        ));

        let handle = spawn_periodic_reload("rehosts", Arc::clone(&table)).unwrap();

        // Poll until the background task has loaded the file
        let loaded = timeout(Duration::from_secs(5), async {
            loop {
                if !table.is_empty() {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await;
        assert!(loaded.is_ok(), "reload task never populated the table");
        assert_eq!(table.lookup_v4("uwu."), vec![Ipv4Addr::new(1, 2, 3, 4)]);

        handle.stop().await;
    }

    #[tokio::test]
    async fn test_stop_terminates_task() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "1.2.3.4 uwu\n").unwrap();

        let table = Arc::new(RehostsTable::new(
            file.path(),
            RehostsOptions {
                ttl: 3600,
                reload: Duration::from_millis(20),
            },
        ));

        let handle = spawn_periodic_reload("rehosts", Arc::clone(&table)).unwrap();

        // stop() resolves only after the task observed the signal
        timeout(Duration::from_secs(5), handle.stop())
            .await
            .expect("reload task did not stop");
    }
}
