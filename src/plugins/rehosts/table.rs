//! Rehosts lookup table
//!
//! Holds the current record snapshot plus the file identity it was
//! parsed from behind a reader/writer lock. Lookups take the shared
//! mode; reload re-parses only when the file identity changed and
//! installs the new snapshot under the exclusive mode, so readers see
//! either the old or the new snapshot, never a mixture.

use super::normalize::normalize_query_name;
use super::parser::{parse, HostRecord};
use parking_lot::RwLock;
use std::fs;
use std::io::Read;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tracing::{debug, warn};

/// Resolved rehosts options
#[derive(Debug, Clone)]
pub struct RehostsOptions {
    /// TTL of synthesized DNS records, in seconds
    pub ttl: u32,
    /// Auto reload period; zero disables periodic reload
    pub reload: Duration,
}

impl Default for RehostsOptions {
    fn default() -> Self {
        Self {
            ttl: 3600,
            reload: Duration::from_secs(5),
        }
    }
}

/// Snapshot guarded by the table lock
///
/// The three fields are replaced together; a reader never observes old
/// records with new file identity or vice versa.
#[derive(Debug, Default)]
struct TableState {
    records: Vec<HostRecord>,
    mtime: Option<SystemTime>,
    fsize: u64,
}

/// The shared rehosts table
///
/// One instance is shared by all concurrent lookup callers and exactly
/// one reloader. Lookups are the sole readers, the reloader is the sole
/// writer.
///
/// # Example
///
/// ```rust,no_run
/// use rehosts::plugins::rehosts::{RehostsOptions, RehostsTable};
///
/// let table = RehostsTable::new("/etc/rehosts", RehostsOptions::default());
/// table.reload();
/// let addrs = table.lookup_v4("uwu.");
/// ```
#[derive(Debug)]
pub struct RehostsTable {
    state: RwLock<TableState>,
    path: PathBuf,
    options: RehostsOptions,
}

impl RehostsTable {
    /// Create an empty table for a file path
    ///
    /// The table starts with no records; the first successful
    /// [`reload`](Self::reload) populates it. A missing file is a
    /// tolerated transient state, not a construction error.
    pub fn new(path: impl Into<PathBuf>, options: RehostsOptions) -> Self {
        Self {
            state: RwLock::new(TableState::default()),
            path: path.into(),
            options,
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// TTL for synthesized records, in seconds
    pub fn ttl(&self) -> u32 {
        self.options.ttl
    }

    /// Configured reload period; zero disables periodic reload
    pub fn reload_interval(&self) -> Duration {
        self.options.reload
    }

    /// Number of records currently loaded
    pub fn len(&self) -> usize {
        self.state.read().records.len()
    }

    /// Check whether any records are loaded
    pub fn is_empty(&self) -> bool {
        self.state.read().records.is_empty()
    }

    /// Install records parsed from a string
    ///
    /// File identity is left untouched, so a subsequent [`reload`]
    /// against an unchanged file will not overwrite what was installed
    /// here.
    ///
    /// [`reload`]: Self::reload
    pub fn load_from_string(&self, content: &str) {
        let records = parse(content);
        self.state.write().records = records;
    }

    /// Lookup IPv4 records for a fully-qualified query name
    ///
    /// Returns a fresh copy of the first matching record's v4 address
    /// set, in file order, or an empty vector. Callers may freely
    /// mutate the returned vector without affecting the table.
    pub fn lookup_v4(&self, name: &str) -> Vec<Ipv4Addr> {
        self.lookup(name, HostRecord::addrs_v4)
    }

    /// Lookup IPv6 records for a fully-qualified query name
    ///
    /// Same contract as [`lookup_v4`](Self::lookup_v4) for the v6
    /// address sets.
    pub fn lookup_v6(&self, name: &str) -> Vec<Ipv6Addr> {
        self.lookup(name, HostRecord::addrs_v6)
    }

    fn lookup<T: Copy>(&self, name: &str, bucket: fn(&HostRecord) -> &[T]) -> Vec<T> {
        let state = self.state.read();

        if state.records.is_empty() {
            return Vec::new();
        }

        let normalized = match normalize_query_name(name) {
            Ok(normalized) => normalized,
            Err(e) => {
                debug!(name, error = %e, "rejected query name");
                return Vec::new();
            }
        };

        for record in &state.records {
            let addrs = bucket(record);
            if !addrs.is_empty() && record.matcher().matches(&normalized) {
                return addrs.to_vec();
            }
        }

        Vec::new()
    }

    /// Re-read the backing file if its identity changed
    ///
    /// Best-effort: an unopenable file is a no-op and the previous
    /// snapshot keeps being served. File I/O and parsing happen outside
    /// any lock; only the final install takes the write lock.
    pub fn reload(&self) {
        let mut file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(_) => return,
        };

        let metadata = match file.metadata() {
            Ok(metadata) => metadata,
            Err(_) => return,
        };
        let mtime = metadata.modified().ok();
        let fsize = metadata.len();

        {
            let state = self.state.read();
            if state.mtime == mtime && state.fsize == fsize {
                return;
            }
        }

        let mut contents = String::new();
        if let Err(e) = file.read_to_string(&mut contents) {
            warn!(path = ?self.path, error = %e, "failed to read rehosts file");
            return;
        }

        let records = parse(&contents);
        debug!(path = ?self.path, entries = records.len(), "parsed rehosts file");

        let mut state = self.state.write();
        state.records = records;
        state.mtime = mtime;
        state.fsize = fsize;
    }
}
