//! Pattern-extended hosts file plugin
//!
//! Resolves DNS queries from a hosts-file-like text format extended
//! with wildcard globs and raw regular expressions:
//!
//! ```text
//! # exact names, one record per name token
//! 127.0.0.1 uwu aoa
//! 1234::cdef owo
//!
//! # wildcard globs
//! 127.0.1.1 *.owo.uwu
//!
//! # explicit regular expressions
//! 127.0.2.1 @ go+gle\.com?
//! ```
//!
//! Lookups are first-match-wins in file order, so an operator shadows a
//! wildcard rule with an exact one (or vice versa) purely by line
//! ordering. The backing file is re-read when its modification time or
//! size changes, and the record snapshot is swapped atomically under a
//! write lock without blocking concurrent lookups for longer than the
//! swap itself.
//!
//! # Configuration
//!
//! ```yaml
//! path: /etc/rehosts
//! ttl: 3600
//! reload_secs: 5
//! origins:
//!   - "."
//! fallthrough:
//!   - example.org
//! ```

pub mod config;
pub mod matcher;
pub mod normalize;
pub mod parser;
pub mod plugin;
pub mod table;

// Public re-exports
pub use config::RehostsConfig;
pub use matcher::HostMatcher;
pub use normalize::normalize_query_name;
pub use parser::{parse, HostRecord};
pub use plugin::RehostsPlugin;
pub use table::{RehostsOptions, RehostsTable};
