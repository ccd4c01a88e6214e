//! DNS plugins collection
//!
//! This module contains concrete plugin implementations. Each plugin
//! implements the Plugin trait and provides specific DNS query
//! processing functionality.
//!
//! # Available Plugins
//!
//! - **rehosts**: Resolve from a hosts file extended with wildcard and
//!   regex patterns, hot-reloaded from disk
//!
//! # Example
//!
//! ```rust,no_run
//! use rehosts::plugins::rehosts::{RehostsConfig, RehostsPlugin};
//! use rehosts::plugin::Plugin;
//! use std::sync::Arc;
//!
//! # fn example() -> rehosts::Result<()> {
//! let plugin = RehostsPlugin::from_config(RehostsConfig::new("/etc/rehosts"))?;
//! let plugin: Arc<dyn Plugin> = Arc::new(plugin);
//! # Ok(())
//! # }
//! ```

pub mod rehosts;

// Re-export plugins
pub use rehosts::{HostMatcher, HostRecord, RehostsConfig, RehostsPlugin, RehostsTable};
