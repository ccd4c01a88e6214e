//! rehosts - pattern-extended hosts-file DNS resolution
//!
//! This crate resolves host names to IPv4/IPv6 addresses from a
//! hosts-file-like text format extended with wildcard globs and raw
//! regular expressions, refreshed periodically from disk.
//!
//! # Architecture
//!
//! The crate is organized into several main modules:
//!
//! - `dns`: DNS message model (questions, answers, record types)
//! - `plugin`: Plugin trait and execution context
//! - `plugins`: The rehosts plugin (parser, matchers, lookup table)
//! - `utils`: Background task helpers (periodic reload)
//! - `error`: Error types and handling
//!
//! # Example
//!
//! ```rust,no_run
//! use rehosts::plugins::rehosts::{RehostsConfig, RehostsPlugin};
//!
//! # fn example() -> rehosts::Result<()> {
//! let config: RehostsConfig = serde_yaml::from_str(
//!     "path: /etc/rehosts\nttl: 600\nreload_secs: 10\n",
//! ).map_err(|e| rehosts::Error::Config(e.to_string()))?;
//! let plugin = RehostsPlugin::from_config(config)?;
//! plugin.table().reload();
//! # Ok(())
//! # }
//! ```

/// DNS message model
///
/// Questions, resource records and the message container the plugin
/// dispatches on. Wire encoding is out of scope.
pub mod dns;

/// Plugin system architecture
///
/// Defines the plugin trait and execution context.
pub mod plugin;

/// Collection of DNS plugins
///
/// Currently the rehosts plugin and its parsing/lookup core.
pub mod plugins;

/// Utility helpers shared across the crate
pub mod utils;

/// Error types and handling
///
/// Provides unified error types for the entire crate.
pub mod error {

    use thiserror::Error;

    /// Main error type for rehosts
    #[derive(Error, Debug)]
    pub enum Error {
        /// Configuration error
        #[error("Configuration error: {0}")]
        Config(String),

        /// Invalid configuration value
        #[error("Invalid config value for {field}: {value} - {reason}")]
        InvalidConfigValue {
            /// The field name
            field: String,
            /// The invalid value
            value: String,
            /// Reason why it's invalid
            reason: String,
        },

        /// Query name is missing the trailing dot
        #[error("Name is not fully qualified: {name}")]
        NotFullyQualified {
            /// The offending query name
            name: String,
        },

        /// Query name failed internationalized-domain-name decoding
        #[error("Invalid IDNA encoding: {name}")]
        InvalidIdna {
            /// The offending query name
            name: String,
        },

        /// IO error
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        /// Wrapped anyhow error for compatibility
        #[error(transparent)]
        Anyhow(#[from] anyhow::Error),
    }

    impl Error {
        /// Create an InvalidConfigValue error
        pub fn invalid_config_value(
            field: impl Into<String>,
            value: impl Into<String>,
            reason: impl Into<String>,
        ) -> Self {
            Self::InvalidConfigValue {
                field: field.into(),
                value: value.into(),
                reason: reason.into(),
            }
        }

        /// Create a NotFullyQualified error
        pub fn not_fully_qualified(name: impl Into<String>) -> Self {
            Self::NotFullyQualified { name: name.into() }
        }

        /// Create an InvalidIdna error
        pub fn invalid_idna(name: impl Into<String>) -> Self {
            Self::InvalidIdna { name: name.into() }
        }

        /// Check if this error is a configuration error
        pub fn is_config_error(&self) -> bool {
            matches!(
                self,
                Error::Config(_) | Error::InvalidConfigValue { .. }
            )
        }
    }

    /// Result type for rehosts operations
    pub type Result<T> = std::result::Result<T, Error>;
}

// Re-export commonly used types
pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_types() {
        let _config_err = Error::Config("test error".to_string());

        let err = Error::invalid_config_value("ttl", "0", "must be between 1 and 65535");
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
        assert!(err.to_string().contains("ttl"));

        let err = Error::not_fully_qualified("uwu");
        assert!(err.to_string().contains("uwu"));

        let err = Error::invalid_idna("xn--bad");
        assert!(err.to_string().contains("xn--bad"));
    }

    #[test]
    fn test_is_config_error() {
        assert!(Error::Config("bad".to_string()).is_config_error());
        assert!(Error::invalid_config_value("a", "b", "c").is_config_error());
        assert!(!Error::not_fully_qualified("uwu").is_config_error());

        let io_err = Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        assert!(!io_err.is_config_error());
    }
}
