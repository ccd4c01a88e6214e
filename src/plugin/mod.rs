//! Plugin system module
//!
//! This module provides the plugin architecture the rehosts plugin
//! slots into: the `Plugin` trait and the execution `Context` that is
//! passed down a handler chain by the host server.
//!
//! # Example
//!
//! ```rust
//! use rehosts::plugin::{Plugin, Context};
//! use rehosts::Result;
//! use async_trait::async_trait;
//!
//! #[derive(Debug)]
//! struct MyPlugin;
//!
//! #[async_trait]
//! impl Plugin for MyPlugin {
//!     async fn execute(&self, ctx: &mut Context) -> Result<()> {
//!         // Process the DNS query in context
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "my_plugin"
//!     }
//! }
//! ```

pub mod context;
pub mod traits;

// Re-export commonly used types
pub use context::Context;
pub use traits::Plugin;
