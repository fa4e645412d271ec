//! # Seeder Host API
//!
//! Host-environment surface for the market seeder. The seeding plugin does
//! not talk to a game server directly; it goes through the small set of
//! abstractions defined here:
//!
//! - [`ComponentRegistry`] — look up other loaded components by name and
//!   check their enabled status.
//! - [`CommandDispatcher`] — dispatch a textual command line as a privileged
//!   console sender, receiving a "was this recognized" signal.
//! - [`Plugin`] / [`HostContext`] — plugin lifecycle and the services the
//!   host hands a plugin at init time.
//! - [`ItemKind`] / [`Enchantment`] / [`ItemStack`] — the host's item model,
//!   validated against built-in catalogs.
//!
//! All seams are trait objects so tests and alternate hosts can substitute
//! their own implementations.

mod commands;
mod error;
mod items;
mod plugin;
mod registry;

pub use commands::{CommandDispatcher, CommandHandler, CommandRouter, CommandSender};
pub use error::{HostError, PluginError};
pub use items::{Enchantment, ItemKind, ItemStack};
pub use plugin::{HostContext, Plugin, ServerHostContext};
pub use registry::{Component, ComponentHandle, ComponentRegistry};

/// Returns the current Unix timestamp in seconds.
///
/// All host-side bookkeeping (registration times, listing timestamps) uses
/// this function so clocks are consistent across crates.
pub fn current_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
