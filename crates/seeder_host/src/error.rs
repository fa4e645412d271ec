//! Error types shared across the host surface.

use thiserror::Error;

/// Errors that can occur when interacting with host services.
#[derive(Debug, Error)]
pub enum HostError {
    /// A command handler failed while processing a dispatched command.
    #[error("Command execution error: {0}")]
    CommandExecution(String),
    /// A registry operation was invalid (e.g. duplicate registration).
    #[error("Registry error: {0}")]
    Registry(String),
    /// Internal host error (invalid state, resource exhaustion, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors that can occur during plugin lifecycle operations.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Plugin initialization failed during startup
    #[error("Plugin initialization failed: {0}")]
    InitializationFailed(String),
    /// Runtime error during normal plugin operation
    #[error("Plugin runtime error: {0}")]
    Runtime(String),
}
