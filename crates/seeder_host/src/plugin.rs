//! Plugin lifecycle and host context.

use crate::commands::CommandDispatcher;
use crate::error::PluginError;
use crate::registry::ComponentRegistry;
use async_trait::async_trait;
use std::sync::Arc;

/// Services the host hands a plugin at initialization time.
///
/// Kept deliberately narrow: the registry for discovering other loaded
/// components, and the console command channel. Plugins log through
/// `tracing` directly rather than through the context.
pub trait HostContext: Send + Sync {
    /// Registry of loaded components.
    fn registry(&self) -> Arc<ComponentRegistry>;

    /// Administrative command dispatch channel.
    fn commands(&self) -> Arc<dyn CommandDispatcher>;
}

/// A host-managed plugin.
///
/// # Lifecycle
///
/// 1. The host constructs the plugin.
/// 2. `on_init` is called with the host context; plugins set up state and
///    spawn any background tasks here.
/// 3. `on_shutdown` is called when the host stops; plugins cancel their
///    tasks and release resources. Shutdown errors are logged by the host
///    but do not prevent unloading.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Stable, unique plugin name.
    fn name(&self) -> &str;

    /// Plugin version string.
    fn version(&self) -> &str;

    /// Initialize the plugin with host context.
    async fn on_init(&mut self, context: Arc<dyn HostContext>) -> Result<(), PluginError>;

    /// Shut the plugin down gracefully.
    async fn on_shutdown(&mut self, _context: Arc<dyn HostContext>) -> Result<(), PluginError> {
        Ok(())
    }
}

/// Straightforward [`HostContext`] over owned registry and dispatcher.
pub struct ServerHostContext {
    registry: Arc<ComponentRegistry>,
    commands: Arc<dyn CommandDispatcher>,
}

impl ServerHostContext {
    pub fn new(registry: Arc<ComponentRegistry>, commands: Arc<dyn CommandDispatcher>) -> Self {
        Self { registry, commands }
    }
}

impl HostContext for ServerHostContext {
    fn registry(&self) -> Arc<ComponentRegistry> {
        self.registry.clone()
    }

    fn commands(&self) -> Arc<dyn CommandDispatcher> {
        self.commands.clone()
    }
}
