//! Component registry for looking up other loaded server components.
//!
//! Mirrors the host's plugin-manager view of the world: components are
//! registered by name, carry a version string, and can be enabled or
//! disabled at runtime. Callers that depend on another component (the
//! seeder depends on a marketplace) look it up here and check its enabled
//! status before every use; absence is an expected condition, not an error.

use crate::error::HostError;
use std::any::Any;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// A server component that other components can discover at runtime.
///
/// `as_any` exists so capability adapters can downcast a handle to the
/// component's concrete type; the registry itself never inspects it.
pub trait Component: Send + Sync + 'static {
    /// Stable, unique component name used for registry lookups.
    fn name(&self) -> &str;

    /// Version string, used by adapters to decide compatibility.
    fn version(&self) -> &str;

    /// Access to the concrete type for downcasting.
    fn as_any(&self) -> &dyn Any;
}

struct RegisteredComponent {
    component: Arc<dyn Component>,
    enabled: AtomicBool,
    registered_at: u64,
}

/// A snapshot handle to a registered component.
#[derive(Clone)]
pub struct ComponentHandle {
    name: String,
    version: String,
    enabled: bool,
    component: Arc<dyn Component>,
}

impl ComponentHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether the component was enabled at the time of lookup.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn component(&self) -> Arc<dyn Component> {
        self.component.clone()
    }
}

impl std::fmt::Debug for ComponentHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentHandle")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("enabled", &self.enabled)
            .finish()
    }
}

/// Registry of loaded components, keyed by name.
pub struct ComponentRegistry {
    components: RwLock<HashMap<String, RegisteredComponent>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self {
            components: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a component. Components start enabled.
    ///
    /// Registering a second component under an already-taken name is a
    /// wiring bug and returns an error rather than silently replacing.
    pub async fn register(&self, component: Arc<dyn Component>) -> Result<(), HostError> {
        let name = component.name().to_string();
        let version = component.version().to_string();

        let mut components = self.components.write().await;
        if components.contains_key(&name) {
            return Err(HostError::Registry(format!(
                "Component {} is already registered",
                name
            )));
        }

        components.insert(
            name.clone(),
            RegisteredComponent {
                component,
                enabled: AtomicBool::new(true),
                registered_at: crate::current_timestamp(),
            },
        );

        info!("Registered component {} v{}", name, version);
        Ok(())
    }

    /// Looks up a component by name.
    ///
    /// Returns `None` when the component is not loaded; callers treat that
    /// as an expected condition and decide how to proceed.
    pub async fn get(&self, name: &str) -> Option<ComponentHandle> {
        let components = self.components.read().await;
        components.get(name).map(|entry| ComponentHandle {
            name: entry.component.name().to_string(),
            version: entry.component.version().to_string(),
            enabled: entry.enabled.load(Ordering::Acquire),
            component: entry.component.clone(),
        })
    }

    /// Enables or disables a registered component.
    pub async fn set_enabled(&self, name: &str, enabled: bool) -> Result<(), HostError> {
        let components = self.components.read().await;
        match components.get(name) {
            Some(entry) => {
                entry.enabled.store(enabled, Ordering::Release);
                debug!("Component {} enabled={}", name, enabled);
                Ok(())
            }
            None => Err(HostError::Registry(format!(
                "Component {} is not registered",
                name
            ))),
        }
    }

    /// Whether a component is both registered and enabled.
    pub async fn is_enabled(&self, name: &str) -> bool {
        let components = self.components.read().await;
        components
            .get(name)
            .map(|entry| entry.enabled.load(Ordering::Acquire))
            .unwrap_or(false)
    }

    /// Names of all registered components, in no particular order.
    pub async fn component_names(&self) -> Vec<String> {
        let components = self.components.read().await;
        components.keys().cloned().collect()
    }

    /// Unix timestamp at which a component was registered.
    pub async fn registered_at(&self, name: &str) -> Option<u64> {
        let components = self.components.read().await;
        components.get(name).map(|entry| entry.registered_at)
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
