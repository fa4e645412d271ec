//! The marketplace capability trait and the adapter registry.
//!
//! External marketplace components are independently developed and do not
//! necessarily implement [`Marketplace`] themselves. Instead of scanning an
//! unknown method surface at runtime, each known component gets an explicit
//! adapter, registered up front and matched by component name and version.

use crate::error::MarketplaceError;
use crate::listing::{ListingReceipt, ListingRequest};
use async_trait::async_trait;
use seeder_host::ComponentHandle;
use std::sync::Arc;
use tracing::debug;

/// The marketplace capability: submit a listing, get a receipt.
#[async_trait]
pub trait Marketplace: Send + Sync {
    async fn submit_listing(
        &self,
        request: &ListingRequest,
    ) -> Result<ListingReceipt, MarketplaceError>;
}

/// Adapts a known external component to the [`Marketplace`] trait.
#[async_trait]
pub trait MarketplaceAdapter: Send + Sync {
    /// Whether this adapter understands the given component name/version.
    fn matches(&self, name: &str, version: &str) -> bool;

    /// Produces a [`Marketplace`] view over the component.
    ///
    /// Returns `None` if the component turns out not to be the concrete
    /// type this adapter expects (e.g. a name collision with an unrelated
    /// component).
    fn adapt(&self, handle: &ComponentHandle) -> Option<Arc<dyn Marketplace>>;
}

/// Ordered collection of marketplace adapters.
///
/// Resolution walks the adapters in registration order and returns the
/// first that both matches the component's name/version and successfully
/// adapts it.
pub struct AdapterRegistry {
    adapters: Vec<Arc<dyn MarketplaceAdapter>>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self {
            adapters: Vec::new(),
        }
    }

    pub fn register(&mut self, adapter: Arc<dyn MarketplaceAdapter>) {
        self.adapters.push(adapter);
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Finds a marketplace view for the given component, if any adapter
    /// understands it.
    pub fn resolve(&self, handle: &ComponentHandle) -> Option<Arc<dyn Marketplace>> {
        for adapter in &self.adapters {
            if !adapter.matches(handle.name(), handle.version()) {
                continue;
            }
            if let Some(marketplace) = adapter.adapt(handle) {
                debug!(
                    "Resolved marketplace adapter for component {} v{}",
                    handle.name(),
                    handle.version()
                );
                return Some(marketplace);
            }
        }
        None
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seeder_host::{Component, ComponentRegistry};
    use std::any::Any;
    use uuid::Uuid;

    struct FakeBoard;

    impl Component for FakeBoard {
        fn name(&self) -> &str {
            "fake_board"
        }

        fn version(&self) -> &str {
            "2.3.0"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct FakeBoardMarketplace;

    #[async_trait]
    impl Marketplace for FakeBoardMarketplace {
        async fn submit_listing(
            &self,
            _request: &ListingRequest,
        ) -> Result<ListingReceipt, MarketplaceError> {
            Ok(ListingReceipt {
                listing_id: Uuid::new_v4(),
            })
        }
    }

    struct FakeBoardAdapter {
        wants_major: &'static str,
    }

    #[async_trait]
    impl MarketplaceAdapter for FakeBoardAdapter {
        fn matches(&self, name: &str, version: &str) -> bool {
            name == "fake_board" && version.starts_with(self.wants_major)
        }

        fn adapt(&self, handle: &ComponentHandle) -> Option<Arc<dyn Marketplace>> {
            handle
                .component()
                .as_any()
                .downcast_ref::<FakeBoard>()
                .map(|_| Arc::new(FakeBoardMarketplace) as Arc<dyn Marketplace>)
        }
    }

    async fn handle_for_fake_board() -> ComponentHandle {
        let registry = ComponentRegistry::new();
        registry.register(Arc::new(FakeBoard)).await.unwrap();
        registry.get("fake_board").await.unwrap()
    }

    #[tokio::test]
    async fn resolve_matches_name_and_version() {
        let mut adapters = AdapterRegistry::new();
        adapters.register(Arc::new(FakeBoardAdapter { wants_major: "2." }));

        let handle = handle_for_fake_board().await;
        assert!(adapters.resolve(&handle).is_some());
    }

    #[tokio::test]
    async fn resolve_skips_version_mismatch() {
        let mut adapters = AdapterRegistry::new();
        adapters.register(Arc::new(FakeBoardAdapter { wants_major: "1." }));

        let handle = handle_for_fake_board().await;
        assert!(adapters.resolve(&handle).is_none());
    }

    #[tokio::test]
    async fn resolve_returns_first_match_in_registration_order() {
        struct TaggingMarketplace(&'static str);

        #[async_trait]
        impl Marketplace for TaggingMarketplace {
            async fn submit_listing(
                &self,
                _request: &ListingRequest,
            ) -> Result<ListingReceipt, MarketplaceError> {
                Err(MarketplaceError::Rejected(self.0.to_string()))
            }
        }

        struct TaggingAdapter(&'static str);

        #[async_trait]
        impl MarketplaceAdapter for TaggingAdapter {
            fn matches(&self, name: &str, _version: &str) -> bool {
                name == "fake_board"
            }

            fn adapt(&self, _handle: &ComponentHandle) -> Option<Arc<dyn Marketplace>> {
                Some(Arc::new(TaggingMarketplace(self.0)))
            }
        }

        let mut adapters = AdapterRegistry::new();
        adapters.register(Arc::new(TaggingAdapter("first")));
        adapters.register(Arc::new(TaggingAdapter("second")));

        let handle = handle_for_fake_board().await;
        let marketplace = adapters.resolve(&handle).unwrap();
        let request = ListingRequest::new(
            seeder_host::ItemStack::new(seeder_host::ItemKind::resolve("stone").unwrap(), 1),
            10.0,
            1,
        );
        match marketplace.submit_listing(&request).await {
            Err(MarketplaceError::Rejected(tag)) => assert_eq!(tag, "first"),
            other => panic!("unexpected result: {:?}", other.map(|r| r.listing_id)),
        }
    }
}
