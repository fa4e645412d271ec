//! Two-tier listing publisher.
//!
//! One publish attempt per seeding cycle, stateless across cycles:
//!
//! 1. Precondition: the marketplace component must be registered and
//!    enabled, otherwise the cycle is skipped (expected condition).
//! 2. Tier 1: resolve an adapter for the component and submit through it.
//! 3. Tier 2: on no adapter or any adapter error, fall back to the console
//!    command path.
//!
//! Every failure mode is logged and absorbed here; nothing propagates to
//! the caller, so the next scheduled cycle is always unaffected.

use crate::adapter::AdapterRegistry;
use crate::console::ConsoleListingFallback;
use crate::error::MarketplaceError;
use crate::listing::ListingRequest;
use crate::Marketplace;
use seeder_host::{CommandDispatcher, ComponentRegistry, ItemStack};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// How a listing reached the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishRoute {
    /// Submitted through a matched adapter.
    Adapter,
    /// Expressed as a console command and dispatched.
    Fallback,
}

/// Outcome of one publish attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The marketplace component was absent or disabled; no attempt made.
    Skipped,
    /// The listing was handed off via the given route.
    Published {
        route: PublishRoute,
        listing_id: Uuid,
    },
    /// Both tiers were exhausted without a hand-off. Logged only; this is
    /// not an error for the caller.
    Exhausted,
}

/// Publishes synthesized listings to an external marketplace component.
pub struct ListingPublisher {
    registry: Arc<ComponentRegistry>,
    adapters: AdapterRegistry,
    fallback: ConsoleListingFallback,
    /// Name of the marketplace component to look for.
    component_name: String,
}

impl ListingPublisher {
    pub fn new(
        registry: Arc<ComponentRegistry>,
        adapters: AdapterRegistry,
        commands: Arc<dyn CommandDispatcher>,
        component_name: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            adapters,
            fallback: ConsoleListingFallback::new(commands),
            component_name: component_name.into(),
        }
    }

    /// Attempts to publish one listing. Never returns an error: failures
    /// are logged and reported through the outcome.
    pub async fn publish(&self, item: ItemStack, price: f64, quantity: u32) -> PublishOutcome {
        let Some(handle) = self.registry.get(&self.component_name).await else {
            warn!(
                "Marketplace component {} not found; skipping cycle",
                self.component_name
            );
            return PublishOutcome::Skipped;
        };
        if !handle.is_enabled() {
            warn!(
                "Marketplace component {} is disabled; skipping cycle",
                self.component_name
            );
            return PublishOutcome::Skipped;
        }

        let request = ListingRequest::new(item, price, quantity);

        // Tier 1: explicit adapter for the component's name/version. Any
        // adapter error, expected or not, means "fall back", never "abort".
        if let Some(marketplace) = self.adapters.resolve(&handle) {
            match marketplace.submit_listing(&request).await {
                Ok(receipt) => {
                    info!(
                        "Published {} x{} for {} via {} adapter (listing {})",
                        request.item.kind,
                        request.quantity,
                        request.price,
                        handle.name(),
                        receipt.listing_id
                    );
                    return PublishOutcome::Published {
                        route: PublishRoute::Adapter,
                        listing_id: receipt.listing_id,
                    };
                }
                Err(e) => {
                    warn!(
                        "Adapter submission to {} v{} failed: {}; attempting console fallback",
                        handle.name(),
                        handle.version(),
                        e
                    );
                }
            }
        } else {
            warn!(
                "No marketplace adapter matches {} v{}; attempting console fallback",
                handle.name(),
                handle.version()
            );
        }

        // Tier 2: textual command through the console channel.
        match self.fallback.submit_listing(&request).await {
            Ok(receipt) => {
                info!(
                    "Published {} x{} for {} via console fallback",
                    request.item.kind, request.quantity, request.price
                );
                PublishOutcome::Published {
                    route: PublishRoute::Fallback,
                    listing_id: receipt.listing_id,
                }
            }
            Err(MarketplaceError::Unavailable(reason)) => {
                warn!("Console fallback did not take the listing: {}", reason);
                PublishOutcome::Exhausted
            }
            Err(e) => {
                error!("Console fallback dispatch failed: {}", e);
                PublishOutcome::Exhausted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction_house::{AuctionHouse, AuctionHouseAdapter, AUCTION_HOUSE_COMPONENT};
    use async_trait::async_trait;
    use seeder_host::{CommandHandler, CommandRouter, CommandSender, HostError, ItemKind};

    fn stone() -> ItemStack {
        ItemStack::new(ItemKind::resolve("stone").unwrap(), 1)
    }

    fn adapters() -> AdapterRegistry {
        let mut adapters = AdapterRegistry::new();
        adapters.register(Arc::new(AuctionHouseAdapter));
        adapters
    }

    struct AcceptingHandler;

    #[async_trait]
    impl CommandHandler for AcceptingHandler {
        async fn handle(&self, _sender: CommandSender, _args: &[&str]) -> Result<(), HostError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn skips_when_component_absent() {
        let registry = Arc::new(ComponentRegistry::new());
        let router = Arc::new(CommandRouter::new());
        let publisher =
            ListingPublisher::new(registry, adapters(), router, AUCTION_HOUSE_COMPONENT);

        let outcome = publisher.publish(stone(), 50.0, 1).await;
        assert_eq!(outcome, PublishOutcome::Skipped);
    }

    #[tokio::test]
    async fn skips_when_component_disabled() {
        let registry = Arc::new(ComponentRegistry::new());
        registry
            .register(Arc::new(AuctionHouse::new(None)))
            .await
            .unwrap();
        registry
            .set_enabled(AUCTION_HOUSE_COMPONENT, false)
            .await
            .unwrap();

        let router = Arc::new(CommandRouter::new());
        let publisher =
            ListingPublisher::new(registry, adapters(), router, AUCTION_HOUSE_COMPONENT);

        let outcome = publisher.publish(stone(), 50.0, 1).await;
        assert_eq!(outcome, PublishOutcome::Skipped);
    }

    #[tokio::test]
    async fn publishes_via_adapter_when_available() {
        let registry = Arc::new(ComponentRegistry::new());
        let house = Arc::new(AuctionHouse::new(None));
        registry.register(house.clone()).await.unwrap();

        let router = Arc::new(CommandRouter::new());
        let publisher =
            ListingPublisher::new(registry, adapters(), router, AUCTION_HOUSE_COMPONENT);

        let outcome = publisher.publish(stone(), 77.25, 3).await;
        match outcome {
            PublishOutcome::Published { route, listing_id } => {
                assert_eq!(route, PublishRoute::Adapter);
                let listings = house.listings().await;
                assert_eq!(listings.len(), 1);
                assert_eq!(listings[0].listing_id, listing_id);
                assert_eq!(listings[0].quantity, 3);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn falls_back_to_console_when_adapter_rejects() {
        // Board capacity 0 makes the adapter reject every submission.
        let registry = Arc::new(ComponentRegistry::new());
        registry
            .register(Arc::new(AuctionHouse::new(Some(0))))
            .await
            .unwrap();

        let router = Arc::new(CommandRouter::new());
        router.register("ah", Arc::new(AcceptingHandler)).await;

        let publisher =
            ListingPublisher::new(registry, adapters(), router, AUCTION_HOUSE_COMPONENT);

        let outcome = publisher.publish(stone(), 50.0, 1).await;
        assert!(matches!(
            outcome,
            PublishOutcome::Published {
                route: PublishRoute::Fallback,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn falls_back_when_no_adapter_matches() {
        let registry = Arc::new(ComponentRegistry::new());
        registry
            .register(Arc::new(AuctionHouse::new(None)))
            .await
            .unwrap();

        let router = Arc::new(CommandRouter::new());
        router.register("ah", Arc::new(AcceptingHandler)).await;

        // Empty adapter registry: nothing matches the component.
        let publisher = ListingPublisher::new(
            registry,
            AdapterRegistry::new(),
            router,
            AUCTION_HOUSE_COMPONENT,
        );

        let outcome = publisher.publish(stone(), 50.0, 1).await;
        assert!(matches!(
            outcome,
            PublishOutcome::Published {
                route: PublishRoute::Fallback,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn exhausted_when_fallback_unrecognized() {
        let registry = Arc::new(ComponentRegistry::new());
        registry
            .register(Arc::new(AuctionHouse::new(Some(0))))
            .await
            .unwrap();

        // No "ah" command registered: dispatch reports unrecognized.
        let router = Arc::new(CommandRouter::new());
        let publisher =
            ListingPublisher::new(registry, adapters(), router, AUCTION_HOUSE_COMPONENT);

        let outcome = publisher.publish(stone(), 50.0, 1).await;
        assert_eq!(outcome, PublishOutcome::Exhausted);
    }
}
