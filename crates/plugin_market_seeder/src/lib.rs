//! # Market seeder plugin
//!
//! Periodically synthesizes a randomized item listing and publishes it to
//! the auction marketplace, keeping the in-game market stocked even when
//! player activity is low.
//!
//! Each cycle is independent and stateless: pick a category, synthesize an
//! item from the configured candidate lists, draw a price, and hand the
//! listing to the [`ListingPublisher`]. Every failure mode is logged and
//! the cycle skipped; nothing is retried and nothing survives to the next
//! cycle.

mod config;
mod pricing;
mod synth;

pub use config::{PriceRange, SeederConfig};
pub use pricing::{effective_range, random_price};
pub use synth::{pick_category, synthesize_item};

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use seeder_host::{HostContext, Plugin, PluginError};
use seeder_marketplace::{
    AdapterRegistry, AuctionHouseAdapter, ListingPublisher, PublishOutcome,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Runs one seeding cycle: synthesize, price, publish.
///
/// Returns `None` when no item was produced (empty list, unknown category,
/// unresolvable identifier); otherwise the publisher's outcome.
pub async fn run_seed_cycle(
    config: &SeederConfig,
    publisher: &ListingPublisher,
    rng: &mut StdRng,
) -> Option<PublishOutcome> {
    let category = pick_category(rng, &config.categories_order);

    let Some(item) = synthesize_item(rng, config, &category) else {
        warn!("No item created for category: {}", category);
        return None;
    };

    let price = random_price(rng, config.price_range.min, config.price_range.max);
    let quantity = config.default_count;

    Some(publisher.publish(item, price, quantity).await)
}

/// The market seeder plugin.
pub struct MarketSeederPlugin {
    config: SeederConfig,
    adapters: Option<AdapterRegistry>,
    task: Option<JoinHandle<()>>,
}

impl MarketSeederPlugin {
    /// Creates the plugin with the default adapter set (the in-process
    /// auction house).
    pub fn new(config: SeederConfig) -> Self {
        let mut adapters = AdapterRegistry::new();
        adapters.register(Arc::new(AuctionHouseAdapter));
        Self::with_adapters(config, adapters)
    }

    /// Creates the plugin with a caller-supplied adapter registry, for
    /// hosts that bring their own marketplace components.
    pub fn with_adapters(config: SeederConfig, adapters: AdapterRegistry) -> Self {
        Self {
            config,
            adapters: Some(adapters),
            task: None,
        }
    }
}

#[async_trait]
impl Plugin for MarketSeederPlugin {
    fn name(&self) -> &str {
        "market_seeder"
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    async fn on_init(&mut self, context: Arc<dyn HostContext>) -> Result<(), PluginError> {
        self.config
            .validate()
            .map_err(PluginError::InitializationFailed)?;

        let adapters = self
            .adapters
            .take()
            .ok_or_else(|| PluginError::InitializationFailed("plugin already started".into()))?;

        let publisher = ListingPublisher::new(
            context.registry(),
            adapters,
            context.commands(),
            self.config.marketplace_component.clone(),
        );

        let config = self.config.clone();
        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let period = Duration::from_secs(config.interval * 60);
        self.task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // The first tick completes immediately; consume it so the first
            // cycle runs one full interval after startup.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                match run_seed_cycle(&config, &publisher, &mut rng).await {
                    Some(outcome) => info!("Seed cycle finished: {:?}", outcome),
                    None => info!("Seed cycle produced no item; skipped"),
                }
            }
        }));

        info!(
            "Market seeder scheduled every {} minute(s), publishing to {}",
            self.config.interval, self.config.marketplace_component
        );
        Ok(())
    }

    async fn on_shutdown(&mut self, _context: Arc<dyn HostContext>) -> Result<(), PluginError> {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        info!("Market seeder stopped");
        Ok(())
    }
}
