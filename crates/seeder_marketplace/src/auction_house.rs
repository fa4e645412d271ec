//! Reference auction-house component and its adapter.
//!
//! An in-memory listing board used by the daemon's builtin mode and by
//! tests. It registers in the host's component registry like any other
//! component and is reached through [`AuctionHouseAdapter`], so the
//! publisher exercises exactly the same path it would with a real external
//! marketplace.

use crate::adapter::{Marketplace, MarketplaceAdapter};
use crate::error::MarketplaceError;
use crate::listing::{ListingReceipt, ListingRequest};
use async_trait::async_trait;
use seeder_host::{current_timestamp, Component, ComponentHandle, ItemStack};
use std::any::Any;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

/// Component name the auction house registers under.
pub const AUCTION_HOUSE_COMPONENT: &str = "auction_house";

/// A listing accepted onto the board.
#[derive(Debug, Clone)]
pub struct BoardListing {
    pub listing_id: Uuid,
    pub seller: Uuid,
    pub item: ItemStack,
    pub price: f64,
    pub quantity: u32,
    pub listed_at: u64,
}

/// In-memory auction house: accepts listings and keeps them on a board.
pub struct AuctionHouse {
    listings: RwLock<Vec<BoardListing>>,
    /// Board capacity; `None` means unbounded.
    capacity: Option<usize>,
}

impl AuctionHouse {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            listings: RwLock::new(Vec::new()),
            capacity,
        }
    }

    /// The auction house's own native API, intentionally not the
    /// [`Marketplace`] trait: the adapter bridges the two.
    pub async fn create_listing(
        &self,
        seller: Uuid,
        item: ItemStack,
        price: f64,
        quantity: u32,
    ) -> Result<Uuid, String> {
        if !price.is_finite() || price < 0.0 {
            return Err(format!("invalid price {}", price));
        }
        if quantity == 0 {
            return Err("quantity must be at least 1".to_string());
        }

        let mut listings = self.listings.write().await;
        if let Some(capacity) = self.capacity {
            if listings.len() >= capacity {
                return Err(format!("board full ({} listings)", capacity));
            }
        }

        let listing_id = Uuid::new_v4();
        info!(
            "Auction house listed {} x{} for {} (listing {})",
            item.kind, quantity, price, listing_id
        );
        listings.push(BoardListing {
            listing_id,
            seller,
            item,
            price,
            quantity,
            listed_at: current_timestamp(),
        });
        Ok(listing_id)
    }

    pub async fn listings(&self) -> Vec<BoardListing> {
        self.listings.read().await.clone()
    }

    pub async fn listing_count(&self) -> usize {
        self.listings.read().await.len()
    }
}

impl Component for AuctionHouse {
    fn name(&self) -> &str {
        AUCTION_HOUSE_COMPONENT
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct AuctionHouseMarketplace {
    house: Arc<dyn Component>,
}

impl AuctionHouseMarketplace {
    fn house(&self) -> Result<&AuctionHouse, MarketplaceError> {
        self.house
            .as_any()
            .downcast_ref::<AuctionHouse>()
            .ok_or_else(|| {
                MarketplaceError::Adapter("component is not an auction house".to_string())
            })
    }
}

#[async_trait]
impl Marketplace for AuctionHouseMarketplace {
    async fn submit_listing(
        &self,
        request: &ListingRequest,
    ) -> Result<ListingReceipt, MarketplaceError> {
        let listing_id = self
            .house()?
            .create_listing(
                request.seller,
                request.item.clone(),
                request.price,
                request.quantity,
            )
            .await
            .map_err(MarketplaceError::Rejected)?;
        Ok(ListingReceipt { listing_id })
    }
}

/// Adapter for the in-process auction house component.
pub struct AuctionHouseAdapter;

#[async_trait]
impl MarketplaceAdapter for AuctionHouseAdapter {
    fn matches(&self, name: &str, _version: &str) -> bool {
        // Any version: the native API here is in-process and versioned with
        // this workspace.
        name == AUCTION_HOUSE_COMPONENT
    }

    fn adapt(&self, handle: &ComponentHandle) -> Option<Arc<dyn Marketplace>> {
        let component = handle.component();
        if component.as_any().downcast_ref::<AuctionHouse>().is_none() {
            return None;
        }
        Some(Arc::new(AuctionHouseMarketplace { house: component }))
    }
}
