//! Listing request and receipt types.

use seeder_host::ItemStack;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A request to list an item for sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRequest {
    /// Identity the listing is created under. Synthetic listings use a
    /// freshly generated identity per attempt.
    pub seller: Uuid,
    /// The item being offered.
    pub item: ItemStack,
    /// Asking price, already rounded to two decimal places.
    pub price: f64,
    /// Listing quantity.
    pub quantity: u32,
}

impl ListingRequest {
    pub fn new(item: ItemStack, price: f64, quantity: u32) -> Self {
        Self {
            seller: Uuid::new_v4(),
            item,
            price,
            quantity,
        }
    }
}

/// Receipt returned by a marketplace that accepted a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingReceipt {
    pub listing_id: Uuid,
}
