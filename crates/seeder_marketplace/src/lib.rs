//! # Marketplace capability
//!
//! A narrow, versioned contract for submitting listings to an auction
//! marketplace, replacing any need to guess at another component's method
//! surface at runtime.
//!
//! The pieces:
//!
//! - [`Marketplace`] — the capability itself: submit a listing, get a
//!   receipt or an error.
//! - [`AdapterRegistry`] — adapters keyed by external-component name and
//!   version, for marketplace components that do not implement the trait
//!   themselves.
//! - [`ConsoleListingFallback`] — the last-resort compatibility path: a
//!   textual `ah list <price> <quantity>` command dispatched through the
//!   host's console channel.
//! - [`ListingPublisher`] — one publish attempt per seeding cycle, tiered
//!   across the above.

mod adapter;
mod auction_house;
mod console;
mod error;
mod listing;
mod publisher;

pub use adapter::{AdapterRegistry, Marketplace, MarketplaceAdapter};
pub use auction_house::{
    AuctionHouse, AuctionHouseAdapter, BoardListing, AUCTION_HOUSE_COMPONENT,
};
pub use console::ConsoleListingFallback;
pub use error::MarketplaceError;
pub use listing::{ListingReceipt, ListingRequest};
pub use publisher::{ListingPublisher, PublishOutcome, PublishRoute};
