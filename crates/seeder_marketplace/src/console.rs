//! Console-command fallback for marketplaces without an adapter.
//!
//! Last-resort compatibility path: when no adapter can reach the
//! marketplace programmatically, the listing is expressed as the textual
//! command `ah list <price> <quantity>` and dispatched as the privileged
//! console sender. The only success signal available is the dispatcher's
//! "was this recognized as a command" boolean; whether an auction was
//! actually created is out of reach by design.

use crate::error::MarketplaceError;
use crate::listing::{ListingReceipt, ListingRequest};
use async_trait::async_trait;
use seeder_host::{CommandDispatcher, CommandSender};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// [`crate::Marketplace`]-shaped view over the console command channel.
pub struct ConsoleListingFallback {
    commands: Arc<dyn CommandDispatcher>,
}

impl ConsoleListingFallback {
    pub fn new(commands: Arc<dyn CommandDispatcher>) -> Self {
        Self { commands }
    }

    /// The command line for a listing request.
    pub fn command_line(request: &ListingRequest) -> String {
        format!("ah list {} {}", request.price, request.quantity)
    }
}

#[async_trait]
impl crate::Marketplace for ConsoleListingFallback {
    async fn submit_listing(
        &self,
        request: &ListingRequest,
    ) -> Result<ListingReceipt, MarketplaceError> {
        let line = Self::command_line(request);
        let recognized = self
            .commands
            .dispatch(CommandSender::console(), &line)
            .await
            .map_err(|e| MarketplaceError::Adapter(e.to_string()))?;

        if recognized {
            info!("Dispatched console command '{}'", line);
            // The console channel issues no listing id; receipts carry a
            // synthetic one so callers see a uniform shape.
            Ok(ListingReceipt {
                listing_id: Uuid::new_v4(),
            })
        } else {
            warn!("Console command '{}' was not recognized", line);
            Err(MarketplaceError::Unavailable(
                "console command not recognized".to_string(),
            ))
        }
    }
}
