//! Marketplace error taxonomy.

use thiserror::Error;

/// Errors a marketplace submission can produce.
///
/// `Unavailable` and `Rejected` are expected, recoverable conditions; the
/// publisher logs them and falls through to the next tier. `Adapter` covers
/// everything unexpected inside an adapter and is treated the same way:
/// any adapter failure means "try the fallback", never "abort the host".
#[derive(Debug, Error)]
pub enum MarketplaceError {
    /// The marketplace cannot take listings right now.
    #[error("Marketplace unavailable: {0}")]
    Unavailable(String),
    /// The marketplace refused this particular listing.
    #[error("Listing rejected: {0}")]
    Rejected(String),
    /// The adapter failed while talking to the component.
    #[error("Adapter error: {0}")]
    Adapter(String),
}
