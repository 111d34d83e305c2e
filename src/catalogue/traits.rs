use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for anything that can supply the listing catalogue.
/// The core never writes back through a source.
#[async_trait]
pub trait CatalogueSource: Send + Sync {
    /// Load every listing, in catalogue order
    async fn load(&self) -> Result<Vec<Listing>>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
