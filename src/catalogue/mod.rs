pub mod file;
pub mod memory;
pub mod traits;

pub use file::JsonFileCatalogue;
pub use memory::InMemoryCatalogue;
pub use traits::CatalogueSource;

use crate::error::CatalogueError;
use crate::models::Listing;
use std::collections::HashSet;

/// Listing ids must be unique for the life of the process. Checked once at
/// load time so the core can rely on it.
pub fn validate_unique_ids(listings: &[Listing]) -> Result<(), CatalogueError> {
    let mut seen = HashSet::with_capacity(listings.len());
    for listing in listings {
        if !seen.insert(listing.id.as_str()) {
            return Err(CatalogueError::DuplicateId(listing.id.clone()));
        }
    }
    Ok(())
}
