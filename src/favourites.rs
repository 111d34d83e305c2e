use crate::models::Listing;
use tracing::debug;

/// The user's favourite listings: unique by id, in the order they were added.
///
/// Every operation consumes the current set and returns the next one.
/// Lookups are linear; the catalogue is small enough that no index is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favourites {
    items: Vec<Listing>,
}

impl Favourites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listing. Already-present ids leave the set unchanged.
    pub fn add(mut self, listing: Listing) -> Self {
        if self.contains(&listing.id) {
            debug!("Listing {} is already a favourite", listing.id);
            return self;
        }
        debug!("Adding listing {} to favourites", listing.id);
        self.items.push(listing);
        self
    }

    /// Drop the listing with this id, if present
    pub fn remove(mut self, id: &str) -> Self {
        let before = self.items.len();
        self.items.retain(|listing| listing.id != id);
        if self.items.len() != before {
            debug!("Removed listing {} from favourites", id);
        }
        self
    }

    pub fn clear(self) -> Self {
        debug!("Clearing {} favourites", self.items.len());
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|listing| listing.id == id)
    }

    /// Remove when present, add otherwise
    pub fn toggle(self, listing: Listing) -> Self {
        if self.contains(&listing.id) {
            let id = listing.id;
            self.remove(&id)
        } else {
            self.add(listing)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listing> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Listing] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
