//! Drag-and-drop boundary.
//!
//! Two channels cross from the presentation layer: a serialized listing
//! dragged from a card onto the favourites panel, and a bare listing id
//! dragged from a favourite onto the remove zone. Bad drops are logged and
//! ignored; they never surface as errors.

use crate::error::PayloadError;
use crate::favourites::Favourites;
use crate::models::Listing;
use serde_json::Value;
use tracing::warn;

/// Transfer format of the two drag channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragChannel {
    /// Serialized listing, card -> favourites panel
    Listing,
    /// Listing id, favourite -> remove zone
    ListingId,
}

impl DragChannel {
    pub fn mime_type(&self) -> &'static str {
        match self {
            DragChannel::Listing => "application/json",
            DragChannel::ListingId => "text/plain",
        }
    }
}

/// Serialize a listing for the add channel
pub fn listing_payload(listing: &Listing) -> String {
    // Listing is plain data, serializing it to a String cannot fail
    serde_json::to_string(listing).unwrap_or_default()
}

/// Decode an add-channel payload.
///
/// The payload must be JSON carrying a non-empty string `id`. A complete
/// listing is used as-is; a partial one is resolved against the catalogue.
pub fn decode_listing_payload(payload: &str, catalogue: &[Listing]) -> Result<Listing, PayloadError> {
    let value: Value =
        serde_json::from_str(payload).map_err(|e| PayloadError::Malformed(e.to_string()))?;

    let id = value
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .ok_or(PayloadError::MissingId)?
        .to_string();

    if let Ok(listing) = serde_json::from_value::<Listing>(value) {
        return Ok(listing);
    }

    catalogue
        .iter()
        .find(|listing| listing.id == id)
        .cloned()
        .ok_or(PayloadError::UnknownListing(id))
}

/// Handle a drop on the favourites panel
pub fn drop_listing(favourites: Favourites, payload: &str, catalogue: &[Listing]) -> Favourites {
    match decode_listing_payload(payload, catalogue) {
        Ok(listing) => favourites.add(listing),
        Err(e) => {
            warn!("Discarding dropped listing: {}", e);
            favourites
        }
    }
}

/// Handle a drop on the remove zone
pub fn drop_removal(favourites: Favourites, id: &str) -> Favourites {
    if id.is_empty() {
        return favourites;
    }
    favourites.remove(id)
}
