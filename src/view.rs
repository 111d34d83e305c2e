use crate::models::Listing;
use tracing::debug;

/// Which screen the user is on.
///
/// Starts as `Browsing`. `Viewing` always carries the listing being shown,
/// so there is no "detail view without a listing" state to guard against.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Browsing,
    Viewing(Listing),
}

impl ViewState {
    /// Show one listing in detail. Allowed from any state; the listing does
    /// not have to be in the catalogue.
    pub fn view(self, listing: Listing) -> Self {
        debug!("Viewing listing {}", listing.id);
        ViewState::Viewing(listing)
    }

    /// Return to browsing, dropping any held listing
    pub fn back(self) -> Self {
        if let ViewState::Viewing(listing) = &self {
            debug!("Leaving listing {}", listing.id);
        }
        ViewState::Browsing
    }

    pub fn selected(&self) -> Option<&Listing> {
        match self {
            ViewState::Browsing => None,
            ViewState::Viewing(listing) => Some(listing),
        }
    }

    pub fn is_browsing(&self) -> bool {
        matches!(self, ViewState::Browsing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{listing, sample};

    #[test]
    fn test_starts_browsing() {
        let state = ViewState::default();
        assert!(state.is_browsing());
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_view_then_back_is_browsing() {
        let [a, b, _]: [Listing; 3] = sample().try_into().unwrap();

        assert_eq!(ViewState::Browsing.view(a.clone()).back(), ViewState::Browsing);
        assert_eq!(ViewState::Viewing(b).view(a).back(), ViewState::Browsing);
    }

    #[test]
    fn test_view_replaces_the_selection() {
        let [a, b, _]: [Listing; 3] = sample().try_into().unwrap();
        let state = ViewState::Browsing.view(a).view(b);
        assert_eq!(state.selected().map(|l| l.id.as_str()), Some("test2"));
    }

    #[test]
    fn test_back_is_idempotent() {
        assert_eq!(ViewState::Browsing.back().back(), ViewState::Browsing);
    }

    #[test]
    fn test_orphan_listing_can_be_viewed() {
        let orphan = listing("gone", "Flat", 1, 1, "E1", (2020, 1, 1));
        let state = ViewState::Browsing.view(orphan);
        assert_eq!(state.selected().map(|l| l.id.as_str()), Some("gone"));
    }
}
