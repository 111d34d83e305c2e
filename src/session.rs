//! Session state and the command model.
//!
//! A `Session` is a plain value. The presentation layer turns each user
//! action into one `Command`, hands it to [`Session::update`] together with
//! the current session, and renders whatever comes back.

use crate::dnd;
use crate::favourites::Favourites;
use crate::models::Listing;
use crate::search::{filter, SearchCriteria};
use crate::view::ViewState;
use std::sync::Arc;
use tracing::debug;

/// One discrete user action
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Run a search (onFilter)
    Search(SearchCriteria),
    /// Drop the active search and show everything again
    ResetSearch,
    /// onAdd
    AddFavourite(Listing),
    /// onRemove
    RemoveFavourite(String),
    /// onClear
    ClearFavourites,
    /// Heart button: remove when present, add otherwise
    ToggleFavourite(Listing),
    /// onView
    View(Listing),
    /// onBack
    Back,
    /// Serialized listing dropped on the favourites panel
    DropListing(String),
    /// Listing id dropped on the remove zone
    DropRemoval(String),
}

/// Follow-up work for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A listing was opened; scroll the surface back to the top
    ScrollToTop,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    catalogue: Arc<[Listing]>,
    criteria: SearchCriteria,
    has_searched: bool,
    favourites: Favourites,
    view: ViewState,
}

impl Session {
    pub fn new(catalogue: impl Into<Arc<[Listing]>>) -> Self {
        Self {
            catalogue: catalogue.into(),
            criteria: SearchCriteria::default(),
            has_searched: false,
            favourites: Favourites::new(),
            view: ViewState::Browsing,
        }
    }

    /// Apply one command, returning the next session and any effect
    pub fn update(self, command: Command) -> (Self, Effect) {
        debug!("Applying {:?}", CommandKind(&command));

        let mut next = self;
        let mut effect = Effect::None;

        match command {
            Command::Search(criteria) => {
                next.criteria = criteria;
                next.has_searched = true;
            }
            Command::ResetSearch => {
                next.criteria = SearchCriteria::default();
                next.has_searched = false;
            }
            Command::AddFavourite(listing) => next.favourites = next.favourites.add(listing),
            Command::RemoveFavourite(id) => next.favourites = next.favourites.remove(&id),
            Command::ClearFavourites => next.favourites = next.favourites.clear(),
            Command::ToggleFavourite(listing) => next.favourites = next.favourites.toggle(listing),
            Command::View(listing) => {
                next.view = next.view.view(listing);
                effect = Effect::ScrollToTop;
            }
            Command::Back => next.view = next.view.back(),
            Command::DropListing(payload) => {
                next.favourites = dnd::drop_listing(next.favourites, &payload, &next.catalogue);
            }
            Command::DropRemoval(id) => next.favourites = dnd::drop_removal(next.favourites, &id),
        }

        (next, effect)
    }

    /// Listings to show on the browse screen
    pub fn results(&self) -> Vec<&Listing> {
        if self.has_searched {
            filter(&self.catalogue, &self.criteria)
        } else {
            self.catalogue.iter().collect()
        }
    }

    pub fn results_heading(&self) -> &'static str {
        if self.has_searched {
            "Search Results"
        } else {
            "All Properties"
        }
    }

    pub fn catalogue(&self) -> &[Listing] {
        &self.catalogue
    }

    /// Look a listing up by id
    pub fn listing(&self, id: &str) -> Option<&Listing> {
        self.catalogue.iter().find(|listing| listing.id == id)
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn favourites(&self) -> &Favourites {
        &self.favourites
    }

    pub fn is_favourite(&self, id: &str) -> bool {
        self.favourites.contains(id)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }
}

/// Command name without its payload, for logs
struct CommandKind<'a>(&'a Command);

impl std::fmt::Debug for CommandKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self.0 {
            Command::Search(_) => "Search",
            Command::ResetSearch => "ResetSearch",
            Command::AddFavourite(_) => "AddFavourite",
            Command::RemoveFavourite(_) => "RemoveFavourite",
            Command::ClearFavourites => "ClearFavourites",
            Command::ToggleFavourite(_) => "ToggleFavourite",
            Command::View(_) => "View",
            Command::Back => "Back",
            Command::DropListing(_) => "DropListing",
            Command::DropRemoval(_) => "DropRemoval",
        };
        f.write_str(name)
    }
}
