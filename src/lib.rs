pub mod catalogue;
pub mod dnd;
pub mod error;
pub mod favourites;
pub mod format;
pub mod models;
pub mod search;
pub mod session;
pub mod view;

pub use catalogue::{CatalogueSource, InMemoryCatalogue, JsonFileCatalogue};
pub use error::{CatalogueError, PayloadError};
pub use favourites::Favourites;
pub use models::{Catalogue, Coordinates, Listing, Location};
pub use search::{filter, SearchCriteria, SearchForm};
pub use session::{Command, Effect, Session};
pub use view::ViewState;
