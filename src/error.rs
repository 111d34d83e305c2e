use thiserror::Error;

/// Problems found while loading a catalogue
#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("Failed to read catalogue file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode catalogue: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Duplicate listing id in catalogue: {0}")]
    DuplicateId(String),
}

/// Why a dropped listing payload was discarded.
///
/// These never leave the drag-and-drop bridge; they are logged and the drop
/// is ignored.
#[derive(Error, Debug, PartialEq)]
pub enum PayloadError {
    #[error("payload is not valid JSON: {0}")]
    Malformed(String),

    #[error("payload has no listing id")]
    MissingId,

    #[error("payload for '{0}' is incomplete and the listing is not in the catalogue")]
    UnknownListing(String),
}
