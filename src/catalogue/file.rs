use crate::catalogue::traits::CatalogueSource;
use crate::catalogue::validate_unique_ids;
use crate::error::CatalogueError;
use crate::models::{Catalogue, Listing};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Catalogue stored as a JSON file of the form `{ "properties": [...] }`
pub struct JsonFileCatalogue {
    path: PathBuf,
}

impl JsonFileCatalogue {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Decode catalogue JSON and check the id invariant
pub fn parse_catalogue(json: &str) -> Result<Vec<Listing>, CatalogueError> {
    let catalogue: Catalogue = serde_json::from_str(json)?;
    validate_unique_ids(&catalogue.properties)?;
    Ok(catalogue.properties)
}

#[async_trait]
impl CatalogueSource for JsonFileCatalogue {
    async fn load(&self) -> Result<Vec<Listing>> {
        info!("Loading catalogue from {}", self.path.display());

        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogueError::Read {
                path: self.path.display().to_string(),
                source,
            })?;

        debug!("Read {} bytes of catalogue JSON", json.len());

        let listings = parse_catalogue(&json)
            .with_context(|| format!("Invalid catalogue file {}", self.path.display()))?;

        info!("Loaded {} listings", listings.len());
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "JSON file"
    }
}
