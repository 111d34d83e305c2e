use crate::catalogue::traits::CatalogueSource;
use crate::catalogue::validate_unique_ids;
use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

/// Catalogue held in memory, e.g. embedded in a front end or built by tests
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogue {
    listings: Vec<Listing>,
}

impl InMemoryCatalogue {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }
}

#[async_trait]
impl CatalogueSource for InMemoryCatalogue {
    async fn load(&self) -> Result<Vec<Listing>> {
        validate_unique_ids(&self.listings)?;
        debug!("Serving {} in-memory listings", self.listings.len());
        Ok(self.listings.clone())
    }

    fn source_name(&self) -> &'static str {
        "in-memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    #[tokio::test]
    async fn test_load_preserves_order() {
        let source = InMemoryCatalogue::new(fixtures::sample());
        let ids: Vec<String> = source.load().await.unwrap().into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec!["test1", "test2", "test3"]);
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_rejected() {
        let mut listings = fixtures::sample();
        listings.push(listings[0].clone());

        let err = InMemoryCatalogue::new(listings).load().await.unwrap_err();
        assert!(err.to_string().contains("test1"));
    }
}
