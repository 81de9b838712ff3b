//! Business logic services

pub mod catalog;

use std::sync::Arc;

use crate::{error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(
                Arc::new(repository.books.clone()),
                Arc::new(repository.authors.clone()),
                Arc::new(repository.categories.clone()),
            ),
            repository,
        }
    }

    /// Database connectivity probe used by the readiness endpoint
    pub async fn ping_store(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.repository.pool)
            .await?;
        Ok(())
    }
}
