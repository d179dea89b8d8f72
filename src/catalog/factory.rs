use std::sync::Arc;
use crate::books::factory::create_book_repository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;
use crate::metadata::factory::create_metadata_provider;

pub(crate) async fn create_catalog_service(config: &Configuration, store: RepositoryStore) -> LibraryResult<Arc<dyn CatalogService>> {
    let book_repository = create_book_repository(store).await;
    let metadata_provider = create_metadata_provider(config)?;
    Ok(Arc::new(CatalogServiceImpl::new(config, book_repository, metadata_provider)))
}
