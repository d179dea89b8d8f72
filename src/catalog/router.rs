use axum::{
    body::HttpBody,
    routing::get,
    BoxError, Router,
};
use crate::auth::create_authenticator;
use crate::catalog::controller::{add_book, find_book_by_id, list_books, lookup_isbn, new_book};
use crate::catalog::factory::create_catalog_service;
use crate::core::controller::{fallback, AppState};
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;

// The router is generic over the request body so the same routes serve the
// lambda runtime (`lambda_http::Body`) and hyper (`axum::body::Body`).
pub(crate) fn routes<B>(state: AppState) -> Router<(), B>
    where
        B: HttpBody + Send + 'static,
        B::Data: Send,
        B::Error: Into<BoxError>,
{
    Router::new()
        .route("/books", get(list_books).post(add_book))
        .route("/books/new", get(new_book))
        .route("/books/lookup_isbn", get(lookup_isbn))
        .route("/books/lookup_isbn/:isbn", get(lookup_isbn))
        .route("/books/:id", get(find_book_by_id))
        .fallback(fallback)
        .with_state(state)
}

/// Wires the catalog service, metadata provider and authenticator for the
/// given configuration and returns the application router.
pub async fn build_app<B>(config: Configuration, store: RepositoryStore) -> LibraryResult<Router<(), B>>
    where
        B: HttpBody + Send + 'static,
        B::Data: Send,
        B::Error: Into<BoxError>,
{
    let catalog = create_catalog_service(&config, store).await?;
    let authenticator = create_authenticator(&config);
    Ok(routes(AppState::new(catalog, authenticator)))
}
