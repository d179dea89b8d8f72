pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;
use crate::metadata::provider::{BookMetadata, Isbn};

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    // all books when the query is absent or empty, otherwise title matches ignoring case
    async fn list_books(&self, query: Option<&str>) -> LibraryResult<Vec<BookDto>>;
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
    async fn lookup_isbn(&self, isbn: &Isbn) -> LibraryResult<BookMetadata>;
}
