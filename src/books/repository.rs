pub mod ddb_book_repository;
pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

const ALL_BOOKS_PAGE_SIZE: usize = 100;

#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    // every book in storage order, following page tokens until the store is exhausted
    async fn all(&self) -> LibraryResult<Vec<BookEntity>> {
        let mut books = vec![];
        let mut page: Option<String> = None;
        loop {
            let res = self.scan(page.as_deref(), ALL_BOOKS_PAGE_SIZE).await?;
            books.extend(res.records);
            match res.next_page {
                Some(next) => page = Some(next),
                None => break,
            }
        }
        Ok(books)
    }

    // books whose title contains the query, ignoring case
    async fn search_by_title_substring(&self, query: &str) -> LibraryResult<Vec<BookEntity>>;
}
