use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps books in insertion order; page tokens are offsets.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> LibraryError {
    LibraryError::runtime("book store lock poisoned", None)
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().map_err(poisoned)?;
        if books.iter().any(|b| b.id() == entity.id()) {
            return Err(LibraryError::duplicate_key(format!("book {} already exists", entity.book_id).as_str()));
        }
        books.push(entity.clone());
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let books = self.books.read().map_err(poisoned)?;
        books.iter()
            .find(|b| b.book_id == id)
            .cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn scan(&self, page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookEntity>> {
        let books = self.books.read().map_err(poisoned)?;
        let start = page.and_then(|p| p.parse::<usize>().ok()).unwrap_or(0).min(books.len());
        let end = start.saturating_add(page_size.max(1)).min(books.len());
        let next_page = if end < books.len() { Some(end.to_string()) } else { None };
        Ok(PaginatedResult::new(page, page_size, next_page, books[start..end].to_vec()))
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn search_by_title_substring(&self, query: &str) -> LibraryResult<Vec<BookEntity>> {
        let books = self.books.read().map_err(poisoned)?;
        Ok(books.iter().filter(|b| b.matches_title(query)).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;

    async fn add_test_books(repo: &MemoryBookRepository, count: usize) -> Vec<BookEntity> {
        let mut books = vec![];
        for i in 0..count {
            let book = BookEntity::new(Some(format!("title_{}", i).as_str()), Some("author"), None);
            assert_eq!(1, repo.create(&book).await.expect("should create book"));
            books.push(book);
        }
        books
    }

    #[tokio::test]
    async fn test_should_create_get_books() {
        let repo = MemoryBookRepository::new();
        let book = BookEntity::new(Some("test book"), Some("someone"), Some("isbn"));
        repo.create(&book).await.expect("should create book");

        let loaded = repo.get(book.book_id.as_str()).await.expect("should return book");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_ids() {
        let repo = MemoryBookRepository::new();
        let book = BookEntity::new(Some("test book"), None, None);
        repo.create(&book).await.expect("should create book");
        assert!(matches!(repo.create(&book).await, Err(LibraryError::DuplicateKey { .. })));
    }

    #[tokio::test]
    async fn test_should_fail_get_for_unknown_id() {
        let repo = MemoryBookRepository::new();
        assert!(matches!(repo.get("missing").await, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_scan_pages_in_insertion_order() {
        let repo = MemoryBookRepository::new();
        let books = add_test_books(&repo, 25).await;

        let first = repo.scan(None, 10).await.expect("should scan");
        assert_eq!(10, first.records.len());
        assert_eq!(Some("10".to_string()), first.next_page);
        assert_eq!(books[0], first.records[0]);

        let last = repo.scan(Some("20"), 10).await.expect("should scan");
        assert_eq!(5, last.records.len());
        assert_eq!(None, last.next_page);
    }

    #[tokio::test]
    async fn test_should_return_all_books_across_pages() {
        let repo = MemoryBookRepository::new();
        let books = add_test_books(&repo, 230).await;
        let all = repo.all().await.expect("should list books");
        assert_eq!(books, all);
    }

    #[tokio::test]
    async fn test_should_search_titles_ignoring_case() {
        let repo = MemoryBookRepository::new();
        repo.create(&BookEntity::new(Some("Harry Potter and the Chamber of Secrets"), None, None)).await.expect("create");
        repo.create(&BookEntity::new(Some("The Hobbit"), None, None)).await.expect("create");
        repo.create(&BookEntity::new(None, Some("untitled"), None)).await.expect("create");

        let res = repo.search_by_title_substring("hOBBIT").await.expect("should search");
        assert_eq!(1, res.len());
        assert_eq!(Some("The Hobbit"), res[0].title.as_deref());

        let res = repo.search_by_title_substring("the").await.expect("should search");
        assert_eq!(2, res.len());

        let res = repo.search_by_title_substring("Lord Voldermort").await.expect("should search");
        assert!(res.is_empty());
    }
}
