use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::metadata::provider::{BookMetadata, Isbn, MetadataProvider};

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
    metadata_provider: Box<dyn MetadataProvider>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      metadata_provider: Box<dyn MetadataProvider>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            metadata_provider,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self, query: Option<&str>) -> LibraryResult<Vec<BookDto>> {
        let books = match query.filter(|q| !q.is_empty()) {
            Some(q) => self.book_repository.search_by_title_substring(q).await?,
            None => self.book_repository.all().await?,
        };
        debug!("branch {} listed {} books for query {:?}", self.branch_id, books.len(), query);
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        if book.title.as_deref().map_or(true, |t| t.trim().is_empty()) {
            return Err(LibraryError::validation("book title must not be blank", Some("title".to_string())));
        }
        let entity = BookEntity::from(book);
        self.book_repository.create(&entity).await?;
        info!("branch {} added book {}", self.branch_id, entity.book_id);
        Ok(BookDto::from(&entity))
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn lookup_isbn(&self, isbn: &Isbn) -> LibraryResult<BookMetadata> {
        let metadata = self.metadata_provider.find_by_isbn(isbn.as_str()).await?;
        debug!("isbn {} resolved {} metadata fields", isbn, metadata.len());
        Ok(metadata)
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: Some(other.book_id.to_string()),
            version: other.version,
            title: other.title.clone(),
            author: other.author.clone(),
            isbn: other.isbn.clone(),
            created_at: Some(other.created_at),
            updated_at: Some(other.updated_at),
        }
    }
}

// a dto without an identifier gets a fresh one here, on its way into storage
impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            book_id: other.book_id.clone().unwrap_or_else(|| Uuid::new_v4().to_string()),
            version: other.version,
            title: other.title.clone(),
            author: other.author.clone(),
            isbn: other.isbn.clone(),
            created_at: other.created_at.unwrap_or(now),
            updated_at: other.updated_at.unwrap_or(now),
        }
    }
}
