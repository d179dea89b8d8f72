//! Test doubles and fixtures shared by the unit tests.
//!
//! The collaborators are replaced with in-process versions: books live in the
//! memory repository and ISBN lookups go to a provider that records every call.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use serde_json::Value;
use crate::auth::StubAuthenticator;
use crate::books::dto::BookDto;
use crate::books::factory::create_book_repository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::RepositoryStore;
use crate::metadata::provider::{BookMetadata, MetadataProvider};

pub(crate) const SEED_TITLES: [&str; 3] = [
    "Harry Potter and the Chamber of Secrets",
    "The Hobbit",
    "Nineteen Eighty-Four",
];

/// ISBNs a [`RecordingMetadataProvider`] was asked for, in call order.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordedCalls(Arc<Mutex<Vec<String>>>);

impl RecordedCalls {
    pub fn recorded(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    fn push(&self, isbn: &str) {
        self.0.lock().unwrap().push(isbn.to_string());
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingMetadataProvider {
    responses: HashMap<String, BookMetadata>,
    calls: RecordedCalls,
    unavailable: bool,
}

impl RecordingMetadataProvider {
    /// A provider whose every lookup fails as if the service were down.
    pub fn failing() -> Self {
        Self { unavailable: true, ..Self::default() }
    }

    pub fn with_metadata(mut self, isbn: &str, metadata: Value) -> Self {
        let fields = metadata.as_object().cloned().unwrap_or_default();
        self.responses.insert(isbn.to_string(), fields);
        self
    }

    pub fn calls(&self) -> RecordedCalls {
        self.calls.clone()
    }
}

#[async_trait]
impl MetadataProvider for RecordingMetadataProvider {
    async fn find_by_isbn(&self, isbn: &str) -> LibraryResult<BookMetadata> {
        self.calls.push(isbn);
        if self.unavailable {
            return Err(LibraryError::unavailable("metadata service down", None, true));
        }
        Ok(self.responses.get(isbn).cloned().unwrap_or_default())
    }
}

pub(crate) async fn empty_catalog(provider: RecordingMetadataProvider) -> Arc<dyn CatalogService> {
    let config = Configuration::new("test");
    let book_repo = create_book_repository(RepositoryStore::Memory).await;
    Arc::new(CatalogServiceImpl::new(&config, book_repo, Box::new(provider)))
}

pub(crate) async fn seeded_catalog(provider: RecordingMetadataProvider) -> Arc<dyn CatalogService> {
    let catalog = empty_catalog(provider).await;
    for title in SEED_TITLES {
        catalog.add_book(&BookDto::new(title, Some("someone"), None)).await.expect("should seed book");
    }
    catalog
}

/// Application state signed in as a fixed stub user.
pub(crate) fn test_state(catalog: Arc<dyn CatalogService>) -> AppState {
    AppState::new(catalog, Arc::new(StubAuthenticator::default()))
}
