use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::metadata::provider::{BookMetadata, Isbn};

pub(crate) struct LookupIsbnCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl LookupIsbnCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct LookupIsbnCommandRequest {
    pub(crate) isbn: Isbn,
}

impl LookupIsbnCommandRequest {
    pub fn new(isbn: Isbn) -> Self {
        Self {
            isbn,
        }
    }
}

// the provider's fields are passed through as the response body
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct LookupIsbnCommandResponse {
    pub metadata: BookMetadata,
}

#[async_trait]
impl Command<LookupIsbnCommandRequest, LookupIsbnCommandResponse> for LookupIsbnCommand {
    async fn execute(&self, req: LookupIsbnCommandRequest) -> Result<LookupIsbnCommandResponse, CommandError> {
        self.catalog_service.lookup_isbn(&req.isbn).await
            .map_err(CommandError::from)
            .map(|metadata| LookupIsbnCommandResponse { metadata })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::catalog::command::lookup_isbn_cmd::{LookupIsbnCommand, LookupIsbnCommandRequest};
    use crate::core::command::{Command, CommandError};
    use crate::metadata::provider::Isbn;
    use crate::test_utils::{empty_catalog, RecordingMetadataProvider};

    #[tokio::test]
    async fn test_should_pass_metadata_through() {
        let provider = RecordingMetadataProvider::default()
            .with_metadata("9780261103344", json!({"title": "The Hobbit", "number_of_pages": 310}));
        let cmd = LookupIsbnCommand::new(empty_catalog(provider).await);

        let isbn = Isbn::parse("9780261103344").expect("valid isbn");
        let res = cmd.execute(LookupIsbnCommandRequest::new(isbn)).await.expect("should look up");
        assert_eq!(json!({"title": "The Hobbit", "number_of_pages": 310}),
                   serde_json::to_value(&res).expect("should serialize"));
    }

    #[tokio::test]
    async fn test_should_serialize_unknown_isbn_as_empty_object() {
        let cmd = LookupIsbnCommand::new(empty_catalog(RecordingMetadataProvider::default()).await);
        let isbn = Isbn::parse("12345").expect("valid isbn");
        let res = cmd.execute(LookupIsbnCommandRequest::new(isbn)).await.expect("should look up");
        assert_eq!(json!({}), serde_json::to_value(&res).expect("should serialize"));
    }

    #[tokio::test]
    async fn test_should_surface_unavailable_provider() {
        let cmd = LookupIsbnCommand::new(empty_catalog(RecordingMetadataProvider::failing()).await);
        let isbn = Isbn::parse("12345").expect("valid isbn");
        let res = cmd.execute(LookupIsbnCommandRequest::new(isbn)).await;
        assert!(matches!(res, Err(CommandError::Unavailable { .. })));
    }
}
