use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::metadata::provider::{BookMetadata, MetadataProvider};

// OpenLibraryProvider resolves ISBNs with the Open Library books api, see
// https://openlibrary.org/dev/docs/api/books
#[derive(Debug, Clone)]
pub struct OpenLibraryProvider {
    client: Client,
    base_url: String,
}

impl OpenLibraryProvider {
    pub(crate) fn new(config: &Configuration) -> LibraryResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.metadata_timeout_secs))
            .build()
            .map_err(|err| LibraryError::runtime(format!("failed to build metadata client {}", err).as_str(), None))?;
        Ok(Self {
            client,
            base_url: config.metadata_base_url.trim_end_matches('/').to_string(),
        })
    }
}

fn bibkey(isbn: &str) -> String {
    format!("ISBN:{}", isbn)
}

// The api answers with an object keyed by bibkey and simply omits ISBNs it does not know.
fn metadata_from_response(isbn: &str, body: Value) -> LibraryResult<BookMetadata> {
    match body {
        Value::Object(mut books) => match books.remove(bibkey(isbn).as_str()) {
            Some(Value::Object(metadata)) => Ok(metadata),
            Some(other) => Err(LibraryError::serialization(
                format!("unexpected metadata for {}: {}", isbn, other).as_str())),
            None => Ok(BookMetadata::new()),
        },
        other => Err(LibraryError::serialization(
            format!("unexpected metadata response for {}: {}", isbn, other).as_str())),
    }
}

#[async_trait]
impl MetadataProvider for OpenLibraryProvider {
    async fn find_by_isbn(&self, isbn: &str) -> LibraryResult<BookMetadata> {
        let url = format!("{}/api/books", self.base_url);
        debug!("looking up isbn {} at {}", isbn, url);
        let body = self.client
            .get(url)
            .query(&[("bibkeys", bibkey(isbn).as_str()), ("format", "json"), ("jscmd", "data")])
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        metadata_from_response(isbn, body)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::metadata::openlibrary::{metadata_from_response, OpenLibraryProvider};
    use crate::metadata::provider::MetadataProvider;

    #[tokio::test]
    async fn test_should_extract_metadata_for_isbn() {
        let body = json!({
            "ISBN:0261103342": {
                "title": "The Hobbit",
                "authors": [{"name": "J. R. R. Tolkien"}],
                "number_of_pages": 310
            }
        });
        let metadata = metadata_from_response("0261103342", body).expect("should extract metadata");
        assert_eq!(Some(&json!("The Hobbit")), metadata.get("title"));
        assert_eq!(3, metadata.len());
    }

    #[tokio::test]
    async fn test_should_return_empty_metadata_for_unknown_isbn() {
        let metadata = metadata_from_response("12345", json!({})).expect("should accept empty response");
        assert!(metadata.is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_malformed_response() {
        assert!(matches!(metadata_from_response("12345", json!([])), Err(LibraryError::Serialization { .. })));
        assert!(matches!(metadata_from_response("12345", json!({"ISBN:12345": "x"})), Err(LibraryError::Serialization { .. })));
    }

    #[tokio::test]
    async fn test_should_report_unreachable_service_as_unavailable() {
        let mut config = Configuration::new("test");
        // nothing listens on the discard port
        config.metadata_base_url = "http://127.0.0.1:9/".to_string();
        config.metadata_timeout_secs = 2;
        let provider = OpenLibraryProvider::new(&config).expect("should build provider");
        assert_eq!("http://127.0.0.1:9", provider.base_url.as_str());
        let res = provider.find_by_isbn("12345").await;
        assert!(matches!(res, Err(LibraryError::CurrentlyUnavailable { retryable: true, .. })));
    }
}
