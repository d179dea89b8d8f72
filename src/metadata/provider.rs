use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use serde_json::{Map, Value};
use crate::core::library::LibraryResult;

/// Descriptive fields the provider knows about a book. An empty map means the
/// provider has no record for the ISBN, which is a normal outcome.
pub(crate) type BookMetadata = Map<String, Value>;

/// An ISBN that has passed the boundary check: never blank, surrounding
/// whitespace removed. No checksum validation is done; the provider decides
/// whether it knows the number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Isbn(String);

impl Isbn {
    pub fn parse(raw: &str) -> Option<Isbn> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Isbn(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for Isbn {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[async_trait]
pub(crate) trait MetadataProvider: Sync + Send {
    async fn find_by_isbn(&self, isbn: &str) -> LibraryResult<BookMetadata>;
}

#[cfg(test)]
mod tests {
    use crate::metadata::provider::Isbn;

    #[tokio::test]
    async fn test_should_reject_blank_isbn() {
        assert_eq!(None, Isbn::parse(""));
        assert_eq!(None, Isbn::parse("   "));
        assert_eq!(None, Isbn::parse("\t\n"));
    }

    #[tokio::test]
    async fn test_should_trim_isbn() {
        let isbn = Isbn::parse(" 12345 ").expect("non-blank isbn");
        assert_eq!("12345", isbn.as_str());
        assert_eq!("12345", isbn.to_string());
    }
}
