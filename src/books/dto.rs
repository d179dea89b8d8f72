use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::utils::date::opt_serializer;

// BookDto is a data transfer object for Catalog service. A dto that has not been
// stored yet carries no identifier and no timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub book_id: Option<String>,
    #[serde(default)]
    pub version: i64,
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    #[serde(default, with = "opt_serializer")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "opt_serializer")]
    pub updated_at: Option<NaiveDateTime>,
}

impl BookDto {
    pub fn new(title: &str, author: Option<&str>, isbn: Option<&str>) -> BookDto {
        BookDto {
            title: Some(title.to_string()),
            author: author.map(str::to_string),
            isbn: isbn.map(str::to_string),
            ..BookDto::default()
        }
    }

    // the template behind the new book form, every field unset
    pub fn blank() -> BookDto {
        BookDto::default()
    }
}

impl Book for BookDto {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("title", Some("author"), Some("isbn"));
        assert_eq!(Some("title"), book.title.as_deref());
        assert_eq!(Some("author"), book.author.as_deref());
        assert_eq!(Some("isbn"), book.isbn.as_deref());
        assert_eq!(None, book.book_id);
    }

    #[tokio::test]
    async fn test_should_build_blank_book_with_null_fields() {
        let book = BookDto::blank();
        assert_eq!(None, book.title);
        let json = serde_json::to_value(&book).expect("serialize blank book");
        assert!(json["title"].is_null());
        assert!(json["author"].is_null());
        assert!(json["book_id"].is_null());
    }
}
