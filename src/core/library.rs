use std::fmt;
use std::fmt::{Display, Formatter};
use serde::Serialize;

#[derive(Debug)]
pub enum LibraryError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // A collaborator (database, metadata service) could not be reached or timed out.
    // The caller decides whether to retry; nothing in the catalog retries on its own.
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::CurrentlyUnavailable { message: message.to_string(), reason_code, retryable }
    }

    pub fn database_or_unavailable(message: &str, reason: Option<String>, retryable: bool) -> LibraryError {
        if retryable {
            return LibraryError::unavailable(
                format!("ddb database unavailable error {:?} {:?}", message, reason).as_str(), reason, true);
        }
        match reason.as_deref() {
            Some(code) if code.contains("404") => LibraryError::not_found(
                format!("not found error {:?} {:?}", message, reason).as_str()),
            Some(code) if code.contains("400") => LibraryError::validation(
                format!("rejected request {:?} {:?}", message, reason).as_str(), reason),
            _ => LibraryError::database(
                format!("ddb database error {:?} {:?}", message, reason).as_str(), reason, false),
        }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<String> for LibraryError {
    fn from(err: String) -> Self {
        LibraryError::serialization(
            format!("serde parsing {:?}", err).as_str())
    }
}

impl From<reqwest::Error> for LibraryError {
    fn from(err: reqwest::Error) -> Self {
        let reason = err.status().map(|s| s.to_string());
        if err.is_timeout() || err.is_connect() {
            LibraryError::unavailable(format!("metadata service unavailable {}", err).as_str(), reason, true)
        } else if err.is_decode() {
            LibraryError::serialization(format!("metadata response decoding {}", err).as_str())
        } else {
            LibraryError::runtime(format!("metadata request failed {}", err).as_str(), reason)
        }
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Database { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::CurrentlyUnavailable { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;

// One page of records read from a repository
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    // The page token the records were read from
    pub page: Option<String>,
    pub page_size: usize,
    // Token for the following page, none when the listing is exhausted
    pub next_page: Option<String>,
    pub records: Vec<T>,
}

impl<T> PaginatedResult<T> {
    pub(crate) fn new(page: Option<&str>, page_size: usize,
                      next_page: Option<String>, records: Vec<T>) -> Self {
        PaginatedResult {
            page: page.map(str::to_string),
            page_size,
            next_page,
            records,
        }
    }
}

/// How the book index is laid out. Only the literal `list` selects the list
/// layout; anything else, including a missing parameter, falls back to the grid.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub(crate) enum DisplayMode {
    #[default]
    Grid,
    List,
}

impl From<Option<&str>> for DisplayMode {
    fn from(param: Option<&str>) -> Self {
        match param {
            Some("list") => DisplayMode::List,
            _ => DisplayMode::Grid,
        }
    }
}

// BookView names the template a response is rendered with
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub(crate) enum BookView {
    #[serde(rename = "books/grid")]
    Grid,
    #[serde(rename = "books/list")]
    List,
    #[serde(rename = "books/new")]
    New,
    #[serde(rename = "books/show")]
    Show,
}

impl BookView {
    pub fn template(&self) -> &'static str {
        match self {
            BookView::Grid => "books/grid",
            BookView::List => "books/list",
            BookView::New => "books/new",
            BookView::Show => "books/show",
        }
    }
}

impl From<DisplayMode> for BookView {
    fn from(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Grid => BookView::Grid,
            DisplayMode::List => BookView::List,
        }
    }
}

impl Display for BookView {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.template())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{BookView, DisplayMode, LibraryError};

    #[tokio::test]
    async fn test_should_create_database_error() {
        assert!(matches!(LibraryError::database("test", None, false), LibraryError::Database{ message: _, reason_code: _, retryable: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_database_or_unavailable_error() {
        assert!(matches!(LibraryError::database_or_unavailable("test", None, true), LibraryError::CurrentlyUnavailable{ .. }));
        assert!(matches!(LibraryError::database_or_unavailable("test", Some("404".to_string()), false), LibraryError::NotFound{ .. }));
        assert!(matches!(LibraryError::database_or_unavailable("test", Some("400".to_string()), false), LibraryError::Validation{ .. }));
        assert!(matches!(LibraryError::database_or_unavailable("test", Some("500".to_string()), false), LibraryError::Database{ .. }));
        assert!(matches!(LibraryError::database_or_unavailable("test", None, false), LibraryError::Database{ .. }));
    }

    #[tokio::test]
    async fn test_should_select_list_only_for_exact_literal() {
        assert_eq!(DisplayMode::List, DisplayMode::from(Some("list")));
        assert_eq!(DisplayMode::Grid, DisplayMode::from(None));
        assert_eq!(DisplayMode::Grid, DisplayMode::from(Some("")));
        assert_eq!(DisplayMode::Grid, DisplayMode::from(Some("foo")));
        assert_eq!(DisplayMode::Grid, DisplayMode::from(Some("LIST")));
        assert_eq!(DisplayMode::Grid, DisplayMode::from(Some(" list")));
        assert_eq!(DisplayMode::Grid, DisplayMode::from(Some("grid")));
    }

    #[tokio::test]
    async fn test_should_map_display_mode_to_view() {
        assert_eq!(BookView::Grid, BookView::from(DisplayMode::Grid));
        assert_eq!(BookView::List, BookView::from(DisplayMode::List));
        assert_eq!("books/list", BookView::List.to_string());
        assert_eq!("\"books/show\"", serde_json::to_string(&BookView::Show).expect("serialize view"));
    }
}
