use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::controller::last_param;
use crate::core::library::{BookView, DisplayMode};

pub(crate) struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ListBooksCommandRequest {
    // title search, empty means no filter
    pub(crate) q: Option<String>,
    // layout of the index, `list` or anything else for the grid
    pub(crate) display: Option<String>,
}

impl ListBooksCommandRequest {
    pub fn new(q: Option<&str>, display: Option<&str>) -> Self {
        Self {
            q: q.map(str::to_string),
            display: display.map(str::to_string),
        }
    }

    // builds the request from raw query pairs; unknown keys are ignored
    pub fn from_params(params: &[(String, String)]) -> Self {
        Self::new(last_param(params, "q"), last_param(params, "display"))
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListBooksCommandResponse {
    pub view: BookView,
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(view: BookView, books: Vec<BookDto>) -> Self {
        Self {
            view,
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let view = BookView::from(DisplayMode::from(req.display.as_deref()));
        self.catalog_service.list_books(req.q.as_deref()).await
            .map_err(CommandError::from)
            .map(|books| ListBooksCommandResponse::new(view, books))
    }
}
