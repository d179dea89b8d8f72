use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::core::library::BookView;

// NewBookCommand hands out the unsaved template behind the new book form.
#[derive(Default)]
pub(crate) struct NewBookCommand {}

impl NewBookCommand {
    pub(crate) fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct NewBookCommandResponse {
    pub view: BookView,
    pub book: BookDto,
}

#[async_trait]
impl Command<(), NewBookCommandResponse> for NewBookCommand {
    async fn execute(&self, _req: ()) -> Result<NewBookCommandResponse, CommandError> {
        Ok(NewBookCommandResponse { view: BookView::New, book: BookDto::blank() })
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::new_book_cmd::NewBookCommand;
    use crate::core::command::Command;
    use crate::core::library::BookView;

    #[tokio::test]
    async fn test_should_return_blank_book_form() {
        let res = NewBookCommand::new().execute(()).await.expect("should build form");
        assert_eq!(BookView::New, res.view);
        assert_eq!(None, res.book.title);
        assert_eq!(None, res.book.author);
        assert_eq!(None, res.book.book_id);
    }
}
