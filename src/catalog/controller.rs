use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query, State},
    http::request::Parts,
    response::Json,
};
use serde_json::Value;
use tracing::{debug, info};
use crate::auth::CurrentUser;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::lookup_isbn_cmd::{LookupIsbnCommand, LookupIsbnCommandRequest, LookupIsbnCommandResponse};
use crate::catalog::command::new_book_cmd::{NewBookCommand, NewBookCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, last_param, route_not_found, ServerError};
use crate::metadata::provider::Isbn;

pub(crate) async fn list_books(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(params): Query<Vec<(String, String)>>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let req = ListBooksCommandRequest::from_params(&params);
    debug!("user {} listing books q={:?} display={:?}", user.user_id, req.q, req.display);
    let res = ListBooksCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn new_book(
    user: CurrentUser) -> Result<Json<NewBookCommandResponse>, ServerError> {
    debug!("user {} opening new book form", user.user_id);
    let res = NewBookCommand::new().execute(()).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    user: CurrentUser,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    info!("user {} adding book {:?}", user.user_id, req.title);
    let res = AddBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(book_id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    debug!("user {} showing book {}", user.user_id, book_id);
    let req = GetBookCommandRequest::new(book_id);
    let res = GetBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

// IsbnParam is the ISBN named by a lookup route, taken from the `:isbn` path
// segment or else the last `isbn` query parameter. A blank ISBN names no route,
// so the rejection is a 404 and it must be extracted ahead of `CurrentUser`.
pub(crate) struct IsbnParam(pub Isbn);

#[async_trait]
impl<S> FromRequestParts<S> for IsbnParam
    where
        S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(isbn)) => Some(isbn),
            Err(_) => Query::<Vec<(String, String)>>::from_request_parts(parts, state).await
                .ok()
                .and_then(|Query(params)| last_param(&params, "isbn").map(str::to_string)),
        };
        raw.as_deref()
            .and_then(Isbn::parse)
            .map(IsbnParam)
            .ok_or_else(|| route_not_found(parts.uri.path()))
    }
}

pub(crate) async fn lookup_isbn(
    State(state): State<AppState>,
    IsbnParam(isbn): IsbnParam,
    user: CurrentUser) -> Result<Json<LookupIsbnCommandResponse>, ServerError> {
    debug!("user {} looking up isbn {}", user.user_id, isbn);
    let res = LookupIsbnCommand::new(state.catalog).execute(LookupIsbnCommandRequest::new(isbn)).await?;
    Ok(Json(res))
}
