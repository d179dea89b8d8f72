use std::sync::Arc;
use axum::http::{StatusCode, Uri};
use tracing::error;
use crate::auth::Authenticator;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) catalog: Arc<dyn CatalogService>,
    pub(crate) authenticator: Arc<dyn Authenticator>,
}

impl AppState {
    pub(crate) fn new(catalog: Arc<dyn CatalogService>, authenticator: Arc<dyn Authenticator>) -> AppState {
        AppState {
            catalog,
            authenticator,
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

pub fn route_not_found(path: &str) -> ServerError {
    (StatusCode::NOT_FOUND, format!("route not found: {}", path))
}

pub fn unauthorized() -> ServerError {
    (StatusCode::UNAUTHORIZED, "missing or invalid credentials".to_string())
}

// the last value wins when a query parameter is repeated
pub(crate) fn last_param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params.iter().rev().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
}

// answers every request the router has no route for
pub(crate) async fn fallback(uri: Uri) -> ServerError {
    route_not_found(uri.path())
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Database { .. } => {
                error!("database failure {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::DuplicateKey { .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Unavailable { .. } => {
                error!("collaborator unavailable {:?}", err);
                (StatusCode::SERVICE_UNAVAILABLE, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                error!("runtime failure {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}
