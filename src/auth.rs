use std::collections::HashMap;
use std::sync::Arc;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header, HeaderMap};
use axum::http::request::Parts;
use serde::Serialize;
use crate::core::controller::{unauthorized, AppState, ServerError};
use crate::core::domain::Configuration;

// CurrentUser is the identity a request runs as. Handlers take it as an
// extractor, so a request without one never reaches the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct CurrentUser {
    pub user_id: String,
}

impl CurrentUser {
    pub fn new(user_id: &str) -> Self {
        Self { user_id: user_id.to_string() }
    }
}

pub(crate) trait Authenticator: Sync + Send {
    fn authenticate(&self, headers: &HeaderMap) -> Option<CurrentUser>;
}

// ApiKeyAuthenticator accepts `Authorization: Bearer <key>` for configured keys.
pub(crate) struct ApiKeyAuthenticator {
    keys: HashMap<String, String>,
}

impl ApiKeyAuthenticator {
    pub fn new(keys: &HashMap<String, String>) -> Self {
        Self { keys: keys.clone() }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
}

impl Authenticator for ApiKeyAuthenticator {
    fn authenticate(&self, headers: &HeaderMap) -> Option<CurrentUser> {
        let key = bearer_token(headers)?;
        self.keys.get(key).map(|user_id| CurrentUser::new(user_id))
    }
}

// StubAuthenticator signs every request in as the same user; used for local runs and tests.
pub(crate) struct StubAuthenticator {
    user: CurrentUser,
}

impl StubAuthenticator {
    pub fn new(user: CurrentUser) -> Self {
        Self { user }
    }
}

impl Default for StubAuthenticator {
    fn default() -> Self {
        Self::new(CurrentUser::new("stub-user"))
    }
}

impl Authenticator for StubAuthenticator {
    fn authenticate(&self, _headers: &HeaderMap) -> Option<CurrentUser> {
        Some(self.user.clone())
    }
}

pub(crate) fn create_authenticator(config: &Configuration) -> Arc<dyn Authenticator> {
    if config.stub_identity {
        Arc::new(StubAuthenticator::default())
    } else {
        Arc::new(ApiKeyAuthenticator::new(&config.api_keys))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        state.authenticator.authenticate(&parts.headers).ok_or_else(unauthorized)
    }
}
