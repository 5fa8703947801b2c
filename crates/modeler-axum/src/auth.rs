//! Current-user extraction.
//!
//! The service sits behind an authenticating proxy which forwards the user
//! id in a trusted header. Handlers take [`CurrentUser`] as an argument.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::HttpError;
use crate::state::AppState;

/// Id of the user making the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub String);

impl CurrentUser {
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = state.user_header.as_str();
        let value = parts
            .headers
            .get(header)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        value.map_or_else(
            || {
                tracing::warn!(header, path = %parts.uri.path(), "Request without current user");
                Err(HttpError::Unauthorized(format!(
                    "Missing current user header '{header}'"
                )))
            },
            |user| Ok(Self(user.to_string())),
        )
    }
}
