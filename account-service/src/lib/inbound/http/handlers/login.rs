use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::Form;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;
use crate::inbound::http::session;

/// Verify credentials and establish the session.
///
/// The token never appears in the response body; it travels only in the
/// session cookie.
pub async fn login(
    State(state): State<AppState>,
    Form(body): Form<LoginForm>,
) -> Result<(HeaderMap, ApiSuccess<LoginResponseData>), ApiError> {
    let issued = state
        .auth_service
        .login(Credentials {
            email: body.email,
            password: body.password,
        })
        .await
        .map_err(ApiError::from)?;

    // Cookie attachment is best-effort; a header the transport refuses must
    // not undo an already-successful login.
    let mut headers = HeaderMap::new();
    if let Ok(cookie) = session::attach(&issued.token, issued.expires_at) {
        headers.insert(SET_COOKIE, cookie);
    }

    Ok((
        headers,
        ApiSuccess::new(
            StatusCode::OK,
            LoginResponseData {
                message: "Authenticated.".to_string(),
            },
        ),
    ))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub message: String,
}
