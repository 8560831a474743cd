use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use chrono::Utc;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::session;

/// Tear down the session unconditionally.
///
/// No credential check: the only effect is a cleared client-side cookie. The
/// token itself stays valid until its expiry; nothing is revoked server-side.
pub async fn logout() -> (HeaderMap, ApiSuccess<LogoutResponseData>) {
    let mut headers = HeaderMap::new();
    if let Ok(cookie) = session::detach(Utc::now()) {
        headers.insert(SET_COOKIE, cookie);
    }

    (
        headers,
        ApiSuccess::new(
            StatusCode::OK,
            LogoutResponseData {
                message: "Logged out.".to_string(),
            },
        ),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoutResponseData {
    pub message: String,
}
