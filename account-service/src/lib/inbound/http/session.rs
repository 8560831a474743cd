use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

/// Name of the cookie that carries the session token.
pub const SESSION_COOKIE_NAME: &str = "TOKEN_TEST_LOGIN";

/// Build the `Set-Cookie` value that binds an issued token to the client.
///
/// `HttpOnly` keeps the token away from client-side scripts; `SameSite=None`
/// lets the cookie travel on cross-site requests, which requires `Secure`.
/// Cookie expiry matches the token's own validity window.
pub fn attach(token: &str, expires_at: DateTime<Utc>) -> Result<HeaderValue, InvalidHeaderValue> {
    session_cookie(token, expires_at)
}

/// Build the `Set-Cookie` value that clears the session.
///
/// Same cookie name, empty value, expiry 30 days in the past so the client
/// drops its copy immediately. The server-side token itself is never
/// invalidated; only the client-held copy is erased.
pub fn detach(now: DateTime<Utc>) -> Result<HeaderValue, InvalidHeaderValue> {
    session_cookie("", now - Duration::days(30))
}

fn session_cookie(
    value: &str,
    expires_at: DateTime<Utc>,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let expires = expires_at.format("%a, %d %b %Y %H:%M:%S GMT");
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE_NAME}={value}; Path=/; Expires={expires}; HttpOnly; SameSite=None; Secure"
    ))
}
