mod common;

use common::TestApp;
use reqwest::header::SET_COOKIE;
use reqwest::StatusCode;

fn session_cookie(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .map(|v| v.to_str().expect("Set-Cookie is not valid UTF-8").to_string())
}

#[tokio::test]
#[ignore = "requires a local Postgres instance"]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app.register("bob", "bob@x.com", "P@ssw0rd", "P@ssw0rd").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "bob");
    assert_eq!(body["data"]["email"], "bob@x.com");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["created_at"].is_string());
}

#[tokio::test]
#[ignore = "requires a local Postgres instance"]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;

    app.register("bob", "bob@x.com", "P@ssw0rd", "P@ssw0rd").await;

    let response = app
        .register("robert", "bob@x.com", "0therP@ss", "0therP@ss")
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Email already used by another.");
}

#[tokio::test]
#[ignore = "requires a local Postgres instance"]
async fn test_register_password_mismatch_echoes_form() {
    let app = TestApp::spawn().await;

    let response = app.register("bob", "bob@x.com", "P@ssw0rd", "different").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Structural validation failures echo the submitted form back.
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "bob");
    assert_eq!(body["data"]["email"], "bob@x.com");

    // No account was created: the same registration succeeds afterwards.
    let retry = app.register("bob", "bob@x.com", "P@ssw0rd", "P@ssw0rd").await;
    assert_eq!(retry.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a local Postgres instance"]
async fn test_register_weak_password_reports_policy_errors() {
    let app = TestApp::spawn().await;

    let response = app.register("bob", "bob@x.com", "weak", "weak").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let errors = body["data"]["errors"]
        .as_array()
        .expect("Expected an error list");
    assert!(!errors.is_empty());
    assert!(errors
        .iter()
        .any(|e| e.as_str().unwrap().contains("at least 6 characters")));
}

#[tokio::test]
#[ignore = "requires a local Postgres instance"]
async fn test_login_success_sets_session_cookie() {
    let app = TestApp::spawn().await;

    app.register("bob", "bob@x.com", "P@ssw0rd", "P@ssw0rd").await;

    let response = app.login("bob@x.com", "P@ssw0rd").await;

    assert_eq!(response.status(), StatusCode::OK);

    let cookie = session_cookie(&response).expect("No session cookie attached");
    assert!(cookie.starts_with("TOKEN_TEST_LOGIN="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=None"));
    assert!(cookie.contains("Secure"));

    // The token in the cookie round-trips and carries the account's claims.
    let token = cookie
        .trim_start_matches("TOKEN_TEST_LOGIN=")
        .split(';')
        .next()
        .unwrap()
        .to_string();
    let claims = app
        .token_issuer
        .decode(&token)
        .expect("Session cookie does not carry a valid token");
    assert_eq!(claims.email, "bob@x.com");
    assert_eq!(claims.roles, vec!["Admin", "Noob"]);
    assert_eq!(claims.exp - claims.iat, 30 * 24 * 60 * 60);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Authenticated.");
}

#[tokio::test]
#[ignore = "requires a local Postgres instance"]
async fn test_login_unknown_email() {
    let app = TestApp::spawn().await;

    let response = app.login("nobody@x.com", "P@ssw0rd").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(session_cookie(&response).is_none());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Wrong credential.");
}

#[tokio::test]
#[ignore = "requires a local Postgres instance"]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;

    app.register("bob", "bob@x.com", "P@ssw0rd", "P@ssw0rd").await;

    let response = app.login("bob@x.com", "not-the-password").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(session_cookie(&response).is_none());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Wrong password.");
}

#[tokio::test]
#[ignore = "requires a local Postgres instance"]
async fn test_logout_clears_session_cookie() {
    let app = TestApp::spawn().await;

    // No prior login required; logout always clears.
    let response = app
        .post("/api/auth/logout")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let cookie = session_cookie(&response).expect("No clearing cookie attached");
    assert!(cookie.starts_with("TOKEN_TEST_LOGIN=;"));
    assert!(cookie.contains("HttpOnly"));

    // Expiry is strictly in the past, forcing immediate removal.
    let expires = cookie
        .split("Expires=")
        .nth(1)
        .and_then(|rest| rest.split(';').next())
        .expect("Cookie has no Expires attribute");
    let expires = chrono::DateTime::parse_from_rfc2822(&expires.replace("GMT", "+0000"))
        .expect("Unparseable Expires date");
    assert!(expires < chrono::Utc::now());
}
