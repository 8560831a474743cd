use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::errors::EmailError;
use crate::domain::auth::models::CreateAccountCommand;
use crate::domain::auth::models::CreatedAccount;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// Create a new account.
///
/// Structural validation happens here, before any collaborator call; a form
/// that fails it is echoed back with a 400. No session is established on
/// success; the caller logs in separately.
pub async fn register(
    State(state): State<AppState>,
    Form(body): Form<RegisterForm>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let command = match body.clone().try_into_command() {
        Ok(command) => command,
        Err(err) => {
            tracing::debug!(error = %err, "Registration form failed validation");
            return Err(ApiError::InvalidForm(body));
        }
    };

    state
        .auth_service
        .register(command)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::OK, account.into()))
}

/// HTTP form body for registration (raw, unvalidated)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    username: String,
    email: String,
    password: String,
    confirm_password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterFormError {
    #[error("The {0} field is required")]
    MissingField(&'static str),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Password and confirmation do not match")]
    PasswordMismatch,
}

impl RegisterForm {
    fn try_into_command(self) -> Result<CreateAccountCommand, ParseRegisterFormError> {
        for (name, value) in [
            ("username", &self.username),
            ("email", &self.email),
            ("password", &self.password),
            ("confirm_password", &self.confirm_password),
        ] {
            if value.trim().is_empty() {
                return Err(ParseRegisterFormError::MissingField(name));
            }
        }

        let email = EmailAddress::new(self.email)?;

        if self.password != self.confirm_password {
            return Err(ParseRegisterFormError::PasswordMismatch);
        }

        Ok(CreateAccountCommand::new(self.username, email, self.password))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&CreatedAccount> for RegisterResponseData {
    fn from(account: &CreatedAccount) -> Self {
        Self {
            id: account.id.clone(),
            username: account.username.clone(),
            email: account.email.clone(),
            created_at: account.created_at,
        }
    }
}
